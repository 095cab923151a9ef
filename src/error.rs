use serde_json::json;
use thiserror::Error;

use crate::event::{json_response, ApiGatewayResponse};

/// Failure of a glue handler, either bad input or a downstream managed service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandlerError {
    #[error("missing required parameter `{0}`")]
    MissingParameter(&'static str),

    #[error("translation failed: {0}")]
    Translation(String),

    #[error("language detection failed: {0}")]
    LanguageDetection(String),

    #[error("image fetch failed: {0}")]
    ImageFetch(String),

    #[error("face annotation failed: {0}")]
    FaceAnnotation(String),
}

pub type Result<T> = std::result::Result<T, HandlerError>;

impl HandlerError {
    pub fn code(&self) -> &'static str {
        match self {
            HandlerError::MissingParameter(_) => "missing_parameter",
            HandlerError::Translation(_) => "translation_failed",
            HandlerError::LanguageDetection(_) => "language_detection_failed",
            HandlerError::ImageFetch(_) => "image_fetch_failed",
            HandlerError::FaceAnnotation(_) => "face_annotation_failed",
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::MissingParameter(_) => 400,
            _ => 502,
        }
    }

    pub fn into_response(self) -> ApiGatewayResponse {
        tracing::warn!(code = self.code(), error = %self, "handler failed");
        json_response(
            self.status_code(),
            &json!({
                "result": "Error",
                "error": self.code(),
                "message": self.to_string(),
            }),
        )
    }
}
