use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::future::Future;

use crate::error::{HandlerError, Result};
use crate::event::{json_response, ApiGatewayResponse, EventParams};

pub trait LanguageDetector {
    /// Dominant language code of `text`, e.g. `"fr"`.
    fn detect(&self, text: &str) -> impl Future<Output = Result<String>> + Send;
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguageDetectionResponse {
    pub result: String,
    pub sentence: String,
    pub language: String,
}

pub async fn detect_language<D: LanguageDetector>(
    params: &EventParams,
    detector: &D,
) -> Result<LanguageDetectionResponse> {
    let sentence = params
        .text("sentence")
        .ok_or(HandlerError::MissingParameter("sentence"))?;
    let language = detector.detect(&sentence).await?;
    tracing::info!(%language, "language detected");

    Ok(LanguageDetectionResponse {
        result: "Ok".to_string(),
        sentence,
        language,
    })
}

pub async fn handle_language_event<D: LanguageDetector>(
    event: Value,
    detector: &D,
) -> ApiGatewayResponse {
    let params = EventParams::from_event(&event);
    match detect_language(&params, detector).await {
        Ok(response) => json_response(200, &response),
        Err(error) => error.into_response(),
    }
}
