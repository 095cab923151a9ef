use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::future::Future;

use crate::error::{HandlerError, Result};
use crate::event::{json_response, ApiGatewayResponse, EventParams};

pub trait ImageFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

pub trait FaceAnnotator {
    fn annotate(&self, image: &[u8]) -> impl Future<Output = Result<Vec<FaceAnnotation>>> + Send;
}

/// Categorical likelihood as reported by face-detection services.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Likelihood {
    #[default]
    Unknown,
    VeryUnlikely,
    Unlikely,
    Possible,
    Likely,
    VeryLikely,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FaceAnnotation {
    #[serde(default)]
    pub anger_likelihood: Likelihood,
}

impl FaceAnnotation {
    pub fn is_angry(&self) -> bool {
        matches!(
            self.anger_likelihood,
            Likelihood::Likely | Likelihood::VeryLikely
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AngerDetectionResponse {
    pub result: String,
    pub url: String,
    pub anger_detected: bool,
}

pub async fn detect_anger<F: ImageFetcher, A: FaceAnnotator>(
    params: &EventParams,
    fetcher: &F,
    annotator: &A,
) -> Result<AngerDetectionResponse> {
    let url = params
        .text("url")
        .ok_or(HandlerError::MissingParameter("url"))?;
    let image = fetcher.fetch(&url).await?;
    let faces = annotator.annotate(&image).await?;
    let anger_detected = faces.iter().any(FaceAnnotation::is_angry);
    tracing::info!(faces = faces.len(), anger_detected, "image annotated");

    Ok(AngerDetectionResponse {
        result: "Ok".to_string(),
        url,
        anger_detected,
    })
}

pub async fn handle_anger_event<F: ImageFetcher, A: FaceAnnotator>(
    event: Value,
    fetcher: &F,
    annotator: &A,
) -> ApiGatewayResponse {
    let params = EventParams::from_event(&event);
    match detect_anger(&params, fetcher, annotator).await {
        Ok(response) => json_response(200, &response),
        Err(error) => error.into_response(),
    }
}
