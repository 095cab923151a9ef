use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::future::Future;

use crate::error::{HandlerError, Result};
use crate::event::{json_response, ApiGatewayResponse, EventParams};

pub trait Translator {
    fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> impl Future<Output = Result<String>> + Send;
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranslationResponse {
    pub original_sentence: String,
    pub sentence: String,
}

pub async fn translate_sentence<T: Translator>(
    params: &EventParams,
    translator: &T,
    target_language: &str,
) -> Result<TranslationResponse> {
    let sentence = params
        .text("sentence")
        .ok_or(HandlerError::MissingParameter("sentence"))?;
    let language_code = params
        .text("language_code")
        .ok_or(HandlerError::MissingParameter("language_code"))?;

    let translated = translator
        .translate(&sentence, &language_code, target_language)
        .await?;
    tracing::info!(source_language = %language_code, target_language, "sentence translated");

    Ok(TranslationResponse {
        original_sentence: sentence,
        sentence: translated,
    })
}

pub async fn handle_translation_event<T: Translator>(
    event: Value,
    translator: &T,
    target_language: &str,
) -> ApiGatewayResponse {
    let params = EventParams::from_event(&event);
    match translate_sentence(&params, translator, target_language).await {
        Ok(response) => json_response(200, &response),
        Err(error) => error.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::json;

    use super::*;

    struct RecordingTranslator {
        calls: Mutex<Vec<(String, String, String)>>,
        outcome: Result<String>,
    }

    impl RecordingTranslator {
        fn returning(outcome: Result<String>) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                outcome,
            }
        }

        fn calls(&self) -> Vec<(String, String, String)> {
            self.calls.lock().expect("poisoned mutex").clone()
        }
    }

    impl Translator for RecordingTranslator {
        async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
            self.calls.lock().expect("poisoned mutex").push((
                text.to_string(),
                source.to_string(),
                target.to_string(),
            ));
            self.outcome.clone()
        }
    }

    #[tokio::test]
    async fn translates_into_target_language() {
        let translator = RecordingTranslator::returning(Ok("good morning".to_string()));
        let response = handle_translation_event(
            json!({"queryStringParameters": {"sentence": "buenos días", "language_code": "es"}}),
            &translator,
            "en",
        )
        .await;

        assert_eq!(response.status_code, 200);
        let body: TranslationResponse =
            serde_json::from_str(&response.body).expect("body should parse");
        assert_eq!(body.original_sentence, "buenos días");
        assert_eq!(body.sentence, "good morning");
        assert_eq!(
            translator.calls(),
            vec![("buenos días".to_string(), "es".to_string(), "en".to_string())]
        );
    }

    #[tokio::test]
    async fn missing_language_code_skips_the_service() {
        let translator = RecordingTranslator::returning(Ok(String::new()));
        let response =
            handle_translation_event(json!({"sentence": "bonjour"}), &translator, "en").await;

        assert_eq!(response.status_code, 400);
        let body = response.body_json().expect("body should be json");
        assert_eq!(body["error"], "missing_parameter");
        assert!(translator.calls().is_empty());
    }

    #[tokio::test]
    async fn service_failure_is_reported() {
        let translator =
            RecordingTranslator::returning(Err(HandlerError::Translation("throttled".to_string())));
        let params = EventParams::from_event(&json!({"sentence": "hallo", "language_code": "de"}));

        let error = translate_sentence(&params, &translator, "en")
            .await
            .expect_err("translation should fail");
        assert_eq!(error, HandlerError::Translation("throttled".to_string()));
    }
}
