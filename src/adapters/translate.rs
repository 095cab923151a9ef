use aws_sdk_translate::error::DisplayErrorContext;

use crate::error::{HandlerError, Result};
use crate::glue::translation::Translator;

/// Amazon Translate backed [`Translator`].
#[derive(Debug, Clone)]
pub struct AwsTranslator {
    client: aws_sdk_translate::Client,
}

impl AwsTranslator {
    pub fn new(client: aws_sdk_translate::Client) -> Self {
        Self { client }
    }

    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(aws_sdk_translate::Client::new(&config))
    }
}

impl Translator for AwsTranslator {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String> {
        let output = self
            .client
            .translate_text()
            .text(text)
            .source_language_code(source_language)
            .target_language_code(target_language)
            .send()
            .await
            .map_err(|error| HandlerError::Translation(DisplayErrorContext(&error).to_string()))?;
        Ok(output.translated_text().to_string())
    }
}
