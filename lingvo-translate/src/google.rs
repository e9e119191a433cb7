//! Google Translate web-endpoint provider.
//!
//! Calls the unauthenticated `translate_a/single` endpoint (`client=gtx`)
//! with auto source detection. The response is a nested JSON array whose
//! first element holds the translated segments.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::error::TranslateError;
use crate::provider::Translator;

const ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

pub struct GoogleTranslator {
    client: reqwest::Client,
}

impl GoogleTranslator {
    /// Creates the provider with the given per-call timeout.
    pub fn new(timeout: Duration) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Joins the translated segments out of the `[[["...","...",..],..],..]`
    /// payload the endpoint returns.
    fn extract_translation(value: &serde_json::Value) -> Result<String, TranslateError> {
        let segments = value
            .get(0)
            .and_then(|v| v.as_array())
            .ok_or_else(|| TranslateError::InvalidResponse("missing segments array".to_string()))?;

        let mut out = String::new();
        for segment in segments {
            if let Some(piece) = segment.get(0).and_then(|v| v.as_str()) {
                out.push_str(piece);
            }
        }
        if out.is_empty() {
            return Err(TranslateError::InvalidResponse(
                "no translated segments".to_string(),
            ));
        }
        Ok(out)
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, target: &str) -> Result<String, TranslateError> {
        let response = self
            .client
            .get(ENDPOINT)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?
            .error_for_status()?;

        let value: serde_json::Value = response.json().await?;
        let translated = Self::extract_translation(&value)?;
        debug!(target = %target, len = translated.len(), "google translation ok");
        Ok(translated)
    }

    fn name(&self) -> &'static str {
        "google"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_translation_joins_segments() {
        let value = json!([
            [["Hello, ", "Привет, ", null], ["how are you", "как дела", null]],
            null
        ]);
        assert_eq!(
            GoogleTranslator::extract_translation(&value).unwrap(),
            "Hello, how are you"
        );
    }

    #[test]
    fn test_extract_translation_rejects_bad_shapes() {
        assert!(GoogleTranslator::extract_translation(&json!({})).is_err());
        assert!(GoogleTranslator::extract_translation(&json!([[]])).is_err());
        assert!(GoogleTranslator::extract_translation(&json!(null)).is_err());
    }
}
