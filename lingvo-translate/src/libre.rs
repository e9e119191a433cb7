//! LibreTranslate provider, used as the fallback backend.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TranslateError;
use crate::provider::Translator;

pub struct LibreTranslator {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct LibreRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct LibreResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

impl LibreTranslator {
    /// Creates the provider against a LibreTranslate instance at `base_url`
    /// (for example a self-hosted `http://localhost:5000`).
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key,
        })
    }
}

#[async_trait]
impl Translator for LibreTranslator {
    async fn translate(&self, text: &str, target: &str) -> Result<String, TranslateError> {
        let url = format!("{}/translate", self.base_url.trim_end_matches('/'));
        let body = LibreRequest {
            q: text,
            source: "auto",
            target,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let parsed: LibreResponse = response.json().await?;
        if parsed.translated_text.is_empty() {
            return Err(TranslateError::InvalidResponse(
                "empty translatedText".to_string(),
            ));
        }
        debug!(target = %target, len = parsed.translated_text.len(), "libre translation ok");
        Ok(parsed.translated_text)
    }

    fn name(&self) -> &'static str {
        "libretranslate"
    }
}
