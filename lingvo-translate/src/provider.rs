//! The Translator trait implemented by every provider.

use async_trait::async_trait;

use crate::error::TranslateError;

/// One translation backend. `target` is a two-letter language code; the
/// source language is always auto-detected by the provider.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translates `text` into `target`. One network call, bounded by the
    /// provider's own HTTP timeout; retries live in the service layer.
    async fn translate(&self, text: &str, target: &str) -> Result<String, TranslateError>;

    /// Short provider name for log lines.
    fn name(&self) -> &'static str;
}
