//! Translation error types.

use thiserror::Error;

/// Errors a translation provider call can produce.
#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected response shape: {0}")]
    InvalidResponse(String),
    #[error("provider error: {0}")]
    Provider(String),
}
