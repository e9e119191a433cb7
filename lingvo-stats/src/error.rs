//! Stats error types.

use thiserror::Error;

/// Errors that can occur while loading or persisting the stats snapshot.
#[derive(Error, Debug)]
pub enum StatsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Persist error: {0}")]
    Persist(String),
}
