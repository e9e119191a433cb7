//! Translation crate: provider abstractions and the retry/fallback service.
//!
//! ## Modules
//!
//! - [`error`] – TranslateError
//! - [`provider`] – Translator trait
//! - [`google`] – Google web-endpoint provider (primary)
//! - [`libre`] – LibreTranslate provider (fallback)
//! - [`service`] – TranslationService: bounded retries, backoff, failover

mod error;
mod google;
mod libre;
mod provider;
mod service;


pub use error::TranslateError;
pub use google::GoogleTranslator;
pub use libre::LibreTranslator;
pub use provider::Translator;
pub use service::{RetryPolicy, TranslationService};
