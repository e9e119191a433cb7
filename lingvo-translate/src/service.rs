//! TranslationService: attempt-primary(n) → attempt-fallback → final-failure.
//!
//! The primary provider is tried up to `max_attempts` times with an
//! exponentially growing delay between attempts (d, 2d, 4d, ...). On
//! exhaustion the fallback provider gets exactly one call; if that fails too,
//! the caller sees the primary's last error so operators find the root cause.
//! Callers must treat the returned value as final — no retries above this.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::error::TranslateError;
use crate::provider::Translator;

/// Retry schedule for the primary provider.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    /// Delay before the second attempt; doubles on each further attempt.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(500),
        }
    }
}

pub struct TranslationService {
    primary: Arc<dyn Translator>,
    fallback: Arc<dyn Translator>,
    policy: RetryPolicy,
}

impl TranslationService {
    pub fn new(primary: Arc<dyn Translator>, fallback: Arc<dyn Translator>) -> Self {
        Self::with_policy(primary, fallback, RetryPolicy::default())
    }

    pub fn with_policy(
        primary: Arc<dyn Translator>,
        fallback: Arc<dyn Translator>,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            primary,
            fallback,
            policy,
        }
    }

    /// Translates `text` into `target`, failing only after exhausting all
    /// providers.
    pub async fn translate(&self, text: &str, target: &str) -> Result<String, TranslateError> {
        let attempts = self.policy.max_attempts.max(1);
        let mut delay = self.policy.base_delay;
        let mut last_err = TranslateError::Provider("no attempt made".to_string());

        for attempt in 1..=attempts {
            match self.primary.translate(text, target).await {
                Ok(translated) => return Ok(translated),
                Err(e) => {
                    warn!(
                        provider = self.primary.name(),
                        attempt,
                        max_attempts = attempts,
                        error = %e,
                        "translation attempt failed"
                    );
                    last_err = e;
                }
            }
            if attempt < attempts {
                tokio::time::sleep(delay).await;
                delay = delay.saturating_mul(2);
            }
        }

        info!(
            primary = self.primary.name(),
            fallback = self.fallback.name(),
            "primary exhausted, trying fallback"
        );
        match self.fallback.translate(text, target).await {
            Ok(translated) => Ok(translated),
            Err(fallback_err) => {
                // Surface the primary's last error; the fallback failure is
                // only logged.
                warn!(
                    provider = self.fallback.name(),
                    error = %fallback_err,
                    "fallback provider failed"
                );
                Err(last_err)
            }
        }
    }
}
