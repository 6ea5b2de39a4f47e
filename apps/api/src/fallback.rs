//! Read-path degradation policy.
//!
//! Reads against the stores and the ranking service return
//! `Result<T, FetchError>`. Callers that must keep the UI populated pass the
//! result through `with_fallback`, which logs the failure and substitutes a
//! locally computed value. Write paths never go through here.

use thiserror::Error;
use tracing::warn;

use crate::llm_client::LlmError;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("store query failed: {0}")]
    Store(#[from] sqlx::Error),

    #[error("stored record is malformed: {0}")]
    Corrupt(String),

    #[error("ranking service failed: {0}")]
    Upstream(#[from] LlmError),

    #[error("ranking response rejected: {0}")]
    Schema(String),
}

/// Returns the primary value, or logs the error and evaluates `fallback`.
pub fn with_fallback<T>(
    source: &str,
    primary: Result<T, FetchError>,
    fallback: impl FnOnce() -> T,
) -> T {
    match primary {
        Ok(value) => value,
        Err(e) => {
            warn!("{source} unavailable, using fallback: {e}");
            fallback()
        }
    }
}
