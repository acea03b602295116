use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("invalid short code: {0}")]
    InvalidShortCode(String),
}

/// Errors produced by [`Store`][crate::Store] implementations.
///
/// `CodeTaken` is part of normal control flow: the shortener's retry
/// loop treats it as a signal to try another code. The remaining
/// variants classify backend failures so callers can tell retryable
/// conditions (`Unavailable`, `Timeout`) from everything else.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("short code already taken: {0}")]
    CodeTaken(String),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
}

impl StoreError {
    /// Whether the failure is transient and worth retrying by the caller.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::Timeout(_))
    }
}
