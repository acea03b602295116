use snaplink_core::StoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResolveError>;

#[derive(Debug, Clone, Error)]
pub enum ResolveError {
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}
