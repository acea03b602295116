use snaplink_core::StoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShortenError>;

#[derive(Debug, Clone, Error)]
pub enum ShortenError {
    /// The input URL failed validation. Reported to the caller, never
    /// retried, and detected before any store interaction.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    /// Every candidate code in the retry budget collided. This is an
    /// operational signal that the code space or collision policy needs
    /// revisiting, not a client error.
    #[error("code allocation exhausted after {attempts} attempts")]
    CapacityExhausted { attempts: u32 },
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}
