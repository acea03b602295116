use crate::error::Result;
use async_trait::async_trait;
use snaplink_core::{ShortCode, ShortLink};

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Validates `target_url` and allocates a fresh short code for it,
    /// returning the newly created mapping.
    async fn shorten(&self, target_url: &str) -> Result<ShortLink>;

    /// Soft-deletes a mapping. Returns `false` if the code was never
    /// issued. Disabled codes stop redirecting but keep their row.
    async fn disable(&self, code: &ShortCode) -> Result<bool>;

    /// Returns the mapping for a code regardless of status, or `None`
    /// if the code was never issued.
    async fn stats(&self, code: &ShortCode) -> Result<Option<ShortLink>>;
}
