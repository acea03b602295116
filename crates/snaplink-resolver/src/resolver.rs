use crate::error::Result;
use async_trait::async_trait;
use snaplink_core::{ShortCode, ShortLink};

/// Outcome of a successful lookup. Both variants record the hit; only
/// `Active` may be redirected to.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The link is live; redirect to its `target_url`.
    Active(ShortLink),
    /// The link has been revoked. The hit was still counted for audit,
    /// but the caller must not redirect.
    Disabled(ShortLink),
}

#[async_trait]
pub trait Resolver: Send + Sync + 'static {
    /// Resolves a short code, recording the hit.
    /// Returns `None` if the code was never issued.
    async fn resolve(&self, code: &ShortCode) -> Result<Option<Resolution>>;
}
