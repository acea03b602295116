use crate::error::Result;
use crate::resolver::{Resolution, Resolver};
use async_trait::async_trait;
use snaplink_core::{ShortCode, Store};
use std::sync::Arc;
use tracing::{debug, trace};

/// Service for resolving short codes at redirect time.
///
/// A single `increment_clicks` call does the whole job: it verifies the
/// code exists, serializes the click increment at the storage layer,
/// and returns the updated record whose status decides the outcome.
#[derive(Debug, Clone)]
pub struct ResolverService<S> {
    store: Arc<S>,
}

impl<S: Store> ResolverService<S> {
    /// Creates a new ResolverService over the given store.
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

#[async_trait]
impl<S: Store> Resolver for ResolverService<S> {
    async fn resolve(&self, code: &ShortCode) -> Result<Option<Resolution>> {
        trace!(code = %code, "resolving short code");

        match self.store.increment_clicks(code).await? {
            Some(link) if link.is_disabled() => {
                debug!(code = %code, clicks = link.clicks, "hit on disabled link");
                Ok(Some(Resolution::Disabled(link)))
            }
            Some(link) => {
                debug!(code = %code, url = %link.target_url, clicks = link.clicks, "resolved short code");
                Ok(Some(Resolution::Active(link)))
            }
            None => {
                trace!(code = %code, "short code not found");
                Ok(None)
            }
        }
    }
}
