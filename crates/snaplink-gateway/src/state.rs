use std::sync::Arc;

use snaplink_resolver::Resolver;
use snaplink_shortener::Shortener;

#[derive(Clone)]
pub struct AppState {
    shortener: Arc<dyn Shortener>,
    resolver: Arc<dyn Resolver>,
    base_url: String,
}

impl AppState {
    pub fn new(
        shortener: Arc<dyn Shortener>,
        resolver: Arc<dyn Resolver>,
        public_base_url: impl Into<String>,
    ) -> Self {
        Self {
            shortener,
            resolver,
            base_url: public_base_url.into(),
        }
    }

    pub fn shortener(&self) -> &dyn Shortener {
        self.shortener.as_ref()
    }

    pub fn resolver(&self) -> &dyn Resolver {
        self.resolver.as_ref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
