use crate::error::{Result, ShortenError};
use crate::shortener::Shortener;
use async_trait::async_trait;
use snaplink_core::{ShortCode, ShortLink, Store, StoreError};
use snaplink_generator::CodeGenerator;
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `Store` and a `CodeGenerator` to handle:
/// - URL validation (before any store interaction)
/// - Code allocation with a bounded collision-retry loop
/// - Administrative disable and stats lookups
///
/// Uniqueness is never checked-then-inserted as two steps: the store's
/// atomic create-if-absent is the single source of truth, and this
/// service only retries on conflict.
#[derive(Debug, Clone)]
pub struct ShortenerService<S, G> {
    store: Arc<S>,
    generator: Arc<G>,
    max_attempts: u32,
}

impl<S: Store, G: CodeGenerator> ShortenerService<S, G> {
    /// Creates a new `ShortenerService` with the default retry budget.
    pub fn new(store: S, generator: G) -> Self {
        Self {
            store: Arc::new(store),
            generator: Arc::new(generator),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Overrides the collision-retry budget.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Validates that the URL is an absolute http(s) URL with a host.
    fn validate_url(target_url: &str) -> Result<()> {
        if target_url.is_empty() {
            return Err(ShortenError::InvalidUrl("URL cannot be empty".to_string()));
        }

        let parsed = Url::parse(target_url)
            .map_err(|e| ShortenError::InvalidUrl(format!("{}: {}", e, target_url)))?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ShortenError::InvalidUrl(format!(
                    "URL scheme must be http or https: {}",
                    other
                )));
            }
        }

        if !parsed.has_host() {
            return Err(ShortenError::InvalidUrl(format!(
                "URL must have a host: {}",
                target_url
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl<S: Store, G: CodeGenerator> Shortener for ShortenerService<S, G> {
    async fn shorten(&self, target_url: &str) -> Result<ShortLink> {
        Self::validate_url(target_url)?;

        for attempt in 1..=self.max_attempts {
            let code = self.generator.generate();

            match self.store.create_if_absent(&code, target_url).await {
                Ok(link) => {
                    info!(code = %link.code, "created short link");
                    return Ok(link);
                }
                Err(StoreError::CodeTaken(_)) => {
                    debug!(code = %code, attempt, "candidate code collided");
                }
                Err(other) => return Err(other.into()),
            }
        }

        warn!(
            attempts = self.max_attempts,
            "collision retry budget exhausted; review code length vs. link volume"
        );
        Err(ShortenError::CapacityExhausted {
            attempts: self.max_attempts,
        })
    }

    async fn disable(&self, code: &ShortCode) -> Result<bool> {
        let disabled = self.store.disable(code).await?;
        if disabled {
            info!(code = %code, "disabled short link");
        }
        Ok(disabled)
    }

    async fn stats(&self, code: &ShortCode) -> Result<Option<ShortLink>> {
        Ok(self.store.get(code).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snaplink_core::store::Result as StoreResult;
    use snaplink_core::LinkStatus;
    use snaplink_generator::{RandomGenerator, SeqGenerator};
    use snaplink_store::MemoryStore;
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Wraps a store and counts every call that reaches it.
    struct CountingStore {
        inner: MemoryStore,
        calls: Arc<AtomicU64>,
    }

    #[async_trait]
    impl Store for CountingStore {
        async fn create_if_absent(
            &self,
            code: &ShortCode,
            target_url: &str,
        ) -> StoreResult<ShortLink> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.create_if_absent(code, target_url).await
        }

        async fn get(&self, code: &ShortCode) -> StoreResult<Option<ShortLink>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.get(code).await
        }

        async fn increment_clicks(&self, code: &ShortCode) -> StoreResult<Option<ShortLink>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.increment_clicks(code).await
        }

        async fn disable(&self, code: &ShortCode) -> StoreResult<bool> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.disable(code).await
        }
    }

    /// Always proposes the same code; every attempt after the first
    /// insert collides.
    struct FixedGenerator;

    impl CodeGenerator for FixedGenerator {
        fn generate(&self) -> ShortCode {
            ShortCode::new_unchecked("fixed1")
        }
    }

    fn test_service() -> ShortenerService<MemoryStore, SeqGenerator> {
        ShortenerService::new(MemoryStore::new(), SeqGenerator::with_prefix("sl"))
    }

    #[tokio::test]
    async fn shorten_creates_an_active_link() {
        let service = test_service();

        let link = service
            .shorten("https://example.com/a/very/long/path?x=1")
            .await
            .unwrap();

        assert_eq!(link.target_url, "https://example.com/a/very/long/path?x=1");
        assert_eq!(link.clicks, 0);
        assert_eq!(link.status, LinkStatus::Active);
    }

    #[tokio::test]
    async fn shorten_with_empty_url_fails() {
        let service = test_service();

        let err = service.shorten("").await.unwrap_err();
        assert!(matches!(err, ShortenError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn shorten_with_malformed_url_fails() {
        let service = test_service();

        let err = service.shorten("not a url").await.unwrap_err();
        assert!(matches!(err, ShortenError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn shorten_with_non_http_scheme_fails() {
        let service = test_service();

        let err = service.shorten("ftp://example.com/file").await.unwrap_err();
        assert!(matches!(err, ShortenError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn shorten_with_relative_url_fails() {
        let service = test_service();

        let err = service.shorten("example.com/path").await.unwrap_err();
        assert!(matches!(err, ShortenError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn validation_failures_never_reach_the_store() {
        let calls = Arc::new(AtomicU64::new(0));
        let store = CountingStore {
            inner: MemoryStore::new(),
            calls: Arc::clone(&calls),
        };
        let service = ShortenerService::new(store, SeqGenerator::with_prefix("sl"));

        assert!(service.shorten("").await.is_err());
        assert!(service.shorten("not a url").await.is_err());
        assert!(service.shorten("ftp://example.com").await.is_err());

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn collision_is_retried_with_a_fresh_candidate() {
        let store = MemoryStore::new();
        // Occupy the first code the generator will propose.
        store
            .create_if_absent(&ShortCode::new_unchecked("sl000000"), "https://taken.com")
            .await
            .unwrap();

        let service = ShortenerService::new(store, SeqGenerator::with_prefix("sl"));

        let link = service.shorten("https://example.com").await.unwrap();
        assert_eq!(link.code.as_str(), "sl000001");
    }

    #[tokio::test]
    async fn exhausted_retry_budget_is_capacity_exhausted() {
        let calls = Arc::new(AtomicU64::new(0));
        let store = CountingStore {
            inner: MemoryStore::new(),
            calls: Arc::clone(&calls),
        };
        let service = ShortenerService::new(store, FixedGenerator).with_max_attempts(5);

        service.shorten("https://example.com").await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let err = service.shorten("https://other.com").await.unwrap_err();
        assert!(matches!(
            err,
            ShortenError::CapacityExhausted { attempts: 5 }
        ));
        // One successful insert plus exactly five colliding attempts.
        assert_eq!(calls.load(Ordering::SeqCst), 6);
    }

    #[tokio::test]
    async fn concurrent_shortens_never_share_a_code() {
        let service = Arc::new(ShortenerService::new(
            MemoryStore::new(),
            RandomGenerator::default(),
        ));

        let mut handles = vec![];
        for i in 0..50u64 {
            let service = Arc::clone(&service);
            handles.push(tokio::spawn(async move {
                service
                    .shorten(&format!("https://example.com/page/{}", i))
                    .await
                    .unwrap()
            }));
        }

        let mut codes = std::collections::HashSet::new();
        for handle in handles {
            let link = handle.await.unwrap();
            assert!(
                codes.insert(link.code.as_str().to_owned()),
                "duplicate code issued: {}",
                link.code
            );
        }
        assert_eq!(codes.len(), 50);
    }

    #[tokio::test]
    async fn disable_then_stats() {
        let service = test_service();

        let link = service.shorten("https://example.com").await.unwrap();
        assert!(service.disable(&link.code).await.unwrap());

        let stats = service.stats(&link.code).await.unwrap().unwrap();
        assert_eq!(stats.status, LinkStatus::Disabled);
        assert_eq!(stats.target_url, "https://example.com");
    }

    #[tokio::test]
    async fn disable_unknown_code() {
        let service = test_service();

        assert!(!service
            .disable(&ShortCode::new_unchecked("nope42"))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn stats_unknown_code() {
        let service = test_service();

        assert!(service
            .stats(&ShortCode::new_unchecked("nope42"))
            .await
            .unwrap()
            .is_none());
    }
}
