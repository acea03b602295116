use async_trait::async_trait;
use dashmap::mapref::entry::Entry as MapEntry;
use dashmap::DashMap;
use jiff::Timestamp;
use snaplink_core::store::Result;
use snaplink_core::{LinkStatus, ShortCode, ShortLink, Store, StoreError};
use std::sync::Arc;

/// In-memory storage entry for a short-code mapping.
#[derive(Debug, Clone)]
struct Entry {
    target_url: String,
    clicks: u64,
    created_at: Timestamp,
    status: LinkStatus,
}

impl Entry {
    fn to_link(&self, code: &ShortCode) -> ShortLink {
        ShortLink {
            code: code.clone(),
            target_url: self.target_url.clone(),
            clicks: self.clicks,
            created_at: self.created_at,
            status: self.status,
        }
    }
}

/// In-memory implementation of the Store trait using DashMap.
///
/// DashMap provides better concurrency than RwLock<HashMap> because it
/// uses sharded locks, allowing concurrent reads and writes to different
/// buckets without blocking. The entry API gives both create-if-absent
/// and increment an exclusive shard lock, so each is a single atomic
/// step with respect to other callers of the same code.
///
/// Cloning yields a handle to the same underlying map, matching the
/// cheap-handle semantics of a connection pool.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    links: Arc<DashMap<String, Entry>>,
}

impl MemoryStore {
    /// Creates a new in-memory store.
    pub fn new() -> Self {
        Self {
            links: Arc::new(DashMap::new()),
        }
    }

    /// Creates a new in-memory store with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            links: Arc::new(DashMap::with_capacity(capacity)),
        }
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_if_absent(&self, code: &ShortCode, target_url: &str) -> Result<ShortLink> {
        match self.links.entry(code.as_str().to_owned()) {
            MapEntry::Occupied(_) => Err(StoreError::CodeTaken(code.to_string())),
            MapEntry::Vacant(slot) => {
                let entry = Entry {
                    target_url: target_url.to_owned(),
                    clicks: 0,
                    created_at: Timestamp::now(),
                    status: LinkStatus::Active,
                };
                let link = entry.to_link(code);
                slot.insert(entry);
                Ok(link)
            }
        }
    }

    async fn get(&self, code: &ShortCode) -> Result<Option<ShortLink>> {
        Ok(self
            .links
            .get(code.as_str())
            .map(|entry| entry.to_link(code)))
    }

    async fn increment_clicks(&self, code: &ShortCode) -> Result<Option<ShortLink>> {
        let Some(mut entry) = self.links.get_mut(code.as_str()) else {
            return Ok(None);
        };

        entry.clicks += 1;
        Ok(Some(entry.to_link(code)))
    }

    async fn disable(&self, code: &ShortCode) -> Result<bool> {
        let Some(mut entry) = self.links.get_mut(code.as_str()) else {
            return Ok(false);
        };

        entry.status = LinkStatus::Disabled;
        Ok(true)
    }
}
