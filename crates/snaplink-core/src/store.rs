use crate::error::StoreError;
use crate::shortcode::ShortCode;
use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Lifecycle status of a short link.
///
/// Links start `Active` and may be disabled (soft delete). A disabled
/// code keeps its row so the code is never reissued, and resolutions
/// against it are still counted for audit purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkStatus {
    Active,
    Disabled,
}

impl LinkStatus {
    /// Canonical storage representation, used by SQL backends.
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkStatus::Active => "active",
            LinkStatus::Disabled => "disabled",
        }
    }

    /// Parses the storage representation back into a status.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "active" => Ok(LinkStatus::Active),
            "disabled" => Ok(LinkStatus::Disabled),
            other => Err(StoreError::InvalidData(format!(
                "unknown link status '{}'",
                other
            ))),
        }
    }
}

/// A persisted short-code mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortLink {
    /// The unique short code, immutable once created.
    pub code: ShortCode,
    /// The original URL this code redirects to.
    pub target_url: String,
    /// Number of successful resolutions. Starts at zero, only increases.
    pub clicks: u64,
    /// When the mapping was created.
    pub created_at: Timestamp,
    /// Whether the link still redirects.
    pub status: LinkStatus,
}

impl ShortLink {
    pub fn is_disabled(&self) -> bool {
        self.status == LinkStatus::Disabled
    }
}

/// Durable storage contract for short-code mappings.
///
/// The store is the single source of truth for code uniqueness and
/// click accounting. Every mutation must be atomic and durable before
/// the call returns; callers never compose a check with a write across
/// two calls.
#[async_trait]
pub trait Store: Send + Sync + 'static {
    /// Atomically inserts a new mapping if `code` is not already present.
    ///
    /// A taken code (active or disabled) mutates nothing and fails with
    /// [`StoreError::CodeTaken`], allowing the caller to retry with a
    /// fresh candidate.
    async fn create_if_absent(&self, code: &ShortCode, target_url: &str) -> Result<ShortLink>;

    /// Retrieves the mapping for a short code, regardless of status.
    /// Returns `None` if the code was never issued.
    async fn get(&self, code: &ShortCode) -> Result<Option<ShortLink>>;

    /// Atomically increments the click counter and returns the updated
    /// record, or `None` if the code does not exist.
    ///
    /// Implementations must perform this as a single atomic operation,
    /// not a read followed by a write, so concurrent resolutions of the
    /// same code never lose an increment.
    async fn increment_clicks(&self, code: &ShortCode) -> Result<Option<ShortLink>>;

    /// Soft-deletes a mapping by flipping its status to `Disabled`.
    ///
    /// Returns `true` if the code exists (disabling an already disabled
    /// code is a no-op success), `false` if it was never issued. The row
    /// is kept so the code is never recycled.
    async fn disable(&self, code: &ShortCode) -> Result<bool>;
}
