use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use snaplink_core::{LinkStatus, ShortLink};

#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct CreateLinkResponse {
    pub code: String,
    pub short_url: String,
    pub target_url: String,
    pub created_at: Timestamp,
}

impl CreateLinkResponse {
    pub fn from_link(link: ShortLink, base_url: &str) -> Self {
        Self {
            short_url: link.code.to_url(base_url),
            code: link.code.as_str().to_owned(),
            target_url: link.target_url,
            created_at: link.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub code: String,
    pub target_url: String,
    pub clicks: u64,
    pub created_at: Timestamp,
    pub status: LinkStatus,
}

impl From<ShortLink> for StatsResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            code: link.code.as_str().to_owned(),
            target_url: link.target_url,
            clicks: link.clicks,
            created_at: link.created_at,
            status: link.status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl ErrorBody {
    pub fn new(error: &'static str, message: impl Into<String>) -> Self {
        Self {
            error,
            message: message.into(),
        }
    }
}
