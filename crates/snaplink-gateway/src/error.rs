use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use snaplink_core::StoreError;
use snaplink_resolver::ResolveError;
use snaplink_shortener::ShortenError;
use tracing::error;

use crate::model::ErrorBody;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Gateway-level error, mapped onto the HTTP status contract.
///
/// `Disabled` is deliberately distinct from `NotFound` so clients can
/// tell a revoked link (410) from one that never existed (404).
#[derive(Debug)]
pub enum ApiError {
    InvalidUrl(String),
    CapacityExhausted,
    NotFound,
    Disabled,
    Store(StoreError),
}

impl From<ShortenError> for ApiError {
    fn from(err: ShortenError) -> Self {
        match err {
            ShortenError::InvalidUrl(message) => Self::InvalidUrl(message),
            ShortenError::CapacityExhausted { .. } => Self::CapacityExhausted,
            ShortenError::Store(inner) => Self::Store(inner),
        }
    }
}

impl From<ResolveError> for ApiError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::Store(inner) => Self::Store(inner),
        }
    }
}

impl ApiError {
    fn status_and_body(&self) -> (StatusCode, ErrorBody) {
        match self {
            Self::InvalidUrl(message) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new("invalid_url", message.clone()),
            ),
            Self::CapacityExhausted => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorBody::new(
                    "capacity_exhausted",
                    "could not allocate a short code, try again later",
                ),
            ),
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorBody::new("not_found", "short code not found"),
            ),
            Self::Disabled => (
                StatusCode::GONE,
                ErrorBody::new("link_disabled", "short link has been disabled"),
            ),
            Self::Store(err) if err.is_retryable() => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorBody::new("storage_unavailable", err.to_string()),
            ),
            Self::Store(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::new("internal", err.to_string()),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Store(err) = &self {
            error!(error = %err, "store failure while serving request");
        }

        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}
