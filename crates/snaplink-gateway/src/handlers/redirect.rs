use crate::error::{ApiError, Result};
use crate::handlers::links::parse_code;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use snaplink_resolver::Resolution;

/// Redirect-time lookup. 302 rather than 301 so clients keep
/// re-querying and a later disable takes effect.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let code = parse_code(&code)?;

    match state.resolver().resolve(&code).await? {
        Some(Resolution::Active(link)) => {
            Ok((StatusCode::FOUND, [(header::LOCATION, link.target_url)]).into_response())
        }
        Some(Resolution::Disabled(_)) => Err(ApiError::Disabled),
        None => Err(ApiError::NotFound),
    }
}
