use crate::error::{ApiError, Result};
use crate::model::{CreateLinkRequest, CreateLinkResponse, StatsResponse};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use snaplink_core::ShortCode;

pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<CreateLinkResponse>)> {
    let link = state.shortener().shorten(&request.url).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateLinkResponse::from_link(link, state.base_url())),
    ))
}

pub async fn disable_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode> {
    let code = parse_code(&code)?;

    if state.shortener().disable(&code).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

pub async fn link_stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>> {
    let code = parse_code(&code)?;

    match state.shortener().stats(&code).await? {
        Some(link) => Ok(Json(link.into())),
        None => Err(ApiError::NotFound),
    }
}

/// A path segment that is not even a well-formed code cannot have been
/// issued, so it reads as not-found rather than a validation error.
pub(crate) fn parse_code(raw: &str) -> Result<ShortCode> {
    ShortCode::new(raw).map_err(|_| ApiError::NotFound)
}
