use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_link_handler, disable_link_handler, health_handler, link_stats_handler,
    redirect_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    /// Builds the gateway router.
    ///
    /// Static routes (`/health`, `/links`) take precedence over the
    /// top-level `/{code}` redirect capture.
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/links", post(create_link_handler))
            .route("/links/{code}", axum::routing::delete(disable_link_handler))
            .route("/links/{code}/stats", get(link_stats_handler))
            .route("/{code}", get(redirect_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
