//! HTTP gateway for the snaplink engine.
//!
//! Exposes the shortener and resolver services over the REST contract:
//! link creation, redirect-time resolution, administrative disable, and
//! per-link stats.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use error::ApiError;
pub use state::AppState;
