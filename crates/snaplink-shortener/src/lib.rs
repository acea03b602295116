//! URL shortening service implementation.
//!
//! This crate provides the shortener service: URL validation, the
//! collision-retry allocation loop, and the administrative disable and
//! stats operations. Core types are re-exported from `snaplink_core`.

pub mod error;
pub mod service;
pub mod shortener;

pub use error::ShortenError;
pub use service::ShortenerService;
pub use shortener::Shortener;
