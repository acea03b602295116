//! Core types and traits for the snaplink short-code engine.
//!
//! This crate provides the shared domain model and the storage contract
//! used by the shortener, resolver, and gateway crates.

pub mod error;
pub mod shortcode;
pub mod store;

pub use error::{CoreError, StoreError};
pub use shortcode::ShortCode;
pub use store::{LinkStatus, ShortLink, Store};
