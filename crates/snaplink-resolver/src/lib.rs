//! Resolver service for the snaplink engine.
//!
//! This crate provides a [`ResolverService`] that resolves short codes
//! to their targets while recording the hit. Existence check and click
//! accounting happen in one atomic store call, so there is no window
//! for a lookup+update race and no increment is ever lost.

pub mod error;
pub mod resolver;
pub mod service;

pub use error::ResolveError;
pub use resolver::{Resolution, Resolver};
pub use service::ResolverService;
