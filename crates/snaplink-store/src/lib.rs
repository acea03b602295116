//! Store implementations for the snaplink engine.
//!
//! Two backends implement the [`Store`][snaplink_core::Store] contract:
//! [`MemoryStore`] for tests and single-process deployments, and
//! [`SqliteStore`] for durable storage.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
