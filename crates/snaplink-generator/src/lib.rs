//! Short-code generation for the snaplink engine.
//!
//! Generators are pure with respect to storage: they produce candidate
//! codes, and uniqueness is enforced cooperatively by the store's
//! create-if-absent primitive plus the shortener's retry loop.

pub mod random;
pub mod seq;

use snaplink_core::ShortCode;

pub use random::{GeneratorSettings, RandomGenerator};
pub use seq::SeqGenerator;

/// Trait for generating candidate short codes.
///
/// Implementations do not interact with storage and must be safe for
/// concurrent use; a single generator instance is shared across all
/// in-flight shorten requests.
pub trait CodeGenerator: Send + Sync + 'static {
    /// Produces one candidate code from the code alphabet.
    ///
    /// Candidates are not guaranteed unique against the store; a
    /// collision surfaces as `CodeTaken` at insert time and the caller
    /// retries with a fresh candidate.
    fn generate(&self) -> ShortCode;
}
