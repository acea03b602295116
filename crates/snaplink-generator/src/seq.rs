use crate::CodeGenerator;
use snaplink_core::ShortCode;

/// A deterministic sequential generator.
///
/// Produces codes like `sl000000`, `sl000001`, ... Useful for tests and
/// for deployments that prefer predictable codes over random ones. Not
/// suitable when codes must be non-enumerable.
#[derive(Debug)]
pub struct SeqGenerator {
    counter: std::sync::atomic::AtomicU64,
    prefix: String,
}

impl SeqGenerator {
    /// Creates a sequential generator with the given prefix.
    ///
    /// The prefix must only contain code-alphabet characters; it is the
    /// caller's responsibility to keep prefixes unique across nodes.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            counter: std::sync::atomic::AtomicU64::new(0),
            prefix: prefix.into(),
        }
    }

    /// Creates a sequential generator starting from a specific counter
    /// value, e.g. to partition counter ranges across nodes.
    pub fn with_offset(prefix: impl Into<String>, offset: u64) -> Self {
        Self {
            counter: std::sync::atomic::AtomicU64::new(offset),
            prefix: prefix.into(),
        }
    }
}

impl CodeGenerator for SeqGenerator {
    fn generate(&self) -> ShortCode {
        let count = self
            .counter
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        ShortCode::new_unchecked(format!("{}{:06}", self.prefix, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_sequential_codes() {
        let generator = SeqGenerator::with_prefix("sl");

        assert_eq!(generator.generate().as_str(), "sl000000");
        assert_eq!(generator.generate().as_str(), "sl000001");
        assert_eq!(generator.generate().as_str(), "sl000002");
    }

    #[test]
    fn offset_start() {
        let generator = SeqGenerator::with_offset("sl", 1000);

        assert_eq!(generator.generate().as_str(), "sl001000");
        assert_eq!(generator.generate().as_str(), "sl001001");
    }

    #[test]
    fn codes_are_valid_short_codes() {
        let generator = SeqGenerator::with_prefix("node0");
        assert!(ShortCode::new(generator.generate().as_str()).is_ok());
    }
}
