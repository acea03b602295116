use crate::CodeGenerator;
use rand::Rng;
use snaplink_core::{CoreError, ShortCode};
use typed_builder::TypedBuilder;

/// The code alphabet: base62, no separators, URL-safe as-is.
const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const MIN_CODE_LENGTH: usize = 4;
const MAX_CODE_LENGTH: usize = 32;

/// Settings for [`RandomGenerator`].
///
/// The default length of 6 gives a code space of 62^6 (about 56
/// billion), so collisions against any realistic link count stay rare
/// while staying short enough to share.
#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct GeneratorSettings {
    #[builder(default = 6)]
    pub length: usize,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// A generator that samples fixed-length codes uniformly from the
/// base62 alphabet.
///
/// Sampling uses the thread-local CSPRNG from `rand`, so candidates are
/// not enumerable or predictable from previously issued codes. The
/// generator holds no mutable state of its own and is freely shared
/// across tasks.
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    length: usize,
}

impl RandomGenerator {
    /// Creates a generator from settings.
    ///
    /// Fails if the configured length falls outside the valid short
    /// code bounds (4-32 characters).
    pub fn new(settings: GeneratorSettings) -> Result<Self, CoreError> {
        if settings.length < MIN_CODE_LENGTH || settings.length > MAX_CODE_LENGTH {
            return Err(CoreError::InvalidShortCode(format!(
                "generator length must be between {} and {}, got {}",
                MIN_CODE_LENGTH, MAX_CODE_LENGTH, settings.length
            )));
        }
        Ok(Self {
            length: settings.length,
        })
    }

    /// Returns the configured code length.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        // The default settings are within bounds by construction.
        Self {
            length: GeneratorSettings::default().length,
        }
    }
}

impl CodeGenerator for RandomGenerator {
    fn generate(&self) -> ShortCode {
        let mut rng = rand::rng();
        let code: String = (0..self.length)
            .map(|_| {
                let idx = rng.random_range(0..ALPHABET.len());
                ALPHABET[idx] as char
            })
            .collect();
        ShortCode::new_unchecked(code)
    }
}
