//! Password generator - dispatches a mode to its algorithm.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use secrecy::SecretString;

use crate::constraints::{Constraints, GenerationMode};
use crate::modes::{passphrase, pronounceable, random};
use crate::wordlist::with_words;

/// Generator bound to a cryptographically secure random source.
///
/// Production code uses [`Generator::new`], backed by the operating system
/// RNG. Tests may inject a seeded source with [`Generator::with_rng`].
#[derive(Debug, Clone)]
pub struct Generator<R = OsRng> {
    rng: R,
}

impl Generator<OsRng> {
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl Default for Generator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> Generator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a password for `mode` under `constraints`.
    ///
    /// An empty secret means the constraints cannot be satisfied (no
    /// character class enabled) and must not be shown as a password.
    pub fn generate(&mut self, mode: GenerationMode, constraints: &Constraints) -> SecretString {
        let password = match mode {
            GenerationMode::Random => random(&mut self.rng, constraints),
            GenerationMode::Paranoia => random(&mut self.rng, &constraints.paranoia()),
            GenerationMode::Pronounceable => pronounceable(&mut self.rng, constraints),
            GenerationMode::Passphrase => {
                with_words(|words| passphrase(&mut self.rng, constraints, words))
            }
        };

        #[cfg(feature = "tracing")]
        {
            if password.is_empty() {
                tracing::warn!("no eligible characters for {} mode", mode);
            }
        }

        SecretString::new(password.into())
    }
}

/// Generates a password with the operating system RNG.
pub fn generate(mode: GenerationMode, constraints: &Constraints) -> SecretString {
    Generator::new().generate(mode, constraints)
}
