//! Generation algorithms
//!
//! Each mode turns a constraint set into a password using the caller's
//! random source.

mod passphrase;
mod pronounceable;
mod random;

pub use passphrase::passphrase;
pub use pronounceable::pronounceable;
pub use random::random;

use rand::{CryptoRng, Rng};

/// Draws one character uniformly from an ASCII alphabet.
fn draw<R: Rng + CryptoRng>(rng: &mut R, alphabet: &str) -> char {
    let bytes = alphabet.as_bytes();
    bytes[rng.gen_range(0..bytes.len())] as char
}

#[cfg(test)]
pub(crate) mod testing {
    use rand::rngs::mock::StepRng;
    use rand::{CryptoRng, RngCore};

    /// Source that always yields zero, so every draw picks the first
    /// candidate. Marked crypto only so it fits the generator bounds.
    pub struct ZeroRng(StepRng);

    impl ZeroRng {
        pub fn new() -> Self {
            Self(StepRng::new(0, 0))
        }
    }

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            self.0.next_u32()
        }

        fn next_u64(&mut self) -> u64 {
            self.0.next_u64()
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.0.fill_bytes(dest)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.0.try_fill_bytes(dest)
        }
    }

    impl CryptoRng for ZeroRng {}
}
