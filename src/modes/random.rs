//! Uniform draws from the eligible character pool.

use rand::{CryptoRng, Rng};

use crate::charset::build_pool;
use crate::constraints::Constraints;

/// Draws `length` characters independently and uniformly from the pool the
/// constraints allow.
///
/// Returns an empty string when no character is eligible.
pub fn random<R: Rng + CryptoRng>(rng: &mut R, constraints: &Constraints) -> String {
    let pool = build_pool(constraints.classes(), constraints.exclude_similar);
    if pool.is_empty() {
        return String::new();
    }

    (0..constraints.length)
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect()
}
