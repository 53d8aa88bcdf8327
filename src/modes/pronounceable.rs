//! Alternating consonant/vowel passwords.
//!
//! Post-processing runs in a fixed order: capitalize the first character,
//! overwrite the last two with digits, then overwrite the last with a
//! symbol. With both numbers and symbols on, the symbol replaces the second
//! digit; this overlap is kept as-is because it is observable output.

use rand::{CryptoRng, Rng};

use super::draw;
use crate::charset::{CONSONANTS, DIGITS, SYMBOLS, VOWELS};
use crate::constraints::Constraints;

/// Builds a `length`-character consonant-first alternating password.
///
/// Returns an empty string when no character class is enabled.
pub fn pronounceable<R: Rng + CryptoRng>(rng: &mut R, constraints: &Constraints) -> String {
    if !constraints.classes().any() {
        return String::new();
    }

    let length = constraints.length;
    let mut chars: Vec<char> = (0..length)
        .map(|i| {
            if i % 2 == 0 {
                draw(rng, CONSONANTS)
            } else {
                draw(rng, VOWELS)
            }
        })
        .collect();

    if constraints.use_uppercase {
        if let Some(first) = chars.first_mut() {
            *first = first.to_ascii_uppercase();
        }
    }

    if constraints.use_numbers && length > 2 {
        chars[length - 2] = draw(rng, DIGITS);
        chars[length - 1] = draw(rng, DIGITS);
    }

    if constraints.use_symbols && length > 3 {
        chars[length - 1] = draw(rng, SYMBOLS);
    }

    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modes::testing::ZeroRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn plain(length: usize) -> Constraints {
        Constraints {
            length,
            use_uppercase: false,
            use_lowercase: true,
            use_numbers: false,
            use_symbols: false,
            ..Constraints::default()
        }
    }

    #[test]
    fn test_pronounceable_alternates() {
        let mut rng = StdRng::seed_from_u64(42);
        let pwd = pronounceable(&mut rng, &plain(15));
        assert_eq!(pwd.len(), 15);
        for (i, ch) in pwd.chars().enumerate() {
            if i % 2 == 0 {
                assert!(CONSONANTS.contains(ch), "{} at {} is not a consonant", ch, i);
            } else {
                assert!(VOWELS.contains(ch), "{} at {} is not a vowel", ch, i);
            }
        }
    }

    #[test]
    fn test_pronounceable_post_processing_order() {
        let c = Constraints {
            length: 8,
            use_uppercase: true,
            use_numbers: true,
            use_symbols: true,
            ..plain(8)
        };
        assert_eq!(pronounceable(&mut ZeroRng::new(), &c), "Bababa0!");
    }

    #[test]
    fn test_pronounceable_symbol_overwrites_digit_at_length_four() {
        let c = Constraints {
            use_numbers: true,
            use_symbols: true,
            ..plain(4)
        };
        assert_eq!(pronounceable(&mut ZeroRng::new(), &c), "ba0!");
    }

    #[test]
    fn test_pronounceable_short_lengths_skip_overwrites() {
        let c = Constraints {
            use_numbers: true,
            use_symbols: true,
            ..plain(2)
        };
        assert_eq!(pronounceable(&mut ZeroRng::new(), &c), "ba");

        let c = Constraints { length: 3, ..c };
        assert_eq!(pronounceable(&mut ZeroRng::new(), &c), "b00");
    }

    #[test]
    fn test_pronounceable_numbers_only() {
        let mut rng = StdRng::seed_from_u64(9);
        let c = Constraints {
            use_numbers: true,
            ..plain(12)
        };
        let pwd = pronounceable(&mut rng, &c);
        let tail: Vec<char> = pwd.chars().skip(10).collect();
        assert!(tail.iter().all(|ch| ch.is_ascii_digit()));
        assert!(pwd.chars().take(10).all(|ch| ch.is_ascii_lowercase()));
    }

    #[test]
    fn test_pronounceable_no_classes_is_empty() {
        let c = Constraints {
            use_lowercase: false,
            ..plain(10)
        };
        assert_eq!(pronounceable(&mut ZeroRng::new(), &c), "");
    }
}
