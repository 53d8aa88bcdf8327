//! Separator-joined dictionary words.

use rand::{CryptoRng, Rng};

use super::draw;
use crate::charset::DIGITS;
use crate::constraints::Constraints;

const PASSPHRASE_SYMBOL: char = '!';

/// Draws words with replacement until the joined phrase reaches
/// `constraints.length` characters.
///
/// `length` is a soft budget: the last word may carry the phrase past it.
/// At least one word is always drawn. With numbers on, a digit is appended
/// to the first word; with symbols on, `!` is appended to the last.
pub fn passphrase<R: Rng + CryptoRng>(
    rng: &mut R,
    constraints: &Constraints,
    vocabulary: &[String],
) -> String {
    if vocabulary.is_empty() {
        return String::new();
    }

    let separator = constraints.separator();
    let separator_len = separator.chars().count();
    let mut words: Vec<String> = Vec::new();
    let mut joined_len = 0;

    loop {
        let word = &vocabulary[rng.gen_range(0..vocabulary.len())];
        let word = if constraints.capitalize {
            capitalize(word)
        } else {
            word.clone()
        };

        if !words.is_empty() {
            joined_len += separator_len;
        }
        joined_len += word.chars().count();
        words.push(word);

        // Also bounds overshoot to a single word
        if joined_len >= constraints.length {
            break;
        }
    }

    if constraints.use_numbers {
        let digit = draw(rng, DIGITS);
        if let Some(first) = words.first_mut() {
            first.push(digit);
        }
    }
    if constraints.use_symbols {
        if let Some(last) = words.last_mut() {
            last.push(PASSPHRASE_SYMBOL);
        }
    }

    words.join(separator)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
