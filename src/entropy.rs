//! Pool size, entropy and offline crack-time estimation.
//!
//! Crack time is computed in the log domain so that astronomically large
//! search spaces resolve to the `Forever` bucket instead of overflowing.

/// Pool contribution of any character outside `A-Za-z0-9`.
pub const SYMBOL_POOL_SIZE: u32 = 32;

/// Offline attacker throughput, as a power of ten guesses per second.
pub const GUESSES_PER_SECOND_LOG10: f64 = 10.0;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 365.0 * DAY;
const CENTURY: f64 = 100.0 * YEAR;
const FOREVER: f64 = 10_000.0 * YEAR;

/// Character classes present in a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharacterProfile {
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_digit: bool,
    pub has_other: bool,
    /// Length in characters.
    pub length: usize,
}

impl CharacterProfile {
    pub fn of(password: &str) -> Self {
        password.chars().fold(Self::default(), |mut p, c| {
            match c {
                'a'..='z' => p.has_lowercase = true,
                'A'..='Z' => p.has_uppercase = true,
                '0'..='9' => p.has_digit = true,
                _ => p.has_other = true,
            }
            p.length += 1;
            p
        })
    }

    /// Sum of the class sizes present, never below 1.
    pub fn pool_size(&self) -> u32 {
        let pool = [
            (self.has_lowercase, 26),
            (self.has_uppercase, 26),
            (self.has_digit, 10),
            (self.has_other, SYMBOL_POOL_SIZE),
        ]
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, size)| size)
        .sum::<u32>();
        pool.max(1)
    }

    pub fn is_letters_only(&self) -> bool {
        self.length > 0 && !self.has_digit && !self.has_other
    }
}

/// `length * log2(pool_size)`, unrounded.
pub fn entropy_bits(pool_size: u32, length: usize) -> f64 {
    length as f64 * f64::from(pool_size.max(1)).log2()
}

/// Time to exhaust `pool_size^length` guesses, as a display bucket.
pub fn crack_time(pool_size: u32, length: usize) -> String {
    let log10_seconds =
        length as f64 * f64::from(pool_size.max(1)).log10() - GUESSES_PER_SECOND_LOG10;

    if !log10_seconds.is_finite() || log10_seconds >= FOREVER.log10() {
        return "Forever".to_string();
    }
    format_duration(10f64.powf(log10_seconds))
}

/// Buckets a duration in seconds into a human string.
pub fn format_duration(seconds: f64) -> String {
    if seconds.is_nan() {
        return "Forever".to_string();
    }
    if seconds < 1.0 {
        "Instant".to_string()
    } else if seconds < MINUTE {
        format!("{} seconds", seconds.round())
    } else if seconds < HOUR {
        format!("{} minutes", (seconds / MINUTE).round())
    } else if seconds < DAY {
        format!("{} hours", (seconds / HOUR).round())
    } else if seconds < YEAR {
        format!("{} days", (seconds / DAY).round())
    } else if seconds < CENTURY {
        format!("{} years", (seconds / YEAR).round())
    } else if seconds < FOREVER {
        format!("{} centuries", (seconds / CENTURY).round())
    } else {
        "Forever".to_string()
    }
}
