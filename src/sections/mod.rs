//! Password analysis sections
//!
//! Each section inspects one aspect of a measured password and may emit a
//! remediation tip, a score adjustment, or both.

mod length;
mod pattern;
mod variety;

pub use length::length_section;
pub use pattern::{keyboard_pattern_section, short_letters_section};
pub use variety::{numbers_section, symbols_section, uppercase_section};

use crate::entropy::CharacterProfile;

/// A password together with the measurements every section shares.
#[derive(Debug, Clone, Copy)]
pub struct Sample<'a> {
    pub password: &'a str,
    pub profile: CharacterProfile,
    /// Unrounded entropy in bits.
    pub entropy: f64,
}

impl<'a> Sample<'a> {
    pub fn measure(password: &'a str) -> Self {
        let profile = CharacterProfile::of(password);
        let entropy = crate::entropy::entropy_bits(profile.pool_size(), profile.length);
        Self {
            password,
            profile,
            entropy,
        }
    }
}

/// Score change requested by a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    /// Keep the score at or below this value.
    Cap(u8),
    /// Subtract this many points, floored at zero.
    Lower(u8),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub tip: Option<String>,
    pub adjustment: Option<Adjustment>,
}

impl Finding {
    pub fn tip(message: &str) -> Self {
        Self {
            tip: Some(message.to_string()),
            adjustment: None,
        }
    }
}

/// Result type for section functions.
/// - `Some(finding)` - Section flagged something
/// - `None` - Section passed
pub type SectionResult = Option<Finding>;

pub type Section = fn(&Sample<'_>) -> SectionResult;
