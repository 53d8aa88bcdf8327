//! Character variety sections - one per missing character class.

use super::{Finding, Sample, SectionResult};

/// Flags a password without any `A-Z` letter.
pub fn uppercase_section(sample: &Sample<'_>) -> SectionResult {
    (!sample.profile.has_uppercase).then(|| Finding::tip("Add uppercase letters to increase strength."))
}

/// Flags a password without any digit.
pub fn numbers_section(sample: &Sample<'_>) -> SectionResult {
    (!sample.profile.has_digit).then(|| Finding::tip("Add numbers to increase strength."))
}

/// Flags a password made only of ASCII letters and digits.
pub fn symbols_section(sample: &Sample<'_>) -> SectionResult {
    (!sample.profile.has_other).then(|| Finding::tip("Add symbols for extra security."))
}
