//! Pattern sections - short letter-only passwords and keyboard runs.

use super::{Adjustment, Finding, Sample, SectionResult};

const SHORT_LETTERS_MAX: usize = 10;
const SHORT_LETTERS_CAP: u8 = 1;

/// Caps short, letters-only passwords at "Fair".
pub fn short_letters_section(sample: &Sample<'_>) -> SectionResult {
    if sample.profile.is_letters_only() && sample.profile.length < SHORT_LETTERS_MAX {
        return Some(Finding {
            tip: None,
            adjustment: Some(Adjustment::Cap(SHORT_LETTERS_CAP)),
        });
    }
    None
}

/// Detects a leading `123` or a `qwerty` run anywhere (case-insensitive).
///
/// # Returns
/// - `Some(finding)` with a tip and a one-point penalty if a pattern is found
/// - `None` otherwise
pub fn keyboard_pattern_section(sample: &Sample<'_>) -> SectionResult {
    let pwd = sample.password;
    if pwd.starts_with("123") || pwd.to_ascii_lowercase().contains("qwerty") {
        return Some(Finding {
            tip: Some("Avoid common keyboard patterns like 'qwerty' or '123'.".to_string()),
            adjustment: Some(Adjustment::Lower(1)),
        });
    }
    None
}
