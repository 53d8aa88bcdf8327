//! Length section - nudges towards longer passwords.

use super::{Finding, Sample, SectionResult};

const RECOMMENDED_LENGTH: usize = 12;

/// Entropy above which a short password is worth lengthening rather than
/// diversifying.
const LENGTH_TIP_ENTROPY: f64 = 50.0;

/// Suggests more characters when the password is short but already diverse.
///
/// # Returns
/// - `Some(finding)` with a length tip if shorter than 12 characters and
///   above 50 bits
/// - `None` otherwise
pub fn length_section(sample: &Sample<'_>) -> SectionResult {
    if sample.profile.length < RECOMMENDED_LENGTH && sample.entropy > LENGTH_TIP_ENTROPY {
        return Some(Finding::tip(&format!(
            "Length matters most: aim for {}+ characters.",
            RECOMMENDED_LENGTH
        )));
    }
    None
}
