//! Password strength analyzer - main analysis logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::entropy::crack_time;
use crate::sections::{
    keyboard_pattern_section, length_section, numbers_section, short_letters_section,
    symbols_section, uppercase_section, Adjustment, Sample, Section,
};
use crate::types::{StrengthReport, StrengthScore};

/// Analyzes a password and returns its strength report.
///
/// Pure: the same password always yields the same report. The empty
/// password short-circuits to [`StrengthReport::empty`].
pub fn analyze_strength(password: &SecretString) -> StrengthReport {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return StrengthReport::empty();
    }

    let sample = Sample::measure(pwd);
    let pool_size = sample.profile.pool_size();
    let mut score = base_score(sample.entropy);
    let mut tips = Vec::new();

    // Orchestrator: tips and adjustments are applied in section order
    let sections: [(&str, Section); 6] = [
        ("length", length_section),
        ("uppercase", uppercase_section),
        ("numbers", numbers_section),
        ("symbols", symbols_section),
        ("short_letters", short_letters_section),
        ("keyboard", keyboard_pattern_section),
    ];

    for (_section_name, section_fn) in sections {
        let Some(finding) = section_fn(&sample) else {
            continue;
        };

        #[cfg(feature = "tracing")]
        tracing::trace!("analysis section flagged: {}", _section_name);

        if let Some(tip) = finding.tip {
            tips.push(tip);
        }
        score = match finding.adjustment {
            Some(Adjustment::Cap(ceiling)) => score.cap(ceiling),
            Some(Adjustment::Lower(amount)) => score.lower(amount),
            None => score,
        };
    }

    let crack_time = crack_time(pool_size, sample.profile.length);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        score = score.value(),
        pool_size,
        crack_time = %crack_time,
        "password analyzed"
    );

    StrengthReport {
        score,
        label: score.label(),
        entropy_bits: sample.entropy.round() as u32,
        crack_time,
        tips,
    }
}

/// Maps unrounded entropy to the 0..=4 score scale.
fn base_score(entropy: f64) -> StrengthScore {
    let value = match entropy {
        e if e > 128.0 => 4,
        e if e > 80.0 => 3,
        e if e > 60.0 => 2,
        e if e > 35.0 => 1,
        _ => 0,
    };
    StrengthScore::new(value)
}

/// Async version that debounces, then sends the report via channel.
///
/// Nothing is sent if `token` is cancelled during the debounce window.
#[cfg(feature = "async")]
pub async fn analyze_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthReport>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("analysis is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("analysis cancelled before start");
        return;
    }

    let report = analyze_strength(password);

    if let Err(_e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send strength report: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StrengthLabel;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_analyze_empty_password() {
        let report = analyze_strength(&secret(""));
        assert_eq!(report, StrengthReport::empty());
        assert_eq!(report.label, StrengthLabel::Empty);
        assert_eq!(report.crack_time, "0s");
    }

    #[test]
    fn test_analyze_ten_lowercase() {
        let report = analyze_strength(&secret("aaaaaaaaaa"));

        assert_eq!(report.entropy_bits, 47);
        assert_eq!(report.score.value(), 1);
        assert_eq!(report.label, StrengthLabel::Fair);
        assert_eq!(report.crack_time, "4 hours");
        assert_eq!(report.tips.len(), 3);
        assert!(report.tips[0].contains("uppercase"));
        assert!(report.tips[1].contains("numbers"));
        assert!(report.tips[2].contains("symbols"));
    }

    #[test]
    fn test_analyze_troubador() {
        let report = analyze_strength(&secret("Tr0ub4dor&3"));

        assert_eq!(report.entropy_bits, 72);
        assert_eq!(report.score.value(), 2);
        assert_eq!(report.label, StrengthLabel::Good);
        assert_eq!(report.crack_time, "Forever");
        assert_eq!(report.tips.len(), 1);
        assert!(report.tips[0].contains("12+"));
    }

    #[test]
    fn test_analyze_short_letters_capped() {
        // 9 mixed-case letters: 9 * log2(52) ≈ 51 bits -> base 1, cap keeps 1
        let report = analyze_strength(&secret("AbCdEfGhI"));
        assert_eq!(report.score.value(), 1);
        assert!(report.tips[0].contains("12+"));
    }

    #[test]
    fn test_analyze_long_letters_not_capped() {
        // 30 mixed-case letters: ≈ 171 bits
        let report = analyze_strength(&secret("AbCdEfGhIjKlMnOpQrStUvWxYzAbCd"));
        assert_eq!(report.score.value(), 4);
        assert_eq!(report.label, StrengthLabel::Ultra);
    }

    #[test]
    fn test_analyze_keyboard_pattern_lowers_score() {
        // 20 chars, pool 94: ≈ 131 bits -> base 4, minus one
        let report = analyze_strength(&secret("Qwerty!9Qwerty!9abcd"));
        assert_eq!(report.score.value(), 3);
        assert_eq!(report.label, StrengthLabel::Strong);
        assert!(report.tips.last().unwrap().contains("keyboard"));
    }

    #[test]
    fn test_analyze_keyboard_pattern_floors_at_zero() {
        let report = analyze_strength(&secret("123"));
        assert_eq!(report.score.value(), 0);
        assert_eq!(report.label, StrengthLabel::Weak);
        assert_eq!(report.crack_time, "Instant");
        assert!(report.tips.iter().any(|t| t.contains("keyboard")));
    }

    #[test]
    fn test_analyze_qwerty_capped_then_lowered() {
        // letters-only, 6 chars: base 0, cap 1 keeps 0, penalty floors at 0
        let report = analyze_strength(&secret("QWERTY"));
        assert_eq!(report.score.value(), 0);
        assert_eq!(report.tips.last().unwrap(), "Avoid common keyboard patterns like 'qwerty' or '123'.");
    }

    #[test]
    fn test_base_score_thresholds() {
        assert_eq!(base_score(35.0).value(), 0);
        assert_eq!(base_score(35.1).value(), 1);
        assert_eq!(base_score(60.0).value(), 1);
        assert_eq!(base_score(60.5).value(), 2);
        assert_eq!(base_score(80.5).value(), 3);
        assert_eq!(base_score(128.0).value(), 3);
        assert_eq!(base_score(128.5).value(), 4);
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let pwd = secret("correct-horse-Battery-9");
        assert_eq!(analyze_strength(&pwd), analyze_strength(&pwd));
    }

    #[test]
    fn test_score_always_matches_label() {
        for pwd in ["a", "Password1", "p@ss", "zxcvbnmasdfghjkl!Q9", "qwerty123456"] {
            let report = analyze_strength(&secret(pwd));
            assert!(report.score.value() <= StrengthScore::MAX);
            assert_eq!(report.label, report.score.label());
        }
    }
}
