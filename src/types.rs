//! Strength report types returned by the analyzer.

use std::fmt;

/// Discrete strength score in `0..=4`.
///
/// Only the analyzer builds scores; values above [`StrengthScore::MAX`]
/// are clamped on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct StrengthScore(u8);

impl StrengthScore {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 4;

    pub(crate) fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Caps the score at `ceiling`.
    pub(crate) fn cap(self, ceiling: u8) -> Self {
        Self::new(self.0.min(ceiling))
    }

    /// Lowers the score by `amount`, floored at zero.
    pub(crate) fn lower(self, amount: u8) -> Self {
        Self::new(self.0.saturating_sub(amount))
    }

    pub fn label(&self) -> StrengthLabel {
        match self.0 {
            0 => StrengthLabel::Weak,
            1 => StrengthLabel::Fair,
            2 => StrengthLabel::Good,
            3 => StrengthLabel::Strong,
            _ => StrengthLabel::Ultra,
        }
    }
}

/// Human-readable verdict matching a [`StrengthScore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthLabel {
    /// Reserved for the empty input.
    Empty,
    Weak,
    Fair,
    Good,
    Strong,
    Ultra,
}

impl StrengthLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::Empty => "Empty",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Fair => "Fair",
            StrengthLabel::Good => "Good",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::Ultra => "Ultra",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single [`analyze_strength`](crate::analyze_strength) call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    pub score: StrengthScore,
    pub label: StrengthLabel,
    /// Entropy rounded to the nearest bit.
    pub entropy_bits: u32,
    /// Offline crack-time bucket, e.g. `"3 hours"` or `"Forever"`.
    pub crack_time: String,
    /// Remediation tips, in evaluation order.
    pub tips: Vec<String>,
}

impl StrengthReport {
    /// Report for the empty password.
    pub fn empty() -> Self {
        Self {
            score: StrengthScore::default(),
            label: StrengthLabel::Empty,
            entropy_bits: 0,
            crack_time: "0s".to_string(),
            tips: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_labels() {
        let labels: Vec<_> = (0..=4).map(|v| StrengthScore::new(v).label()).collect();
        assert_eq!(
            labels,
            vec![
                StrengthLabel::Weak,
                StrengthLabel::Fair,
                StrengthLabel::Good,
                StrengthLabel::Strong,
                StrengthLabel::Ultra,
            ]
        );
    }

    #[test]
    fn test_score_clamped_on_construction() {
        assert_eq!(StrengthScore::new(9).value(), StrengthScore::MAX);
    }

    #[test]
    fn test_score_lower_floors_at_zero() {
        assert_eq!(StrengthScore::new(0).lower(1).value(), 0);
        assert_eq!(StrengthScore::new(3).lower(1).value(), 2);
    }

    #[test]
    fn test_score_cap() {
        assert_eq!(StrengthScore::new(3).cap(1).value(), 1);
        assert_eq!(StrengthScore::new(0).cap(1).value(), 0);
    }

    #[test]
    fn test_empty_report() {
        let report = StrengthReport::empty();
        assert_eq!(report.score.value(), 0);
        assert_eq!(report.label.to_string(), "Empty");
        assert_eq!(report.entropy_bits, 0);
        assert_eq!(report.crack_time, "0s");
        assert!(report.tips.is_empty());
    }
}
