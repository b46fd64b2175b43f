//! Completion counts and the one-decimal percentage shown in reports.
use std::fmt;

use serde::{Serialize, Serializer};

/// A completion ratio in tenths of a percent, or undefined for an empty total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Percentage {
    Tenths(u64),
    NotApplicable,
}

impl Percentage {
    /// `part / whole * 100` rounded half-up to one decimal, clamped to 100.
    /// `whole == 0` is `NotApplicable`.
    pub fn of(part: usize, whole: usize) -> Self {
        if whole == 0 {
            return Percentage::NotApplicable;
        }
        let (part, whole) = (part as u64, whole as u64);
        let tenths = (part * 2000 + whole) / (2 * whole);
        Percentage::Tenths(tenths.min(1000))
    }

    /// Same as [`Percentage::of`] but an empty total reads as `0.0`.
    pub fn of_or_zero(part: usize, whole: usize) -> Self {
        match Self::of(part, whole) {
            Percentage::NotApplicable => Percentage::Tenths(0),
            value => value,
        }
    }

    /// `"33.3"` or `"N/A"`.
    pub fn as_string(&self) -> String {
        match self {
            Percentage::Tenths(tenths) => format!("{}.{}", tenths / 10, tenths % 10),
            Percentage::NotApplicable => "N/A".to_string(),
        }
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Percentage::Tenths(_) => write!(f, "{}%", self.as_string()),
            Percentage::NotApplicable => f.write_str("N/A"),
        }
    }
}

impl Serialize for Percentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_string())
    }
}

/// Aggregate counts for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressStats {
    pub total: usize,
    pub translated: usize,
    pub remaining: usize,
    pub percentage: Percentage,
}

impl ProgressStats {
    pub fn compute(total: usize, translated: usize) -> Self {
        Self {
            total,
            translated,
            remaining: total.saturating_sub(translated),
            percentage: Percentage::of(translated, total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_rounds_to_one_decimal() {
        assert_eq!(Percentage::of(1, 3).as_string(), "33.3");
        assert_eq!(Percentage::of(2, 3).as_string(), "66.7");
        assert_eq!(Percentage::of(0, 3).as_string(), "0.0");
        assert_eq!(Percentage::of(3, 3).as_string(), "100.0");
        assert_eq!(Percentage::of(1, 3).to_string(), "33.3%");
    }

    #[test]
    fn exact_ties_round_up() {
        assert_eq!(Percentage::of(1, 400).as_string(), "0.3");
        assert_eq!(Percentage::of(5, 400).as_string(), "1.3");
        assert_eq!(Percentage::of(2, 800).as_string(), "0.3");
        assert_eq!(Percentage::of(1, 8).as_string(), "12.5");
        assert_eq!(Percentage::of(1, 2000).to_string(), "0.1%");
    }

    #[test]
    fn empty_total_is_not_applicable() {
        assert_eq!(Percentage::of(0, 0), Percentage::NotApplicable);
        assert_eq!(Percentage::of(0, 0).to_string(), "N/A");
        assert_eq!(Percentage::of_or_zero(0, 0).as_string(), "0.0");
    }

    #[test]
    fn extraneous_translations_stay_within_bounds() {
        let stats = ProgressStats::compute(2, 5);
        assert_eq!(stats.remaining, 0);
        assert_eq!(stats.percentage.as_string(), "100.0");
    }

    #[test]
    fn empty_translated_directory() {
        let stats = ProgressStats::compute(3, 0);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.translated, 0);
        assert_eq!(stats.remaining, 3);
        assert_eq!(stats.percentage.as_string(), "0.0");
    }

    #[test]
    fn percentage_serializes_as_string() {
        let json = serde_json::to_value(ProgressStats::compute(3, 1)).expect("serialize");
        assert_eq!(json["percentage"], "33.3");
        let json = serde_json::to_value(ProgressStats::compute(0, 0)).expect("serialize");
        assert_eq!(json["percentage"], "N/A");
    }
}
