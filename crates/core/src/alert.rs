//! Primary-threat selection and alert levels.

use crate::constants::{ACTIONABLE_THRESHOLD, CRITICAL_THRESHOLD};
use ade_types::RiskScore;
use serde::{Deserialize, Serialize};

/// The adverse drug event categories that can raise a primary alert.
///
/// Declaration order is the tie-break priority used by [`select_primary`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    Bleeding,
    Hypoglycemia,
    #[serde(rename = "AKI")]
    Aki,
}

impl RiskCategory {
    /// Categories in tie-break priority order.
    pub const PRIORITY: [RiskCategory; 3] = [
        RiskCategory::Bleeding,
        RiskCategory::Hypoglycemia,
        RiskCategory::Aki,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Bleeding => "Bleeding",
            RiskCategory::Hypoglycemia => "Hypoglycemia",
            RiskCategory::Aki => "AKI",
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertLevel {
    /// Below the actionable threshold; monitoring is sufficient.
    Manageable,
    High,
    Critical,
}

impl AlertLevel {
    /// Classifies a score: `>= 90` is critical, `>= 70` is high, anything lower is manageable.
    pub fn for_score(score: RiskScore) -> Self {
        let value = score.value();
        if value >= CRITICAL_THRESHOLD {
            AlertLevel::Critical
        } else if value >= ACTIONABLE_THRESHOLD {
            AlertLevel::High
        } else {
            AlertLevel::Manageable
        }
    }

    pub fn is_actionable(&self) -> bool {
        matches!(self, AlertLevel::High | AlertLevel::Critical)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Manageable => "MANAGEABLE",
            AlertLevel::High => "HIGH",
            AlertLevel::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Picks the category with the highest score.
///
/// Ties go to the first category in [`RiskCategory::PRIORITY`] whose score equals the maximum,
/// so `(70, 70, 0)` always yields `Bleeding`.
pub fn select_primary(
    bleeding: RiskScore,
    hypoglycemia: RiskScore,
    aki: RiskScore,
) -> (RiskCategory, RiskScore) {
    let candidates = [
        (RiskCategory::Bleeding, bleeding),
        (RiskCategory::Hypoglycemia, hypoglycemia),
        (RiskCategory::Aki, aki),
    ];

    // A later candidate only replaces the current pick when strictly greater.
    candidates
        .into_iter()
        .fold(candidates[0], |best, next| if next.1 > best.1 { next } else { best })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: u32) -> RiskScore {
        RiskScore::saturating(v)
    }

    #[test]
    fn test_select_primary_picks_strict_maximum() {
        assert_eq!(
            select_primary(s(10), s(20), s(85)),
            (RiskCategory::Aki, s(85))
        );
        assert_eq!(
            select_primary(s(10), s(75), s(30)),
            (RiskCategory::Hypoglycemia, s(75))
        );
    }

    #[test]
    fn test_select_primary_tie_prefers_bleeding_over_hypoglycemia() {
        assert_eq!(
            select_primary(s(70), s(70), s(0)),
            (RiskCategory::Bleeding, s(70))
        );
    }

    #[test]
    fn test_select_primary_tie_prefers_hypoglycemia_over_aki() {
        assert_eq!(
            select_primary(s(10), s(60), s(60)),
            (RiskCategory::Hypoglycemia, s(60))
        );
    }

    #[test]
    fn test_select_primary_all_zero_is_bleeding() {
        assert_eq!(
            select_primary(s(0), s(0), s(0)),
            (RiskCategory::Bleeding, s(0))
        );
    }

    #[test]
    fn test_alert_level_boundaries() {
        assert_eq!(AlertLevel::for_score(s(69)), AlertLevel::Manageable);
        assert_eq!(AlertLevel::for_score(s(70)), AlertLevel::High);
        assert_eq!(AlertLevel::for_score(s(89)), AlertLevel::High);
        assert_eq!(AlertLevel::for_score(s(90)), AlertLevel::Critical);
        assert_eq!(AlertLevel::for_score(s(100)), AlertLevel::Critical);
    }

    #[test]
    fn test_actionable_levels() {
        assert!(!AlertLevel::Manageable.is_actionable());
        assert!(AlertLevel::High.is_actionable());
        assert!(AlertLevel::Critical.is_actionable());
    }

    #[test]
    fn test_category_display_names() {
        assert_eq!(RiskCategory::Aki.to_string(), "AKI");
        assert_eq!(
            serde_json::to_string(&RiskCategory::Aki).unwrap(),
            "\"AKI\""
        );
        assert_eq!(
            serde_json::to_string(&AlertLevel::Critical).unwrap(),
            "\"CRITICAL\""
        );
    }
}
