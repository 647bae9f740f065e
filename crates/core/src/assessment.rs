//! One-shot assessment of a patient snapshot.
//!
//! Combines the four scorers, primary-threat selection, alert level and rationale into a single
//! value that collaborators can render or serialise.

use crate::alert::{select_primary, AlertLevel, RiskCategory};
use crate::config::ScoringPolicy;
use crate::constants::MANAGEABLE_SUMMARY;
use crate::patient::PatientFactors;
use crate::rationale::explain;
use crate::scoring::{score_all, RiskScores};
use ade_types::RiskScore;
use serde::{Deserialize, Serialize};

/// The primary threat for a snapshot and why it was raised.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertResult {
    pub category: RiskCategory,
    pub score: RiskScore,
    pub level: AlertLevel,
    pub rationale: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub scores: RiskScores,
    pub primary: AlertResult,
}

impl Assessment {
    /// True when no category reaches the actionable threshold.
    pub fn is_manageable(&self) -> bool {
        !self.primary.level.is_actionable()
    }

    /// One-line summary suitable for a banner.
    pub fn summary(&self) -> String {
        if self.is_manageable() {
            MANAGEABLE_SUMMARY.to_string()
        } else {
            format!(
                "{} ALERT: {} risk at {}.",
                self.primary.level, self.primary.category, self.primary.score
            )
        }
    }

    /// Alert level for each selectable category, in priority order.
    pub fn category_levels(&self) -> [(RiskCategory, AlertLevel); 3] {
        RiskCategory::PRIORITY.map(|c| (c, AlertLevel::for_score(self.score_for(c))))
    }

    pub fn score_for(&self, category: RiskCategory) -> RiskScore {
        match category {
            RiskCategory::Bleeding => self.scores.bleeding,
            RiskCategory::Hypoglycemia => self.scores.hypoglycemia,
            RiskCategory::Aki => self.scores.aki,
        }
    }
}

/// Scores a snapshot and selects its primary threat.
///
/// # Arguments
///
/// * `factors` - The patient snapshot to score.
/// * `policy` - Scoring policy resolved at startup.
///
/// # Returns
///
/// An `Assessment` holding all four scores and the primary alert. The rationale is generated
/// for the primary category even when it is below the actionable threshold.
pub fn assess(factors: &PatientFactors, policy: &ScoringPolicy) -> Assessment {
    let scores = score_all(factors, policy);
    let (category, score) = select_primary(scores.bleeding, scores.hypoglycemia, scores.aki);
    let level = AlertLevel::for_score(score);

    tracing::debug!(
        bleeding = scores.bleeding.value(),
        hypoglycemia = scores.hypoglycemia.value(),
        aki = scores.aki.value(),
        fragility = scores.fragility.value(),
        primary = %category,
        %level,
        "assessed patient snapshot"
    );

    Assessment {
        scores,
        primary: AlertResult {
            category,
            score,
            level,
            rationale: explain(category, factors),
        },
    }
}
