//! Additive weighted-rule scorers.
//!
//! Each scorer starts at zero, adds a fixed weight for every condition that holds, and clamps the
//! sum to 100. There is no partial credit and no interaction between conditions: toggling one
//! condition changes the raw sum by exactly its weight.

use crate::config::ScoringPolicy;
use crate::constants::{CREATININE_LIMIT, INR_LIMIT};
use crate::patient::{Gender, PatientFactors, Race};
use ade_types::RiskScore;
use serde::{Deserialize, Serialize};

pub mod weights {
    //! Canonical weight table.

    pub mod bleeding {
        pub const ANTICOAGULANT: u32 = 35;
        pub const HIGH_INR: u32 = 40;
        pub const GI_BLEED_HISTORY: u32 = 30;
        pub const ANTIPLATELET: u32 = 15;
        pub const ANTIBIOTIC_ORDER: u32 = 25;
        pub const ALCOHOL_USE: u32 = 15;
        pub const LIVER_DISEASE: u32 = 20;
        pub const DIETARY_CHANGE: u32 = 10;
        pub const AGE_OVER_70: u32 = 10;
        pub const UNCONTROLLED_BP: u32 = 10;
        pub const SMOKING: u32 = 10;
        pub const FEMALE: u32 = 5;
        pub const EXTREME_WEIGHT: u32 = 15;
        pub const PRIOR_STROKE: u32 = 15;
    }

    pub mod hypoglycemia {
        pub const INSULIN: u32 = 30;
        pub const IMPAIRED_RENAL: u32 = 45;
        pub const HIGH_HBA1C: u32 = 20;
        pub const NEUROPATHY_HISTORY: u32 = 10;
        pub const LOW_WEIGHT: u32 = 10;
        pub const RECENT_DKA: u32 = 20;
    }

    pub mod aki {
        pub const DIURETIC: u32 = 30;
        pub const ACEI_ARB: u32 = 40;
        pub const CONTRAST_EXPOSURE: u32 = 25;
        pub const AGE_OVER_75: u32 = 20;
        pub const UNCONTROLLED_BP: u32 = 10;
        pub const ACTIVE_CHEMO: u32 = 20;
        pub const NON_HISPANIC_BLACK: u32 = 15;
        pub const HIGH_CREATININE: u32 = 30;
    }

    pub mod fragility {
        pub const PRIOR_STROKE: u32 = 25;
        pub const ACTIVE_CHEMO: u32 = 30;
        pub const RECENT_DKA: u32 = 20;
        pub const LIVER_DISEASE: u32 = 15;
        pub const SMOKING: u32 = 10;
        pub const UNCONTROLLED_BP: u32 = 10;
    }
}

/// Running sum of the weights whose condition held.
#[derive(Default)]
struct Tally(u32);

impl Tally {
    fn add(&mut self, condition: bool, weight: u32) -> &mut Self {
        if condition {
            self.0 = self.0.saturating_add(weight);
        }
        self
    }

    fn finish(&self) -> RiskScore {
        RiskScore::saturating(self.0)
    }
}

/// All four scores computed from one snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskScores {
    pub bleeding: RiskScore,
    pub hypoglycemia: RiskScore,
    pub aki: RiskScore,
    pub fragility: RiskScore,
}

/// Bleeding risk.
///
/// Weights: anticoagulant +35, INR > 3.5 +40, GI bleed history +30, antiplatelet +15,
/// new antibiotic order +25, alcohol use +15, liver disease +20, dietary vitamin-K change +10,
/// age > 70 +10, uncontrolled BP +10, smoking +10, female +5, weight > 120 kg or < 50 kg +15,
/// prior stroke/TIA +15.
pub fn score_bleeding(p: &PatientFactors) -> RiskScore {
    use weights::bleeding::*;

    Tally::default()
        .add(p.anticoagulant, ANTICOAGULANT)
        .add(p.inr > INR_LIMIT, HIGH_INR)
        .add(p.gi_bleed_history, GI_BLEED_HISTORY)
        .add(p.antiplatelet, ANTIPLATELET)
        .add(p.antibiotic_order, ANTIBIOTIC_ORDER)
        .add(p.alcohol_use, ALCOHOL_USE)
        .add(p.liver_disease, LIVER_DISEASE)
        .add(p.dietary_change, DIETARY_CHANGE)
        .add(p.age > 70, AGE_OVER_70)
        .add(p.uncontrolled_bp, UNCONTROLLED_BP)
        .add(p.smoking, SMOKING)
        .add(p.gender == Gender::Female, FEMALE)
        .add(p.weight_kg > 120.0 || p.weight_kg < 50.0, EXTREME_WEIGHT)
        .add(p.prior_stroke, PRIOR_STROKE)
        .finish()
}

/// Hypoglycemia risk.
///
/// Weights: insulin +30, impaired renal status +45, high HbA1c +20, neuropathy history +10,
/// weight < 60 kg +10, recent DKA/HHS admission +20. Gender is not a factor.
pub fn score_hypoglycemia(p: &PatientFactors) -> RiskScore {
    use weights::hypoglycemia::*;

    Tally::default()
        .add(p.insulin_use, INSULIN)
        .add(p.impaired_renal, IMPAIRED_RENAL)
        .add(p.high_hba1c, HIGH_HBA1C)
        .add(p.neuropathy_history, NEUROPATHY_HISTORY)
        .add(p.weight_kg < 60.0, LOW_WEIGHT)
        .add(p.recent_dka, RECENT_DKA)
        .finish()
}

/// Acute kidney injury risk.
///
/// Weights: diuretic +30, ACEi/ARB +40, recent contrast exposure +25, age > 75 +20,
/// uncontrolled BP +10, active chemotherapy +20, baseline creatinine > 1.5 mg/dL +30, and
/// Non-Hispanic Black +15 when `policy.race_adjustment` is set. Gender and weight are not
/// factors.
pub fn score_aki(p: &PatientFactors, policy: &ScoringPolicy) -> RiskScore {
    use weights::aki::*;

    Tally::default()
        .add(p.diuretic_use, DIURETIC)
        .add(p.acei_arb_use, ACEI_ARB)
        .add(p.contrast_exposure, CONTRAST_EXPOSURE)
        .add(p.age > 75, AGE_OVER_75)
        .add(p.uncontrolled_bp, UNCONTROLLED_BP)
        .add(p.active_chemo, ACTIVE_CHEMO)
        .add(
            policy.race_adjustment && p.race == Race::NonHispanicBlack,
            NON_HISPANIC_BLACK,
        )
        .add(p.baseline_creatinine > CREATININE_LIMIT, HIGH_CREATININE)
        .finish()
}

/// Comorbidity/fragility index.
///
/// Weights: prior stroke +25, active chemotherapy +30, recent DKA +20, liver disease +15,
/// smoking +10, uncontrolled BP +10.
pub fn score_fragility(p: &PatientFactors) -> RiskScore {
    use weights::fragility::*;

    Tally::default()
        .add(p.prior_stroke, PRIOR_STROKE)
        .add(p.active_chemo, ACTIVE_CHEMO)
        .add(p.recent_dka, RECENT_DKA)
        .add(p.liver_disease, LIVER_DISEASE)
        .add(p.smoking, SMOKING)
        .add(p.uncontrolled_bp, UNCONTROLLED_BP)
        .finish()
}

pub fn score_all(p: &PatientFactors, policy: &ScoringPolicy) -> RiskScores {
    RiskScores {
        bleeding: score_bleeding(p),
        hypoglycemia: score_hypoglycemia(p),
        aki: score_aki(p, policy),
        fragility: score_fragility(p),
    }
}
