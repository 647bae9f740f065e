//! Human-readable explanation of what drove an alert.
//!
//! Each category has a fixed, ordered checklist: its highest-weight triggers first, then the
//! remaining clinical flags. Only the triggers that hold for the patient are reported, always in
//! checklist order. Demographic points (age, sex, weight, race) that are not listed never appear,
//! so the fallback is only reached when a score is purely demographic.

use crate::alert::RiskCategory;
use crate::constants::{CREATININE_LIMIT, INR_LIMIT};
use crate::patient::PatientFactors;

/// Sentence used when none of the category's clinical triggers hold.
pub const FALLBACK_RATIONALE: &str =
    "Elevated risk is driven by demographic and baseline factors rather than a specific clinical trigger.";

type Check = (fn(&PatientFactors) -> bool, &'static str);

const BLEEDING_CHECKLIST: &[Check] = &[
    (|p| p.inr > INR_LIMIT, "INR above 3.5"),
    (|p| p.antibiotic_order, "new antibiotic order"),
    (
        |p| p.anticoagulant && p.antiplatelet,
        "concurrent anticoagulant and antiplatelet therapy",
    ),
    (|p| p.alcohol_use, "alcohol use"),
    (|p| p.gi_bleed_history, "history of GI bleed"),
    (|p| p.prior_stroke, "prior stroke/TIA"),
    (
        |p| p.anticoagulant && !p.antiplatelet,
        "anticoagulant therapy",
    ),
    (|p| p.liver_disease, "liver disease"),
    (|p| p.uncontrolled_bp, "uncontrolled blood pressure"),
    (|p| p.smoking, "smoking"),
    (|p| p.dietary_change, "dietary vitamin-K change"),
];

const HYPOGLYCEMIA_CHECKLIST: &[Check] = &[
    (|p| p.impaired_renal, "impaired renal status"),
    (|p| p.insulin_use, "insulin use"),
    (|p| p.recent_dka, "recent DKA/HHS admission"),
    (|p| p.high_hba1c, "HbA1c above target"),
    (|p| p.weight_kg < 60.0, "low body weight"),
    (|p| p.neuropathy_history, "history of neuropathy"),
];

const AKI_CHECKLIST: &[Check] = &[
    (|p| p.acei_arb_use, "ACEi/ARB therapy"),
    (|p| p.diuretic_use, "diuretic use"),
    (
        |p| p.baseline_creatinine > CREATININE_LIMIT,
        "baseline creatinine above 1.5 mg/dL",
    ),
    (|p| p.contrast_exposure, "recent contrast exposure"),
    (|p| p.active_chemo, "active chemotherapy"),
    (|p| p.age > 75, "age over 75"),
    (|p| p.uncontrolled_bp, "uncontrolled blood pressure"),
];

fn checklist(category: RiskCategory) -> &'static [Check] {
    match category {
        RiskCategory::Bleeding => BLEEDING_CHECKLIST,
        RiskCategory::Hypoglycemia => HYPOGLYCEMIA_CHECKLIST,
        RiskCategory::Aki => AKI_CHECKLIST,
    }
}

/// Returns the labels of the checklist triggers that hold, in checklist order.
pub fn contributing_factors(category: RiskCategory, p: &PatientFactors) -> Vec<&'static str> {
    checklist(category)
        .iter()
        .filter(|(holds, _)| holds(p))
        .map(|(_, label)| *label)
        .collect()
}

/// Explains which factors drove the given category's score.
///
/// # Returns
/// `"Primary drivers: a, b and c."` listing the triggers that hold, or
/// [`FALLBACK_RATIONALE`] when none do.
pub fn explain(category: RiskCategory, p: &PatientFactors) -> String {
    let factors = contributing_factors(category, p);
    match factors.split_last() {
        None => FALLBACK_RATIONALE.to_string(),
        Some((last, [])) => format!("Primary drivers: {last}."),
        Some((last, rest)) => format!("Primary drivers: {} and {last}.", rest.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patient::Gender;

    fn baseline() -> PatientFactors {
        PatientFactors::new(60, Gender::Male, 70.0)
    }

    #[test]
    fn test_explain_single_factor() {
        let p = PatientFactors {
            alcohol_use: true,
            ..baseline()
        };
        assert_eq!(
            explain(RiskCategory::Bleeding, &p),
            "Primary drivers: alcohol use."
        );
    }

    #[test]
    fn test_explain_keeps_checklist_order() {
        let p = PatientFactors {
            prior_stroke: true,
            inr: 4.1,
            gi_bleed_history: true,
            antibiotic_order: true,
            ..baseline()
        };
        assert_eq!(
            explain(RiskCategory::Bleeding, &p),
            "Primary drivers: INR above 3.5, new antibiotic order, history of GI bleed and prior stroke/TIA."
        );
    }

    #[test]
    fn test_anticoagulant_alone_is_not_the_combination() {
        let p = PatientFactors {
            anticoagulant: true,
            ..baseline()
        };
        assert_eq!(
            contributing_factors(RiskCategory::Bleeding, &p),
            vec!["anticoagulant therapy"]
        );

        let both = PatientFactors {
            antiplatelet: true,
            ..p
        };
        assert_eq!(
            contributing_factors(RiskCategory::Bleeding, &both),
            vec!["concurrent anticoagulant and antiplatelet therapy"]
        );
    }

    #[test]
    fn test_actionable_score_from_secondary_flags_names_them() {
        use crate::alert::AlertLevel;
        use crate::scoring::score_bleeding;

        let p = PatientFactors {
            anticoagulant: true,
            liver_disease: true,
            uncontrolled_bp: true,
            smoking: true,
            dietary_change: true,
            ..baseline()
        };
        assert_eq!(AlertLevel::for_score(score_bleeding(&p)), AlertLevel::High);

        let rationale = explain(RiskCategory::Bleeding, &p);
        assert_ne!(rationale, FALLBACK_RATIONALE);
        assert_eq!(
            rationale,
            "Primary drivers: anticoagulant therapy, liver disease, uncontrolled blood pressure, smoking and dietary vitamin-K change."
        );
    }

    #[test]
    fn test_neuropathy_and_blood_pressure_are_named() {
        let p = PatientFactors {
            neuropathy_history: true,
            uncontrolled_bp: true,
            ..baseline()
        };
        assert_eq!(
            contributing_factors(RiskCategory::Hypoglycemia, &p),
            vec!["history of neuropathy"]
        );
        assert_eq!(
            contributing_factors(RiskCategory::Aki, &p),
            vec!["uncontrolled blood pressure"]
        );
    }

    #[test]
    fn test_explain_falls_back_for_demographic_only_scores() {
        // Female, elderly, underweight: bleeding score without any checklist trigger.
        let p = PatientFactors::new(80, Gender::Female, 45.0);
        assert_eq!(explain(RiskCategory::Bleeding, &p), FALLBACK_RATIONALE);
    }

    #[test]
    fn test_explain_hypoglycemia_and_aki() {
        let p = PatientFactors {
            insulin_use: true,
            impaired_renal: true,
            ..PatientFactors::new(60, Gender::Male, 55.0)
        };
        assert_eq!(
            explain(RiskCategory::Hypoglycemia, &p),
            "Primary drivers: impaired renal status, insulin use and low body weight."
        );

        let k = PatientFactors {
            acei_arb_use: true,
            baseline_creatinine: 2.0,
            ..PatientFactors::new(80, Gender::Male, 70.0)
        };
        assert_eq!(
            explain(RiskCategory::Aki, &k),
            "Primary drivers: ACEi/ARB therapy, baseline creatinine above 1.5 mg/dL and age over 75."
        );
    }
}
