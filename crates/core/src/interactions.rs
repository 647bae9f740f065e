//! Static drug-drug interaction table.
//!
//! Lookups are by unordered name pair. Names are normalised through [`DrugName`] so case and
//! surrounding whitespace never matter. Every description starts with its severity word
//! (`Major` or `Moderate`); display layers classify results by substring match on those words,
//! so new entries must keep that prefix.

use crate::constants::NO_INTERACTION;
use ade_types::DrugName;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum InteractionSeverity {
    Moderate,
    Major,
}

impl InteractionSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionSeverity::Moderate => "Moderate",
            InteractionSeverity::Major => "Major",
        }
    }
}

impl std::fmt::Display for InteractionSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A known interaction between two (already normalised) drug names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InteractionRecord {
    pub drug_a: &'static str,
    pub drug_b: &'static str,
    pub description: &'static str,
}

impl InteractionRecord {
    fn matches(&self, a: &DrugName, b: &DrugName) -> bool {
        (self.drug_a == a.as_str() && self.drug_b == b.as_str())
            || (self.drug_a == b.as_str() && self.drug_b == a.as_str())
    }

    pub fn severity(&self) -> Option<InteractionSeverity> {
        classify_interaction(self.description)
    }
}

const fn record(
    drug_a: &'static str,
    drug_b: &'static str,
    description: &'static str,
) -> InteractionRecord {
    InteractionRecord {
        drug_a,
        drug_b,
        description,
    }
}

pub const INTERACTIONS: &[InteractionRecord] = &[
    record(
        "warfarin",
        "amiodarone",
        "Major: Amiodarone increases INR, high bleeding risk.",
    ),
    record(
        "warfarin",
        "ibuprofen",
        "Major: NSAIDs increase bleeding risk with Warfarin.",
    ),
    record(
        "lisinopril",
        "spironolactone",
        "Major: Risk of severe hyperkalemia.",
    ),
    record(
        "ibuprofen",
        "lisinopril",
        "Major: Severe AKI risk (Triple Whammy).",
    ),
    record(
        "warfarin",
        "aspirin",
        "Major: Combined anticoagulant and antiplatelet effect, high bleeding risk.",
    ),
    record(
        "simvastatin",
        "amiodarone",
        "Major: Raised statin exposure, risk of myopathy and rhabdomyolysis.",
    ),
    record(
        "insulin",
        "propranolol",
        "Moderate: Beta-blockade may mask hypoglycemia symptoms.",
    ),
    record(
        "lisinopril",
        "furosemide",
        "Moderate: Additive hypotension, monitor renal function.",
    ),
];

/// Finds the table entry for an unordered pair, if any.
pub fn find_interaction(drug_a: &str, drug_b: &str) -> Option<&'static InteractionRecord> {
    let (a, b) = match (DrugName::new(drug_a), DrugName::new(drug_b)) {
        (Ok(a), Ok(b)) => (a, b),
        _ => return None,
    };
    INTERACTIONS.iter().find(|r| r.matches(&a, &b))
}

/// Looks up the interaction description for two drug names in either order.
///
/// Unknown pairs, and blank names, yield `"No major interaction found."`.
pub fn lookup_interaction(drug_a: &str, drug_b: &str) -> &'static str {
    find_interaction(drug_a, drug_b)
        .map(|r| r.description)
        .unwrap_or(NO_INTERACTION)
}

/// Classifies a lookup result the way display layers do: by the literal severity word.
pub fn classify_interaction(text: &str) -> Option<InteractionSeverity> {
    if text.contains("Major") {
        Some(InteractionSeverity::Major)
    } else if text.contains("Moderate") {
        Some(InteractionSeverity::Moderate)
    } else {
        None
    }
}
