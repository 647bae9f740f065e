//! JSON request and response bodies.
//!
//! Field names follow the wire format the dashboard collaborator already sends, so they are
//! deliberately terser than the `PatientFactors` field names they map onto.

use ade_core::{
    classify_interaction, Assessment, DEFAULT_BASELINE_CREATININE, DEFAULT_INR,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

fn default_race() -> String {
    "Other".into()
}

fn default_inr() -> f64 {
    DEFAULT_INR
}

fn default_baseline_creat() -> f64 {
    DEFAULT_BASELINE_CREATININE
}

/// Patient factors as submitted by a form or HTTP client.
///
/// `age`, `gender` and `weight` are required; everything else defaults to a neutral value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CalculateReq {
    /// Years, 18 to 100.
    pub age: u32,
    /// "Male" or "Female".
    pub gender: String,
    /// Kilograms.
    pub weight: f64,
    /// Centimetres; not used by scoring.
    #[serde(default)]
    pub height: Option<f64>,
    /// "Non-Hispanic Black" or "Other".
    #[serde(default = "default_race")]
    pub race: String,
    #[serde(default = "default_inr")]
    pub inr: f64,
    /// mg/dL
    #[serde(default = "default_baseline_creat")]
    pub baseline_creat: f64,
    #[serde(default)]
    pub antibiotic_order: bool,
    #[serde(default)]
    pub dietary_change: bool,
    #[serde(default)]
    pub contrast_exposure: bool,
    #[serde(default)]
    pub on_anticoag: bool,
    #[serde(default)]
    pub on_antiplatelet: bool,
    #[serde(default)]
    pub on_insulin: bool,
    #[serde(default)]
    pub on_diuretic: bool,
    #[serde(default)]
    pub on_acei_arb: bool,
    #[serde(default)]
    pub prior_stroke: bool,
    #[serde(default)]
    pub hist_gi_bleed: bool,
    #[serde(default)]
    pub uncontrolled_bp: bool,
    #[serde(default)]
    pub smoking_calc: bool,
    #[serde(default)]
    pub alcohol_use: bool,
    #[serde(default)]
    pub liver_disease: bool,
    #[serde(default)]
    pub high_hba1c: bool,
    #[serde(default)]
    pub neuropathy_history: bool,
    #[serde(default)]
    pub impaired_renal: bool,
    #[serde(default)]
    pub recent_dka: bool,
    #[serde(default)]
    pub active_chemo: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CalculateRes {
    pub bleeding_risk: u8,
    pub hypoglycemic_risk: u8,
    pub aki_risk: u8,
    pub fragility_index: u8,
    /// "Bleeding", "Hypoglycemia" or "AKI".
    pub primary_alert: String,
    pub primary_score: u8,
    /// "CRITICAL", "HIGH" or "MANAGEABLE".
    pub alert_level: String,
    pub rationale: String,
}

impl From<&Assessment> for CalculateRes {
    fn from(a: &Assessment) -> Self {
        Self {
            bleeding_risk: a.scores.bleeding.value(),
            hypoglycemic_risk: a.scores.hypoglycemia.value(),
            aki_risk: a.scores.aki.value(),
            fragility_index: a.scores.fragility.value(),
            primary_alert: a.primary.category.to_string(),
            primary_score: a.primary.score.value(),
            alert_level: a.primary.level.to_string(),
            rationale: a.primary.rationale.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InteractionReq {
    pub drug1: String,
    pub drug2: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InteractionRes {
    pub result: String,
    /// "Major", "Moderate", or null when no interaction is known.
    pub severity: Option<String>,
}

impl InteractionRes {
    pub fn from_lookup(result: &str) -> Self {
        Self {
            result: result.to_string(),
            severity: classify_interaction(result).map(|s| s.to_string()),
        }
    }
}
