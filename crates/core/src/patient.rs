//! Patient factor snapshot and the demographic enums it carries.
//!
//! A `PatientFactors` value is built fresh for every assessment by whichever collaborator
//! collected the inputs (form, HTTP request, CLI flags). Every field is independently settable;
//! nothing in this module validates ranges, that is the collaborator's job.

use crate::constants::{DEFAULT_BASELINE_CREATININE, DEFAULT_INR};
use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl FromStr for Gender {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(CoreError::UnknownGender(s.to_string())),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Race/ethnicity as captured by the intake form.
///
/// Only used by the AKI scorer, and only when the scoring policy keeps the race adjustment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Race {
    #[serde(rename = "Non-Hispanic Black")]
    NonHispanicBlack,
    #[default]
    Other,
}

impl Race {
    pub fn as_str(&self) -> &'static str {
        match self {
            Race::NonHispanicBlack => "Non-Hispanic Black",
            Race::Other => "Other",
        }
    }
}

impl FromStr for Race {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let normalised = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        match normalised.as_str() {
            "non hispanic black" => Ok(Race::NonHispanicBlack),
            "other" => Ok(Race::Other),
            _ => Err(CoreError::UnknownRace(s.to_string())),
        }
    }
}

impl std::fmt::Display for Race {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One patient's demographic and clinical inputs at a point in time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatientFactors {
    pub age: u32,
    pub gender: Gender,
    pub race: Race,
    pub weight_kg: f64,
    /// Captured for display only; no scorer reads it.
    pub height_cm: Option<f64>,
    pub inr: f64,
    /// mg/dL
    pub baseline_creatinine: f64,

    pub anticoagulant: bool,
    pub antiplatelet: bool,
    pub gi_bleed_history: bool,
    pub uncontrolled_bp: bool,
    pub smoking: bool,
    pub alcohol_use: bool,
    pub antibiotic_order: bool,
    /// Significant dietary vitamin-K change.
    pub dietary_change: bool,
    pub liver_disease: bool,
    /// Prior stroke or TIA.
    pub prior_stroke: bool,

    pub insulin_use: bool,
    /// HbA1c above target (poor glycaemic control).
    pub high_hba1c: bool,
    pub neuropathy_history: bool,
    pub impaired_renal: bool,
    /// Recent DKA/HHS admission.
    pub recent_dka: bool,

    pub diuretic_use: bool,
    pub acei_arb_use: bool,
    pub active_chemo: bool,
    /// Recent contrast dye exposure.
    pub contrast_exposure: bool,
}

impl PatientFactors {
    /// Creates a snapshot with the neutral defaults for everything except the three required
    /// demographics.
    ///
    /// Defaults: race `Other`, INR 1.0, baseline creatinine 0.9 mg/dL, no height, and every
    /// clinical flag `false`.
    pub fn new(age: u32, gender: Gender, weight_kg: f64) -> Self {
        Self {
            age,
            gender,
            race: Race::Other,
            weight_kg,
            height_cm: None,
            inr: DEFAULT_INR,
            baseline_creatinine: DEFAULT_BASELINE_CREATININE,
            anticoagulant: false,
            antiplatelet: false,
            gi_bleed_history: false,
            uncontrolled_bp: false,
            smoking: false,
            alcohol_use: false,
            antibiotic_order: false,
            dietary_change: false,
            liver_disease: false,
            prior_stroke: false,
            insulin_use: false,
            high_hba1c: false,
            neuropathy_history: false,
            impaired_renal: false,
            recent_dka: false,
            diuretic_use: false,
            acei_arb_use: false,
            active_chemo: false,
            contrast_exposure: false,
        }
    }
}
