//! Boundary validation.
//!
//! The scorers are total over any numeric input, so range checks happen here, where a request
//! is turned into a `PatientFactors` snapshot. Limits mirror the intake form.

use crate::types::CalculateReq;
use ade_core::{CoreError, Gender, PatientFactors, Race};

pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 100;

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type RequestResult<T> = std::result::Result<T, RequestError>;

fn require_finite(name: &str, value: f64) -> RequestResult<()> {
    if !value.is_finite() {
        return Err(RequestError::InvalidInput(format!(
            "{name} must be a finite number"
        )));
    }
    Ok(())
}

fn require_non_negative(name: &str, value: f64) -> RequestResult<()> {
    require_finite(name, value)?;
    if value < 0.0 {
        return Err(RequestError::InvalidInput(format!(
            "{name} cannot be negative"
        )));
    }
    Ok(())
}

fn require_positive(name: &str, value: f64) -> RequestResult<()> {
    require_finite(name, value)?;
    if value <= 0.0 {
        return Err(RequestError::InvalidInput(format!(
            "{name} must be greater than zero"
        )));
    }
    Ok(())
}

/// Validates a request and converts it into a patient snapshot.
///
/// # Errors
///
/// Returns a `RequestError` if:
/// - age is outside 18..=100,
/// - weight or height is not a positive finite number,
/// - INR or baseline creatinine is negative or not finite,
/// - gender or race is not one of the recognised values.
pub fn patient_factors_from_request(req: &CalculateReq) -> RequestResult<PatientFactors> {
    if !(MIN_AGE..=MAX_AGE).contains(&req.age) {
        return Err(RequestError::InvalidInput(format!(
            "age must be between {MIN_AGE} and {MAX_AGE}"
        )));
    }
    require_positive("weight", req.weight)?;
    if let Some(height) = req.height {
        require_positive("height", height)?;
    }
    require_non_negative("inr", req.inr)?;
    require_non_negative("baseline_creat", req.baseline_creat)?;

    let gender: Gender = req.gender.parse()?;
    let race: Race = req.race.parse()?;

    Ok(PatientFactors {
        race,
        height_cm: req.height,
        inr: req.inr,
        baseline_creatinine: req.baseline_creat,
        anticoagulant: req.on_anticoag,
        antiplatelet: req.on_antiplatelet,
        gi_bleed_history: req.hist_gi_bleed,
        uncontrolled_bp: req.uncontrolled_bp,
        smoking: req.smoking_calc,
        alcohol_use: req.alcohol_use,
        antibiotic_order: req.antibiotic_order,
        dietary_change: req.dietary_change,
        liver_disease: req.liver_disease,
        prior_stroke: req.prior_stroke,
        insulin_use: req.on_insulin,
        high_hba1c: req.high_hba1c,
        neuropathy_history: req.neuropathy_history,
        impaired_renal: req.impaired_renal,
        recent_dka: req.recent_dka,
        diuretic_use: req.on_diuretic,
        acei_arb_use: req.on_acei_arb,
        active_chemo: req.active_chemo,
        contrast_exposure: req.contrast_exposure,
        ..PatientFactors::new(req.age, gender, req.weight)
    })
}
