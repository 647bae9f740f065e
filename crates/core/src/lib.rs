//! # ADE Core
//!
//! Risk-scoring engine for adverse drug events.
//!
//! This crate contains pure, synchronous, stateless logic:
//! - Additive weighted-rule scorers for bleeding, hypoglycemia, AKI and a fragility index
//! - Primary-threat selection with a fixed tie-break priority and alert levels
//! - Rationale generation naming the factors that drove an alert
//! - Drug-drug interaction lookup by unordered name pair
//!
//! **No API concerns**: HTTP servers, request validation and rendering belong in `api-shared`,
//! `api-rest` or the CLI.

pub mod alert;
pub mod assessment;
pub mod config;
pub mod constants;
pub mod error;
pub mod interactions;
pub mod patient;
pub mod rationale;
pub mod scoring;
pub mod session;

pub use ade_types::{DrugName, RiskScore};
pub use alert::{select_primary, AlertLevel, RiskCategory};
pub use assessment::{assess, AlertResult, Assessment};
pub use config::{race_adjustment_from_env_value, CoreConfig, ScoringPolicy};
pub use constants::*;
pub use error::{CoreError, CoreResult};
pub use interactions::{
    classify_interaction, find_interaction, lookup_interaction, InteractionRecord,
    InteractionSeverity,
};
pub use patient::{Gender, PatientFactors, Race};
pub use rationale::{explain, FALLBACK_RATIONALE};
pub use scoring::{
    score_aki, score_all, score_bleeding, score_fragility, score_hypoglycemia, RiskScores,
};
pub use session::{LoadedPatient, SessionContext};
