//! Constants used throughout the ADE core crate.
//!
//! Thresholds and defaults live here so the scorers, the alert logic and the
//! request collaborators agree on the same values.

/// Score at or above which a category becomes an actionable (HIGH) alert.
pub const ACTIONABLE_THRESHOLD: u8 = 70;

/// Score at or above which an actionable alert is labelled CRITICAL.
pub const CRITICAL_THRESHOLD: u8 = 90;

/// INR above which bleeding risk is raised.
pub const INR_LIMIT: f64 = 3.5;

/// Baseline creatinine (mg/dL) above which AKI risk is raised.
pub const CREATININE_LIMIT: f64 = 1.5;

/// Neutral INR used when a collaborator does not supply one.
pub const DEFAULT_INR: f64 = 1.0;

/// Neutral baseline creatinine (mg/dL) used when a collaborator does not supply one.
pub const DEFAULT_BASELINE_CREATININE: f64 = 0.9;

/// Sentinel returned by the interaction lookup for unknown pairs.
pub const NO_INTERACTION: &str = "No major interaction found.";

/// Summary line reported when no category reaches the actionable threshold.
pub const MANAGEABLE_SUMMARY: &str = "Patient risk is manageable. Monitoring is sufficient.";
