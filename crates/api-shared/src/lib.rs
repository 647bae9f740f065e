//! # API Shared
//!
//! Shared definitions for every request/response collaborator of the ADE risk engine.
//!
//! Contains:
//! - JSON wire types with OpenAPI schemas (`types` module)
//! - Boundary validation that turns a request into `PatientFactors`
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and the CLI for common functionality.

pub mod health;
pub mod types;
pub mod validation;

pub use health::HealthService;
pub use types::*;
pub use validation::{patient_factors_from_request, RequestError, RequestResult};
