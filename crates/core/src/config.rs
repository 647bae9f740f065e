//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the engine. Request
//! handlers never read process-wide environment variables, which keeps scoring deterministic
//! across threads and test harnesses.

use crate::{CoreError, CoreResult};

/// Policy switches that alter the canonical weight table.
///
/// The race-based AKI weight is a demographic proxy with no documented clinical justification.
/// It is enabled by default so the canonical table holds, and deployments can turn it off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoringPolicy {
    pub race_adjustment: bool,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            race_adjustment: true,
        }
    }
}

impl ScoringPolicy {
    /// Policy with every demographic-proxy weight removed.
    pub fn without_demographic_proxies() -> Self {
        Self {
            race_adjustment: false,
        }
    }
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug, Default)]
pub struct CoreConfig {
    scoring_policy: ScoringPolicy,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    pub fn new(scoring_policy: ScoringPolicy) -> Self {
        Self { scoring_policy }
    }

    pub fn scoring_policy(&self) -> &ScoringPolicy {
        &self.scoring_policy
    }
}

/// Parse the race-adjustment switch from an optional string value.
///
/// If `value` is `None` or empty/whitespace, the adjustment stays enabled.
pub fn race_adjustment_from_env_value(value: Option<String>) -> CoreResult<bool> {
    let value = value
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| !v.is_empty());

    match value.as_deref() {
        None => Ok(true),
        Some("true" | "1" | "yes" | "on") => Ok(true),
        Some("false" | "0" | "no" | "off") => Ok(false),
        Some(other) => Err(CoreError::InvalidConfig(format!(
            "ADE_RACE_ADJUSTMENT must be a boolean, got '{other}'"
        ))),
    }
}
