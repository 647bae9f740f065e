use crate::types::HealthRes;

/// Simple health service shared by every API surface.
///
/// The engine has no downstream dependencies, so a response means the process is serving.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Static method to check health without creating an instance.
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "ADE risk engine is alive".into(),
        }
    }
}
