use crate::dto::HealthRes;

/// Simple health service shared by the REST binaries.
///
/// Provides a standardised way to report the health status of the mindgauge
/// system for monitoring and load balancer checks.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    pub fn new() -> Self {
        Self
    }

    /// Static method to check health without creating an instance.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "mindgauge is alive".into(),
        }
    }
}
