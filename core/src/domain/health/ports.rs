use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// Service trait for liveness reporting
#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckService: Send + Sync {
    /// Uptime of the service in milliseconds.
    fn health(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
