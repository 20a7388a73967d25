use async_trait::async_trait;
use std::time::Duration;

use super::errors::ServiceError;
use super::models::{HealthStatus, PredictResponse};

/// Port for a remote fact-checking service
///
/// The drivers only depend on this trait, so they can run against the HTTP
/// client in production and against in-memory stubs in tests.
#[async_trait]
pub trait FactCheckService: Send + Sync {
    /// Base URL of the service, used in console messages
    fn base_url(&self) -> &str;

    /// Probe `GET /health`
    ///
    /// # Arguments
    /// * `timeout` - Per-request timeout; `None` waits indefinitely
    ///
    /// # Returns
    /// * `Ok(HealthStatus)` when the server answered 200
    /// * `Err(ServiceError::Status)` for any other status code
    /// * `Err(ServiceError)` for transport failures
    async fn health(&self, timeout: Option<Duration>) -> Result<HealthStatus, ServiceError>;

    /// Submit a claim to `POST /predict`
    ///
    /// # Arguments
    /// * `claim` - Natural-language statement to verify
    /// * `timeout` - Per-request timeout; `None` waits indefinitely
    async fn predict(
        &self,
        claim: &str,
        timeout: Option<Duration>,
    ) -> Result<PredictResponse, ServiceError>;
}
