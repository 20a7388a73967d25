use std::time::Duration;
use tracing::{info, warn};

use crate::domain::errors::ServiceError;
use crate::domain::models::HealthCheck;
use crate::domain::ports::FactCheckService;

/// What a 200 answer from `/health` must look like to count as healthy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthPolicy {
    /// Any 200 response is healthy
    StatusOnly,
    /// A 200 response whose JSON body has `"status": "healthy"`
    RequireHealthyBody,
}

/// Probe the service health endpoint and classify the answer
pub async fn probe_health(
    service: &dyn FactCheckService,
    policy: HealthPolicy,
    timeout: Option<Duration>,
) -> HealthCheck {
    let url = format!("{}/health", service.base_url());

    let check = match service.health(timeout).await {
        Ok(status) if policy == HealthPolicy::StatusOnly || status.reports_healthy() => {
            HealthCheck::healthy(&url)
        }
        Ok(status) => HealthCheck::failed(&url, ServiceError::Unhealthy { body: status.body }),
        Err(err) => HealthCheck::failed(&url, err),
    };

    match &check.error {
        None => info!(url = %url, "service is healthy"),
        Some(err) => warn!(url = %url, error = %err, "service health check failed"),
    }

    check
}
