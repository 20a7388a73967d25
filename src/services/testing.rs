//! In-memory doubles for driver tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use crate::domain::errors::ServiceError;
use crate::domain::models::{ClaimOutcome, HealthCheck, HealthStatus, PredictResponse};
use crate::domain::ports::FactCheckService;
use crate::services::observer::RunObserver;

/// Scripted fact-checking service
pub struct StubService {
    health: Result<String, ServiceError>,
    default_response: Result<PredictResponse, ServiceError>,
    responses: HashMap<String, Result<PredictResponse, ServiceError>>,
    delays: HashMap<String, Duration>,
    pub calls: Mutex<Vec<String>>,
}

impl StubService {
    pub fn new() -> Self {
        Self {
            health: Ok(r#"{"status":"healthy"}"#.to_string()),
            default_response: Ok(verdict(true, 80.0)),
            responses: HashMap::new(),
            delays: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_health(mut self, health: Result<String, ServiceError>) -> Self {
        self.health = health;
        self
    }

    pub fn with_default(mut self, response: Result<PredictResponse, ServiceError>) -> Self {
        self.default_response = response;
        self
    }

    pub fn with_response(
        mut self,
        claim: &str,
        response: Result<PredictResponse, ServiceError>,
    ) -> Self {
        self.responses.insert(claim.to_string(), response);
        self
    }

    pub fn with_delay(mut self, claim: &str, delay: Duration) -> Self {
        self.delays.insert(claim.to_string(), delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl FactCheckService for StubService {
    fn base_url(&self) -> &str {
        "http://stub.local"
    }

    async fn health(&self, _timeout: Option<Duration>) -> Result<HealthStatus, ServiceError> {
        self.health.clone().map(HealthStatus::from_body)
    }

    async fn predict(
        &self,
        claim: &str,
        _timeout: Option<Duration>,
    ) -> Result<PredictResponse, ServiceError> {
        self.calls.lock().unwrap().push(claim.to_string());
        if let Some(delay) = self.delays.get(claim) {
            tokio::time::sleep(*delay).await;
        }
        self.responses
            .get(claim)
            .cloned()
            .unwrap_or_else(|| self.default_response.clone())
    }
}

pub fn verdict(is_true: bool, confidence: f64) -> PredictResponse {
    PredictResponse::new(is_true, confidence).with_status("ok")
}

pub fn connection_refused() -> ServiceError {
    ServiceError::Connection {
        message: "connection refused".to_string(),
    }
}

/// Observer that records events as short strings
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub events: Vec<String>,
}

impl RunObserver for RecordingObserver {
    fn health_checked(&mut self, health: &HealthCheck) {
        self.events.push(format!("health:{}", health.healthy));
    }

    fn run_started(&mut self, total: usize) {
        self.events.push(format!("start:{total}"));
    }

    fn claim_started(&mut self, number: usize, _claim: &str) {
        self.events.push(format!("claim:{number}"));
    }

    fn claim_finished(&mut self, outcome: &ClaimOutcome) {
        let status = if outcome.passed() { "ok" } else { "err" };
        self.events.push(format!("done:{}:{status}", outcome.number));
    }
}
