use async_trait::async_trait;
use reqwest::{header, Client as ReqwestClient, RequestBuilder, StatusCode};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::domain::errors::ServiceError;
use crate::domain::models::{HealthStatus, PredictRequest, PredictResponse, ServiceConfig};
use crate::domain::ports::FactCheckService;

/// Configuration for the HTTP fact-checking client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL of the service (e.g. `http://localhost:8000`)
    pub base_url: String,

    /// Idle connections kept per host
    pub pool_max_idle_per_host: usize,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            pool_max_idle_per_host: 4,
        }
    }
}

impl From<&ServiceConfig> for HttpClientConfig {
    fn from(config: &ServiceConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            ..Default::default()
        }
    }
}

/// HTTP client for a fact-checking prediction service
///
/// One instance is built per run and reused for every request. Timeouts are
/// applied per request, so the same client serves bounded and unbounded runs.
pub struct HttpFactCheckClient {
    http_client: ReqwestClient,
    base_url: String,
}

impl HttpFactCheckClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `config` - Client configuration
    ///
    /// # Example
    /// ```no_run
    /// use factprobe::infrastructure::http::{HttpClientConfig, HttpFactCheckClient};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = HttpFactCheckClient::new(HttpClientConfig::default())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: HttpClientConfig) -> Result<Self, ServiceError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        info!(base_url = %base_url, "initializing fact-check client");

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let http_client = ReqwestClient::builder()
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .tcp_nodelay(true)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn send(
        request: RequestBuilder,
        timeout: Option<Duration>,
    ) -> Result<(StatusCode, String), ServiceError> {
        let request = match timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        };
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok((status, body))
    }
}

#[async_trait]
impl FactCheckService for HttpFactCheckClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn health(&self, timeout: Option<Duration>) -> Result<HealthStatus, ServiceError> {
        let url = self.endpoint("health");
        let started = Instant::now();
        let (status, body) = Self::send(self.http_client.get(&url), timeout).await?;

        debug!(
            url = %url,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis(),
            "health probe answered"
        );

        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "health probe returned non-200");
            return Err(ServiceError::Status {
                code: status.as_u16(),
                body,
            });
        }

        Ok(HealthStatus::from_body(body))
    }

    async fn predict(
        &self,
        claim: &str,
        timeout: Option<Duration>,
    ) -> Result<PredictResponse, ServiceError> {
        let url = self.endpoint("predict");
        let started = Instant::now();
        let request = self
            .http_client
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&PredictRequest::new(claim));
        let (status, body) = Self::send(request, timeout).await?;

        debug!(
            url = %url,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis(),
            claim_len = claim.len(),
            "prediction answered"
        );

        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "prediction returned non-200");
            return Err(ServiceError::Status {
                code: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
