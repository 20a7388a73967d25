use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure for factprobe
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Fact-checking service connection settings
    #[serde(default)]
    pub service: ServiceConfig,

    /// Article analysis settings
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Service connection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ServiceConfig {
    /// Base URL of the service, without a trailing path
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout for `GET /health` in bounded runs
    #[serde(default = "default_health_timeout_secs")]
    pub health_timeout_secs: u64,

    /// Timeout for `POST /predict` in bounded runs
    #[serde(default = "default_predict_timeout_secs")]
    pub predict_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

const fn default_health_timeout_secs() -> u64 {
    3
}

const fn default_predict_timeout_secs() -> u64 {
    5
}

impl ServiceConfig {
    pub const fn health_timeout(&self) -> Duration {
        Duration::from_secs(self.health_timeout_secs)
    }

    pub const fn predict_timeout(&self) -> Duration {
        Duration::from_secs(self.predict_timeout_secs)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            health_timeout_secs: default_health_timeout_secs(),
            predict_timeout_secs: default_predict_timeout_secs(),
        }
    }
}

/// Article analysis configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AnalysisConfig {
    /// Verdicts below this confidence are flagged uncertain (0-100)
    #[serde(default = "default_uncertainty_threshold")]
    pub uncertainty_threshold: f64,

    /// Maximum number of claims extracted from one article
    #[serde(default = "default_max_claims")]
    pub max_claims: usize,

    /// Maximum number of in-flight requests while analyzing (1-64)
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

const fn default_uncertainty_threshold() -> f64 {
    70.0
}

const fn default_max_claims() -> usize {
    15
}

const fn default_concurrency() -> usize {
    4
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            uncertainty_threshold: default_uncertainty_threshold(),
            max_claims: default_max_claims(),
            concurrency: default_concurrency(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for daily rolling JSON log files (optional)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
        }
    }
}
