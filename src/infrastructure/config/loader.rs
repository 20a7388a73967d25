use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Project configuration file, relative to the working directory
pub const PROJECT_CONFIG_PATH: &str = ".factprobe/config.yaml";

/// Optional local overrides, relative to the working directory
pub const LOCAL_CONFIG_PATH: &str = ".factprobe/local.yaml";

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "FACTPROBE_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid base_url: {0}. Must be an absolute http or https URL")]
    InvalidBaseUrl(String),

    #[error("Invalid {0}: must be at least 1 second")]
    InvalidTimeout(&'static str),

    #[error("Invalid uncertainty_threshold: {0}. Must be between 0 and 100")]
    InvalidThreshold(f64),

    #[error("Invalid max_claims: {0}. Must be at least 1")]
    InvalidMaxClaims(usize),

    #[error("Invalid concurrency: {0}. Must be between 1 and 64")]
    InvalidConcurrency(usize),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .factprobe/config.yaml (project config, optional)
    /// 3. .factprobe/local.yaml (local overrides, optional)
    /// 4. Environment variables (FACTPROBE_* prefix, `__` separates sections)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(PROJECT_CONFIG_PATH))
            .merge(Yaml::file(LOCAL_CONFIG_PATH))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, still honoring environment overrides
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let base_url = &config.service.base_url;
        match reqwest::Url::parse(base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {}
            _ => return Err(ConfigError::InvalidBaseUrl(base_url.clone())),
        }

        if config.service.health_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout("health_timeout_secs"));
        }
        if config.service.predict_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout("predict_timeout_secs"));
        }

        let threshold = config.analysis.uncertainty_threshold;
        if !(0.0..=100.0).contains(&threshold) {
            return Err(ConfigError::InvalidThreshold(threshold));
        }

        if config.analysis.max_claims == 0 {
            return Err(ConfigError::InvalidMaxClaims(config.analysis.max_claims));
        }

        if config.analysis.concurrency == 0 || config.analysis.concurrency > 64 {
            return Err(ConfigError::InvalidConcurrency(config.analysis.concurrency));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        Ok(())
    }
}
