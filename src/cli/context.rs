use anyhow::{Context, Result};
use std::sync::Arc;

use super::types::Cli;
use crate::domain::models::Config;
use crate::domain::ports::FactCheckService;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::http::{HttpClientConfig, HttpFactCheckClient};

/// Shared state handed to every command
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: Config,
    pub json: bool,
}

impl CommandContext {
    pub const fn new(config: Config, json: bool) -> Self {
        Self { config, json }
    }

    /// Load configuration for the parsed command line
    ///
    /// `--config` replaces the project files; `--url` wins over every other
    /// source of the base URL.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };

        if let Some(url) = &cli.url {
            config.service.base_url.clone_from(url);
            ConfigLoader::validate(&config)?;
        }

        Ok(Self::new(config, cli.json))
    }

    /// Build the HTTP client for the configured service
    pub fn service(&self) -> Result<Arc<dyn FactCheckService>> {
        let client = HttpFactCheckClient::new(HttpClientConfig::from(&self.config.service))
            .context("Failed to build HTTP client")?;
        Ok(Arc::new(client))
    }
}
