//! `factprobe config`: print the effective configuration.

use anyhow::Result;
use serde::Serialize;

use crate::cli::context::CommandContext;
use crate::cli::display::{output, CommandOutput};
use crate::domain::models::Config;

#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    #[serde(flatten)]
    pub config: Config,
}

impl CommandOutput for ConfigOutput {
    fn to_human(&self) -> String {
        serde_yaml::to_string(&self.config)
            .unwrap_or_else(|err| format!("Failed to render configuration: {err}"))
    }
}

pub fn execute(ctx: &CommandContext) -> Result<i32> {
    output(
        &ConfigOutput {
            config: ctx.config.clone(),
        },
        ctx.json,
    );
    Ok(0)
}
