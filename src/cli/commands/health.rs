//! `factprobe health`

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::context::CommandContext;
use crate::cli::display::{action_failure, action_success, output, CommandOutput};
use crate::domain::models::HealthCheck;
use crate::services::{probe_health, HealthPolicy};

#[derive(Args, Debug, Default)]
pub struct HealthArgs {
    /// Also require the body to report `"status": "healthy"`
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthOutput {
    pub health: HealthCheck,
}

impl CommandOutput for HealthOutput {
    fn to_human(&self) -> String {
        match &self.health.error {
            None => action_success(&format!("Server at {} is healthy", self.health.url)),
            Some(err) => action_failure(&format!("Server at {} is not healthy: {err}", self.health.url)),
        }
    }
}

pub async fn execute(args: HealthArgs, ctx: &CommandContext) -> Result<i32> {
    let policy = if args.strict {
        HealthPolicy::RequireHealthyBody
    } else {
        HealthPolicy::StatusOnly
    };
    let service = ctx.service()?;
    let health = probe_health(
        service.as_ref(),
        policy,
        Some(ctx.config.service.health_timeout()),
    )
    .await;

    let code = i32::from(!health.healthy);
    output(&HealthOutput { health }, ctx.json);
    Ok(code)
}
