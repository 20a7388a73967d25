//! `factprobe smoke`: pass/fail transcript over the smoke claims.

use anyhow::Result;
use clap::Args;
use console::style;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::cli::context::CommandContext;
use crate::cli::display::{output, CommandOutput};
use crate::domain::errors::ServiceError;
use crate::domain::models::claim::format_confidence;
use crate::domain::models::{ClaimOutcome, HealthCheck, SmokeReport};
use crate::services::claim_sets::{load_claims_file, smoke_claims};
use crate::services::{NoopObserver, RunObserver, SmokeTestRunner};

#[derive(Args, Debug, Default)]
pub struct SmokeArgs {
    /// File with one claim per line (defaults to the built-in smoke claims)
    #[arg(long)]
    pub claims_file: Option<PathBuf>,
}

/// Prints the smoke transcript as the run progresses
pub struct SmokeConsole<W: Write + Send> {
    out: W,
    base_url: String,
}

impl<W: Write + Send> SmokeConsole<W> {
    pub fn new(out: W, base_url: impl Into<String>) -> Self {
        Self {
            out,
            base_url: base_url.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: impl std::fmt::Display) {
        writeln!(self.out, "{text}").ok();
    }
}

impl<W: Write + Send> RunObserver for SmokeConsole<W> {
    fn health_checked(&mut self, health: &HealthCheck) {
        match &health.error {
            None => self.line("Server is running and healthy."),
            Some(ServiceError::Status { code, .. }) => {
                self.line(format!("Error: Server is not healthy. Status code: {code}"));
            }
            Some(ServiceError::Connection { .. }) => {
                let base_url = self.base_url.clone();
                self.line(format!(
                    "Error: Could not connect to the server. Make sure it's running on {base_url}"
                ));
                self.line("Start the fact-check service, or point factprobe at it with --url.");
            }
            Some(err) => self.line(format!("Error: {err}")),
        }
    }

    fn claim_started(&mut self, number: usize, claim: &str) {
        self.line(format!("\nTest {number}: Checking claim: \"{claim}\""));
    }

    fn claim_finished(&mut self, outcome: &ClaimOutcome) {
        if let Some(verdict) = outcome.verdict() {
            self.line(format!("Result: {}", verdict.label()));
            self.line(format!("Confidence: {}", format_confidence(verdict.confidence)));
            self.line(style("✓ Test passed").green());
            return;
        }

        match outcome.error() {
            Some(ServiceError::Status { code, body }) => {
                self.line(style(format!("✗ Test failed: Server returned {code}")).red());
                self.line(format!("Response: {body}"));
            }
            Some(err) => self.line(style(format!("✗ Test failed: {err}")).red()),
            None => {}
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SmokeOutput {
    #[serde(flatten)]
    pub report: SmokeReport,
}

impl CommandOutput for SmokeOutput {
    fn to_human(&self) -> String {
        if !self.report.health.healthy {
            style("\nService unavailable, no claims were sent.").red().to_string()
        } else if self.report.all_passed {
            style("\n✅ All tests passed! The API is working correctly.")
                .green()
                .to_string()
        } else {
            style("\n❌ Some tests failed. Please check the errors above.")
                .red()
                .to_string()
        }
    }
}

pub async fn execute(args: SmokeArgs, ctx: &CommandContext) -> Result<i32> {
    let claims = match &args.claims_file {
        Some(path) => load_claims_file(path)?,
        None => smoke_claims(),
    };
    let runner = SmokeTestRunner::new(ctx.service()?);

    let report = if ctx.json {
        runner.run(&claims, &mut NoopObserver).await
    } else {
        println!("Testing fact-check API at {}...", ctx.config.service.base_url);
        let mut console = SmokeConsole::new(io::stdout(), &ctx.config.service.base_url);
        runner.run(&claims, &mut console).await
    };

    let code = report.exit_code();
    output(&SmokeOutput { report }, ctx.json);
    Ok(code)
}
