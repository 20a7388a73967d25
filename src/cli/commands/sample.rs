//! `factprobe sample`: colorized verdicts and a summary over the sample claims.

use anyhow::Result;
use clap::Args;
use console::style;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::cli::context::CommandContext;
use crate::cli::display::{banner, colorize_verdict, output, CommandOutput, TableFormatter};
use crate::domain::errors::ServiceError;
use crate::domain::models::claim::format_confidence;
use crate::domain::models::{ClaimOutcome, Config, HealthCheck, SampleReport, Summary};
use crate::infrastructure::config::ConfigLoader;
use crate::services::claim_sets::{load_claims_file, sample_claims};
use crate::services::{NoopObserver, RunObserver, SampleRunner, SampleTimeouts};

#[derive(Args, Debug, Default)]
pub struct SampleArgs {
    /// File with one claim per line (defaults to the built-in sample claims)
    #[arg(long)]
    pub claims_file: Option<PathBuf>,

    /// Health check timeout in seconds (overrides configuration)
    #[arg(long)]
    pub health_timeout: Option<u64>,

    /// Prediction timeout in seconds (overrides configuration)
    #[arg(long)]
    pub predict_timeout: Option<u64>,

    /// Skip the per-claim results table after the summary
    #[arg(long)]
    pub no_table: bool,
}

/// Prints the sample transcript as the run progresses
pub struct SampleConsole<W: Write + Send> {
    out: W,
}

impl<W: Write + Send> SampleConsole<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: impl std::fmt::Display) {
        writeln!(self.out, "{text}").ok();
    }
}

impl<W: Write + Send> RunObserver for SampleConsole<W> {
    fn health_checked(&mut self, health: &HealthCheck) {
        let message = match &health.error {
            None => {
                self.line(style("✓ Server is running and healthy").green());
                return;
            }
            Some(ServiceError::Connection { .. }) => {
                format!("✗ Could not connect to server at {}", health.url)
            }
            Some(ServiceError::Unhealthy { body } | ServiceError::Status { body, .. }) => {
                format!("✗ Server returned unexpected response: {body}")
            }
            Some(err) => format!("✗ Error checking server health: {err}"),
        };
        self.line(style(message).red());
    }

    fn run_started(&mut self, total: usize) {
        self.line(style(format!("\nTesting {total} claims...\n")).cyan());
    }

    fn claim_started(&mut self, number: usize, claim: &str) {
        self.line(format!("{} {claim}", style(format!("Claim #{number}:")).yellow()));
    }

    fn claim_finished(&mut self, outcome: &ClaimOutcome) {
        if let Some(verdict) = outcome.verdict() {
            self.line(format!(
                "  → Result: {} (Confidence: {})",
                colorize_verdict(verdict.is_true),
                format_confidence(verdict.confidence)
            ));
        } else if let Some(err) = outcome.error() {
            match err {
                ServiceError::Status { code, body } => {
                    self.line(format!(
                        "  → {}",
                        style(format!("Error: API returned status code {code}")).red()
                    ));
                    self.line(format!("  → Response: {body}"));
                }
                ServiceError::Connection { .. } => {
                    self.line(format!(
                        "  → {}",
                        style("Error: Failed to connect to the API server").red()
                    ));
                }
                other => self.line(format!("  → {}", style(format!("Error: {other}")).red())),
            }
        }
        self.line("");
    }
}

#[derive(Debug, Serialize)]
pub struct SampleOutput {
    #[serde(flatten)]
    pub report: SampleReport,
    #[serde(skip)]
    pub show_table: bool,
}

/// Summary lines printed after a sample run
pub fn render_summary(summary: &Summary) -> Vec<String> {
    let average = summary
        .average_confidence
        .map_or_else(|| "n/a".to_string(), |avg| format!("{avg:.1}%"));

    vec![
        format!("Total claims tested: {}", summary.total),
        format!("Claims marked TRUE: {}", summary.true_count),
        format!("Claims marked FALSE: {}", summary.false_count),
        format!("Average confidence: {average}"),
    ]
}

impl CommandOutput for SampleOutput {
    fn to_human(&self) -> String {
        let Some(summary) = &self.report.summary else {
            return style("\nServer not available. Start it, or point factprobe at it with --url.")
                .red()
                .to_string();
        };

        let mut lines = vec![format!("\n{}", banner("Test Summary"))];
        lines.extend(render_summary(summary));

        if self.show_table && !self.report.outcomes.is_empty() {
            lines.push(String::new());
            lines.push(TableFormatter::new().format_outcomes(&self.report.outcomes));
        }

        if self.report.aborted {
            let skipped = self.report.planned - self.report.outcomes.len();
            lines.push(
                style(format!("\nStopped after losing the connection; {skipped} claim(s) not sent."))
                    .red()
                    .to_string(),
            );
        }

        if self.report.all_succeeded() {
            lines.push(style("\nTesting completed successfully!").green().to_string());
        } else {
            lines.push(style("\nTesting finished with errors.").red().to_string());
        }
        lines.join("\n")
    }
}

/// Apply the timeout overrides and validate them like configured values
fn resolve_timeouts(args: &SampleArgs, config: &Config) -> Result<SampleTimeouts> {
    let mut config = config.clone();
    if let Some(secs) = args.health_timeout {
        config.service.health_timeout_secs = secs;
    }
    if let Some(secs) = args.predict_timeout {
        config.service.predict_timeout_secs = secs;
    }
    ConfigLoader::validate(&config)?;

    Ok(SampleTimeouts {
        health: config.service.health_timeout(),
        predict: config.service.predict_timeout(),
    })
}

pub async fn execute(args: SampleArgs, ctx: &CommandContext) -> Result<i32> {
    let claims = match &args.claims_file {
        Some(path) => load_claims_file(path)?,
        None => sample_claims(),
    };
    let timeouts = resolve_timeouts(&args, &ctx.config)?;
    let runner = SampleRunner::new(ctx.service()?, timeouts);

    let report = if ctx.json {
        runner.run(&claims, &mut NoopObserver).await
    } else {
        println!("{}", banner("Fact Check Sample Run"));
        let mut console = SampleConsole::new(io::stdout());
        runner.run(&claims, &mut console).await
    };

    let code = report.exit_code();
    output(
        &SampleOutput {
            report,
            show_table: !args.no_table,
        },
        ctx.json,
    );
    Ok(code)
}
