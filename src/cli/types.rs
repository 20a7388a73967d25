//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use super::commands::analyze::AnalyzeArgs;
use super::commands::extract::ExtractArgs;
use super::commands::health::HealthArgs;
use super::commands::sample::SampleArgs;
use super::commands::smoke::SmokeArgs;

#[derive(Parser, Debug)]
#[command(name = "factprobe")]
#[command(about = "factprobe - exercise a fact-checking service with sample claims", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to .factprobe/config.yaml and .factprobe/local.yaml)
    #[arg(short, long, global = true, env = "FACTPROBE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Base URL of the fact-checking service (overrides configuration)
    #[arg(short, long, global = true)]
    pub url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Probe the service health endpoint
    Health(HealthArgs),
    /// Send the smoke-test claims and report pass/fail for each
    Smoke(SmokeArgs),
    /// Send the categorized sample claims and print a verdict summary
    Sample(SampleArgs),
    /// Extract check-worthy claims from article text
    Extract(ExtractArgs),
    /// Extract claims from article text, check them, and score the article
    Analyze(AnalyzeArgs),
    /// Print the effective configuration
    Config,
}
