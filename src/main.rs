//! factprobe CLI entry point.

use clap::Parser;

use factprobe::cli::commands::{analyze, config, extract, health, sample, smoke};
use factprobe::cli::{handle_error, Cli, CommandContext, Commands};
use factprobe::infrastructure::logging::{LogSettings, LoggerImpl};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let ctx = match CommandContext::load(&cli) {
        Ok(ctx) => ctx,
        Err(err) => handle_error(err, cli.json),
    };

    let logger = match LoggerImpl::init(&LogSettings::resolve(&ctx.config.logging, cli.verbose)) {
        Ok(logger) => logger,
        Err(err) => handle_error(err.context("Failed to initialize logging"), cli.json),
    };

    let result = match cli.command {
        Commands::Health(args) => health::execute(args, &ctx).await,
        Commands::Smoke(args) => smoke::execute(args, &ctx).await,
        Commands::Sample(args) => sample::execute(args, &ctx).await,
        Commands::Extract(args) => extract::execute(&args, &ctx),
        Commands::Analyze(args) => analyze::execute(args, &ctx).await,
        Commands::Config => config::execute(&ctx),
    };

    // flush the file writer before exiting
    drop(logger);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => handle_error(err, cli.json),
    }
}
