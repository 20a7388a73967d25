//! `factprobe extract`: list check-worthy claims without contacting the service.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use super::read_input;
use crate::cli::context::CommandContext;
use crate::cli::display::{output, CommandOutput, TableFormatter};
use crate::domain::models::{Article, ExtractedClaim};
use crate::services::ClaimExtractor;

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Article text file (`-` reads stdin)
    pub input: PathBuf,

    /// Maximum number of claims to keep (overrides configuration)
    #[arg(long)]
    pub max_claims: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ExtractOutput {
    pub total: usize,
    pub claims: Vec<ExtractedClaim>,
}

impl CommandOutput for ExtractOutput {
    fn to_human(&self) -> String {
        if self.claims.is_empty() {
            return "No check-worthy claims found.".to_string();
        }

        format!(
            "{}\n\n{} claim(s) extracted",
            TableFormatter::new().format_extracted(&self.claims),
            self.total
        )
    }
}

pub fn execute(args: &ExtractArgs, ctx: &CommandContext) -> Result<i32> {
    let text = read_input(&args.input)?;
    let article = Article::from_text(&text);
    let extractor =
        ClaimExtractor::new(args.max_claims.unwrap_or(ctx.config.analysis.max_claims));

    let claims = extractor.extract(&article.paragraphs);
    output(
        &ExtractOutput {
            total: claims.len(),
            claims,
        },
        ctx.json,
    );
    Ok(0)
}
