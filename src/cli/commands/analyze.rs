//! `factprobe analyze`: extract, check and score an article.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use super::read_input;
use crate::cli::context::CommandContext;
use crate::cli::display::{
    colorize_accuracy, colorize_assessment, label, output, CommandOutput, TableFormatter,
};
use crate::cli::progress::create_spinner;
use crate::domain::models::{Article, ArticleAnalysis, Assessment};
use crate::infrastructure::config::ConfigLoader;
use crate::services::ArticleAnalyzer;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Article text file (`-` reads stdin)
    pub input: PathBuf,

    /// Article title shown in the report
    #[arg(long)]
    pub title: Option<String>,

    /// Source URL of the article shown in the report
    #[arg(long)]
    pub article_url: Option<String>,

    /// Maximum number of claims to check
    #[arg(long)]
    pub max_claims: Option<usize>,

    /// Maximum number of requests in flight
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Confidence below which a verdict is flagged uncertain (0-100)
    #[arg(long)]
    pub threshold: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisOutput {
    #[serde(flatten)]
    pub analysis: ArticleAnalysis,
}

impl CommandOutput for AnalysisOutput {
    fn to_human(&self) -> String {
        let analysis = &self.analysis;
        let mut lines = Vec::new();

        if let Some(title) = &analysis.title {
            lines.push(format!("{} {title}", label("Title")));
        }
        if let Some(url) = &analysis.url {
            lines.push(format!("{} {url}", label("URL")));
        }
        if !lines.is_empty() {
            lines.push(String::new());
        }

        if !analysis.claims.is_empty() {
            lines.push(TableFormatter::new().format_checked(&analysis.claims));
            lines.push(String::new());
            for (index, claim) in analysis.claims.iter().enumerate() {
                lines.push(format!(
                    "{}. {} {}",
                    index + 1,
                    colorize_assessment(claim.assessment),
                    claim.explanation
                ));
            }
            lines.push(String::new());
        }

        lines.push(format!(
            "{} {}",
            label("Overall accuracy"),
            colorize_accuracy(analysis.overall_accuracy)
        ));
        lines.push(analysis.summary.clone());
        lines.push(format!(
            "{} true, {} false, {} unverified, {} uncertain",
            analysis.count(Assessment::True),
            analysis.count(Assessment::False),
            analysis.count(Assessment::Unverified),
            analysis.claims.iter().filter(|c| c.uncertain).count(),
        ));
        lines.join("\n")
    }
}

pub async fn execute(args: AnalyzeArgs, ctx: &CommandContext) -> Result<i32> {
    let text = read_input(&args.input)?;
    let article = Article::from_text(&text)
        .with_title(args.title)
        .with_url(args.article_url);

    let mut config = ctx.config.clone();
    if let Some(max_claims) = args.max_claims {
        config.analysis.max_claims = max_claims;
    }
    if let Some(concurrency) = args.concurrency {
        config.analysis.concurrency = concurrency;
    }
    if let Some(threshold) = args.threshold {
        config.analysis.uncertainty_threshold = threshold;
    }
    ConfigLoader::validate(&config)?;

    let analyzer = ArticleAnalyzer::new(
        ctx.service()?,
        &config.analysis,
        Some(config.service.predict_timeout()),
    );

    let spinner = create_spinner("Checking claims...", ctx.json);
    let analysis = analyzer.analyze(&article).await;
    spinner.finish_and_clear();

    let code = i32::from(analysis.count(Assessment::Unverified) > 0);
    output(&AnalysisOutput { analysis }, ctx.json);
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{CheckedClaim, ClaimKind};

    fn analysis(claims: Vec<CheckedClaim>) -> ArticleAnalysis {
        let (overall_accuracy, summary) = crate::services::article_analyzer::score(&claims);
        ArticleAnalysis {
            title: Some("Quarterly numbers".to_string()),
            url: None,
            overall_accuracy,
            summary: summary.to_string(),
            claims,
        }
    }

    fn claim(assessment: Assessment, uncertain: bool) -> CheckedClaim {
        CheckedClaim {
            claim: "Sales rose 12% in 2021".to_string(),
            kinds: vec![ClaimKind::Numerical],
            assessment,
            confidence: 64.0,
            uncertain,
            explanation: String::new(),
            error: None,
        }
    }

    #[test]
    fn test_human_output_reports_counts_and_summary() {
        let out = AnalysisOutput {
            analysis: analysis(vec![
                claim(Assessment::True, true),
                claim(Assessment::Unverified, true),
            ]),
        };
        let text = out.to_human();
        assert!(text.contains("Quarterly numbers"));
        assert!(text.contains("100%"));
        assert!(text.contains("highly factual"));
        assert!(text.contains("1 true, 0 false, 1 unverified, 2 uncertain"));
    }

    #[test]
    fn test_json_output_is_flat() {
        let out = AnalysisOutput {
            analysis: analysis(vec![]),
        };
        let json = out.to_json();
        assert_eq!(json["overall_accuracy"], 100);
        assert_eq!(json["title"], "Quarterly numbers");
        assert!(json.get("url").is_none());
        assert!(json["claims"].as_array().unwrap().is_empty());
    }
}
