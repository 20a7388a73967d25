//! Checks every claim of an article and scores the article as a whole.

use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

use crate::domain::errors::ServiceError;
use crate::domain::models::{
    AnalysisConfig, Article, ArticleAnalysis, Assessment, CheckedClaim, ExtractedClaim,
    Verdict,
};
use crate::domain::ports::FactCheckService;
use crate::services::claim_extractor::ClaimExtractor;

/// Confidence recorded for claims the service could not verify
const UNVERIFIED_CONFIDENCE: f64 = 50.0;

/// Extracts claims from an article and checks them with bounded concurrency
pub struct ArticleAnalyzer {
    service: Arc<dyn FactCheckService>,
    extractor: ClaimExtractor,
    uncertainty_threshold: f64,
    concurrency: usize,
    predict_timeout: Option<Duration>,
}

impl ArticleAnalyzer {
    pub fn new(
        service: Arc<dyn FactCheckService>,
        config: &AnalysisConfig,
        predict_timeout: Option<Duration>,
    ) -> Self {
        Self {
            service,
            extractor: ClaimExtractor::new(config.max_claims),
            uncertainty_threshold: config.uncertainty_threshold,
            concurrency: config.concurrency.max(1),
            predict_timeout,
        }
    }

    /// Extract, check and score an article
    #[instrument(skip_all, fields(paragraphs = article.paragraphs.len()))]
    pub async fn analyze(&self, article: &Article) -> ArticleAnalysis {
        let extracted = self.extractor.extract(&article.paragraphs);
        info!(claims = extracted.len(), "extracted claims");

        let claims = self.check_claims(extracted).await;
        let (overall_accuracy, summary) = score(&claims);

        ArticleAnalysis {
            title: article.title.clone(),
            url: article.url.clone(),
            overall_accuracy,
            summary: summary.to_string(),
            claims,
        }
    }

    /// Check claims with at most `concurrency` requests in flight
    ///
    /// Results come back in the order of `claims`.
    pub async fn check_claims(&self, claims: Vec<ExtractedClaim>) -> Vec<CheckedClaim> {
        stream::iter(claims)
            .map(|claim| self.check_one(claim))
            .buffered(self.concurrency)
            .collect()
            .await
    }

    async fn check_one(&self, claim: ExtractedClaim) -> CheckedClaim {
        match self.service.predict(&claim.text, self.predict_timeout).await {
            Ok(response) => {
                let verdict = Verdict::from(response);
                let assessment = if verdict.is_true {
                    Assessment::True
                } else {
                    Assessment::False
                };
                let explanation = if verdict.is_true {
                    "This claim appears to be supported by reliable sources.".to_string()
                } else {
                    format!(
                        "This claim appears to be false based on our verification with {}% confidence.",
                        verdict.confidence
                    )
                };

                CheckedClaim {
                    claim: claim.text,
                    kinds: claim.kinds,
                    assessment,
                    confidence: verdict.confidence,
                    uncertain: verdict.confidence < self.uncertainty_threshold,
                    explanation,
                    error: None,
                }
            }
            Err(err) => {
                warn!(error = %err, "claim could not be verified");
                let explanation = match err {
                    // an unreadable body counts as a failed exchange, not a server verdict
                    ServiceError::Connection { .. }
                    | ServiceError::Timeout { .. }
                    | ServiceError::Decode { .. } => {
                        "Unable to verify claim due to connection error."
                    }
                    _ => "Unable to verify claim due to server error.",
                };

                CheckedClaim {
                    claim: claim.text,
                    kinds: claim.kinds,
                    assessment: Assessment::Unverified,
                    confidence: UNVERIFIED_CONFIDENCE,
                    uncertain: true,
                    explanation: explanation.to_string(),
                    error: Some(err.to_string()),
                }
            }
        }
    }
}

/// Overall accuracy (0-100) and the sentence describing it
pub fn score(claims: &[CheckedClaim]) -> (u8, &'static str) {
    if claims.is_empty() {
        return (100, "No factual claims were identified in this article.");
    }

    let verified = claims
        .iter()
        .filter(|c| c.assessment != Assessment::Unverified)
        .count();
    if verified == 0 {
        return (0, "None of the claims in this article could be verified.");
    }

    let true_count = claims
        .iter()
        .filter(|c| c.assessment == Assessment::True)
        .count();
    // round half up, integer only
    let accuracy = (true_count * 200 + verified) / (verified * 2);
    let accuracy = u8::try_from(accuracy).unwrap_or(100);

    let summary = match accuracy {
        90..=u8::MAX => "This article appears to be highly factual.",
        70..=89 => "This article contains mostly factual information with some inaccuracies.",
        50..=69 => "This article contains a mix of factual and non-factual information.",
        _ => "This article contains significant factual inaccuracies.",
    };
    (accuracy, summary)
}
