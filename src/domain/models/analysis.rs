//! Article analysis models: extracted claims and their assessments.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Free text to analyze, split into paragraphs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: Option<String>,
    pub url: Option<String>,
    pub paragraphs: Vec<String>,
}

impl Article {
    /// Split raw text into paragraphs on blank lines
    pub fn from_text(text: &str) -> Self {
        let mut paragraphs = Vec::new();
        let mut current: Vec<&str> = Vec::new();

        for line in text.lines() {
            if line.trim().is_empty() {
                if !current.is_empty() {
                    paragraphs.push(current.join(" "));
                    current.clear();
                }
            } else {
                current.push(line.trim());
            }
        }
        if !current.is_empty() {
            paragraphs.push(current.join(" "));
        }

        Self {
            title: None,
            url: None,
            paragraphs,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: Option<String>) -> Self {
        self.url = url;
        self
    }
}

/// Why a sentence was considered check-worthy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimKind {
    Numerical,
    Factual,
    Statistic,
    Comparison,
    Dated,
}

impl ClaimKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Numerical => "numerical",
            Self::Factual => "factual",
            Self::Statistic => "statistic",
            Self::Comparison => "comparison",
            Self::Dated => "dated",
        }
    }
}

impl fmt::Display for ClaimKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sentence pulled out of an article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedClaim {
    pub text: String,
    pub kinds: Vec<ClaimKind>,
}

/// Assessment of a claim after checking it against the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Assessment {
    True,
    False,
    /// The service could not be reached or answered with an error
    Unverified,
}

impl Assessment {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Unverified => "UNVERIFIED",
        }
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A claim with the service's assessment attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckedClaim {
    pub claim: String,
    pub kinds: Vec<ClaimKind>,
    pub assessment: Assessment,
    pub confidence: f64,
    pub uncertain: bool,
    pub explanation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Overall result of analyzing an article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleAnalysis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Share of verified claims judged true, 0-100
    pub overall_accuracy: u8,
    pub summary: String,
    pub claims: Vec<CheckedClaim>,
}

impl ArticleAnalysis {
    pub fn verified_count(&self) -> usize {
        self.claims
            .iter()
            .filter(|c| c.assessment != Assessment::Unverified)
            .count()
    }

    pub fn count(&self, assessment: Assessment) -> usize {
        self.claims
            .iter()
            .filter(|c| c.assessment == assessment)
            .count()
    }
}
