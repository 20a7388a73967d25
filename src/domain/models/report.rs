//! Results of smoke and sample runs.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::claim::Verdict;
use crate::domain::errors::ServiceError;

/// Result of probing the health endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthCheck {
    pub url: String,
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ServiceError>,
}

impl HealthCheck {
    pub fn healthy(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            healthy: true,
            error: None,
        }
    }

    pub fn failed(url: impl Into<String>, error: ServiceError) -> Self {
        Self {
            url: url.into(),
            healthy: false,
            error: Some(error),
        }
    }
}

/// What happened to a single claim
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ClaimResult {
    Verified(Verdict),
    Failed { error: ServiceError },
}

/// One claim together with its result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimOutcome {
    /// 1-based position in the claim list
    pub number: usize,
    pub claim: String,
    pub result: ClaimResult,
}

impl ClaimOutcome {
    pub fn verdict(&self) -> Option<&Verdict> {
        match &self.result {
            ClaimResult::Verified(verdict) => Some(verdict),
            ClaimResult::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&ServiceError> {
        match &self.result {
            ClaimResult::Verified(_) => None,
            ClaimResult::Failed { error } => Some(error),
        }
    }

    pub const fn passed(&self) -> bool {
        matches!(self.result, ClaimResult::Verified(_))
    }
}

/// Aggregate over the verdicts collected in a run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Number of claims that produced a verdict
    pub total: usize,
    pub true_count: usize,
    pub false_count: usize,
    /// Mean confidence over collected verdicts, `None` when there are none
    pub average_confidence: Option<f64>,
}

impl Summary {
    /// Summarize the verdicts among `outcomes`, ignoring failures
    pub fn from_outcomes(outcomes: &[ClaimOutcome]) -> Self {
        let verdicts: Vec<&Verdict> = outcomes.iter().filter_map(ClaimOutcome::verdict).collect();
        let total = verdicts.len();
        let true_count = verdicts.iter().filter(|v| v.is_true).count();
        let average_confidence = if total == 0 {
            None
        } else {
            #[allow(clippy::cast_precision_loss)]
            let mean = verdicts.iter().map(|v| v.confidence).sum::<f64>() / total as f64;
            Some(mean)
        };

        Self {
            total,
            true_count,
            false_count: total - true_count,
            average_confidence,
        }
    }
}

/// Report of a smoke run
#[derive(Debug, Clone, Serialize)]
pub struct SmokeReport {
    pub health: HealthCheck,
    pub outcomes: Vec<ClaimOutcome>,
    pub all_passed: bool,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl SmokeReport {
    pub const fn exit_code(&self) -> i32 {
        if self.all_passed {
            0
        } else {
            1
        }
    }
}

/// Report of a sample run
#[derive(Debug, Clone, Serialize)]
pub struct SampleReport {
    pub health: HealthCheck,
    /// Number of claims the run intended to send
    pub planned: usize,
    pub outcomes: Vec<ClaimOutcome>,
    /// Set when a connection failure stopped the run early
    pub aborted: bool,
    /// Absent when the health check failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl SampleReport {
    /// True when the service was healthy and every planned claim got a verdict
    pub fn all_succeeded(&self) -> bool {
        self.health.healthy
            && !self.aborted
            && self.outcomes.len() == self.planned
            && self.outcomes.iter().all(ClaimOutcome::passed)
    }

    pub fn exit_code(&self) -> i32 {
        i32::from(!self.all_succeeded())
    }
}
