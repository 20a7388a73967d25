//! Sample driver: strict health probe, bounded requests, summary statistics.

use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::domain::models::{ClaimOutcome, ClaimResult, SampleReport, Summary, Verdict};
use crate::domain::ports::FactCheckService;
use crate::services::health_probe::{probe_health, HealthPolicy};
use crate::services::observer::RunObserver;

/// Timeouts applied by the sample driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleTimeouts {
    pub health: Duration,
    pub predict: Duration,
}

impl Default for SampleTimeouts {
    fn default() -> Self {
        Self {
            health: Duration::from_secs(3),
            predict: Duration::from_secs(5),
        }
    }
}

/// Sends claims one by one and summarizes the verdicts
///
/// A connection failure stops the run; any other failure is recorded and
/// the next claim is sent.
pub struct SampleRunner {
    service: Arc<dyn FactCheckService>,
    timeouts: SampleTimeouts,
}

impl SampleRunner {
    pub fn new(service: Arc<dyn FactCheckService>, timeouts: SampleTimeouts) -> Self {
        Self { service, timeouts }
    }

    #[instrument(skip_all, fields(claims = claims.len()))]
    pub async fn run(&self, claims: &[String], observer: &mut dyn RunObserver) -> SampleReport {
        let started_at = Utc::now();
        let health = probe_health(
            self.service.as_ref(),
            HealthPolicy::RequireHealthyBody,
            Some(self.timeouts.health),
        )
        .await;
        observer.health_checked(&health);

        if !health.healthy {
            return SampleReport {
                health,
                planned: claims.len(),
                outcomes: Vec::new(),
                aborted: false,
                summary: None,
                started_at,
                finished_at: Utc::now(),
            };
        }

        observer.run_started(claims.len());
        let mut outcomes = Vec::with_capacity(claims.len());
        let mut aborted = false;

        for (index, claim) in claims.iter().enumerate() {
            let number = index + 1;
            observer.claim_started(number, claim);

            let result = match self
                .service
                .predict(claim, Some(self.timeouts.predict))
                .await
            {
                Ok(response) => ClaimResult::Verified(Verdict::from(response)),
                Err(error) => {
                    warn!(number, error = %error, "claim failed");
                    ClaimResult::Failed { error }
                }
            };

            let outcome = ClaimOutcome {
                number,
                claim: claim.clone(),
                result,
            };
            let stop = outcome.error().is_some_and(|e| e.is_connection());
            debug!(number, passed = outcome.passed(), "claim checked");
            observer.claim_finished(&outcome);
            outcomes.push(outcome);

            if stop {
                warn!(
                    remaining = claims.len() - number,
                    "lost connection to the service, stopping"
                );
                aborted = true;
                break;
            }
        }

        let summary = Summary::from_outcomes(&outcomes);
        SampleReport {
            health,
            planned: claims.len(),
            outcomes,
            aborted,
            summary: Some(summary),
            started_at,
            finished_at: Utc::now(),
        }
    }
}
