use crate::domain::models::{ClaimOutcome, HealthCheck};

/// Receives progress events while a driver runs
///
/// The console renderer prints each event as it happens; JSON mode uses
/// [`NoopObserver`] and prints the final report instead.
pub trait RunObserver: Send {
    fn health_checked(&mut self, _health: &HealthCheck) {}

    /// Called once after a healthy probe, before the first claim
    fn run_started(&mut self, _total: usize) {}

    fn claim_started(&mut self, _number: usize, _claim: &str) {}

    fn claim_finished(&mut self, _outcome: &ClaimOutcome) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RunObserver for NoopObserver {}
