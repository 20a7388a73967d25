pub mod article_analyzer;
pub mod claim_extractor;
pub mod claim_sets;
pub mod health_probe;
pub mod observer;
pub mod sample_run;

#[cfg(test)]
pub(crate) mod testing;

pub use article_analyzer::ArticleAnalyzer;
pub use claim_extractor::ClaimExtractor;
pub use health_probe::{probe_health, HealthPolicy};
pub use observer::{NoopObserver, RunObserver};
pub use sample_run::{SampleRunner, SampleTimeouts};
pub use smoke_test::SmokeTestRunner;
