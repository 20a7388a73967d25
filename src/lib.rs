//! factprobe - exercise a fact-checking service
//!
//! factprobe drives an HTTP fact-checking service (`GET /health`,
//! `POST /predict`) with fixed claim sets or claims extracted from article
//! text, and reports the verdicts on the console or as JSON.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - **Domain Layer** (`domain`): models, errors and the `FactCheckService` port
//! - **Service Layer** (`services`): smoke and sample drivers, claim extraction, article analysis
//! - **Infrastructure Layer** (`infrastructure`): HTTP client, configuration, logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use factprobe::infrastructure::http::{HttpClientConfig, HttpFactCheckClient};
//! use factprobe::services::{NoopObserver, SmokeTestRunner};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = HttpFactCheckClient::new(HttpClientConfig::default())?;
//!     let report = SmokeTestRunner::new(Arc::new(client))
//!         .run(&factprobe::services::claim_sets::smoke_claims(), &mut NoopObserver)
//!         .await;
//!     println!("all passed: {}", report.all_passed);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    Article, ArticleAnalysis, Assessment, CheckedClaim, ClaimOutcome, ClaimResult, Config,
    ExtractedClaim, HealthCheck, SampleReport, SmokeReport, Summary, Verdict,
};
pub use domain::{FactCheckService, ServiceError};
pub use infrastructure::config::ConfigLoader;
pub use infrastructure::http::{HttpClientConfig, HttpFactCheckClient};
pub use services::{ArticleAnalyzer, ClaimExtractor, SampleRunner, SmokeTestRunner};
