pub mod analysis;
pub mod claim;
pub mod config;
pub mod report;

pub use analysis::{Article, ArticleAnalysis, Assessment, CheckedClaim, ClaimKind, ExtractedClaim};
pub use claim::{HealthStatus, PredictRequest, PredictResponse, Verdict};
pub use config::{AnalysisConfig, Config, LoggingConfig, ServiceConfig};
pub use report::{ClaimOutcome, ClaimResult, HealthCheck, SampleReport, SmokeReport, Summary};
