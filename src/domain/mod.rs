//! Domain layer for factprobe
//!
//! Payload models, run reports, the service port and the error taxonomy.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::ServiceError;
pub use ports::FactCheckService;
