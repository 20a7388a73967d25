//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Pretty or JSON formatting on stderr
//! - Optional daily rolling JSON log files
//! - `RUST_LOG` overrides through `EnvFilter`

pub mod config;
pub mod logger;

pub use config::{LogFormat, LogSettings};
pub use logger::LoggerImpl;
