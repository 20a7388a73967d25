//! Infrastructure layer module
//!
//! This module contains the adapters around external systems:
//! - HTTP client for the fact-checking service
//! - Configuration management
//! - Logging infrastructure
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod http;
pub mod logging;
