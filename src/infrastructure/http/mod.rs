//! HTTP adapter for the fact-checking service.

pub mod client;

pub use client::{HttpClientConfig, HttpFactCheckClient};
