//! CLI command implementations.
//!
//! Every `execute` returns the process exit code on success.

pub mod analyze;
pub mod config;
pub mod extract;
pub mod health;
pub mod sample;
pub mod smoke;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Read article text from a file, or from stdin when the path is `-`
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read article from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read article {}", path.display()))
    }
}
