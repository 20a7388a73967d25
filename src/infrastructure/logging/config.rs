use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::models::LoggingConfig;

/// Resolved logger settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Output format for stderr
    pub format: LogFormat,

    /// Directory for log files (optional, if None logs only to stderr)
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogSettings {
    /// Resolve settings from configuration and the `-v` count
    ///
    /// `-v` asks for `info`, `-vv` for `debug` and `-vvv` for `trace`. The
    /// more verbose of the requested and configured levels wins.
    pub fn resolve(config: &LoggingConfig, verbosity: u8) -> Self {
        let configured = config.level.to_lowercase();
        let requested = match verbosity {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        };
        let level = match requested {
            Some(level) if rank(level) > rank(&configured) => level.to_string(),
            _ => configured,
        };
        let format = if config.format == "json" {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        };

        Self {
            level,
            format,
            log_dir: config.log_dir.clone(),
        }
    }
}

const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Position in `LEVELS`, higher is more verbose; unknown levels rank lowest
fn rank(level: &str) -> Option<usize> {
    LEVELS.iter().position(|known| *known == level)
}

impl Default for LogSettings {
    fn default() -> Self {
        Self::resolve(&LoggingConfig::default(), 0)
    }
}
