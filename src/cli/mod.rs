//! Command-line interface: argument parsing, command execution and rendering.

pub mod commands;
pub mod context;
pub mod display;
pub mod progress;
pub mod types;

pub use context::CommandContext;
pub use types::{Cli, Commands};

/// Print an error in the selected output mode and exit with status 1
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let body = serde_json::json!({
            "ok": false,
            "error": format!("{err:#}"),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&body).unwrap_or_default()
        );
    } else {
        eprintln!("{} {err:#}", console::style("Error:").red().bold());
    }
    std::process::exit(1);
}
