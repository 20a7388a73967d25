//! Verdict and status color mapping for CLI output.
//!
//! Coloring goes through `console`, which disables ANSI codes when stdout is
//! not a terminal or `NO_COLOR` is set.

use console::{style, StyledObject};

use crate::domain::models::Assessment;

/// TRUE in green, FALSE in red
pub fn colorize_verdict(is_true: bool) -> StyledObject<&'static str> {
    if is_true {
        style("TRUE").green()
    } else {
        style("FALSE").red()
    }
}

/// Assessment label with the verdict colors; unverified claims are yellow
pub fn colorize_assessment(assessment: Assessment) -> StyledObject<&'static str> {
    match assessment {
        Assessment::True => style(assessment.as_str()).green(),
        Assessment::False => style(assessment.as_str()).red(),
        Assessment::Unverified => style(assessment.as_str()).yellow(),
    }
}

/// Accuracy percentage colored by band
pub fn colorize_accuracy(accuracy: u8) -> StyledObject<String> {
    let text = format!("{accuracy}%");
    match accuracy {
        90..=u8::MAX => style(text).green().bold(),
        70..=89 => style(text).green(),
        50..=69 => style(text).yellow(),
        _ => style(text).red().bold(),
    }
}

/// Cyan `===== title =====` banner
pub fn banner(title: &str) -> String {
    style(format!("===== {title} =====")).cyan().to_string()
}

/// Styled label for detail views (bold + dimmed colon).
pub fn label(name: &str) -> String {
    format!("{}{}", style(name).bold(), style(":").dim())
}
