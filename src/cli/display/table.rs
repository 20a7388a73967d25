//! Table output formatting for CLI commands
//!
//! Renders claim outcomes, extracted claims and article analyses with
//! comfy-table.

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};

use super::truncate;
use crate::domain::models::{Assessment, CheckedClaim, ClaimOutcome, ExtractedClaim};

const CLAIM_COLUMN_WIDTH: usize = 60;

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
    /// Maximum width for tables (None = auto)
    max_width: Option<u16>,
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new() -> Self {
        Self {
            use_colors: console::colors_enabled(),
            max_width: None,
        }
    }

    /// Create a new table formatter with custom settings
    pub const fn with_config(use_colors: bool, max_width: Option<u16>) -> Self {
        Self {
            use_colors,
            max_width,
        }
    }

    /// Per-claim results of a smoke or sample run
    pub fn format_outcomes(&self, outcomes: &[ClaimOutcome]) -> String {
        let mut table = self.create_base_table();
        table.set_header(header(&["#", "Claim", "Result", "Confidence"]));

        for outcome in outcomes {
            let (result, confidence) = match (outcome.verdict(), outcome.error()) {
                (Some(verdict), _) => (
                    self.colored(verdict.label(), verdict_color(verdict.is_true)),
                    Cell::new(format!("{}%", verdict.confidence)),
                ),
                (None, Some(error)) => (
                    self.colored(&format!("ERROR ({})", error.kind()), Color::Yellow),
                    Cell::new("-"),
                ),
                (None, None) => (Cell::new("-"), Cell::new("-")),
            };

            table.add_row(vec![
                Cell::new(outcome.number),
                Cell::new(truncate(&outcome.claim, CLAIM_COLUMN_WIDTH)),
                result,
                confidence,
            ]);
        }

        table.to_string()
    }

    /// Claims pulled out of an article
    pub fn format_extracted(&self, claims: &[ExtractedClaim]) -> String {
        let mut table = self.create_base_table();
        table.set_header(header(&["#", "Claim", "Kinds"]));

        for (index, claim) in claims.iter().enumerate() {
            table.add_row(vec![
                Cell::new(index + 1),
                Cell::new(truncate(&claim.text, CLAIM_COLUMN_WIDTH)),
                Cell::new(join_kinds(claim)),
            ]);
        }

        table.to_string()
    }

    /// Checked claims of an analyzed article
    pub fn format_checked(&self, claims: &[CheckedClaim]) -> String {
        let mut table = self.create_base_table();
        table.set_header(header(&["#", "Claim", "Result", "Confidence", "Uncertain"]));

        for (index, claim) in claims.iter().enumerate() {
            let color = match claim.assessment {
                Assessment::True => Color::Green,
                Assessment::False => Color::Red,
                Assessment::Unverified => Color::Yellow,
            };
            let uncertain = if claim.uncertain { "yes" } else { "no" };

            table.add_row(vec![
                Cell::new(index + 1),
                Cell::new(truncate(&claim.claim, CLAIM_COLUMN_WIDTH)),
                self.colored(claim.assessment.as_str(), color),
                Cell::new(format!("{}%", claim.confidence)),
                Cell::new(uncertain),
            ]);
        }

        table.to_string()
    }

    fn colored(&self, text: &str, color: Color) -> Cell {
        if self.use_colors {
            Cell::new(text).fg(color)
        } else {
            Cell::new(text)
        }
    }

    fn create_base_table(&self) -> Table {
        let mut table = Table::new();

        // Use UTF-8 preset for nice borders
        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        if let Some(width) = self.max_width {
            table.set_width(width);
        }

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn header(names: &[&str]) -> Vec<Cell> {
    names
        .iter()
        .map(|name| Cell::new(name).add_attribute(Attribute::Bold))
        .collect()
}

const fn verdict_color(is_true: bool) -> Color {
    if is_true {
        Color::Green
    } else {
        Color::Red
    }
}

fn join_kinds(claim: &ExtractedClaim) -> String {
    claim
        .kinds
        .iter()
        .map(|k| k.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ServiceError;
    use crate::domain::models::{ClaimKind, ClaimResult, Verdict};

    fn formatter() -> TableFormatter {
        TableFormatter::with_config(false, Some(120))
    }

    #[test]
    fn test_outcome_table_shows_verdict_and_error() {
        let outcomes = vec![
            ClaimOutcome {
                number: 1,
                claim: "Paris is the capital of France.".to_string(),
                result: ClaimResult::Verified(Verdict {
                    is_true: true,
                    confidence: 97.0,
                    status: "ok".to_string(),
                }),
            },
            ClaimOutcome {
                number: 2,
                claim: "The moon is made of cheese.".to_string(),
                result: ClaimResult::Failed {
                    error: ServiceError::Status {
                        code: 500,
                        body: String::new(),
                    },
                },
            },
        ];

        let rendered = formatter().format_outcomes(&outcomes);
        assert!(rendered.contains("TRUE"));
        assert!(rendered.contains("97%"));
        assert!(rendered.contains("ERROR (status)"));
    }

    #[test]
    fn test_extracted_table_lists_kinds() {
        let claims = vec![ExtractedClaim {
            text: "Sales rose 12% in 2021".to_string(),
            kinds: vec![ClaimKind::Numerical, ClaimKind::Dated],
        }];
        let rendered = formatter().format_extracted(&claims);
        assert!(rendered.contains("numerical, dated"));
    }
}
