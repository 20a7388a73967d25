//! Built-in claim lists and claim-file parsing.

use anyhow::{Context, Result};
use std::path::Path;

/// Claims sent by the smoke driver
pub const SMOKE_CLAIMS: &[&str] = &[
    "The US economy grew by 3.5% last year.",
    "The vaccine is 95% effective against the virus.",
    "Amazon stock increased by 20% over the past month.",
    "The federal government spent $2.3 trillion on healthcare.",
];

/// Claims sent by the sample driver, grouped by category
pub const SAMPLE_CLAIM_GROUPS: &[(&str, &[&str])] = &[
    (
        "numerical",
        &[
            "Amazon reported revenue of $514.22 billion in 2022.",
            "The unemployment rate fell to 4.5% last month.",
            "The company has over 25,000 employees worldwide.",
            "The project was completed on January 15, 2023.",
        ],
    ),
    (
        "factual",
        &[
            "Paris is the capital of France and is known for the Eiffel Tower.",
            "The Earth orbits the Sun once every 365.25 days.",
            "According to researchers, coffee consumption is linked to reduced risk of heart disease.",
            "SpaceX successfully launched 58 Starlink satellites into orbit yesterday.",
        ],
    ),
    (
        "statistical",
        &[
            "Studies show that 72% of consumers prefer eco-friendly packaging.",
            "The average price of a new home increased by $45,000 compared to last year.",
            "The survey found that four out of five doctors recommend this treatment.",
        ],
    ),
    (
        "comparison",
        &[
            "Electric vehicles are more energy-efficient than gasoline cars.",
            "This year's budget is 15% higher than last year's allocation.",
            "Women are now more likely than men to graduate from college.",
        ],
    ),
];

pub fn smoke_claims() -> Vec<String> {
    SMOKE_CLAIMS.iter().map(|c| (*c).to_string()).collect()
}

/// Sample claims flattened in category order
pub fn sample_claims() -> Vec<String> {
    SAMPLE_CLAIM_GROUPS
        .iter()
        .flat_map(|(_, claims)| claims.iter().map(|c| (*c).to_string()))
        .collect()
}

/// Parse one claim per line, skipping blank lines and `#` comments
pub fn parse_claims(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Read a claims file; an empty file is an error
pub fn load_claims_file(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read claims file {}", path.display()))?;
    let claims = parse_claims(&text);
    if claims.is_empty() {
        anyhow::bail!("Claims file {} contains no claims", path.display());
    }
    Ok(claims)
}
