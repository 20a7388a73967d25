//! Pattern-based extraction of check-worthy sentences from article text.

use regex::{Regex, RegexSet};
use std::collections::HashSet;

use crate::domain::models::{ClaimKind, ExtractedClaim};

/// Sentences with this many characters or fewer are ignored
const MIN_SENTENCE_CHARS: usize = 10;

/// Factual sentences without a named entity must be longer than this
const LONG_SENTENCE_CHARS: usize = 40;

const MONTHS: &str =
    "January|February|March|April|May|June|July|August|September|October|November|December";

const UNITS: &str =
    "people|individuals|users|customers|years|months|days|kilometers|miles|meters|feet|kg|tons|pounds";

/// Extracts sentences that carry numbers, dates, statistics, comparisons or
/// factual assertions
#[derive(Debug, Clone)]
pub struct ClaimExtractor {
    max_claims: usize,
    sentence_split: Regex,
    numerical: RegexSet,
    date: Regex,
    factual_indicators: RegexSet,
    named_entity: Regex,
    statistic: Regex,
    comparison: Regex,
    temporal: Regex,
}

impl ClaimExtractor {
    /// Create an extractor returning at most `max_claims` claims per article
    pub fn new(max_claims: usize) -> Self {
        let date = format!(
            r"(?i)\b({MONTHS})\s+\d{{1,2}}(,\s+\d{{4}})?\b|\b\d{{1,2}}\s+({MONTHS})(,\s+\d{{4}})?\b|\b\d{{4}}\b"
        );

        Self {
            max_claims,
            sentence_split: Regex::new(r"[.!?;]+").expect("valid sentence pattern"),
            numerical: RegexSet::new([
                r"(?i)\$\d+(\.\d+)?(,\d+)*\s*(million|billion|trillion|thousand)?".to_string(),
                // trailing \b dropped: `%` is not a word character, so `95% effective` never matched
                r"\b\d+(\.\d+)?%".to_string(),
                format!(r"(?i)\b\d+(\.\d+)?(,\d+)*\s*({UNITS})\b"),
                date.clone(),
            ])
            .expect("valid numerical patterns"),
            date: Regex::new(&date).expect("valid date pattern"),
            factual_indicators: RegexSet::new([
                r"(?i)\b(is|was|are|were)\s+(the|a|an)\s+.{3,30}\b",
                r"(?i)\b(has|had|have|having)\s+.{3,30}\b",
                r"(?i)\b(confirmed|announced|reported|stated|said|claimed|found|discovered|revealed)\s+that\b",
                r"(?i)\baccording to\b.{5,40}",
                r"(?i)\bin fact\b",
                r"(?i)\b(studies|research|data|evidence|experts|scientists)\s+(show|suggest|indicate|reveal|confirm)\b",
                r"(?i)\b(increased|decreased|reduced|improved|worsened|changed)\s+by\b",
                r"(?i)\bcaused\s+by\b",
                r"(?i)\b(leads|led)\s+to\b",
                r"(?i)\b(results|resulted)\s+in\b",
                r"(?i)\bis\s+known\s+for\b",
                r"(?i)\b(first|largest|smallest|highest|lowest|best|worst|most|least)\b",
            ])
            .expect("valid factual patterns"),
            named_entity: Regex::new(r"\b[A-Z][a-z]+(\s+[A-Z][a-z]+){1,5}\b|\b[A-Z]{2,}\b")
                .expect("valid entity pattern"),
            statistic: Regex::new(
                r"(?i)\b(statistics|stat|study|poll|survey|rate|average|mean|median|percentage)\b",
            )
            .expect("valid statistic pattern"),
            comparison: Regex::new(
                r"(?i)\b(more than|less than|greater|higher|lower|better|worse|increased|decreased|compared to|comparison)\b",
            )
            .expect("valid comparison pattern"),
            temporal: Regex::new(r"(?i)\b(since|until|before|after|during|when)\b")
                .expect("valid temporal pattern"),
        }
    }

    /// Split a paragraph into trimmed sentences longer than the minimum
    pub fn sentences<'a>(&'a self, paragraph: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.sentence_split
            .split(paragraph)
            .map(str::trim)
            .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
    }

    /// Reasons a sentence is worth checking; empty when it is not
    pub fn classify(&self, sentence: &str) -> Vec<ClaimKind> {
        let mut kinds = Vec::new();

        let has_date = self.date.is_match(sentence);
        if self.numerical.is_match(sentence) {
            kinds.push(ClaimKind::Numerical);
        }

        let long = sentence.chars().count() > LONG_SENTENCE_CHARS;
        if self.factual_indicators.is_match(sentence)
            && (long || self.named_entity.is_match(sentence))
        {
            kinds.push(ClaimKind::Factual);
        }

        if self.statistic.is_match(sentence) {
            kinds.push(ClaimKind::Statistic);
        }
        if self.comparison.is_match(sentence) {
            kinds.push(ClaimKind::Comparison);
        }
        if has_date && self.temporal.is_match(sentence) {
            kinds.push(ClaimKind::Dated);
        }

        kinds
    }

    /// Extract claims from paragraphs in document order, skipping duplicates
    pub fn extract(&self, paragraphs: &[String]) -> Vec<ExtractedClaim> {
        let mut seen = HashSet::new();
        let mut claims = Vec::new();

        for paragraph in paragraphs {
            for sentence in self.sentences(paragraph) {
                if claims.len() == self.max_claims {
                    return claims;
                }
                if seen.contains(sentence) {
                    continue;
                }

                let kinds = self.classify(sentence);
                if !kinds.is_empty() {
                    seen.insert(sentence.to_string());
                    claims.push(ExtractedClaim {
                        text: sentence.to_string(),
                        kinds,
                    });
                }
            }
        }

        claims
    }
}

impl Default for ClaimExtractor {
    fn default() -> Self {
        Self::new(15)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> ClaimExtractor {
        ClaimExtractor::default()
    }

    #[test]
    fn test_short_fragments_are_dropped() {
        let ex = extractor();
        let sentences: Vec<&str> = ex.sentences("Hi there. It rained; Ok! A longer sentence here.").collect();
        assert_eq!(sentences, vec!["A longer sentence here"]);
    }

    #[test]
    fn test_currency_splits_on_decimal_point() {
        let ex = extractor();
        let claims = ex.extract(&["Amazon reported revenue of $514.22 billion in 2022.".to_string()]);
        let texts: Vec<&str> = claims.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["Amazon reported revenue of $514", "22 billion in 2022"]);
        assert!(claims.iter().all(|c| c.kinds.contains(&ClaimKind::Numerical)));
    }

    #[test]
    fn test_factual_claim_with_named_entity() {
        let kinds = extractor()
            .classify("Paris is the capital of France and is known for the Eiffel Tower");
        assert_eq!(kinds, vec![ClaimKind::Factual]);
    }

    #[test]
    fn test_factual_indicator_needs_entity_or_length() {
        // indicator present but short and no multi-word proper noun
        assert!(extractor().classify("the dog has eaten it").is_empty());
    }

    #[test]
    fn test_percentage_and_research_indicator() {
        let kinds = extractor()
            .classify("Studies show that 72% of consumers prefer eco-friendly packaging");
        assert_eq!(kinds, vec![ClaimKind::Numerical, ClaimKind::Factual]);
    }

    #[test]
    fn test_percentage_followed_by_word_is_numerical() {
        let ex = extractor();
        assert!(ex
            .classify("The vaccine is 95% effective against the virus")
            .contains(&ClaimKind::Numerical));
        assert!(ex
            .classify("Turnout reached 61.5%, a record")
            .contains(&ClaimKind::Numerical));
    }

    #[test]
    fn test_statistic_and_comparison_vocabulary() {
        let ex = extractor();
        assert!(ex
            .classify("the survey covered many households")
            .contains(&ClaimKind::Statistic));
        assert!(ex
            .classify("costs were higher in the north")
            .contains(&ClaimKind::Comparison));
    }

    #[test]
    fn test_dated_requires_temporal_word() {
        let ex = extractor();
        let kinds = ex.classify("Prices have risen since March 3, 2021");
        assert_eq!(kinds, vec![ClaimKind::Numerical, ClaimKind::Dated]);

        let kinds = ex.classify("The report came out on March 3");
        assert!(!kinds.contains(&ClaimKind::Dated));
    }

    #[test]
    fn test_plain_sentence_is_not_a_claim() {
        assert!(extractor().classify("the weather was nice today").is_empty());
    }

    #[test]
    fn test_duplicates_are_skipped() {
        let paragraphs = vec![
            "Unemployment fell to 4 percent in 2023. Unemployment fell to 4 percent in 2023.".to_string(),
            "Unemployment fell to 4 percent in 2023.".to_string(),
        ];
        assert_eq!(extractor().extract(&paragraphs).len(), 1);
    }

    #[test]
    fn test_limit_is_enforced_in_document_order() {
        let paragraphs: Vec<String> = (0..30)
            .map(|i| format!("The city recorded {i} tons of waste in 2020."))
            .collect();
        let claims = ClaimExtractor::new(5).extract(&paragraphs);
        assert_eq!(claims.len(), 5);
        assert_eq!(claims[0].text, "The city recorded 0 tons of waste in 2020");
        assert_eq!(claims[4].text, "The city recorded 4 tons of waste in 2020");
    }
}
