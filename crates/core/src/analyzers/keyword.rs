//! Keyword usage analysis.
//!
//! Tokenizes the visible body text, ranks recurring non-stopword terms, and
//! checks where the dominant term shows up: title, headings, and at what
//! density in the body. Both under-optimization and keyword stuffing are
//! flagged.

use crate::document::Document;
use crate::report::{AnalyzerOutcome, FailureKind};
use crate::text;

/// Scoring weights and thresholds for keyword analysis.
///
/// The weights are a tunable table, not a fixed law; the defaults sum to
/// 100. Identical input always produces identical output: term ranking
/// breaks frequency ties lexicographically.
#[derive(Debug, Clone)]
pub struct KeywordConfig {
    /// How many top terms to report.
    pub top_terms: usize,
    /// Minimum body word count below which the analyzer fails.
    pub min_word_count: usize,
    /// Lower bound of the acceptable density band, in percent.
    pub min_density: f64,
    /// Upper bound of the acceptable density band, in percent.
    pub max_density: f64,
    /// Points for the primary term appearing in the title.
    pub title_weight: u8,
    /// Points for the primary term appearing in at least one h1–h3.
    pub heading_weight: u8,
    /// Points for the primary term's density landing inside the band.
    pub density_weight: u8,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            top_terms: 5,
            min_word_count: 20,
            min_density: 1.0,
            max_density: 3.0,
            title_weight: 40,
            heading_weight: 30,
            density_weight: 30,
        }
    }
}

/// Minimum token length considered a candidate term.
const MIN_TERM_LEN: usize = 3;

/// Analyzes keyword usage on the page.
///
/// Fails with [`FailureKind::InsufficientContent`] when the body has fewer
/// than `min_word_count` words; everything else produces a score.
pub fn analyze(doc: &Document, config: &KeywordConfig) -> AnalyzerOutcome {
    let body = doc.body_text();
    let total_words = text::count_words(&body);

    if total_words < config.min_word_count {
        return AnalyzerOutcome::failed(
            FailureKind::InsufficientContent,
            format!(
                "body text has {} words, below the {} needed for keyword analysis",
                total_words, config.min_word_count
            ),
        );
    }

    let ranked = text::term_frequency(&body, MIN_TERM_LEN);
    let Some((primary, primary_count)) = ranked.first().cloned() else {
        return AnalyzerOutcome::failed(
            FailureKind::InsufficientContent,
            "body text contains no rankable terms".to_string(),
        );
    };

    let mut insights = Vec::new();
    let mut score = 0u8;

    let top: Vec<&str> = ranked.iter().take(config.top_terms).map(|(term, _)| term.as_str()).collect();
    insights.push(format!("top recurring terms: {}", top.join(", ")));

    let title = doc.title().unwrap_or_default().to_lowercase();
    if title.contains(&primary) {
        score += config.title_weight;
        insights.push(format!("primary term '{}' present in title", primary));
    } else {
        insights.push(format!("primary term '{}' missing from title", primary));
    }

    let in_heading = (1..=3).any(|level| doc.headings(level).iter().any(|h| h.to_lowercase().contains(&primary)));
    if in_heading {
        score += config.heading_weight;
        insights.push(format!("primary term '{}' present in at least one heading", primary));
    } else {
        insights.push(format!("primary term '{}' missing from all h1-h3 headings", primary));
    }

    let density = primary_count as f64 / total_words as f64 * 100.0;
    if density > config.max_density {
        insights.push(format!(
            "keyword density {:.1}% exceeds recommended {:.0}-{:.0}% band (possible stuffing)",
            density, config.min_density, config.max_density
        ));
    } else if density < config.min_density {
        score += config.density_weight / 2;
        insights.push(format!(
            "keyword density {:.1}% below recommended {:.0}-{:.0}% band",
            density, config.min_density, config.max_density
        ));
    } else {
        score += config.density_weight;
        insights.push(format!(
            "keyword density {:.1}% within recommended {:.0}-{:.0}% band",
            density, config.min_density, config.max_density
        ));
    }

    AnalyzerOutcome::scored(score, insights)
}
