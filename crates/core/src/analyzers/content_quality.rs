//! Content quality analysis.
//!
//! Combines a content-depth sub-score (word count against thresholds) with
//! a structure sub-score (heading hierarchy) and a readability proxy
//! (sentence length and syllable load). Thin pages score near zero with a
//! "thin content" insight; they do not fail the dimension.

use crate::document::Document;
use crate::report::AnalyzerOutcome;
use crate::text;

/// Scoring weights and thresholds for content quality.
///
/// Defaults sum to 100 across the three sub-scores.
#[derive(Debug, Clone)]
pub struct ContentQualityConfig {
    /// Word count below which a page is considered thin content.
    pub thin_word_count: usize,
    /// Word count at which the depth sub-score maxes out.
    pub strong_word_count: usize,
    /// Average sentence length above which an insight is raised.
    pub max_avg_sentence_len: f64,
    /// Points available for content depth.
    pub depth_weight: u8,
    /// Points available for heading structure.
    pub structure_weight: u8,
    /// Points available for readability.
    pub readability_weight: u8,
}

impl Default for ContentQualityConfig {
    fn default() -> Self {
        Self {
            thin_word_count: 300,
            strong_word_count: 900,
            max_avg_sentence_len: 25.0,
            depth_weight: 50,
            structure_weight: 30,
            readability_weight: 20,
        }
    }
}

/// Analyzes content depth, structure, and readability.
pub fn analyze(doc: &Document, config: &ContentQualityConfig) -> AnalyzerOutcome {
    let body = doc.body_text();
    let word_count = text::count_words(&body);
    let paragraph_count = doc.count("p");

    let mut insights = Vec::new();
    insights.push(format!("{} words across {} paragraphs", word_count, paragraph_count));

    // Thin pages are scored on depth alone so they land near zero.
    if word_count < config.thin_word_count {
        insights.push(format!(
            "thin content: {} words is below the {}-word minimum for substantive coverage",
            word_count, config.thin_word_count
        ));
        let depth = word_count as f64 / config.thin_word_count as f64;
        let score = (depth * 10.0).round() as u8;
        return AnalyzerOutcome::scored(score, insights);
    }

    let depth_fraction = (word_count as f64 / config.strong_word_count as f64).min(1.0);
    let mut score = depth_fraction * config.depth_weight as f64;

    score += structure_points(doc, config, &mut insights);
    score += readability_points(&body, config, &mut insights);

    AnalyzerOutcome::scored(score.round() as u8, insights)
}

/// Heading-structure sub-score: one h1, sectioning h2s, no skipped levels.
fn structure_points(doc: &Document, config: &ContentQualityConfig, insights: &mut Vec<String>) -> f64 {
    let weight = config.structure_weight as f64;
    let h1_count = doc.heading_count(1);
    let h2_count = doc.heading_count(2);
    let h3_count = doc.heading_count(3);
    let mut points = 0.0;

    match h1_count {
        1 => points += weight / 2.0,
        0 => insights.push("no h1 heading found".to_string()),
        n => insights.push(format!("{} h1 headings found, expected exactly one", n)),
    }

    if h2_count > 0 {
        points += weight / 4.0;
    } else {
        insights.push("no h2 headings; long content benefits from section headings".to_string());
    }

    if h3_count > 0 && h2_count == 0 {
        insights.push("h3 headings used without any h2 (skipped heading level)".to_string());
    } else {
        points += weight / 4.0;
    }

    points
}

/// Readability sub-score from the Flesch-style reading ease proxy.
fn readability_points(body: &str, config: &ContentQualityConfig, insights: &mut Vec<String>) -> f64 {
    let avg_sentence = text::avg_sentence_length(body);
    if avg_sentence > config.max_avg_sentence_len {
        insights.push(format!(
            "average sentence length {:.0} words exceeds {:.0} (hard to scan)",
            avg_sentence, config.max_avg_sentence_len
        ));
    }

    let ease = text::reading_ease(body);
    insights.push(format!("readability score {:.0}/100", ease));

    ease / 100.0 * config.readability_weight as f64
}
