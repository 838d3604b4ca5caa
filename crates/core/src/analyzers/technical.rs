//! Technical SEO checks.
//!
//! A battery of markup and response checks, each contributing a weighted
//! slice of the score: title and meta description within length bounds,
//! canonical link, mobile viewport, structured data, image alt coverage,
//! HTTPS, and response status health. Every failed check appends one
//! insight naming the missing or malformed element. Purely derived from the
//! document and its fetch metadata; no network calls.

use crate::document::Document;
use crate::report::AnalyzerOutcome;

/// Weight table for the technical checks. Defaults sum to 100.
#[derive(Debug, Clone)]
pub struct TechnicalConfig {
    /// Points for a single title within length bounds.
    pub title_weight: u8,
    /// Points for a meta description within length bounds.
    pub description_weight: u8,
    /// Points for a canonical link tag.
    pub canonical_weight: u8,
    /// Points for a mobile viewport meta tag.
    pub viewport_weight: u8,
    /// Points for structured-data markers.
    pub structured_data_weight: u8,
    /// Points for image alt coverage (scaled by the coverage ratio).
    pub alt_coverage_weight: u8,
    /// Points for HTTPS on the resolved final URL.
    pub https_weight: u8,
    /// Points for a healthy (2xx) response status.
    pub status_weight: u8,
    /// Acceptable title length range in characters.
    pub title_len: (usize, usize),
    /// Acceptable meta-description length range in characters.
    pub description_len: (usize, usize),
    /// Alt coverage ratio at which full points are awarded.
    pub alt_coverage_target: f64,
}

impl Default for TechnicalConfig {
    fn default() -> Self {
        Self {
            title_weight: 15,
            description_weight: 15,
            canonical_weight: 10,
            viewport_weight: 15,
            structured_data_weight: 10,
            alt_coverage_weight: 15,
            https_weight: 10,
            status_weight: 10,
            title_len: (10, 60),
            description_len: (50, 160),
            alt_coverage_target: 0.8,
        }
    }
}

/// Runs the technical check battery over the document.
pub fn analyze(doc: &Document, config: &TechnicalConfig) -> AnalyzerOutcome {
    let mut insights = Vec::new();
    let mut score = 0.0f64;

    score += title_check(doc, config, &mut insights);
    score += description_check(doc, config, &mut insights);

    if doc.canonical().is_some() {
        score += config.canonical_weight as f64;
    } else {
        insights.push("no canonical link tag".to_string());
    }

    if doc.viewport().is_some() {
        score += config.viewport_weight as f64;
    } else {
        insights.push("no mobile viewport meta tag".to_string());
    }

    if doc.has_structured_data() {
        score += config.structured_data_weight as f64;
    } else {
        insights.push("no structured data markers".to_string());
    }

    score += alt_coverage_check(doc, config, &mut insights);

    if doc.is_https() {
        score += config.https_weight as f64;
    } else {
        insights.push("page is not served over HTTPS".to_string());
    }

    if (200..300).contains(&doc.status_code()) {
        score += config.status_weight as f64;
    } else {
        insights.push(format!("response status {} is not a healthy 2xx", doc.status_code()));
    }

    AnalyzerOutcome::scored(score.round() as u8, insights)
}

fn title_check(doc: &Document, config: &TechnicalConfig, insights: &mut Vec<String>) -> f64 {
    let (min, max) = config.title_len;
    match doc.title() {
        None => {
            insights.push("missing <title> element".to_string());
            0.0
        }
        Some(_) if doc.title_count() > 1 => {
            insights.push(format!("{} <title> elements found, expected one", doc.title_count()));
            0.0
        }
        Some(title) => {
            let len = title.chars().count();
            if len < min || len > max {
                insights.push(format!("title length {} chars outside the {}-{} range", len, min, max));
                0.0
            } else {
                config.title_weight as f64
            }
        }
    }
}

fn description_check(doc: &Document, config: &TechnicalConfig, insights: &mut Vec<String>) -> f64 {
    let (min, max) = config.description_len;
    match doc.meta_description() {
        None => {
            insights.push("missing meta description".to_string());
            0.0
        }
        Some(desc) => {
            let len = desc.chars().count();
            if len < min || len > max {
                insights.push(format!(
                    "meta description length {} chars outside the {}-{} range",
                    len, min, max
                ));
                0.0
            } else {
                config.description_weight as f64
            }
        }
    }
}

/// Alt coverage scales with the ratio of described images; a page with no
/// images has nothing to describe and gets full credit.
fn alt_coverage_check(doc: &Document, config: &TechnicalConfig, insights: &mut Vec<String>) -> f64 {
    let images = doc.images();
    if images.is_empty() {
        return config.alt_coverage_weight as f64;
    }

    let described = images.iter().filter(|img| img.alt.as_deref().is_some_and(|alt| !alt.trim().is_empty())).count();
    let ratio = described as f64 / images.len() as f64;

    if ratio < config.alt_coverage_target {
        insights.push(format!(
            "{} of {} images missing alt text",
            images.len() - described,
            images.len()
        ));
    }

    (ratio / config.alt_coverage_target).min(1.0) * config.alt_coverage_weight as f64
}
