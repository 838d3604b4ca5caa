//! Competitor comparison analysis.
//!
//! Fetches and parses a second, externally supplied page and compares it to
//! the target on content depth and keyword targeting. The competitor fetch
//! is fully isolated: any failure here degrades only this dimension,
//! leaving the primary report untouched. How the competitor URL is sourced
//! is the caller's business; this module only consumes one.

use tracing::debug;

use crate::document::Document;
use crate::fetch::{FetchConfig, fetch_page};
use crate::report::{AnalyzerOutcome, FailureKind};
use crate::text;

/// Weights for the comparative sub-scores. Defaults sum to 100.
#[derive(Debug, Clone)]
pub struct CompetitorConfig {
    /// Points available for relative content depth.
    pub content_weight: u8,
    /// Points available for keyword-targeting overlap.
    pub keyword_weight: u8,
    /// How many of the competitor's top terms to compare against.
    pub top_terms: usize,
    /// Content-length lead (as a fraction) above which a gap insight is raised.
    pub gap_insight_threshold: f64,
    /// Timeout in seconds for the competitor fetch, shorter than the primary.
    pub timeout: u64,
}

impl Default for CompetitorConfig {
    fn default() -> Self {
        Self { content_weight: 60, keyword_weight: 40, top_terms: 5, gap_insight_threshold: 0.2, timeout: 8 }
    }
}

/// Minimum token length considered a candidate term.
const MIN_TERM_LEN: usize = 3;

/// Compares the target document against a competitor page.
///
/// Returns [`FailureKind::CompetitorUnavailable`] when no competitor URL
/// was supplied or when the competitor page cannot be fetched or parsed.
pub async fn analyze(
    target: &Document, competitor_url: Option<&str>, fetch: &FetchConfig, config: &CompetitorConfig,
) -> AnalyzerOutcome {
    let Some(url) = competitor_url else {
        return AnalyzerOutcome::failed(FailureKind::CompetitorUnavailable, "no competitor URL supplied");
    };

    let fetch = FetchConfig { timeout: config.timeout, user_agent: fetch.user_agent.clone() };
    let page = match fetch_page(url, &fetch).await {
        Ok(page) => page,
        Err(e) => {
            debug!(%url, error = %e, "competitor fetch failed");
            return AnalyzerOutcome::failed(FailureKind::CompetitorUnavailable, e.to_string());
        }
    };

    let competitor = match Document::from_page(&page) {
        Ok(doc) => doc,
        Err(e) => return AnalyzerOutcome::failed(FailureKind::CompetitorUnavailable, e.to_string()),
    };

    compare(target, &competitor, config)
}

/// The comparison itself, split out so tests can run it on two parsed
/// documents without any network.
pub fn compare(target: &Document, competitor: &Document, config: &CompetitorConfig) -> AnalyzerOutcome {
    let target_text = target.body_text();
    let competitor_text = competitor.body_text();

    let target_words = text::count_words(&target_text);
    let competitor_words = text::count_words(&competitor_text);

    if competitor_words == 0 {
        return AnalyzerOutcome::failed(
            FailureKind::CompetitorUnavailable,
            "competitor page has no analyzable body text",
        );
    }

    let mut insights = Vec::new();

    let ratio = (target_words as f64 / competitor_words as f64).min(1.0);
    let content_points = ratio * config.content_weight as f64;

    if competitor_words as f64 > target_words as f64 * (1.0 + config.gap_insight_threshold) {
        let lead = (competitor_words as f64 / target_words.max(1) as f64 - 1.0) * 100.0;
        insights.push(format!(
            "competitor has {:.0}% more body content ({} vs {} words)",
            lead, competitor_words, target_words
        ));
    } else {
        insights.push(format!(
            "body content comparable to competitor ({} vs {} words)",
            target_words, competitor_words
        ));
    }

    let competitor_terms = text::term_frequency(&competitor_text, MIN_TERM_LEN);
    let top: Vec<&str> = competitor_terms.iter().take(config.top_terms).map(|(t, _)| t.as_str()).collect();

    let keyword_points = if top.is_empty() {
        insights.push("competitor page has no rankable terms to compare".to_string());
        0.0
    } else {
        let target_words_set: std::collections::HashSet<String> =
            text::words(&target_text).into_iter().collect();

        let mut covered = 0usize;
        for term in &top {
            if target_words_set.contains(*term) {
                covered += 1;
            } else {
                insights.push(format!("competitor targets keyword '{}' not present on target page", term));
            }
        }
        covered as f64 / top.len() as f64 * config.keyword_weight as f64
    };

    AnalyzerOutcome::scored((content_points + keyword_points).round() as u8, insights)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(html: &str) -> Document {
        Document::parse(html, "https://example.com", 200).unwrap()
    }

    fn page_with(sentence: &str, repeats: usize) -> Document {
        doc(&format!("<html><body><p>{}</p></body></html>", sentence.repeat(repeats)))
    }

    #[test]
    fn test_no_competitor_url_is_unavailable() {
        let target = page_with("Words on the target page. ", 20);
        let outcome = tokio::runtime::Runtime::new().unwrap().block_on(analyze(
            &target,
            None,
            &FetchConfig::default(),
            &CompetitorConfig::default(),
        ));

        assert!(matches!(
            outcome,
            AnalyzerOutcome::Failed { kind: FailureKind::CompetitorUnavailable, .. }
        ));
    }

    #[test]
    fn test_content_gap_insight_and_monotonic_score() {
        let config = CompetitorConfig::default();
        let target = page_with("Steady prose about gardening tools and seasonal planting routines. ", 10);
        let double = page_with("Steady prose about gardening tools and seasonal planting routines. ", 20);
        let quadruple = page_with("Steady prose about gardening tools and seasonal planting routines. ", 40);

        let vs_double = compare(&target, &double, &config);
        let vs_quadruple = compare(&target, &quadruple, &config);

        assert!(vs_double.insights().iter().any(|i| i.contains("more body content")));
        assert!(
            vs_quadruple.effective_score() < vs_double.effective_score(),
            "bigger gap must score lower: {} vs {}",
            vs_quadruple.effective_score(),
            vs_double.effective_score()
        );
    }

    #[test]
    fn test_missing_keywords_reported() {
        let config = CompetitorConfig::default();
        let target = page_with("Our page talks about bicycles and bicycle repair all day long here. ", 8);
        let competitor = page_with("Helmets helmets helmets and panniers panniers for touring cyclists riding far. ", 8);

        let outcome = compare(&target, &competitor, &config);

        assert!(
            outcome
                .insights()
                .iter()
                .any(|i| i.contains("competitor targets keyword") && i.contains("helmets"))
        );
    }

    #[test]
    fn test_equal_pages_score_high() {
        let config = CompetitorConfig::default();
        let a = page_with("Shared vocabulary makes both pages rank for identical phrases today. ", 12);
        let b = page_with("Shared vocabulary makes both pages rank for identical phrases today. ", 12);

        let outcome = compare(&a, &b, &config);
        assert!(outcome.effective_score() >= 95, "score was {}", outcome.effective_score());
    }

    #[test]
    fn test_empty_competitor_body_is_unavailable() {
        let target = page_with("Plenty of words over here on the target page for sure. ", 10);
        let competitor = doc("<html><body></body></html>");

        let outcome = compare(&target, &competitor, &CompetitorConfig::default());
        assert!(matches!(
            outcome,
            AnalyzerOutcome::Failed { kind: FailureKind::CompetitorUnavailable, .. }
        ));
    }
}
