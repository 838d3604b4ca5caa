//! SERP feature readiness analysis.
//!
//! Detects whether the page is positioned for rich-result surfaces:
//! structured data (by declared type where parseable), FAQ-style
//! heading-and-list patterns, a meta description long enough to serve as a
//! snippet, and alt-described images for image-pack inclusion. The score is
//! additive per detected feature; insights name both the features the page
//! is positioned for and the ones it is not.

use crate::document::Document;
use crate::report::AnalyzerOutcome;

/// Additive weights for the detected SERP features. Defaults sum to 100.
#[derive(Debug, Clone)]
pub struct SerpConfig {
    /// Points for structured-data presence.
    pub structured_data_weight: u8,
    /// Points for a FAQ/How-To heading-and-list pattern.
    pub faq_weight: u8,
    /// Points for a snippet-ready meta description.
    pub snippet_weight: u8,
    /// Points for image-pack readiness.
    pub image_weight: u8,
    /// Minimum meta-description length to be considered snippet-ready.
    pub snippet_min_len: usize,
    /// Alt coverage ratio required for image-pack readiness.
    pub alt_coverage_target: f64,
}

impl Default for SerpConfig {
    fn default() -> Self {
        Self {
            structured_data_weight: 30,
            faq_weight: 20,
            snippet_weight: 25,
            image_weight: 25,
            snippet_min_len: 120,
            alt_coverage_target: 0.8,
        }
    }
}

/// Scores the page's readiness for rich-result eligibility.
pub fn analyze(doc: &Document, config: &SerpConfig) -> AnalyzerOutcome {
    let mut insights = Vec::new();
    let mut score = 0u8;

    if doc.has_structured_data() {
        score += config.structured_data_weight;
        let types = doc.json_ld_types();
        if types.is_empty() {
            insights.push("structured data present".to_string());
        } else {
            insights.push(format!("structured data present ({})", types.join(", ")));
        }
    } else {
        insights.push("no structured data; rich results are unlikely".to_string());
    }

    if has_faq_pattern(doc) {
        score += config.faq_weight;
        insights.push("question-style headings with lists suggest FAQ eligibility".to_string());
    } else {
        insights.push("no FAQ or How-To pattern detected".to_string());
    }

    let description_len = doc.meta_description().map(|d| d.chars().count()).unwrap_or(0);
    if description_len >= config.snippet_min_len {
        score += config.snippet_weight;
        insights.push("meta description long enough to serve as a snippet".to_string());
    } else {
        insights.push(format!(
            "meta description too short for a snippet ({} of {} chars)",
            description_len, config.snippet_min_len
        ));
    }

    if image_pack_ready(doc, config.alt_coverage_target) {
        score += config.image_weight;
        insights.push("alt-described images qualify for image results".to_string());
    } else {
        insights.push("images missing or under-described; not positioned for image results".to_string());
    }

    AnalyzerOutcome::scored(score, insights)
}

/// A FAQ-like page has question headings backed by list content, or several
/// question headings on their own.
fn has_faq_pattern(doc: &Document) -> bool {
    let question_headings = [2u8, 3]
        .iter()
        .flat_map(|level| doc.headings(*level))
        .filter(|h| h.trim_end().ends_with('?'))
        .count();

    let list_blocks = doc.count("ul") + doc.count("ol");

    question_headings >= 2 || (question_headings >= 1 && list_blocks > 0)
}

fn image_pack_ready(doc: &Document, target: f64) -> bool {
    let images = doc.images();
    if images.is_empty() {
        return false;
    }
    let described = images.iter().filter(|img| img.alt.as_deref().is_some_and(|alt| !alt.trim().is_empty())).count();
    described as f64 / images.len() as f64 >= target
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(html: &str) -> Document {
        Document::parse(html, "https://example.com", 200).unwrap()
    }

    #[test]
    fn test_rich_page_scores_full() {
        let page = doc(r#"
            <html>
            <head>
                <meta name="description" content="A thorough walkthrough of pour-over brewing covering grind size, water temperature, bloom timing, and pouring technique for a repeatable cup.">
                <script type="application/ld+json">{"@type": "FAQPage"}</script>
            </head>
            <body>
                <h2>What grind size should I use?</h2>
                <ul><li>Medium-fine for pour-over.</li></ul>
                <h2>How hot should the water be?</h2>
                <img src="/kettle.jpg" alt="gooseneck kettle pouring">
            </body>
            </html>
        "#);
        let outcome = analyze(&page, &SerpConfig::default());
        let AnalyzerOutcome::Scored { score, insights } = outcome else {
            panic!("expected scored outcome");
        };

        assert_eq!(score, 100);
        assert!(insights.iter().any(|i| i.contains("FAQPage")));
    }

    #[test]
    fn test_plain_page_scores_zero_with_insights() {
        let page = doc("<html><body><h1>Plain</h1><p>Just text.</p></body></html>");
        let outcome = analyze(&page, &SerpConfig::default());
        let AnalyzerOutcome::Scored { score, insights } = outcome else {
            panic!("expected scored outcome");
        };

        assert_eq!(score, 0);
        assert_eq!(insights.len(), 4);
        assert!(insights.iter().any(|i| i.contains("no structured data")));
    }

    #[test]
    fn test_faq_pattern_requires_questions() {
        let page = doc("<html><body><h2>Ordinary Section</h2><ul><li>item</li></ul></body></html>");
        assert!(!has_faq_pattern(&page));

        let faq = doc("<html><body><h2>Why though?</h2><ul><li>because</li></ul></body></html>");
        assert!(has_faq_pattern(&faq));
    }

    #[test]
    fn test_snippet_length_gate() {
        let page = doc(r#"<html><head><meta name="description" content="Too short."></head><body><p>x</p></body></html>"#);
        let outcome = analyze(&page, &SerpConfig::default());

        assert!(outcome.insights().iter().any(|i| i.contains("too short for a snippet")));
    }

    #[test]
    fn test_undescribed_images_not_ready() {
        let page = doc(r#"<html><body><img src="/a.jpg"><img src="/b.jpg"></body></html>"#);
        assert!(!image_pack_ready(&page, 0.8));
    }
}
