//! Parsed page model and its query operations.
//!
//! This module provides the [`Document`] type: one parsed page plus the
//! fetch metadata (status code, final URL) that travels with it. Every
//! analyzer reads the page exclusively through the queries here; the
//! document is immutable after construction and shared read-only.
//!
//! # Example
//!
//! ```rust
//! use serplens_core::Document;
//!
//! let html = r#"
//!     <html>
//!         <head><title>Coffee Brewing Guide</title></head>
//!         <body><h1>Brewing</h1><p>Grind, pour, wait.</p></body>
//!     </html>
//! "#;
//!
//! let doc = Document::parse(html, "https://example.com/brew", 200).unwrap();
//! assert_eq!(doc.title(), Some("Coffee Brewing Guide".to_string()));
//! assert_eq!(doc.heading_count(1), 1);
//! ```

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::fetch::FetchedPage;
use crate::{AuditError, Result};

/// An outbound link found on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    /// The raw href attribute value.
    pub href: String,
    /// Visible anchor text, whitespace-collapsed.
    pub anchor: String,
}

/// An image tag found on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageImage {
    /// The src attribute value, if present.
    pub src: Option<String>,
    /// The alt attribute value, if present.
    pub alt: Option<String>,
}

/// A parsed page with its fetch metadata.
///
/// All query operations are pure, run over the already-parsed tree, and
/// tolerate absent elements by returning empty results. None of them can
/// fail once the document exists.
pub struct Document {
    html: Html,
    status_code: u16,
    final_url: Url,
}

impl Document {
    /// Parses markup into a document.
    ///
    /// Parsing is lenient: malformed-but-recoverable HTML always produces a
    /// document, matching real-world pages. The only rejection is input that
    /// cannot be interpreted as markup at all.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::ParseError`] when the body is empty or contains
    /// no tags, or [`AuditError::InvalidUrl`] when `final_url` is not a
    /// valid absolute URL.
    pub fn parse(html: &str, final_url: &str, status_code: u16) -> Result<Self> {
        let final_url = Url::parse(final_url).map_err(|e| AuditError::InvalidUrl(e.to_string()))?;

        if html.trim().is_empty() {
            return Err(AuditError::ParseError("response body is empty".to_string()));
        }
        if !html.contains('<') {
            return Err(AuditError::ParseError("response body contains no markup".to_string()));
        }

        Ok(Self { html: Html::parse_document(html), status_code, final_url })
    }

    /// Builds a document from a fetched page.
    pub fn from_page(page: &FetchedPage) -> Result<Self> {
        Self::parse(&page.body, page.final_url.as_str(), page.status)
    }

    /// HTTP status code of the response this page came from.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Resolved URL after redirects.
    pub fn final_url(&self) -> &Url {
        &self.final_url
    }

    /// Whether the page was ultimately served over HTTPS.
    pub fn is_https(&self) -> bool {
        self.final_url.scheme() == "https"
    }

    /// Text of the first `<title>` element, trimmed.
    pub fn title(&self) -> Option<String> {
        self.select_all("head title").first().map(|el| collapse_whitespace(&text_of(el)))
    }

    /// Number of `<title>` elements in the head.
    pub fn title_count(&self) -> usize {
        self.count("head title")
    }

    /// Content of a meta tag, matched by `name` or `property` attribute.
    pub fn meta_content(&self, name: &str) -> Option<String> {
        for attr in ["name", "property"] {
            let selector = format!("meta[{}=\"{}\"]", attr, name);
            if let Some(el) = self.select_all(&selector).first()
                && let Some(content) = el.value().attr("content")
            {
                return Some(content.trim().to_string());
            }
        }
        None
    }

    /// Content of the meta description tag.
    pub fn meta_description(&self) -> Option<String> {
        self.meta_content("description")
    }

    /// The canonical link href, if declared.
    pub fn canonical(&self) -> Option<String> {
        self.select_all("link[rel=\"canonical\"]")
            .first()
            .and_then(|el| el.value().attr("href"))
            .map(|href| href.to_string())
    }

    /// The mobile viewport meta content, if declared.
    pub fn viewport(&self) -> Option<String> {
        self.select_all("meta[name=\"viewport\"]")
            .first()
            .and_then(|el| el.value().attr("content"))
            .map(|content| content.to_string())
    }

    /// The document language from the `<html lang>` attribute.
    pub fn lang(&self) -> Option<String> {
        self.select_all("html").first().and_then(|el| el.value().attr("lang")).map(|lang| lang.to_string())
    }

    /// Texts of all headings at the given level (1–6), in document order.
    pub fn headings(&self, level: u8) -> Vec<String> {
        if !(1..=6).contains(&level) {
            return Vec::new();
        }
        self.select_all(&format!("h{}", level))
            .iter()
            .map(|el| collapse_whitespace(&text_of(el)))
            .collect()
    }

    /// Number of headings at the given level.
    pub fn heading_count(&self, level: u8) -> usize {
        self.headings(level).len()
    }

    /// Visible body text with whitespace collapsed.
    ///
    /// Skips script, style, noscript, and template subtrees so the result
    /// reflects what a reader (or a crawler's text index) actually sees.
    pub fn body_text(&self) -> String {
        let mut out = String::new();
        for body in self.select_all("body") {
            push_visible_text(body, &mut out);
        }
        collapse_whitespace(&out)
    }

    /// All outbound links: `a[href]` minus fragments and non-navigational
    /// schemes (`javascript:`, `mailto:`, `tel:`).
    pub fn links(&self) -> Vec<PageLink> {
        self.select_all("a[href]")
            .iter()
            .filter_map(|el| {
                let href = el.value().attr("href")?.trim();
                if href.is_empty() || href.starts_with('#') {
                    return None;
                }
                let lower = href.to_lowercase();
                if lower.starts_with("javascript:") || lower.starts_with("mailto:") || lower.starts_with("tel:") {
                    return None;
                }
                Some(PageLink { href: href.to_string(), anchor: collapse_whitespace(&text_of(el)) })
            })
            .collect()
    }

    /// All image tags with their src and alt attributes.
    pub fn images(&self) -> Vec<PageImage> {
        self.select_all("img")
            .iter()
            .map(|el| PageImage {
                src: el.value().attr("src").map(|s| s.to_string()),
                alt: el.value().attr("alt").map(|s| s.to_string()),
            })
            .collect()
    }

    /// Declared JSON-LD `@type` values, deduplicated in document order.
    pub fn json_ld_types(&self) -> Vec<String> {
        let mut types = Vec::new();
        for el in self.select_all("script[type=\"application/ld+json\"]") {
            let raw = text_of(&el);
            if let Ok(value) = serde_json::from_str::<serde_json::Value>(raw.trim()) {
                collect_json_ld_types(&value, &mut types);
            }
        }
        types
    }

    /// Whether the page declares any structured data (JSON-LD or microdata).
    pub fn has_structured_data(&self) -> bool {
        self.count("script[type=\"application/ld+json\"]") > 0 || self.count("[itemscope]") > 0
    }

    /// Number of elements matching a CSS selector.
    ///
    /// An invalid selector counts as zero matches.
    pub fn count(&self, selector: &str) -> usize {
        self.select_all(selector).len()
    }

    fn select_all(&self, selector: &str) -> Vec<ElementRef<'_>> {
        match Selector::parse(selector) {
            Ok(sel) => self.html.select(&sel).collect(),
            Err(_) => Vec::new(),
        }
    }
}

/// Concatenated text of an element's subtree, untrimmed.
fn text_of(el: &ElementRef<'_>) -> String {
    el.text().collect()
}

/// Text of an element's subtree, skipping non-visible containers.
fn push_visible_text(el: ElementRef<'_>, out: &mut String) {
    if matches!(el.value().name(), "script" | "style" | "noscript" | "template") {
        return;
    }
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
            out.push(' ');
        } else if let Some(child_el) = ElementRef::wrap(child) {
            push_visible_text(child_el, out);
        }
    }
}

/// Collapse runs of whitespace into single spaces and trim.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Pull `@type` strings out of a JSON-LD value, including `@graph` nodes.
fn collect_json_ld_types(value: &serde_json::Value, out: &mut Vec<String>) {
    match value {
        serde_json::Value::Array(items) => {
            for item in items {
                collect_json_ld_types(item, out);
            }
        }
        serde_json::Value::Object(obj) => {
            match obj.get("@type") {
                Some(serde_json::Value::String(t)) => {
                    if !out.contains(t) {
                        out.push(t.clone());
                    }
                }
                Some(serde_json::Value::Array(ts)) => {
                    for t in ts.iter().filter_map(|t| t.as_str()) {
                        if !out.iter().any(|seen| seen == t) {
                            out.push(t.to_string());
                        }
                    }
                }
                _ => {}
            }
            if let Some(graph) = obj.get("@graph") {
                collect_json_ld_types(graph, out);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HTML: &str = r##"
        <!DOCTYPE html>
        <html lang="en">
        <head>
            <meta charset="UTF-8">
            <title>Test Page</title>
            <meta name="description" content="A short description of the test page.">
            <meta name="viewport" content="width=device-width, initial-scale=1">
            <link rel="canonical" href="https://example.com/test">
            <script type="application/ld+json">
            {"@context": "https://schema.org", "@type": "Article", "headline": "Test"}
            </script>
        </head>
        <body>
            <h1>Heading</h1>
            <h2>Section One</h2>
            <p>Paragraph one with some visible words.</p>
            <script>var hidden = "should not appear in body text";</script>
            <a href="https://example.org/out">External</a>
            <a href="/internal">Internal</a>
            <a href="#fragment">Skip me</a>
            <a href="mailto:hi@example.com">Mail</a>
            <img src="/a.png" alt="described image">
            <img src="/b.png">
        </body>
        </html>
    "##;

    fn doc() -> Document {
        Document::parse(SAMPLE_HTML, "https://example.com/test", 200).unwrap()
    }

    #[test]
    fn test_parse_rejects_empty() {
        let result = Document::parse("   \n ", "https://example.com", 200);
        assert!(matches!(result, Err(AuditError::ParseError(_))));
    }

    #[test]
    fn test_parse_rejects_tagless() {
        let result = Document::parse("just a plain sentence", "https://example.com", 200);
        assert!(matches!(result, Err(AuditError::ParseError(_))));
    }

    #[test]
    fn test_parse_lenient_on_malformed() {
        let result = Document::parse("<html><p>unclosed", "https://example.com", 200);
        assert!(result.is_ok());
    }

    #[test]
    fn test_title_and_count() {
        let doc = doc();
        assert_eq!(doc.title(), Some("Test Page".to_string()));
        assert_eq!(doc.title_count(), 1);
    }

    #[test]
    fn test_meta_description() {
        assert_eq!(
            doc().meta_description(),
            Some("A short description of the test page.".to_string())
        );
    }

    #[test]
    fn test_meta_content_by_property() {
        let html = r#"<html><head><meta property="og:title" content="OG"></head><body><p>x</p></body></html>"#;
        let doc = Document::parse(html, "https://example.com", 200).unwrap();
        assert_eq!(doc.meta_content("og:title"), Some("OG".to_string()));
    }

    #[test]
    fn test_canonical_and_viewport() {
        let doc = doc();
        assert_eq!(doc.canonical(), Some("https://example.com/test".to_string()));
        assert!(doc.viewport().unwrap().contains("device-width"));
    }

    #[test]
    fn test_lang() {
        assert_eq!(doc().lang(), Some("en".to_string()));
    }

    #[test]
    fn test_headings() {
        let doc = doc();
        assert_eq!(doc.headings(1), vec!["Heading".to_string()]);
        assert_eq!(doc.heading_count(2), 1);
        assert_eq!(doc.heading_count(3), 0);
        assert!(doc.headings(9).is_empty());
    }

    #[test]
    fn test_body_text_skips_scripts() {
        let text = doc().body_text();
        assert!(text.contains("Paragraph one"));
        assert!(!text.contains("should not appear"));
    }

    #[test]
    fn test_links_filtered() {
        let links = doc().links();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].href, "https://example.org/out");
        assert_eq!(links[0].anchor, "External");
        assert_eq!(links[1].href, "/internal");
    }

    #[test]
    fn test_images() {
        let images = doc().images();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].alt, Some("described image".to_string()));
        assert_eq!(images[1].alt, None);
    }

    #[test]
    fn test_json_ld_types() {
        assert_eq!(doc().json_ld_types(), vec!["Article".to_string()]);
    }

    #[test]
    fn test_json_ld_graph() {
        let html = r#"<html><head><script type="application/ld+json">
            {"@context": "https://schema.org", "@graph": [{"@type": "FAQPage"}, {"@type": "Organization"}]}
        </script></head><body><p>x</p></body></html>"#;
        let doc = Document::parse(html, "https://example.com", 200).unwrap();
        assert_eq!(doc.json_ld_types(), vec!["FAQPage".to_string(), "Organization".to_string()]);
    }

    #[test]
    fn test_structured_data_flag() {
        assert!(doc().has_structured_data());
        let bare = Document::parse("<html><body><p>x</p></body></html>", "https://example.com", 200).unwrap();
        assert!(!bare.has_structured_data());
    }

    #[test]
    fn test_fetch_metadata_passthrough() {
        let doc = doc();
        assert_eq!(doc.status_code(), 200);
        assert!(doc.is_https());
        assert_eq!(doc.final_url().host_str(), Some("example.com"));
    }

    #[test]
    fn test_absent_elements_are_empty() {
        let doc = Document::parse("<html><body><p>text</p></body></html>", "http://example.com", 200).unwrap();
        assert_eq!(doc.title(), None);
        assert!(doc.links().is_empty());
        assert!(doc.images().is_empty());
        assert!(doc.headings(1).is_empty());
        assert!(!doc.is_https());
    }

    #[test]
    fn test_invalid_selector_counts_zero() {
        assert_eq!(doc().count("[[invalid"), 0);
    }
}
