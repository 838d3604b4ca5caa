//! Report types: per-dimension outcomes and the aggregate page report.
//!
//! This module defines [`AnalyzerOutcome`] (one analyzer's scored result or
//! localized failure), the fixed [`Dimension`] set, and [`SeoReport`], the
//! aggregate handed to the presentation layer. The six dimensions are
//! enumerated at compile time rather than keyed by strings, so a report can
//! never be missing an entry or carry a surprise one.

use serde::Serialize;

use crate::{AuditError, Result};

/// Localized failure kinds.
///
/// These degrade exactly one dimension of the report and never abort the
/// run; the fatal kinds live in [`AuditError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The page body had too little text to analyze.
    InsufficientContent,
    /// The page had no outbound links at all.
    NoLinksFound,
    /// The competitor page could not be fetched or parsed.
    CompetitorUnavailable,
}

impl FailureKind {
    /// Stable snake_case name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::InsufficientContent => "insufficient_content",
            FailureKind::NoLinksFound => "no_links_found",
            FailureKind::CompetitorUnavailable => "competitor_unavailable",
        }
    }
}

/// The outcome of one analyzer for one run.
///
/// Either a 0–100 score with an ordered list of insight strings, or a
/// localized failure with a human-readable reason. One instance per
/// analyzer per run; outcomes are never merged across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AnalyzerOutcome {
    /// The analyzer produced a score.
    Scored {
        /// Normalized score, 0–100.
        score: u8,
        /// Ordered textual findings explaining the score.
        insights: Vec<String>,
    },
    /// The analyzer failed in a way confined to its own dimension.
    Failed {
        /// Failure classification.
        kind: FailureKind,
        /// Human-readable reason, surfaced verbatim in the report.
        reason: String,
    },
}

impl AnalyzerOutcome {
    /// A scored outcome, clamped to the 0–100 scale.
    pub fn scored(score: u8, insights: Vec<String>) -> Self {
        AnalyzerOutcome::Scored { score: score.min(100), insights }
    }

    /// A localized failure.
    pub fn failed(kind: FailureKind, reason: impl Into<String>) -> Self {
        AnalyzerOutcome::Failed { kind, reason: reason.into() }
    }

    /// The score this dimension contributes: its own score, or 0 when the
    /// dimension failed.
    pub fn effective_score(&self) -> u8 {
        match self {
            AnalyzerOutcome::Scored { score, .. } => *score,
            AnalyzerOutcome::Failed { .. } => 0,
        }
    }

    /// Whether this dimension failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, AnalyzerOutcome::Failed { .. })
    }

    /// The insight list; empty for failed dimensions.
    pub fn insights(&self) -> &[String] {
        match self {
            AnalyzerOutcome::Scored { insights, .. } => insights,
            AnalyzerOutcome::Failed { .. } => &[],
        }
    }
}

/// The six analysis dimensions, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Keywords,
    ContentQuality,
    TechnicalSeo,
    LinkProfile,
    SerpFeatures,
    Competitor,
}

impl Dimension {
    /// All dimensions in report order.
    pub const ALL: [Dimension; 6] = [
        Dimension::Keywords,
        Dimension::ContentQuality,
        Dimension::TechnicalSeo,
        Dimension::LinkProfile,
        Dimension::SerpFeatures,
        Dimension::Competitor,
    ];

    /// Stable snake_case name, matching the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Keywords => "keywords",
            Dimension::ContentQuality => "content_quality",
            Dimension::TechnicalSeo => "technical_seo",
            Dimension::LinkProfile => "link_profile",
            Dimension::SerpFeatures => "serp_features",
            Dimension::Competitor => "competitor",
        }
    }

    /// Human-readable label for terminal output.
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Keywords => "Keyword usage",
            Dimension::ContentQuality => "Content quality",
            Dimension::TechnicalSeo => "Technical SEO",
            Dimension::LinkProfile => "Link profile",
            Dimension::SerpFeatures => "SERP features",
            Dimension::Competitor => "Competitor comparison",
        }
    }
}

/// The complete result of auditing one page.
///
/// Constructed once per analysis request, handed to the presentation layer,
/// then discarded; nothing is persisted. A report exists if and only if the
/// primary fetch and parse succeeded; individual analyzer failures degrade
/// their own entry and nothing else.
#[derive(Debug, Clone, Serialize)]
pub struct SeoReport {
    /// The URL as requested.
    pub url: String,
    /// Resolved URL after redirects.
    pub final_url: String,
    /// HTTP status of the primary fetch.
    pub status_code: u16,

    pub keywords: AnalyzerOutcome,
    pub content_quality: AnalyzerOutcome,
    pub technical_seo: AnalyzerOutcome,
    pub link_profile: AnalyzerOutcome,
    pub serp_features: AnalyzerOutcome,
    pub competitor: AnalyzerOutcome,
}

impl SeoReport {
    /// The outcome for a dimension.
    pub fn get(&self, dimension: Dimension) -> &AnalyzerOutcome {
        match dimension {
            Dimension::Keywords => &self.keywords,
            Dimension::ContentQuality => &self.content_quality,
            Dimension::TechnicalSeo => &self.technical_seo,
            Dimension::LinkProfile => &self.link_profile,
            Dimension::SerpFeatures => &self.serp_features,
            Dimension::Competitor => &self.competitor,
        }
    }

    /// Iterates all six `(dimension, outcome)` pairs in report order.
    pub fn dimensions(&self) -> impl Iterator<Item = (Dimension, &AnalyzerOutcome)> {
        Dimension::ALL.iter().map(|d| (*d, self.get(*d)))
    }

    /// Mean effective score of the five page-intrinsic dimensions.
    ///
    /// The competitor dimension is comparative rather than intrinsic, so it
    /// does not move the overall number.
    pub fn overall_score(&self) -> u8 {
        let primary = [
            &self.keywords,
            &self.content_quality,
            &self.technical_seo,
            &self.link_profile,
            &self.serp_features,
        ];
        let total: u32 = primary.iter().map(|o| o.effective_score() as u32).sum();
        (total / primary.len() as u32) as u8
    }

    /// The report as structured JSON.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| AuditError::ParseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> SeoReport {
        SeoReport {
            url: "https://example.com".to_string(),
            final_url: "https://example.com/".to_string(),
            status_code: 200,
            keywords: AnalyzerOutcome::scored(80, vec!["primary term present in title".to_string()]),
            content_quality: AnalyzerOutcome::scored(60, vec![]),
            technical_seo: AnalyzerOutcome::scored(90, vec![]),
            link_profile: AnalyzerOutcome::failed(FailureKind::NoLinksFound, "no outbound links on the page"),
            serp_features: AnalyzerOutcome::scored(50, vec![]),
            competitor: AnalyzerOutcome::failed(FailureKind::CompetitorUnavailable, "no competitor URL supplied"),
        }
    }

    #[test]
    fn test_scored_clamps_to_100() {
        let outcome = AnalyzerOutcome::scored(250, vec![]);
        assert_eq!(outcome.effective_score(), 100);
    }

    #[test]
    fn test_failed_effective_score_is_zero() {
        let outcome = AnalyzerOutcome::failed(FailureKind::InsufficientContent, "body text is empty");
        assert_eq!(outcome.effective_score(), 0);
        assert!(outcome.is_failed());
        assert!(outcome.insights().is_empty());
    }

    #[test]
    fn test_report_has_six_dimensions() {
        let report = sample_report();
        assert_eq!(report.dimensions().count(), 6);
        for (_, outcome) in report.dimensions() {
            assert!(outcome.effective_score() <= 100);
        }
    }

    #[test]
    fn test_overall_score_excludes_competitor() {
        let report = sample_report();
        // (80 + 60 + 90 + 0 + 50) / 5
        assert_eq!(report.overall_score(), 56);
    }

    #[test]
    fn test_dimension_names_are_stable() {
        assert_eq!(Dimension::Keywords.name(), "keywords");
        assert_eq!(Dimension::LinkProfile.name(), "link_profile");
        assert_eq!(Dimension::ALL.len(), 6);
    }

    #[test]
    fn test_report_serialization() {
        let report = sample_report();
        let json = report.to_json().unwrap();

        assert!(json.get("keywords").is_some());
        assert_eq!(json["keywords"]["outcome"], "scored");
        assert_eq!(json["keywords"]["score"], 80);
        assert_eq!(json["link_profile"]["outcome"], "failed");
        assert_eq!(json["link_profile"]["kind"], "no_links_found");
        assert_eq!(json["status_code"], 200);
    }

    #[test]
    fn test_failure_kind_as_str() {
        assert_eq!(FailureKind::CompetitorUnavailable.as_str(), "competitor_unavailable");
    }
}
