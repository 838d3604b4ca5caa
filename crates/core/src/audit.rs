//! Main audit API.
//!
//! This module provides the primary entry point for running a full page
//! audit. The main type is [`Auditor`], along with the convenience function
//! [`analyze_url`].
//!
//! # Example
//!
//! ```rust,no_run
//! use serplens_core::{AuditConfig, Auditor};
//!
//! # async fn example() -> serplens_core::Result<()> {
//! let config = AuditConfig::builder().timeout(5).sample_size(0).build();
//! let auditor = Auditor::with_config(config);
//! let report = auditor.analyze("https://example.com").await?;
//! println!("overall: {}/100", report.overall_score());
//! # Ok(())
//! # }
//! ```

use tracing::debug;

use crate::analyzers::{competitor, content_quality, keyword, links, serp, technical};
use crate::document::Document;
use crate::fetch::{FetchConfig, fetch_page};
use crate::report::SeoReport;
use crate::{
    CompetitorConfig, ContentQualityConfig, KeywordConfig, LinkProfileConfig, Result, SerpConfig, TechnicalConfig,
};

/// Configuration for a full audit run.
///
/// Aggregates the fetch settings and every analyzer's tunable table. The
/// defaults are sensible for interactive use; the builder exposes the knobs
/// that change most often.
#[derive(Debug, Clone, Default)]
pub struct AuditConfig {
    /// HTTP settings for the primary fetch and secondary fetches.
    pub fetch: FetchConfig,
    /// Keyword analyzer weights.
    pub keywords: KeywordConfig,
    /// Content quality analyzer weights.
    pub content_quality: ContentQualityConfig,
    /// Technical check weights.
    pub technical: TechnicalConfig,
    /// Link profile weights and sampling knobs.
    pub link_profile: LinkProfileConfig,
    /// SERP feature weights.
    pub serp: SerpConfig,
    /// Competitor comparison weights.
    pub competitor: CompetitorConfig,
}

impl AuditConfig {
    /// Creates a new builder for AuditConfig.
    pub fn builder() -> AuditConfigBuilder {
        AuditConfigBuilder::new()
    }
}

/// Builder for [`AuditConfig`].
///
/// Provides a fluent API over the most commonly adjusted settings; the
/// full per-analyzer tables can be set wholesale.
pub struct AuditConfigBuilder {
    config: AuditConfig,
}

impl AuditConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: AuditConfig::default() }
    }

    /// Sets the primary fetch timeout in seconds.
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.config.fetch.timeout = seconds;
        self
    }

    /// Sets the User-Agent for all fetches.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.config.fetch.user_agent = ua.into();
        self
    }

    /// Sets how many external links are sampled for liveness (0 disables).
    pub fn sample_size(mut self, n: usize) -> Self {
        self.config.link_profile.sample_size = n;
        self
    }

    /// Sets the per-sample fetch timeout in seconds.
    pub fn sample_timeout(mut self, seconds: u64) -> Self {
        self.config.link_profile.sample_timeout = seconds;
        self
    }

    /// Replaces the keyword analyzer table.
    pub fn keywords(mut self, table: KeywordConfig) -> Self {
        self.config.keywords = table;
        self
    }

    /// Replaces the content quality table.
    pub fn content_quality(mut self, table: ContentQualityConfig) -> Self {
        self.config.content_quality = table;
        self
    }

    /// Replaces the technical check table.
    pub fn technical(mut self, table: TechnicalConfig) -> Self {
        self.config.technical = table;
        self
    }

    /// Replaces the link profile table.
    pub fn link_profile(mut self, table: LinkProfileConfig) -> Self {
        self.config.link_profile = table;
        self
    }

    /// Replaces the SERP feature table.
    pub fn serp(mut self, table: SerpConfig) -> Self {
        self.config.serp = table;
        self
    }

    /// Replaces the competitor comparison table.
    pub fn competitor(mut self, table: CompetitorConfig) -> Self {
        self.config.competitor = table;
        self
    }

    /// Builds the config.
    pub fn build(self) -> AuditConfig {
        self.config
    }
}

impl Default for AuditConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Orchestrates a full page audit.
///
/// The auditor is a pure composition layer: fetch the page, build the
/// document, run the six analyzers, assemble the report. It holds no
/// heuristic logic of its own and never retries. Fatal errors (fetch,
/// parse) abort the run before any analyzer starts; analyzer failures are
/// captured into their own dimension and go no further.
pub struct Auditor {
    config: AuditConfig,
}

impl Auditor {
    /// Creates an auditor with default settings.
    pub fn new() -> Self {
        Self { config: AuditConfig::default() }
    }

    /// Creates an auditor with a custom configuration.
    pub fn with_config(config: AuditConfig) -> Self {
        Self { config }
    }

    /// Audits a page.
    ///
    /// The competitor dimension reports `CompetitorUnavailable` since no
    /// competitor URL is supplied on this path.
    pub async fn analyze(&self, url: &str) -> Result<SeoReport> {
        self.analyze_with_competitor(url, None).await
    }

    /// Audits a page and compares it against a competitor page.
    ///
    /// # Errors
    ///
    /// Returns the fatal [`crate::AuditError`] kinds when the primary page
    /// cannot be fetched or parsed; no partial report is produced in that
    /// case.
    pub async fn analyze_with_competitor(&self, url: &str, competitor_url: Option<&str>) -> Result<SeoReport> {
        let page = fetch_page(url, &self.config.fetch).await?;
        let doc = Document::from_page(&page)?;
        debug!(url, final_url = %doc.final_url(), "page fetched and parsed; starting analyzers");

        Ok(self.audit_document(&doc, url, competitor_url).await)
    }

    /// Runs the six analyzers over an already-built document.
    ///
    /// This is the aggregation step on its own: no primary fetch, always a
    /// report. Useful when the page body comes from somewhere other than a
    /// live fetch.
    pub async fn audit_document(&self, doc: &Document, requested_url: &str, competitor_url: Option<&str>) -> SeoReport {
        // The analyzers are independent over a read-only document, so they
        // run concurrently on one task; the document's parsed tree is not
        // Send. Aggregation waits on all six.
        let (keywords, content_quality, technical_seo, serp_features, link_profile, competitor_outcome) = tokio::join!(
            async { keyword::analyze(doc, &self.config.keywords) },
            async { content_quality::analyze(doc, &self.config.content_quality) },
            async { technical::analyze(doc, &self.config.technical) },
            async { serp::analyze(doc, &self.config.serp) },
            links::analyze(doc, &self.config.fetch, &self.config.link_profile),
            competitor::analyze(doc, competitor_url, &self.config.fetch, &self.config.competitor),
        );

        SeoReport {
            url: requested_url.to_string(),
            final_url: doc.final_url().to_string(),
            status_code: doc.status_code(),
            keywords,
            content_quality,
            technical_seo,
            link_profile,
            serp_features,
            competitor: competitor_outcome,
        }
    }
}

impl Default for Auditor {
    fn default() -> Self {
        Self::new()
    }
}

/// Audits a URL with default settings.
pub async fn analyze_url(url: &str) -> Result<SeoReport> {
    Auditor::new().analyze(url).await
}
