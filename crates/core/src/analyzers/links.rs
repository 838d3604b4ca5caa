//! Link profile analysis.
//!
//! Classifies outbound links into internal and external by host, scores the
//! balance between them, and optionally samples a bounded subset of the
//! external links for liveness. Sampling failures are swallowed per link;
//! one dead or unreachable sample never fails the dimension. The analyzer's
//! own failure is reserved for a page with no outbound links at all.

use futures::future::join_all;
use tracing::debug;
use url::Url;

use crate::document::Document;
use crate::fetch::{FetchConfig, fetch_status};
use crate::report::{AnalyzerOutcome, FailureKind};

/// Scoring weights and sampling knobs for link analysis.
#[derive(Debug, Clone)]
pub struct LinkProfileConfig {
    /// How many external links to sample for liveness. Zero disables sampling.
    pub sample_size: usize,
    /// Timeout in seconds for each sampling fetch (shorter than the primary).
    pub sample_timeout: u64,
    /// Points subtracted per dead sampled link.
    pub dead_link_penalty: u8,
    /// Lower bound of the rewarded internal-link ratio band.
    pub min_internal_ratio: f64,
    /// Upper bound of the rewarded internal-link ratio band.
    pub max_internal_ratio: f64,
    /// Points for having any internal links.
    pub internal_weight: u8,
    /// Points for having any external links.
    pub external_weight: u8,
    /// Points for an internal ratio inside the band (half credit outside).
    pub balance_weight: u8,
}

impl Default for LinkProfileConfig {
    fn default() -> Self {
        Self {
            sample_size: 5,
            sample_timeout: 3,
            dead_link_penalty: 5,
            min_internal_ratio: 0.2,
            max_internal_ratio: 0.8,
            internal_weight: 40,
            external_weight: 30,
            balance_weight: 30,
        }
    }
}

/// Analyzes the outbound link profile, optionally sampling external links.
///
/// Fails with [`FailureKind::NoLinksFound`] when the page has no outbound
/// links; the dimension then carries an effective score of zero.
pub async fn analyze(doc: &Document, fetch: &FetchConfig, config: &LinkProfileConfig) -> AnalyzerOutcome {
    let links = doc.links();
    if links.is_empty() {
        return AnalyzerOutcome::failed(FailureKind::NoLinksFound, "no outbound links found on the page");
    }

    let page_host = doc.final_url().host_str().unwrap_or_default().to_string();
    let mut internal = 0usize;
    let mut external: Vec<Url> = Vec::new();

    for link in &links {
        match doc.final_url().join(&link.href) {
            Ok(resolved) if resolved.host_str() == Some(page_host.as_str()) => internal += 1,
            Ok(resolved) => external.push(resolved),
            Err(_) => debug!(href = %link.href, "skipping unresolvable href"),
        }
    }

    let total = internal + external.len();
    if total == 0 {
        return AnalyzerOutcome::failed(FailureKind::NoLinksFound, "no resolvable outbound links on the page");
    }

    let mut insights = Vec::new();
    let mut score = 0i32;

    insights.push(format!("{} internal links, {} external links", internal, external.len()));

    if internal > 0 {
        score += config.internal_weight as i32;
    } else {
        insights.push("no internal links; the page is isolated from the rest of the site".to_string());
    }

    if !external.is_empty() {
        score += config.external_weight as i32;
    } else {
        insights.push("no external links; outbound references add credibility".to_string());
    }

    let ratio = internal as f64 / total as f64;
    if ratio >= config.min_internal_ratio && ratio <= config.max_internal_ratio {
        score += config.balance_weight as i32;
    } else {
        score += config.balance_weight as i32 / 2;
        if ratio > config.max_internal_ratio {
            insights.push(format!("internal links make up {:.0}% of outbound links", ratio * 100.0));
        } else {
            insights.push(format!(
                "external links make up {:.0}% of outbound links",
                (1.0 - ratio) * 100.0
            ));
        }
    }

    if config.sample_size > 0 && !external.is_empty() {
        let dead = sample_external(&external, fetch, config, &mut insights).await;
        score -= dead as i32 * config.dead_link_penalty as i32;
    }

    AnalyzerOutcome::scored(score.clamp(0, 100) as u8, insights)
}

/// Fetches up to `sample_size` external links concurrently and reports the
/// dead ones. Transport errors are logged and swallowed; only a definitive
/// HTTP >= 400 counts as a dead link.
async fn sample_external(
    external: &[Url], fetch: &FetchConfig, config: &LinkProfileConfig, insights: &mut Vec<String>,
) -> usize {
    let sample_config = FetchConfig { timeout: config.sample_timeout, user_agent: fetch.user_agent.clone() };
    let sample: Vec<&Url> = external.iter().take(config.sample_size).collect();

    let checks = sample.iter().map(|url| {
        let sample_config = sample_config.clone();
        async move { (url.as_str().to_string(), fetch_status(url.as_str(), &sample_config).await) }
    });

    let mut dead = 0usize;
    for (url, result) in join_all(checks).await {
        match result {
            Ok(status) if status >= 400 => {
                insights.push(format!("broken link: {} returned status {}", url, status));
                dead += 1;
            }
            Ok(_) => {}
            Err(e) => debug!(%url, error = %e, "link sample failed; skipping"),
        }
    }

    dead
}
