//! Page fetching over HTTP.
//!
//! This module retrieves the raw content of a single page and classifies
//! transport outcomes into the fatal error taxonomy. One fetch is one
//! attempt: latency and availability problems are surfaced to the caller
//! rather than masked by retries.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::{AuditError, Result};

/// HTTP client configuration for fetching pages.
///
/// Controls the timeout budget and User-Agent for both the primary page
/// fetch and any secondary fetches (link sampling, competitor page).
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 10,
            user_agent: "Mozilla/5.0 (compatible; Serplens/0.2; +https://github.com/stormlightlabs/serplens)"
                .to_string(),
        }
    }
}

/// A successfully retrieved page.
///
/// Carries everything downstream consumers need: the decoded body, the
/// final status code, and the resolved URL after redirects.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// HTTP status code of the final response.
    pub status: u16,
    /// Decoded response body.
    pub body: String,
    /// Resolved URL after following redirects.
    pub final_url: Url,
}

/// Validates that a URL is absolute with an http(s) scheme and a host.
///
/// Runs before any network call so malformed input fails fast with
/// [`AuditError::InvalidUrl`].
pub fn validate_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).map_err(|e| AuditError::InvalidUrl(e.to_string()))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(AuditError::InvalidUrl(format!(
            "unsupported scheme '{}' (expected http or https)",
            parsed.scheme()
        )));
    }
    if parsed.host_str().is_none() {
        return Err(AuditError::InvalidUrl("URL has no host".to_string()));
    }

    Ok(parsed)
}

/// Fetches a page and returns its body, status, and final URL.
///
/// Performs a single bounded-time GET. Follows redirects, respects the
/// configured timeout, and uses a browser-like User-Agent for better
/// compatibility.
///
/// # Errors
///
/// * [`AuditError::InvalidUrl`] when the URL fails validation (no network call).
/// * [`AuditError::Timeout`] when the request exceeded the timeout budget.
/// * [`AuditError::Transport`] on a DNS, connection, or TLS failure.
/// * [`AuditError::HttpStatus`] when the server answered with a non-2xx status.
pub async fn fetch_page(url: &str, config: &FetchConfig) -> Result<FetchedPage> {
    let parsed_url = validate_url(url)?;

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(AuditError::Transport)?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                AuditError::Timeout { timeout: config.timeout }
            } else {
                AuditError::Transport(e)
            }
        })?;

    let status = response.status().as_u16();
    let final_url = response.url().clone();
    debug!(%final_url, status, "fetched page");

    if !response.status().is_success() {
        return Err(AuditError::HttpStatus { status });
    }

    let body = response.text().await?;

    Ok(FetchedPage { status, body, final_url })
}

/// Fetches only the status of a URL, for link liveness sampling.
///
/// Shares the validation and error mapping of [`fetch_page`] but discards
/// the body. Non-2xx statuses are returned as values here, not errors;
/// a dead link is a finding, not a failure.
pub async fn fetch_status(url: &str, config: &FetchConfig) -> Result<u16> {
    let parsed_url = validate_url(url)?;

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(AuditError::Transport)?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                AuditError::Timeout { timeout: config.timeout }
            } else {
                AuditError::Transport(e)
            }
        })?;

    Ok(response.status().as_u16())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_config_default() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout, 10);
        assert!(config.user_agent.contains("Serplens"));
    }

    #[test]
    fn test_validate_url_ok() {
        let url = validate_url("https://example.com/page").unwrap();
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_validate_url_relative() {
        assert!(matches!(validate_url("not-a-url"), Err(AuditError::InvalidUrl(_))));
    }

    #[test]
    fn test_validate_url_bad_scheme() {
        assert!(matches!(validate_url("ftp://example.com"), Err(AuditError::InvalidUrl(_))));
    }

    #[test]
    fn test_fetch_page_invalid_url() {
        let config = FetchConfig::default();
        let result = std::thread::spawn(move || {
            tokio::runtime::Runtime::new()
                .unwrap()
                .block_on(fetch_page("no-scheme.example", &config))
        })
        .join()
        .unwrap();

        assert!(matches!(result, Err(AuditError::InvalidUrl(_))));
    }

    #[test]
    fn test_error_timeout_message() {
        let err = AuditError::Timeout { timeout: 10 };
        assert!(err.to_string().contains("10"));
    }
}
