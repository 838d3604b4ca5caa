//! Error types for audit operations.
//!
//! This module defines the main error type [`AuditError`] which covers every
//! fatal failure an audit run can hit: URL validation, the page fetch, and
//! markup parsing. A fatal error means no report is produced at all.
//!
//! Per-dimension failures (insufficient content, no links, unreachable
//! competitor) are not errors in this sense; they degrade a single dimension
//! of the report and live in [`crate::report::AnalyzerOutcome`].

use thiserror::Error;

/// Fatal error type for audit operations.
///
/// Any variant here aborts the whole analysis before a report exists:
/// a report built without the primary page would carry no meaningful
/// dimensions.
///
/// # Example
///
/// ```rust
/// use serplens_core::{AuditError, analyze_url};
///
/// # async fn example() {
/// match analyze_url("not a url").await {
///     Ok(report) => println!("overall: {}", report.overall_score()),
///     Err(AuditError::InvalidUrl(msg)) => eprintln!("bad input: {}", msg),
///     Err(e) => eprintln!("audit failed: {}", e),
/// }
/// # }
/// ```
#[derive(Error, Debug)]
pub enum AuditError {
    /// Invalid URL provided.
    ///
    /// Returned before any network call when the URL cannot be parsed,
    /// lacks an http(s) scheme, or has no host.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Network-level failure: DNS, connection refused, TLS, and friends.
    #[error("Could not reach host: {0}")]
    Transport(#[from] reqwest::Error),

    /// The page answered with a non-2xx status.
    #[error("Page returned status {status}")]
    HttpStatus { status: u16 },

    /// The fetch exceeded its time budget.
    ///
    /// There is exactly one attempt per fetch; a timeout surfaces directly
    /// instead of being retried away.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// The response body could not be interpreted as markup at all.
    ///
    /// Malformed-but-recoverable HTML never triggers this; parsing is
    /// lenient, matching real-world pages.
    #[error("Failed to parse page markup: {0}")]
    ParseError(String),
}

/// Result type alias for AuditError.
///
/// This is a convenience alias for `std::result::Result<T, AuditError>`.
pub type Result<T> = std::result::Result<T, AuditError>;
