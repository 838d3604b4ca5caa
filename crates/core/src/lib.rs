pub mod analyzers;
pub mod audit;
pub mod document;
pub mod error;
pub mod fetch;
pub mod report;
pub mod text;

pub use analyzers::competitor::CompetitorConfig;
pub use analyzers::content_quality::ContentQualityConfig;
pub use analyzers::keyword::KeywordConfig;
pub use analyzers::links::LinkProfileConfig;
pub use analyzers::serp::SerpConfig;
pub use analyzers::technical::TechnicalConfig;
pub use audit::{AuditConfig, AuditConfigBuilder, Auditor, analyze_url};
pub use document::{Document, PageImage, PageLink};
pub use error::{AuditError, Result};
pub use fetch::{FetchConfig, FetchedPage, fetch_page, fetch_status, validate_url};
pub use report::{AnalyzerOutcome, Dimension, FailureKind, SeoReport};
