// Analyzer module: one submodule per analysis dimension.
//
// Every analyzer is a pure function over a shared read-only Document (the
// link and competitor analyzers additionally perform their own bounded
// fetches). Each returns an AnalyzerOutcome and never panics the pipeline:
// whatever goes wrong stays inside its own dimension.

pub mod competitor;
pub mod content_quality;
pub mod keyword;
pub mod links;
pub mod serp;
pub mod technical;
