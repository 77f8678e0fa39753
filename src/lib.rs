//! geoscan - Generative Engine Optimization checks for static HTML
//!
//! Inspects a parsed HTML document with six independent checks and
//! aggregates their verdicts into a 0-100 GEO score:
//!
//! - Semantic HTML structure (`<header>`, `<main>`, `<footer>`)
//! - Metadata (title, description, canonical)
//! - Structured data (JSON-LD)
//! - AI-readiness (sections, microdata)
//! - Accessibility (image alt text)
//! - Crawlability (navigation, preload hints)
//!
//! The engine is deterministic and holds no state between calls. It never
//! fetches anything: callers hand it a document, or the reason they could
//! not get one, and always receive a complete `Report`.

pub mod checks;
pub mod config;
pub mod document;
pub mod evidence;
pub mod models;
pub mod reporters;
pub mod source;

pub use checks::{CheckEngine, SourceReport};
pub use document::HtmlDocument;
pub use models::{Category, Report, ScoreBand, Status, Verdict};
pub use source::{DocumentSource, SourceError};

/// Analyze an HTML string with the built-in checks
pub fn analyze_html(html: &str) -> Report {
    CheckEngine::with_builtin_checks(1).analyze(&HtmlDocument::parse(html))
}
