//! GEO checks
//!
//! This module provides the check framework and the six built-in checks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       CheckEngine                           │
//! │  - Registers checks (one per category)                      │
//! │  - Runs them against one read-only document                 │
//! │  - Builds the Report (six verdicts + derived score)        │
//! │  - Degraded all-ALARM report on retrieval failure           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Check Trait                          │
//! │  - name(): Unique identifier                                │
//! │  - description(): Human-readable description                │
//! │  - category(): Report slot                                  │
//! │  - run(doc): Grade the document, return a Verdict           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Built-in checks
//!
//! | Check | OK | INFO | ALARM |
//! |---|---|---|---|
//! | `semantic-html` | header, main, footer | main only | no main |
//! | `metadata` | title, description, canonical | title or description | neither |
//! | `structured-data` | JSON-LD with @context + @type | valid JSON-LD | none / invalid |
//! | `ai-readiness` | section + microdata | one of them | neither |
//! | `accessibility` | all images have alt | some do | none do |
//! | `crawlability` | nav + preload | nav only | no nav |
//!
//! # Usage
//!
//! ```ignore
//! use geoscan::checks::CheckEngine;
//! use geoscan::document::HtmlDocument;
//!
//! let engine = CheckEngine::default();
//! let report = engine.analyze(&HtmlDocument::parse(html));
//! println!("GEO score: {}/100", report.score());
//! ```

mod base;
mod engine;

mod accessibility;
mod ai_readiness;
mod crawlability;
mod metadata;
mod semantic_html;
mod structured_data;

// Re-export base types
pub use base::{Check, CheckOutcome, RunSummary};

// Re-export engine
pub use engine::{builtin_checks, CheckEngine, SourceReport};

// Re-export check implementations
pub use accessibility::AccessibilityCheck;
pub use ai_readiness::{AiReadinessCheck, MICRODATA_ATTRIBUTES};
pub use crawlability::CrawlabilityCheck;
pub use metadata::MetadataCheck;
pub use semantic_html::SemanticHtmlCheck;
pub use structured_data::StructuredDataCheck;
