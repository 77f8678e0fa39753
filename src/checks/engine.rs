//! Check execution engine and score aggregation
//!
//! The CheckEngine orchestrates one analysis:
//! - Runs every registered check against the same read-only document
//! - Contains panics per check, so one broken check cannot sink the report
//! - Assembles the six verdicts into a `Report` (which derives the score)
//! - Turns retrieval failures into the degraded all-ALARM report
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      CheckEngine                        │
//! ├─────────────────────────────────────────────────────────┤
//! │  1. Register checks (one per category)                  │
//! │  2. Run each check, catch_unwind per check              │
//! │  3. Slot verdicts by category                           │
//! │  4. Report::new computes the score                      │
//! │  Batch: one document per rayon worker, input order kept │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Within one document the checks run sequentially: the parsed tree is not
//! `Sync`. Checks are pure, so the order has no effect on the result.

use crate::checks::base::{Check, CheckOutcome, RunSummary};
use crate::checks::{
    AccessibilityCheck, AiReadinessCheck, CrawlabilityCheck, MetadataCheck, SemanticHtmlCheck,
    StructuredDataCheck,
};
use crate::document::HtmlDocument;
use crate::models::{Category, Report, Status, Verdict};
use crate::source::{DocumentSource, SourceError};
use rayon::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Upper bound for auto-detected worker threads
const MAX_AUTO_WORKERS: usize = 16;

/// Report for one input of a batch
#[derive(Debug, Clone, Serialize)]
pub struct SourceReport {
    pub source: String,
    pub report: Report,
}

/// Orchestrates GEO checks and aggregates their verdicts
pub struct CheckEngine {
    /// Registered checks, at most one per category
    checks: Vec<Arc<dyn Check>>,
    /// Number of worker threads for batch analysis
    workers: usize,
}

impl CheckEngine {
    /// Create an engine with no checks registered
    ///
    /// # Arguments
    /// * `workers` - Number of worker threads for batch analysis (0 = auto-detect)
    pub fn new(workers: usize) -> Self {
        let actual_workers = if workers == 0 {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
                .min(MAX_AUTO_WORKERS)
        } else {
            workers
        };

        Self {
            checks: Vec::new(),
            workers: actual_workers,
        }
    }

    /// Create an engine with the six built-in checks
    pub fn with_builtin_checks(workers: usize) -> Self {
        let mut engine = Self::new(workers);
        engine.register_all(builtin_checks());
        engine
    }

    /// Register a check, replacing any check already filling its category
    pub fn register(&mut self, check: Arc<dyn Check>) {
        let category = check.category();
        if let Some(pos) = self.checks.iter().position(|c| c.category() == category) {
            debug!(
                "Replacing check {} with {} for {}",
                self.checks[pos].name(),
                check.name(),
                category
            );
            self.checks[pos] = check;
        } else {
            debug!("Registering check: {}", check.name());
            self.checks.push(check);
        }
    }

    /// Register multiple checks at once
    pub fn register_all(&mut self, checks: impl IntoIterator<Item = Arc<dyn Check>>) {
        for check in checks {
            self.register(check);
        }
    }

    pub fn check_count(&self) -> usize {
        self.checks.len()
    }

    /// Names of all registered checks, in report order
    pub fn check_names(&self) -> Vec<&'static str> {
        self.ordered_checks().map(|c| c.name()).collect()
    }

    /// Registered checks in report order
    pub fn checks(&self) -> Vec<Arc<dyn Check>> {
        self.ordered_checks().cloned().collect()
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    fn ordered_checks(&self) -> impl Iterator<Item = &Arc<dyn Check>> {
        Category::ALL
            .into_iter()
            .filter_map(|cat| self.checks.iter().find(|c| c.category() == cat))
    }

    /// Run all checks against one document and build the report
    pub fn analyze(&self, doc: &HtmlDocument) -> Report {
        let (report, _, summary) = self.analyze_detailed(doc);
        debug!(
            "Analysis complete: score {} ({} ok, {} info, {} alarm, {} failed) in {}us",
            report.score(),
            summary.count(Status::Ok),
            summary.count(Status::Info),
            summary.count(Status::Alarm),
            summary.checks_failed,
            summary.total_duration_us
        );
        report
    }

    /// Run all checks and also return per-check outcomes and a summary
    pub fn analyze_detailed(&self, doc: &HtmlDocument) -> (Report, Vec<CheckOutcome>, RunSummary) {
        let start = Instant::now();
        let outcomes: Vec<CheckOutcome> = self
            .ordered_checks()
            .map(|check| self.run_single_check(check, doc))
            .collect();

        let mut summary = RunSummary::default();
        for outcome in &outcomes {
            summary.add_outcome(outcome);
            if let Some(err) = &outcome.error {
                warn!("Check {} failed: {}", outcome.check_name, err);
            }
        }
        summary.total_duration_us = start.elapsed().as_micros() as u64;

        let verdicts = Category::ALL.map(|category| {
            outcomes
                .iter()
                .find(|o| o.category == category)
                .map(|o| o.verdict.clone())
                .unwrap_or_else(|| {
                    Verdict::alarm(format!("No check registered for {}.", category.title()), None)
                })
        });

        (Report::new(verdicts), outcomes, summary)
    }

    /// Analyze a retrieval result: a document, or the reason there is none
    pub fn analyze_outcome(&self, document: Result<HtmlDocument, SourceError>) -> Report {
        match document {
            Ok(doc) => self.analyze(&doc),
            Err(e) => {
                warn!("Document unavailable, returning degraded report: {}", e);
                Report::failed(e)
            }
        }
    }

    /// Load, parse and analyze one source
    pub fn analyze_source(&self, source: &DocumentSource) -> Report {
        debug!("Analyzing {}", source.label());
        self.analyze_outcome(source.load().map(|html| HtmlDocument::parse(&html)))
    }

    /// Analyze several sources in parallel. Results keep input order.
    ///
    /// Each worker parses its own document; parsed trees never cross threads.
    pub fn analyze_batch(&self, sources: &[DocumentSource]) -> Vec<SourceReport> {
        let start = Instant::now();
        info!(
            "Analyzing {} document(s) on {} workers",
            sources.len(),
            self.workers
        );

        let analyze_one = |source: &DocumentSource| SourceReport {
            source: source.label(),
            report: self.analyze_source(source),
        };

        let results: Vec<SourceReport> = match rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .build()
        {
            Ok(pool) => pool.install(|| sources.par_iter().map(analyze_one).collect()),
            Err(e) => {
                warn!("Failed to build thread pool ({}), analyzing sequentially", e);
                sources.iter().map(analyze_one).collect()
            }
        };

        info!(
            "Batch complete: {} report(s) in {:?}",
            results.len(),
            start.elapsed()
        );
        results
    }

    /// Run a single check with panic containment and timing
    fn run_single_check(&self, check: &Arc<dyn Check>, doc: &HtmlDocument) -> CheckOutcome {
        let name = check.name().to_string();
        let category = check.category();
        let start = Instant::now();

        debug!("Running check: {}", name);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| check.run(doc)));
        let duration = start.elapsed().as_micros() as u64;

        match result {
            Ok(verdict) => {
                debug!(
                    "Check {} -> {} in {}us",
                    name,
                    verdict.status(),
                    duration
                );
                CheckOutcome::success(name, category, verdict, duration)
            }
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                error!("Check {} panicked: {}", name, panic_msg);
                CheckOutcome::failure(name, category, format!("Panic: {}", panic_msg), duration)
            }
        }
    }
}

impl Default for CheckEngine {
    fn default() -> Self {
        Self::with_builtin_checks(0)
    }
}

/// The six built-in checks, one per category
pub fn builtin_checks() -> Vec<Arc<dyn Check>> {
    vec![
        Arc::new(SemanticHtmlCheck::new()),
        Arc::new(MetadataCheck::new()),
        Arc::new(StructuredDataCheck::new()),
        Arc::new(AiReadinessCheck::new()),
        Arc::new(AccessibilityCheck::new()),
        Arc::new(CrawlabilityCheck::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedCheck {
        name: &'static str,
        category: Category,
        status: Status,
    }

    impl Check for FixedCheck {
        fn name(&self) -> &'static str {
            self.name
        }

        fn description(&self) -> &'static str {
            "Fixed verdict for testing"
        }

        fn category(&self) -> Category {
            self.category
        }

        fn run(&self, _doc: &HtmlDocument) -> Verdict {
            Verdict::new(self.status, self.name, Some("<p>x</p>".into()))
        }
    }

    struct PanickingCheck;

    impl Check for PanickingCheck {
        fn name(&self) -> &'static str {
            "panicking"
        }

        fn description(&self) -> &'static str {
            "Always panics"
        }

        fn category(&self) -> Category {
            Category::Metadata
        }

        fn run(&self, _doc: &HtmlDocument) -> Verdict {
            panic!("boom")
        }
    }

    fn fixed(category: Category, status: Status) -> Arc<dyn Check> {
        Arc::new(FixedCheck {
            name: "fixed",
            category,
            status,
        })
    }

    #[test]
    fn test_engine_creation() {
        let engine = CheckEngine::new(4);
        assert_eq!(engine.workers(), 4);
        assert_eq!(engine.check_count(), 0);
    }

    #[test]
    fn test_engine_default_workers() {
        let engine = CheckEngine::new(0);
        assert!(engine.workers() > 0);
        assert!(engine.workers() <= MAX_AUTO_WORKERS);
    }

    #[test]
    fn test_builtin_checks_in_report_order() {
        let engine = CheckEngine::default();
        assert_eq!(engine.check_count(), 6);
        assert_eq!(
            engine.check_names(),
            vec![
                "semantic-html",
                "metadata",
                "structured-data",
                "ai-readiness",
                "accessibility",
                "crawlability"
            ]
        );
    }

    #[test]
    fn test_checks_follow_category_order() {
        let mut engine = CheckEngine::new(1);
        engine.register(fixed(Category::Crawlability, Status::Ok));
        engine.register(fixed(Category::SemanticHtml, Status::Ok));
        let categories: Vec<Category> = engine.checks().iter().map(|c| c.category()).collect();
        assert_eq!(categories, vec![Category::SemanticHtml, Category::Crawlability]);
    }

    #[test]
    fn test_register_replaces_same_category() {
        let mut engine = CheckEngine::default();
        engine.register(fixed(Category::Metadata, Status::Info));
        assert_eq!(engine.check_count(), 6);

        let report = engine.analyze(&HtmlDocument::parse(""));
        assert_eq!(report.metadata().status(), Status::Info);
        assert_eq!(report.metadata().details(), "fixed");
    }

    #[test]
    fn test_missing_category_is_alarm() {
        let mut engine = CheckEngine::new(1);
        for category in Category::ALL {
            if category != Category::Crawlability {
                engine.register(fixed(category, Status::Ok));
            }
        }
        let report = engine.analyze(&HtmlDocument::parse(""));
        assert_eq!(report.crawlability().status(), Status::Alarm);
        assert!(report.crawlability().details().contains("No check registered"));
        // 5 * 100 / 6 = 83.3
        assert_eq!(report.score(), 83);
    }

    #[test]
    fn test_panicking_check_is_contained() {
        let mut engine = CheckEngine::default();
        engine.register(Arc::new(PanickingCheck));

        let (report, outcomes, summary) = engine.analyze_detailed(&HtmlDocument::parse(""));
        assert_eq!(report.metadata().status(), Status::Alarm);
        assert!(report.metadata().details().contains("boom"));
        assert_eq!(outcomes.len(), 6);
        assert_eq!(summary.checks_failed, 1);
        assert_eq!(summary.checks_run, 6);
    }

    #[test]
    fn test_failed_retrieval_is_degraded() {
        let engine = CheckEngine::default();
        let err = SourceError::Io {
            source_name: "page.html".into(),
            error: std::io::Error::new(std::io::ErrorKind::TimedOut, "timeout"),
        };
        let report = engine.analyze_outcome(Err(err));
        assert_eq!(report.score(), 0);
        for (_, verdict) in report.iter() {
            assert_eq!(verdict.status(), Status::Alarm);
            assert!(verdict.details().contains("timeout"));
        }
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let engine = CheckEngine::default();
        let doc = HtmlDocument::parse(
            r#"<html><head><title>t</title></head><body><main><img src="a.png"></main></body></html>"#,
        );
        let first = engine.analyze(&doc);
        let second = engine.analyze(&doc);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_batch_keeps_input_order() {
        let engine = CheckEngine::with_builtin_checks(4);
        let sources: Vec<DocumentSource> = (0..8)
            .map(|i| {
                let html = if i % 2 == 0 {
                    "<body><header></header><main></main><footer></footer></body>".to_string()
                } else {
                    "<body><div></div></body>".to_string()
                };
                DocumentSource::inline(format!("doc-{}", i), html)
            })
            .collect();

        let results = engine.analyze_batch(&sources);
        assert_eq!(results.len(), 8);
        for (i, result) in results.iter().enumerate() {
            assert_eq!(result.source, format!("doc-{}", i));
            let expected = if i % 2 == 0 { Status::Ok } else { Status::Alarm };
            assert_eq!(result.report.semantic_html().status(), expected);
        }
    }

    #[test]
    fn test_batch_degrades_only_failing_source() {
        let engine = CheckEngine::with_builtin_checks(2);
        let sources = vec![
            DocumentSource::inline("good", "<main>x</main>"),
            DocumentSource::from_arg("https://example.com"),
        ];
        let results = engine.analyze_batch(&sources);
        assert_eq!(results[0].report.semantic_html().status(), Status::Info);
        assert_eq!(results[1].report.score(), 0);
        assert!(results[1]
            .report
            .crawlability()
            .details()
            .contains("remote retrieval"));
    }
}
