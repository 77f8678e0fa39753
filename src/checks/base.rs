//! Base check trait and types
//!
//! This module defines the core abstractions for GEO checks:
//! - `Check` trait that all checks implement
//! - `CheckOutcome` for capturing a single execution
//! - `RunSummary` for aggregate statistics over one analysis

use crate::document::HtmlDocument;
use crate::models::{Category, Status, Verdict};
use std::collections::HashMap;

/// Result from running a single check
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    /// Name of the check that produced this outcome
    pub check_name: String,
    pub category: Category,
    pub verdict: Verdict,
    /// Execution time in microseconds
    pub duration_us: u64,
    /// Whether the check completed without panicking
    pub success: bool,
    /// Panic message if the check failed
    pub error: Option<String>,
}

impl CheckOutcome {
    /// Create a successful outcome
    pub fn success(check_name: String, category: Category, verdict: Verdict, duration_us: u64) -> Self {
        Self {
            check_name,
            category,
            verdict,
            duration_us,
            success: true,
            error: None,
        }
    }

    /// Create a failed outcome. The verdict is an ALARM naming the failure.
    pub fn failure(check_name: String, category: Category, error: String, duration_us: u64) -> Self {
        Self {
            check_name,
            category,
            verdict: Verdict::alarm(format!("Check failed: {}", error), None),
            duration_us,
            success: false,
            error: Some(error),
        }
    }
}

/// Trait for all GEO checks
///
/// A check inspects a parsed document and grades one category. Checks are
/// pure: no I/O, no shared state, no mutation of the document. Conditions
/// are evaluated in a fixed order (OK, then INFO, else ALARM), so two
/// branches never compete.
///
/// # Example Implementation
///
/// ```ignore
/// pub struct LangAttributeCheck;
///
/// impl Check for LangAttributeCheck {
///     fn name(&self) -> &'static str {
///         "lang-attribute"
///     }
///
///     fn description(&self) -> &'static str {
///         "Checks that <html> declares a language"
///     }
///
///     fn category(&self) -> Category {
///         Category::Metadata
///     }
///
///     fn run(&self, doc: &HtmlDocument) -> Verdict {
///         Verdict::ok("Language declared")
///     }
/// }
/// ```
pub trait Check: Send + Sync {
    /// Unique identifier for this check (kebab-case)
    fn name(&self) -> &'static str;

    /// Human-readable description of what this check looks for
    fn description(&self) -> &'static str;

    /// Report slot this check fills
    fn category(&self) -> Category;

    /// Grade the document
    fn run(&self, doc: &HtmlDocument) -> Verdict;
}

/// Summary statistics from running all checks against one document
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub checks_run: usize,
    pub checks_failed: usize,
    pub by_status: HashMap<Status, usize>,
    /// Total execution time in microseconds
    pub total_duration_us: u64,
}

impl RunSummary {
    /// Update summary with a check outcome
    pub fn add_outcome(&mut self, outcome: &CheckOutcome) {
        self.checks_run += 1;
        self.total_duration_us += outcome.duration_us;
        if !outcome.success {
            self.checks_failed += 1;
        }
        *self.by_status.entry(outcome.verdict.status()).or_insert(0) += 1;
    }

    pub fn count(&self, status: Status) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_success() {
        let outcome = CheckOutcome::success(
            "semantic-html".to_string(),
            Category::SemanticHtml,
            Verdict::ok("fine"),
            12,
        );
        assert!(outcome.success);
        assert!(outcome.error.is_none());
        assert_eq!(outcome.verdict.status(), Status::Ok);
    }

    #[test]
    fn test_outcome_failure_is_alarm() {
        let outcome = CheckOutcome::failure(
            "metadata".to_string(),
            Category::Metadata,
            "oops".to_string(),
            5,
        );
        assert!(!outcome.success);
        assert_eq!(outcome.error.as_deref(), Some("oops"));
        assert_eq!(outcome.verdict.status(), Status::Alarm);
        assert!(outcome.verdict.details().contains("oops"));
    }

    #[test]
    fn test_run_summary() {
        let mut summary = RunSummary::default();
        summary.add_outcome(&CheckOutcome::success(
            "a".into(),
            Category::SemanticHtml,
            Verdict::ok("ok"),
            100,
        ));
        summary.add_outcome(&CheckOutcome::success(
            "b".into(),
            Category::Metadata,
            Verdict::info("partial", None),
            20,
        ));
        summary.add_outcome(&CheckOutcome::failure(
            "c".into(),
            Category::Crawlability,
            "err".into(),
            30,
        ));

        assert_eq!(summary.checks_run, 3);
        assert_eq!(summary.checks_failed, 1);
        assert_eq!(summary.count(Status::Ok), 1);
        assert_eq!(summary.count(Status::Info), 1);
        assert_eq!(summary.count(Status::Alarm), 1);
        assert_eq!(summary.total_duration_us, 150);
    }
}
