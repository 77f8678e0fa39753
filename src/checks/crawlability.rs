//! Crawlability & Performance check
//!
//! A static `<nav>` gives crawlers a link structure without running
//! scripts; `<link rel="preload">` hints show an asset loading strategy.
//! Navigation is required, preload is the bonus.

use crate::checks::base::Check;
use crate::document::HtmlDocument;
use crate::evidence;
use crate::models::{Category, Verdict};

pub struct CrawlabilityCheck;

impl CrawlabilityCheck {
    pub fn new() -> Self {
        Self
    }

    fn has_preload(doc: &HtmlDocument) -> bool {
        doc.find_by_tag("link")
            .any(|link| link.has_token("rel", "preload"))
    }
}

impl Default for CrawlabilityCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for CrawlabilityCheck {
    fn name(&self) -> &'static str {
        "crawlability"
    }

    fn description(&self) -> &'static str {
        "Checks for a <nav> element and preload hints"
    }

    fn category(&self) -> Category {
        Category::Crawlability
    }

    fn run(&self, doc: &HtmlDocument) -> Verdict {
        if !doc.has_tag("nav") {
            return Verdict::alarm(
                "Poor crawlability. No <nav> element found; navigation may depend on JavaScript.",
                evidence::head_excerpt(doc),
            );
        }

        if Self::has_preload(doc) {
            Verdict::ok("Excellent crawl structure with static navigation and preloaded assets.")
        } else {
            Verdict::info(
                "Adequate crawlability, but no <link rel=\"preload\"> directives for critical assets.",
                evidence::head_excerpt(doc),
            )
        }
    }
}
