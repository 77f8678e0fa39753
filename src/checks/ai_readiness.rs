//! AI-Readiness check
//!
//! Content split into `<section>` blocks and annotated with inline
//! microdata is easier for answer engines to chunk and cite.

use crate::checks::base::Check;
use crate::document::HtmlDocument;
use crate::evidence;
use crate::models::{Category, Verdict};

/// Attributes that mark inline microdata
pub const MICRODATA_ATTRIBUTES: [&str; 3] = ["itemscope", "itemtype", "itemprop"];

pub struct AiReadinessCheck;

impl AiReadinessCheck {
    pub fn new() -> Self {
        Self
    }

    fn has_microdata(doc: &HtmlDocument) -> bool {
        doc.find_by(|el| MICRODATA_ATTRIBUTES.iter().any(|attr| el.has_attr(attr)))
            .next()
            .is_some()
    }
}

impl Default for AiReadinessCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for AiReadinessCheck {
    fn name(&self) -> &'static str {
        "ai-readiness"
    }

    fn description(&self) -> &'static str {
        "Checks for <section> blocks and microdata attributes"
    }

    fn category(&self) -> Category {
        Category::AiReadiness
    }

    fn run(&self, doc: &HtmlDocument) -> Verdict {
        let sections = doc.has_tag("section");
        let microdata = Self::has_microdata(doc);

        match (sections, microdata) {
            (true, true) => Verdict::ok(
                "Content well-structured for AI consumption with sections and inline microdata.",
            ),
            (true, false) => Verdict::info(
                "Content is organized into sections, but no microdata attributes (itemscope, itemtype, itemprop) were found.",
                evidence::body_excerpt(doc),
            ),
            (false, true) => Verdict::info(
                "Microdata attributes present, but content is not organized into <section> blocks.",
                evidence::body_excerpt(doc),
            ),
            (false, false) => Verdict::alarm(
                "Poor AI readiness. Content has neither <section> blocks nor microdata attributes.",
                evidence::body_excerpt(doc),
            ),
        }
    }
}
