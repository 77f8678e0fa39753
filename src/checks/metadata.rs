//! Metadata and Head Tags check
//!
//! Title, meta description and canonical link are the minimum an answer
//! engine needs to name, summarize and deduplicate a page.

use crate::checks::base::Check;
use crate::document::HtmlDocument;
use crate::evidence;
use crate::models::{Category, Verdict};

pub struct MetadataCheck;

impl MetadataCheck {
    pub fn new() -> Self {
        Self
    }

    fn has_description(doc: &HtmlDocument) -> bool {
        doc.find_by_tag("meta")
            .any(|meta| meta.attr_is("name", "description"))
    }

    fn has_canonical(doc: &HtmlDocument) -> bool {
        doc.find_by_tag("link")
            .any(|link| link.has_token("rel", "canonical"))
    }
}

impl Default for MetadataCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for MetadataCheck {
    fn name(&self) -> &'static str {
        "metadata"
    }

    fn description(&self) -> &'static str {
        "Checks for <title>, meta description and canonical link"
    }

    fn category(&self) -> Category {
        Category::Metadata
    }

    fn run(&self, doc: &HtmlDocument) -> Verdict {
        let title = doc.has_tag("title");
        let description = Self::has_description(doc);
        let canonical = Self::has_canonical(doc);

        if title && description && canonical {
            return Verdict::ok(
                "All required meta tags present including title, description, and canonical.",
            );
        }

        let missing: Vec<&str> = [
            (title, "title"),
            (description, "meta description"),
            (canonical, "canonical link"),
        ]
        .into_iter()
        .filter(|(present, _)| !present)
        .map(|(_, name)| name)
        .collect();

        if title || description {
            Verdict::info(
                format!("Essential meta tags present, but missing: {}.", missing.join(", ")),
                evidence::head_excerpt(doc),
            )
        } else {
            Verdict::alarm(
                "Missing critical meta tags. Neither a title nor a meta description is present.",
                evidence::head_excerpt(doc),
            )
        }
    }
}
