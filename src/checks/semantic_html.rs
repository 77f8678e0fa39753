//! Semantic HTML Structure check
//!
//! Looks for the three HTML5 landmarks AI engines use to separate page
//! chrome from content: `<header>`, `<main>` and `<footer>`.
//! `<main>` is the one that matters most: without it the page fails even
//! when header and footer are present.

use crate::checks::base::Check;
use crate::document::HtmlDocument;
use crate::evidence;
use crate::models::{Category, Verdict};

const LANDMARKS: [&str; 3] = ["header", "main", "footer"];

pub struct SemanticHtmlCheck;

impl SemanticHtmlCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SemanticHtmlCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for SemanticHtmlCheck {
    fn name(&self) -> &'static str {
        "semantic-html"
    }

    fn description(&self) -> &'static str {
        "Checks for <header>, <main> and <footer> landmarks"
    }

    fn category(&self) -> Category {
        Category::SemanticHtml
    }

    fn run(&self, doc: &HtmlDocument) -> Verdict {
        let missing: Vec<&str> = LANDMARKS
            .iter()
            .copied()
            .filter(|tag| !doc.has_tag(tag))
            .collect();
        let has_main = !missing.contains(&"main");

        if missing.is_empty() {
            Verdict::ok("Good use of semantic HTML elements. Header, main and footer are all present.")
        } else if has_main {
            Verdict::info(
                format!(
                    "Main content is marked up, but the page is missing: {}.",
                    format_tags(&missing)
                ),
                evidence::body_excerpt(doc),
            )
        } else {
            Verdict::alarm(
                format!(
                    "Poor semantic structure. Missing essential HTML5 elements: {}.",
                    format_tags(&missing)
                ),
                evidence::body_excerpt(doc),
            )
        }
    }
}

fn format_tags(tags: &[&str]) -> String {
    tags.iter()
        .map(|t| format!("<{}>", t))
        .collect::<Vec<_>>()
        .join(", ")
}
