//! Evidence extraction helpers
//!
//! Each non-OK verdict may carry a short excerpt of the markup that caused
//! it. Helpers here pick the fragment; `truncate` bounds its length.
//! Every helper returns `None` rather than an empty or synthetic snippet.

use crate::document::{Element, HtmlDocument};

/// Maximum evidence length in characters (not bytes)
pub const MAX_EVIDENCE_LEN: usize = 200;

/// Appended to evidence cut at `MAX_EVIDENCE_LEN`
pub const ELLIPSIS: &str = "...";

/// Trim surrounding whitespace and cap at `MAX_EVIDENCE_LEN` characters.
///
/// Idempotent: truncating an already truncated snippet returns it unchanged.
pub fn truncate(text: &str) -> String {
    let text = text.trim();
    if text.chars().count() <= MAX_EVIDENCE_LEN {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(MAX_EVIDENCE_LEN).collect();
    cut.push_str(ELLIPSIS);
    cut
}

/// Full markup of a single offending element
pub fn markup(element: Element<'_>) -> Option<String> {
    Some(element.outer_html()).filter(|m| !m.trim().is_empty())
}

/// Markup of a container element, absent when the container is empty
pub fn container(element: Option<Element<'_>>) -> Option<String> {
    element.filter(|el| !el.is_blank()).and_then(markup)
}

pub fn head_excerpt(doc: &HtmlDocument) -> Option<String> {
    container(doc.head())
}

pub fn body_excerpt(doc: &HtmlDocument) -> Option<String> {
    container(doc.body())
}

/// Raw text of a script-like element
pub fn raw_text(element: Element<'_>) -> Option<String> {
    Some(element.text()).filter(|t| !t.trim().is_empty())
}

/// Markup of the first element matching `predicate`
pub fn first_offender<'a, I, P>(elements: I, predicate: P) -> Option<String>
where
    I: IntoIterator<Item = Element<'a>>,
    P: Fn(&Element<'a>) -> bool,
{
    elements.into_iter().find(|el| predicate(el)).and_then(markup)
}
