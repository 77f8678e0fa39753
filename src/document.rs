//! Read-only HTML document model
//!
//! Thin wrapper around a `scraper` tree exposing the capability set the
//! checks need: find-by-tag, find-by-attribute-predicate, text content,
//! outer markup and attribute values. Nothing here mutates the tree.
//!
//! The underlying tree is not `Sync`, so a document stays on the thread
//! that parsed it. Batch analysis parses one document per worker instead
//! of sharing trees.

use scraper::{ElementRef, Html};
use tracing::debug;

/// A parsed HTML document
#[derive(Debug)]
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse a full HTML document.
    ///
    /// HTML5 parsing always succeeds; the parser recovers from malformed
    /// markup and synthesizes `html`, `head` and `body` when missing.
    pub fn parse(source: &str) -> Self {
        let html = Html::parse_document(source);
        if !html.errors.is_empty() {
            debug!(
                "HTML parser recovered from {} error(s)",
                html.errors.len()
            );
        }
        Self { html }
    }

    /// All rendered elements in document order, starting at `<html>`.
    ///
    /// Content of `<template>` is inert and skipped, matching what
    /// `querySelectorAll` sees in a browser.
    pub fn elements(&self) -> impl Iterator<Item = Element<'_>> + '_ {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|el| !inside_template(el))
            .map(Element)
    }

    /// Elements with the given tag name (ASCII case-insensitive)
    pub fn find_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = Element<'a>> + 'a {
        self.elements().filter(move |el| el.is(tag))
    }

    /// Elements matching an arbitrary predicate
    pub fn find_by<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = Element<'a>> + 'a
    where
        P: Fn(&Element<'a>) -> bool + 'a,
    {
        self.elements().filter(move |el| predicate(el))
    }

    pub fn first_by_tag<'a>(&'a self, tag: &'a str) -> Option<Element<'a>> {
        self.find_by_tag(tag).next()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.first_by_tag(tag).is_some()
    }

    pub fn head(&self) -> Option<Element<'_>> {
        self.first_by_tag("head")
    }

    pub fn body(&self) -> Option<Element<'_>> {
        self.first_by_tag("body")
    }
}

fn inside_template(el: &ElementRef<'_>) -> bool {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| ancestor.value().name() == "template")
}

/// Borrowed view of one element inside an `HtmlDocument`
#[derive(Debug, Clone, Copy)]
pub struct Element<'a>(ElementRef<'a>);

impl<'a> Element<'a> {
    /// Lower-case tag name
    pub fn name(&self) -> &'a str {
        self.0.value().name()
    }

    pub fn is(&self, tag: &str) -> bool {
        self.name().eq_ignore_ascii_case(tag)
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.0.value().attr(name)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Whether the attribute equals `value`, ignoring ASCII case and
    /// surrounding whitespace
    pub fn attr_is(&self, name: &str, value: &str) -> bool {
        self.attr(name)
            .is_some_and(|v| v.trim().eq_ignore_ascii_case(value))
    }

    /// Whether a space-separated token list attribute (e.g. `rel`)
    /// contains `token`, ignoring ASCII case
    pub fn has_token(&self, name: &str, token: &str) -> bool {
        self.attr(name).is_some_and(|v| {
            v.split_ascii_whitespace()
                .any(|t| t.eq_ignore_ascii_case(token))
        })
    }

    /// Concatenated text content of all descendant text nodes
    pub fn text(&self) -> String {
        self.0.text().collect()
    }

    /// Markup of the element itself, including its tags
    pub fn outer_html(&self) -> String {
        self.0.html()
    }

    pub fn inner_html(&self) -> String {
        self.0.inner_html()
    }

    /// True when the element has no content other than whitespace
    pub fn is_blank(&self) -> bool {
        self.inner_html().trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_tag_is_case_insensitive() {
        let doc = HtmlDocument::parse("<HTML><BODY><MAIN>x</MAIN><Nav></Nav></BODY></HTML>");
        assert!(doc.has_tag("main"));
        assert!(doc.has_tag("MAIN"));
        assert!(doc.has_tag("nav"));
        assert!(!doc.has_tag("footer"));
    }

    #[test]
    fn test_parser_synthesizes_head_and_body() {
        let doc = HtmlDocument::parse("<p>hello</p>");
        assert!(doc.head().is_some());
        assert!(doc.body().is_some());
        assert!(doc.head().map(|h| h.is_blank()).unwrap_or(false));
    }

    #[test]
    fn test_attributes() {
        let doc = HtmlDocument::parse(
            r#"<head><link rel="Preload StyleSheet" href="a.css"><meta name=" Description " content="d"></head>"#,
        );
        let link = doc.first_by_tag("link").expect("link");
        assert!(link.has_token("rel", "preload"));
        assert!(link.has_token("rel", "stylesheet"));
        assert!(!link.has_token("rel", "canonical"));
        assert_eq!(link.attr("href"), Some("a.css"));

        let meta = doc.first_by_tag("meta").expect("meta");
        assert!(meta.attr_is("name", "description"));
    }

    #[test]
    fn test_find_by_predicate() {
        let doc = HtmlDocument::parse(
            r#"<body><div itemscope></div><span itemprop="name">x</span><p>y</p></body>"#,
        );
        let count = doc
            .find_by(|el| el.has_attr("itemscope") || el.has_attr("itemprop"))
            .count();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_text_and_markup() {
        let doc = HtmlDocument::parse(
            r#"<head><script type="application/ld+json">{"a": 1}</script></head>"#,
        );
        let script = doc.first_by_tag("script").expect("script");
        assert_eq!(script.text(), r#"{"a": 1}"#);
        assert!(script.outer_html().starts_with("<script"));
        assert!(script.outer_html().ends_with("</script>"));
    }

    #[test]
    fn test_template_content_is_skipped() {
        let doc = HtmlDocument::parse(
            r#"<body><main></main><template><footer><img src="a.png"></footer></template></body>"#,
        );
        assert!(doc.has_tag("main"));
        assert!(doc.has_tag("template"));
        assert!(!doc.has_tag("footer"));
        assert!(!doc.has_tag("img"));
    }

    #[test]
    fn test_nested_template_content_is_skipped() {
        let doc = HtmlDocument::parse(
            "<body><template><div><template><nav></nav></template></div></template></body>",
        );
        assert!(!doc.has_tag("div"));
        assert!(!doc.has_tag("nav"));
    }

    #[test]
    fn test_elements_in_document_order() {
        let doc = HtmlDocument::parse("<body><header></header><main></main><footer></footer></body>");
        let names: Vec<&str> = doc
            .elements()
            .map(|el| el.name())
            .filter(|n| matches!(*n, "header" | "main" | "footer"))
            .collect();
        assert_eq!(names, vec!["header", "main", "footer"]);
    }
}
