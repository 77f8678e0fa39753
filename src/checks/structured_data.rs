//! Structured Data check
//!
//! Parses every `<script type="application/ld+json">` block with serde_json
//! and grades the page by the best block found:
//!
//! ```text
//! any block valid with @context and @type  -> OK
//! any block valid JSON                     -> INFO
//! no blocks, or only unparseable blocks    -> ALARM
//! ```
//!
//! "Has @context and @type" is read more leniently than a flat object
//! carrying both keys. A top-level array passes when any member carries both,
//! and a `@context` envelope passes when a `@graph` member carries `@type`.
//!
//! A malformed block only affects this check; the other five still run.

use crate::checks::base::Check;
use crate::document::{Element, HtmlDocument};
use crate::evidence;
use crate::models::{Category, Verdict};
use serde_json::Value;
use tracing::debug;

const JSON_LD_TYPE: &str = "application/ld+json";

/// Grade of a single JSON-LD block
#[derive(Debug, Clone, PartialEq, Eq)]
enum BlockGrade {
    Complete,
    MissingKeys,
    Invalid(String),
}

pub struct StructuredDataCheck;

impl StructuredDataCheck {
    pub fn new() -> Self {
        Self
    }

    fn json_ld_blocks(doc: &HtmlDocument) -> Vec<Element<'_>> {
        doc.find_by_tag("script")
            .filter(|script| script.attr_is("type", JSON_LD_TYPE))
            .collect()
    }

    fn grade(text: &str) -> BlockGrade {
        match serde_json::from_str::<Value>(text.trim()) {
            Ok(value) if has_required_keys(&value) => BlockGrade::Complete,
            Ok(_) => BlockGrade::MissingKeys,
            Err(e) => BlockGrade::Invalid(e.to_string()),
        }
    }
}

impl Default for StructuredDataCheck {
    fn default() -> Self {
        Self::new()
    }
}

/// `@context` and `@type` on one object, on any member of a top-level
/// array, or `@context` on the envelope with a typed `@graph` member.
fn has_required_keys(value: &Value) -> bool {
    match value {
        Value::Object(map) => {
            let has_context = map.contains_key("@context");
            if has_context && map.contains_key("@type") {
                return true;
            }
            has_context
                && map
                    .get("@graph")
                    .and_then(Value::as_array)
                    .is_some_and(|nodes| nodes.iter().any(|n| n.get("@type").is_some()))
        }
        Value::Array(items) => items.iter().any(has_required_keys),
        _ => false,
    }
}

impl Check for StructuredDataCheck {
    fn name(&self) -> &'static str {
        "structured-data"
    }

    fn description(&self) -> &'static str {
        "Validates JSON-LD blocks for @context and @type"
    }

    fn category(&self) -> Category {
        Category::StructuredData
    }

    fn run(&self, doc: &HtmlDocument) -> Verdict {
        let blocks = Self::json_ld_blocks(doc);
        if blocks.is_empty() {
            return Verdict::alarm(
                "No structured data found. Add a JSON-LD block describing the page.",
                evidence::head_excerpt(doc),
            );
        }

        let graded: Vec<(Element<'_>, BlockGrade)> = blocks
            .into_iter()
            .map(|block| (block, Self::grade(&block.text())))
            .collect();

        for (i, (_, grade)) in graded.iter().enumerate() {
            if let BlockGrade::Invalid(err) = grade {
                debug!("JSON-LD block {} is not valid JSON: {}", i + 1, err);
            }
        }

        let complete = graded
            .iter()
            .filter(|(_, g)| *g == BlockGrade::Complete)
            .count();
        if complete > 0 {
            return Verdict::ok(format!(
                "Valid JSON-LD found with @context and @type ({} of {} block(s)).",
                complete,
                graded.len()
            ));
        }

        if let Some((block, _)) = graded.iter().find(|(_, g)| *g == BlockGrade::MissingKeys) {
            return Verdict::info(
                "Basic structured data present, but no JSON-LD block declares both @context and @type.",
                evidence::raw_text(*block),
            );
        }

        match graded.iter().find_map(|(block, g)| match g {
            BlockGrade::Invalid(err) => Some((*block, err.as_str())),
            _ => None,
        }) {
            Some((block, err)) => Verdict::alarm(
                format!("Invalid JSON-LD implementation: {}.", err),
                evidence::raw_text(block),
            ),
            None => Verdict::alarm("No usable structured data found.", None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Status;

    fn run(html: &str) -> Verdict {
        StructuredDataCheck::new().run(&HtmlDocument::parse(html))
    }

    fn with_script(body: &str) -> String {
        format!(
            r#"<html><head><script type="application/ld+json">{}</script></head><body></body></html>"#,
            body
        )
    }

    #[test]
    fn test_context_and_type_ok() {
        let verdict = run(&with_script(
            r#"{"@context":"https://schema.org","@type":"Organization"}"#,
        ));
        assert_eq!(verdict.status(), Status::Ok);
        assert!(verdict.evidence_snippet().is_none());
    }

    #[test]
    fn test_missing_context_info() {
        let verdict = run(&with_script(r#"{"@type":"Organization"}"#));
        assert_eq!(verdict.status(), Status::Info);
        assert_eq!(verdict.evidence_snippet(), Some(r#"{"@type":"Organization"}"#));
    }

    #[test]
    fn test_unparseable_alarm() {
        let verdict = run(&with_script("{not json"));
        assert_eq!(verdict.status(), Status::Alarm);
        assert!(verdict.details().starts_with("Invalid JSON-LD"));
        assert_eq!(verdict.evidence_snippet(), Some("{not json"));
    }

    #[test]
    fn test_no_script_alarm() {
        let verdict = run("<html><head><title>t</title></head><body></body></html>");
        assert_eq!(verdict.status(), Status::Alarm);
        assert!(verdict.details().starts_with("No structured data"));
    }

    #[test]
    fn test_empty_script_is_invalid() {
        let verdict = run(&with_script("   "));
        assert_eq!(verdict.status(), Status::Alarm);
        assert!(verdict.evidence_snippet().is_none());
    }

    #[test]
    fn test_other_script_types_ignored() {
        let verdict = run(
            r#"<head><script type="application/json">{"@context":"x","@type":"y"}</script></head>"#,
        );
        assert_eq!(verdict.status(), Status::Alarm);
    }

    #[test]
    fn test_type_attribute_case_insensitive() {
        let verdict = run(
            r#"<head><script type=" Application/LD+JSON ">{"@context":"x","@type":"y"}</script></head>"#,
        );
        assert_eq!(verdict.status(), Status::Ok);
    }

    #[test]
    fn test_complete_block_wins_over_invalid_block() {
        let html = format!(
            r#"<head><script type="application/ld+json">{{broken</script><script type="application/ld+json">{}</script></head>"#,
            r#"{"@context":"https://schema.org","@type":"WebPage"}"#
        );
        assert_eq!(run(&html).status(), Status::Ok);
    }

    #[test]
    fn test_partial_block_wins_over_invalid_block() {
        let html = r#"<head><script type="application/ld+json">{broken</script><script type="application/ld+json">{"name":"x"}</script></head>"#;
        assert_eq!(run(html).status(), Status::Info);
    }

    #[test]
    fn test_array_and_graph_forms() {
        let array = with_script(r#"[{"@type":"A"},{"@context":"https://schema.org","@type":"B"}]"#);
        assert_eq!(run(&array).status(), Status::Ok);

        let graph = with_script(
            r#"{"@context":"https://schema.org","@graph":[{"@type":"Organization"},{"@type":"WebSite"}]}"#,
        );
        assert_eq!(run(&graph).status(), Status::Ok);

        let untyped_graph = with_script(r#"{"@context":"https://schema.org","@graph":[{"name":"x"}]}"#);
        assert_eq!(run(&untyped_graph).status(), Status::Info);
    }

    #[test]
    fn test_scalar_json_is_partial() {
        assert_eq!(run(&with_script("42")).status(), Status::Info);
    }

    #[test]
    fn test_json_ld_inside_template_is_ignored() {
        let html = r#"<html><head></head><body><template><script type="application/ld+json">{"@context":"https://schema.org","@type":"Organization"}</script></template></body></html>"#;
        assert_eq!(run(html).status(), Status::Alarm);
    }
}
