//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Generates reports suitable for pull request comments and CI job
//! summaries: a score heading, a results table and the offending markup in
//! fenced `html` blocks.

use super::RenderOptions;
use crate::checks::SourceReport;
use crate::models::{Report, Status};
use anyhow::Result;

/// Render reports as GitHub-flavored Markdown
pub fn render(reports: &[SourceReport], options: &RenderOptions) -> Result<String> {
    let mut md = String::new();
    for (i, entry) in reports.iter().enumerate() {
        if i > 0 {
            md.push_str("\n---\n\n");
        }
        md.push_str(&render_header(&entry.source, &entry.report));
        md.push('\n');
        md.push_str(&render_table(&entry.report, options));
        md.push('\n');
        md.push_str(&render_evidence(&entry.report));
    }
    Ok(md)
}

fn render_header(source: &str, report: &Report) -> String {
    format!(
        "# GEO Report: `{}`\n\n**Score: {}/100**\n\n{}\n",
        source,
        report.score(),
        report.band().summary()
    )
}

/// Pipes would split a table cell
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

fn render_table(report: &Report, options: &RenderOptions) -> String {
    let mut md = String::from("| Check | Status | Details |\n|---|---|---|\n");
    for (category, verdict) in report.iter() {
        let status = verdict.status();
        let marker = if options.no_emoji {
            status.tag().to_string()
        } else {
            format!("{} {}", status.icon(), status.label())
        };
        md.push_str(&format!(
            "| {} | {} | {} |\n",
            category.title(),
            marker,
            escape_cell(verdict.details())
        ));
    }
    md
}

fn render_evidence(report: &Report) -> String {
    let flagged: Vec<_> = report
        .iter()
        .filter(|(_, v)| v.status() != Status::Ok)
        .filter_map(|(c, v)| v.evidence_snippet().map(|e| (c, e)))
        .collect();
    if flagged.is_empty() {
        return String::new();
    }

    let mut md = String::from("## Evidence\n\n");
    for (category, evidence) in flagged {
        let fence = code_fence(evidence);
        md.push_str(&format!(
            "### {}\n\n{fence}html\n{}\n{fence}\n\n",
            category.title(),
            evidence
        ));
    }
    md
}

/// Backtick fence one longer than the longest backtick run in `content`,
/// and never shorter than three
fn code_fence(content: &str) -> String {
    let longest = content
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    "`".repeat((longest + 1).max(3))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Verdict;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_markdown_has_table_row_per_category() {
        let md = render(&[test_report()], &RenderOptions::default()).unwrap();
        assert!(md.contains("# GEO Report: `shop.html`"));
        assert!(md.contains("**Score: 50/100**"));
        assert_eq!(md.matches("\n| ").count(), 7);
        assert!(md.contains("| Structured Data | 🚨 Alarm |"));
    }

    #[test]
    fn test_markdown_evidence_blocks() {
        let md = render(&[test_report()], &RenderOptions::default()).unwrap();
        assert!(md.contains("## Evidence"));
        assert!(md.contains("```html\n<title>Shop</title>\n```"));
        assert!(!md.contains("### Accessibility"));
    }

    #[test]
    fn test_all_ok_has_no_evidence_section() {
        let report = Report::new(std::array::from_fn(|_| Verdict::ok("fine")));
        let entry = SourceReport {
            source: "ok.html".into(),
            report,
        };
        let md = render(&[entry], &RenderOptions::default()).unwrap();
        assert!(!md.contains("## Evidence"));
        assert!(md.contains("**Score: 100/100**"));
    }

    #[test]
    fn test_fence_outgrows_backticks_in_evidence() {
        assert_eq!(code_fence("<p>plain</p>"), "```");
        assert_eq!(code_fence("<code>`x`</code>"), "```");
        assert_eq!(code_fence("<pre>```js\nx\n```</pre>"), "````");

        let report = Report::new(std::array::from_fn(|_| {
            Verdict::alarm("bad", Some("<pre>```</pre>".into()))
        }));
        let entry = SourceReport {
            source: "fence.html".into(),
            report,
        };
        let md = render(&[entry], &RenderOptions::default()).unwrap();
        assert!(md.contains("````html\n<pre>```</pre>\n````"));
    }

    #[test]
    fn test_pipes_are_escaped() {
        assert_eq!(escape_cell("a|b"), "a\\|b");
    }

    #[test]
    fn test_no_emoji_tags() {
        let md = render(&[test_report()], &RenderOptions { no_emoji: true }).unwrap();
        assert!(md.contains("| [ALARM] |"));
    }
}
