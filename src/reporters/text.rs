//! Text (terminal) reporter with colors and formatting

use super::RenderOptions;
use crate::checks::SourceReport;
use crate::models::{Report, ScoreBand, Status};
use anyhow::Result;
use console::{style, StyledObject};

/// Evidence lines shown per verdict before eliding
const MAX_EVIDENCE_LINES: usize = 6;

fn styled_score(score: u8) -> StyledObject<String> {
    let text = format!("{}/100", score);
    match ScoreBand::from_score(score) {
        ScoreBand::Excellent => style(text).green().bold(),
        ScoreBand::Good => style(text).yellow().bold(),
        ScoreBand::NeedsWork => style(text).red().bold(),
    }
}

fn styled_marker(status: Status, options: &RenderOptions) -> StyledObject<&'static str> {
    let marker = if options.no_emoji {
        status.tag()
    } else {
        status.icon()
    };
    match status {
        Status::Ok => style(marker).green(),
        Status::Info => style(marker).cyan(),
        Status::Alarm => style(marker).red(),
    }
}

/// Render reports as formatted terminal output
pub fn render(reports: &[SourceReport], options: &RenderOptions) -> Result<String> {
    let mut out = String::new();
    for entry in reports {
        render_one(&mut out, &entry.source, &entry.report, options);
    }
    Ok(out)
}

fn render_one(out: &mut String, source: &str, report: &Report, options: &RenderOptions) {
    out.push_str(&format!(
        "\n{} {} {}\n",
        styled_marker(report.worst_status(), options),
        style("GEO Analysis").bold(),
        style(source).dim()
    ));
    out.push_str(&format!(
        "{}\n",
        style("──────────────────────────────────────").dim()
    ));
    out.push_str(&format!("Score: {}\n", styled_score(report.score())));
    out.push_str(&format!("{}\n\n", report.band().summary()));

    for (category, verdict) in report.iter() {
        out.push_str(&format!(
            "  {} {:<28} {}\n",
            styled_marker(verdict.status(), options),
            style(category.title()).bold(),
            verdict.details()
        ));
        if let Some(evidence) = verdict.evidence_snippet() {
            push_evidence(out, evidence);
        }
    }
}

fn push_evidence(out: &mut String, evidence: &str) {
    let lines: Vec<&str> = evidence.lines().filter(|l| !l.trim().is_empty()).collect();
    for line in lines.iter().take(MAX_EVIDENCE_LINES) {
        out.push_str(&format!("      {}\n", style(line.trim_end()).dim()));
    }
    if lines.len() > MAX_EVIDENCE_LINES {
        out.push_str(&format!(
            "      {}\n",
            style(format!("... {} more line(s)", lines.len() - MAX_EVIDENCE_LINES)).dim()
        ));
    }
}
