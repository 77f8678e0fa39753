//! Output reporters for GEO reports
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with colors and emoji
//! - `json` - Machine-readable JSON
//! - `markdown` - GitHub-flavored Markdown

mod json;
mod markdown;
mod text;

use crate::checks::SourceReport;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Presentation switches shared by the human-readable reporters
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Replace status icons with `[OK]` / `[INFO]` / `[ALARM]`
    pub no_emoji: bool,
}

/// Render reports in the specified format
pub fn render(reports: &[SourceReport], format: &str, options: &RenderOptions) -> Result<String> {
    let fmt = OutputFormat::from_str(format)?;
    render_with_format(reports, fmt, options)
}

/// Render reports using an OutputFormat enum
pub fn render_with_format(
    reports: &[SourceReport],
    format: OutputFormat,
    options: &RenderOptions,
) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(reports, options),
        OutputFormat::Json => json::render(reports),
        OutputFormat::Markdown => markdown::render(reports, options),
    }
}
