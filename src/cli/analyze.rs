//! Analyze command - score HTML documents and render the reports

use anyhow::{Context, Result};
use console::style;
use geoscan::checks::{CheckEngine, SourceReport};
use geoscan::config::{load_config_file, load_project_config, ProjectConfig};
use geoscan::reporters::{self, OutputFormat, RenderOptions};
use geoscan::DocumentSource;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Instant;
use tracing::info;

/// Arguments of `geoscan analyze` plus the global worker flag
#[derive(Debug, Default)]
pub struct AnalyzeArgs {
    pub inputs: Vec<String>,
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    pub fail_under: Option<u8>,
    pub no_emoji: bool,
    pub config: Option<PathBuf>,
    pub workers: Option<usize>,
}

/// Effective settings after merging CLI flags over the project config
#[derive(Debug, PartialEq)]
struct AnalysisConfig {
    format: OutputFormat,
    workers: usize,
    no_emoji: bool,
    fail_under: Option<u8>,
}

/// Run the analyze command
pub fn run(args: AnalyzeArgs) -> Result<()> {
    let start = Instant::now();
    let project_config = load_config(args.config.as_deref())?;
    let config = apply_config_defaults(&args, &project_config)?;

    let sources: Vec<DocumentSource> = args
        .inputs
        .iter()
        .map(|input| DocumentSource::from_arg(input))
        .collect();

    let engine = CheckEngine::with_builtin_checks(config.workers);
    let reports = match sources.as_slice() {
        [single] => vec![SourceReport {
            source: single.label(),
            report: engine.analyze_source(single),
        }],
        many => engine.analyze_batch(many),
    };

    let options = RenderOptions {
        no_emoji: config.no_emoji,
    };
    let rendered = reporters::render_with_format(&reports, config.format, &options)?;
    write_output(&rendered, args.output.as_deref())?;

    info!(
        "Analyzed {} document(s) in {:.2}s",
        reports.len(),
        start.elapsed().as_secs_f64()
    );

    check_fail_threshold(config.fail_under, &reports)
}

/// Explicit `--config` must load; the auto-discovered file is best effort
fn load_config(explicit: Option<&Path>) -> Result<ProjectConfig> {
    match explicit {
        Some(path) => load_config_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => {
            let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
            Ok(load_project_config(&cwd))
        }
    }
}

/// Apply CLI defaults from project config
fn apply_config_defaults(args: &AnalyzeArgs, project_config: &ProjectConfig) -> Result<AnalysisConfig> {
    let defaults = &project_config.defaults;
    let format_name = args
        .format
        .clone()
        .or_else(|| defaults.format.clone())
        .unwrap_or_else(|| OutputFormat::default().to_string());

    Ok(AnalysisConfig {
        format: OutputFormat::from_str(&format_name)?,
        // 0 lets the engine size the pool from available cores
        workers: args.workers.or(defaults.workers).unwrap_or(0),
        no_emoji: args.no_emoji || defaults.no_emoji.unwrap_or(false),
        fail_under: args.fail_under.or(defaults.fail_under),
    })
}

fn write_output(rendered: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            eprintln!(
                "{} Report written to {}",
                style("✓").green(),
                style(path.display()).cyan()
            );
        }
        None => {
            print!("{}", rendered);
            if !rendered.ends_with('\n') {
                println!();
            }
        }
    }
    Ok(())
}

/// Sources scoring below the gate, in input order
fn below_threshold(threshold: u8, reports: &[SourceReport]) -> Vec<&SourceReport> {
    reports
        .iter()
        .filter(|r| r.report.score() < threshold)
        .collect()
}

/// Check if fail threshold is met
fn check_fail_threshold(fail_under: Option<u8>, reports: &[SourceReport]) -> Result<()> {
    if let Some(threshold) = fail_under {
        let failing = below_threshold(threshold, reports);
        if !failing.is_empty() {
            for entry in &failing {
                eprintln!(
                    "{} scored {}/100",
                    entry.source,
                    entry.report.score()
                );
            }
            eprintln!("Failing due to --fail-under={} threshold", threshold);
            std::process::exit(1);
        }
    }
    Ok(())
}
