//! CLI command definitions and handlers

mod analyze;
mod checks;
mod init;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parse and validate workers count (1-64)
fn parse_workers(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n == 0 {
        Err("workers must be at least 1".to_string())
    } else if n > 64 {
        Err("workers cannot exceed 64".to_string())
    } else {
        Ok(n)
    }
}

/// geoscan - Generative Engine Optimization checks for HTML pages
#[derive(Parser, Debug)]
#[command(name = "geoscan")]
#[command(
    version,
    about = "Score HTML pages for generative-engine readiness",
    long_about = "geoscan inspects saved HTML pages with six checks (semantic structure, \
metadata, structured data, AI-readiness, accessibility, crawlability) and reports a \
0-100 GEO score with the markup that triggered each finding.\n\n\
Pages are read from disk or stdin; nothing is fetched over the network.",
    after_help = "\
Examples:
  geoscan analyze index.html                   Analyze one page
  geoscan analyze dist/*.html --format json    JSON output for scripting
  curl -s https://example.com | geoscan analyze -
  geoscan analyze index.html --fail-under 80   Exit code 1 below 80 (CI mode)
  geoscan checks                               List the checks"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Number of parallel workers for batch analysis (1-64, default: auto)
    #[arg(long, global = true, value_parser = parse_workers)]
    pub workers: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze one or more HTML documents
    #[command(after_help = "\
Examples:
  geoscan analyze index.html                         Text report
  geoscan analyze a.html b.html --format json        JSON array, one entry per page
  geoscan analyze index.html -f md -o geo.md         Markdown report to a file
  geoscan analyze - < page.html                      Read from stdin
  geoscan analyze index.html --fail-under 60         Exit code 1 when score < 60")]
    Analyze {
        /// HTML files to analyze (`-` reads stdin)
        #[arg(required = true, value_name = "INPUT")]
        inputs: Vec<String>,

        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', value_parser = ["text", "json", "markdown", "md"])]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Exit with code 1 if any document scores below this value
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        fail_under: Option<u8>,

        /// Replace status icons with plain-text tags
        #[arg(long)]
        no_emoji: bool,

        /// Config file (default: ./geoscan.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List the built-in checks
    Checks,

    /// Write an example geoscan.toml
    Init {
        /// Directory to write into
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

/// Run the CLI command
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze {
            inputs,
            format,
            output,
            fail_under,
            no_emoji,
            config,
        } => analyze::run(analyze::AnalyzeArgs {
            inputs,
            format,
            output,
            fail_under,
            no_emoji,
            config,
            workers: cli.workers,
        }),

        Commands::Checks => checks::run(),

        Commands::Init { path } => init::run(&path),
    }
}
