//! Checks command - list the built-in checks

use anyhow::Result;
use console::style;
use geoscan::checks::CheckEngine;

/// Run the checks command
pub fn run() -> Result<()> {
    println!("\n{}\n", style("Built-in GEO checks").bold());
    for check in CheckEngine::default().checks() {
        let category = check.category();
        println!(
            "  {:<16} {:<28} {}",
            style(check.name()).cyan(),
            category.title(),
            style(check.description()).dim()
        );
    }
    println!(
        "\nEach check reports OK (100), INFO (50) or ALARM (0); the GEO score is the rounded mean."
    );
    Ok(())
}
