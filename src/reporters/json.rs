//! JSON reporter
//!
//! A single document renders as the bare report object, the wire shape
//! consumers of the score card expect. Several documents render as an array
//! of `{source, report}` in input order.

use crate::checks::SourceReport;
use anyhow::Result;

/// Render reports as pretty-printed JSON
pub fn render(reports: &[SourceReport]) -> Result<String> {
    match reports {
        [single] => Ok(serde_json::to_string_pretty(&single.report)?),
        many => Ok(serde_json::to_string_pretty(many)?),
    }
}
