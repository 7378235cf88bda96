//! JSON reporter
//!
//! One file renders as a single object (`path`, `raw`, `marks`, `total`),
//! several files as an array of such objects.
//! Useful for machine consumption, piping to jq, or further processing.

use super::FileReport;
use anyhow::Result;

/// Render reports as pretty-printed JSON
pub fn render(reports: &[FileReport]) -> Result<String> {
    match reports {
        [single] => Ok(serde_json::to_string_pretty(single)?),
        _ => Ok(serde_json::to_string_pretty(reports)?),
    }
}
