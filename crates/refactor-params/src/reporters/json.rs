//! JSON reporter — the run summary as pretty-printed JSON.

use crate::driver::RunSummary;

/// Renders a `RunSummary` for machine consumption.
pub struct JsonReporter;

impl JsonReporter {
    pub fn generate(&self, summary: &RunSummary) -> Result<String, String> {
        serde_json::to_string_pretty(summary).map_err(|e| format!("JSON serialization failed: {e}"))
    }
}
