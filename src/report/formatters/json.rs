//! JSON output for farm reports
//!
//! Field names follow the report structs (`yield`, `total_profit`, ...);
//! the reading is omitted when the farm was evaluated on base yields, and
//! NaN figures from a propagated missing label are written as `null`.

use crate::report::types::FarmReport;

/// Renders a `FarmReport` as JSON that parses back into a `FarmReport`
pub struct JsonFormatter;

impl JsonFormatter {
    /// Pretty-printed report, one field per line
    pub fn format(report: &FarmReport) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(report)
    }

    /// Single-line report
    pub fn format_compact(report: &FarmReport) -> Result<String, serde_json::Error> {
        serde_json::to_string(report)
    }
}
