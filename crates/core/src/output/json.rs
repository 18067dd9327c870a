use super::FormatError;
use crate::models::FoldReport;

/// Convert a report to pretty-printed JSON
pub fn to_json(report: &FoldReport) -> Result<String, FormatError> {
    serde_json::to_string_pretty(report).map_err(FormatError::from)
}

/// Convert a report to compact JSON
#[allow(dead_code)]
pub fn to_json_compact(report: &FoldReport) -> Result<String, FormatError> {
    serde_json::to_string(report).map_err(FormatError::from)
}
