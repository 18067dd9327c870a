mod json;
mod yaml;

pub use json::{to_json, to_json_compact};
pub use yaml::to_yaml;

use crate::models::{FoldKind, FoldReport};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Summary,
}

/// Format a report according to the specified format
pub fn format_output(report: &FoldReport, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Json => to_json(report),
        OutputFormat::Yaml => to_yaml(report),
        OutputFormat::Summary => Ok(format_summary(report)),
    }
}

/// Generate a human-readable summary
pub fn format_summary(report: &FoldReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Fold Summary\n\
         ============\n\
         File: {}\n\
         Language: {}\n\
         Lines: {} | Viewport: {}-{} | Visible: {}\n\n",
        report.file_name,
        report.language,
        report.line_count,
        report.viewport.start,
        report.viewport.end,
        report.visible_line_count,
    ));

    let count = |kind: FoldKind| report.ranges.iter().filter(|r| r.kind == kind).count();
    output.push_str(&format!(
        "Ranges: {} (function: {}, class: {}, object: {}, array: {}, block: {}, comment: {})\n",
        report.ranges.len(),
        count(FoldKind::Function),
        count(FoldKind::Class),
        count(FoldKind::Object),
        count(FoldKind::Array),
        count(FoldKind::Block),
        count(FoldKind::Comment),
    ));

    for range in &report.ranges {
        let marker = if report.collapsed.contains(&range.id) { "*" } else { " " };
        output.push_str(&format!(
            "{} {:<20} {:<8} lines {}-{}  {}\n",
            marker,
            range.id,
            range.kind.as_str(),
            range.start_line,
            range.end_line,
            range.summary
        ));
    }

    output.push_str(&format!(
        "\nTimestamp: {}\nTool Version: {}\n",
        report.metadata.timestamp, report.metadata.tool_version
    ));

    output
}

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("YAML serialization error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

#[cfg(test)]
pub(crate) fn sample_report() -> FoldReport {
    use crate::language::Language;
    use crate::models::{FoldableRange, ReportMetadata, Viewport};

    FoldReport {
        file_name: "x.js".to_string(),
        language: Language::JavaScript,
        line_count: 6,
        viewport: Viewport::new(0, 5),
        ranges: vec![FoldableRange {
            id: "0-5".to_string(),
            start_line: 0,
            end_line: 5,
            kind: FoldKind::Function,
            summary: "function foo()".to_string(),
        }],
        visible_line_count: 1,
        collapsed: vec!["0-5".to_string()],
        metadata: ReportMetadata::default(),
    }
}
