use super::FormatError;
use crate::models::FoldReport;

/// Convert a report to YAML
pub fn to_yaml(report: &FoldReport) -> Result<String, FormatError> {
    serde_yaml::to_string(report).map_err(FormatError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::sample_report;

    #[test]
    fn test_to_yaml() {
        let yaml = to_yaml(&sample_report()).unwrap();
        assert!(yaml.contains("file_name: x.js"));
        assert!(yaml.contains("ranges:"));
    }
}
