use super::DetectorStrategy;
use crate::language::Language;
use regex::Regex;
use std::sync::LazyLock;

static SIGNATURES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"def\s+\w+\s*\(", r"class\s+\w+"]
        .iter()
        .map(|p| Regex::new(p).expect("valid signature pattern"))
        .collect()
});

/// Strategy for Python: `#` comments, `def`/`class` signatures
pub struct PythonDetector;

impl DetectorStrategy for PythonDetector {
    fn language(&self) -> Language {
        Language::Python
    }

    fn is_comment_line(&self, trimmed: &str) -> bool {
        trimmed.starts_with('#')
    }

    fn signature_patterns(&self) -> &[Regex] {
        SIGNATURES.as_slice()
    }
}
