use super::DetectorStrategy;
use crate::language::Language;
use regex::Regex;

/// Fallback strategy: `//` or `#` comments and no signature patterns
pub struct GenericDetector {
    language: Language,
}

impl GenericDetector {
    pub fn new(language: Language) -> Self {
        Self { language }
    }
}

impl DetectorStrategy for GenericDetector {
    fn language(&self) -> Language {
        self.language
    }

    fn is_comment_line(&self, trimmed: &str) -> bool {
        trimmed.starts_with("//") || trimmed.starts_with('#')
    }

    fn signature_patterns(&self) -> &[Regex] {
        &[]
    }
}
