use super::DetectorStrategy;
use crate::language::Language;
use regex::Regex;
use std::sync::LazyLock;

static SCRIPT_SIGNATURES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"function\s+\w+\s*\(",
        r"const\s+\w+\s*=\s*\(",
        r"\w+\s*:\s*function\s*\(",
        r"\w+\s*\([^)]*\)\s*=>",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid signature pattern"))
    .collect()
});

static JAVA_SIGNATURES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(public|private|protected)?\s*(static\s+)?[\w<>]+\s+\w+\s*\(",
        r"(public|private|protected)?\s*class\s+\w+",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid signature pattern"))
    .collect()
});

/// Strategy for languages with `//` and `/* */` comments.
///
/// JavaScript, TypeScript and Java get signature patterns; C and C++ only
/// get bracket and comment detection.
pub struct CStyleDetector {
    language: Language,
}

impl CStyleDetector {
    pub fn new(language: Language) -> Self {
        Self { language }
    }
}

impl DetectorStrategy for CStyleDetector {
    fn language(&self) -> Language {
        self.language
    }

    fn is_comment_line(&self, trimmed: &str) -> bool {
        trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*')
    }

    fn signature_patterns(&self) -> &[Regex] {
        match self.language {
            Language::JavaScript | Language::TypeScript => SCRIPT_SIGNATURES.as_slice(),
            Language::Java => JAVA_SIGNATURES.as_slice(),
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(src: &[&str]) -> Vec<String> {
        src.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_block_comment_lines() {
        let detector = CStyleDetector::new(Language::JavaScript);
        assert!(detector.is_comment_line("/**"));
        assert!(detector.is_comment_line("* @param x"));
        assert!(detector.is_comment_line("*/"));
        assert!(detector.is_comment_line("// note"));
        assert!(!detector.is_comment_line("# not here"));
    }

    #[test]
    fn test_jsdoc_run_detected() {
        let detector = CStyleDetector::new(Language::TypeScript);
        let src = lines(&["/**", " * Adds.", " */", "const x = 1;"]);
        let ranges = detector.detect_comments(&src, 0, 3);
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].id, "comment-0-2");
    }

    #[test]
    fn test_arrow_function_signature() {
        let detector = CStyleDetector::new(Language::JavaScript);
        let src = lines(&["const add = (a, b) => {", "  const s = a + b;", "  log(s);", "  return s;", "};"]);
        let ranges = detector.detect_functions(&src, 0, 4, 50);
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].id, "function-0-4");
        assert_eq!(ranges[0].summary, "add(a, b) =>");
    }

    #[test]
    fn test_java_method_signature() {
        let detector = CStyleDetector::new(Language::Java);
        let src = lines(&[
            "public static int sum(int[] xs) {",
            "  int t = 0;",
            "  for (int x : xs) t += x;",
            "  return t;",
            "}",
        ]);
        let ranges = detector.detect_functions(&src, 0, 4, 50);
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].end_line, 4);
    }

    #[test]
    fn test_c_has_no_signatures() {
        let detector = CStyleDetector::new(Language::C);
        let src = lines(&["int main(void) {", "  a();", "  b();", "  return 0;", "}"]);
        assert!(detector.detect_functions(&src, 0, 4, 50).is_empty());
        assert_eq!(detector.detect_blocks(&src, 0, 4, 50).len(), 1);
    }
}
