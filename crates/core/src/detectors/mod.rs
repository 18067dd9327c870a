mod c_style;
mod generic;
mod python;
pub mod scan;
pub mod summary;

pub use c_style::CStyleDetector;
pub use generic::GenericDetector;
pub use python::PythonDetector;

use crate::config::DEFAULT_SUMMARY_WIDTH;
use crate::language::Language;
use crate::models::{FoldableRange, Viewport};
use regex::Regex;
use tracing::trace;

/// Per-language fold detection strategy.
///
/// Implementations supply a comment predicate and signature patterns; the
/// three passes default to the shared heuristics in [`scan`]. A strategy
/// backed by a real parser can override the passes without affecting fold
/// state or projection.
pub trait DetectorStrategy: Send + Sync {
    /// Language this strategy handles
    fn language(&self) -> Language;

    /// Whether an already trimmed line is a single-line comment
    fn is_comment_line(&self, trimmed: &str) -> bool;

    /// Ordered function/class signature patterns, first match wins per line
    fn signature_patterns(&self) -> &[Regex];

    fn detect_blocks(
        &self,
        lines: &[String],
        start: usize,
        end: usize,
        summary_width: usize,
    ) -> Vec<FoldableRange> {
        scan::bracket_blocks(lines, start, end, |t| self.is_comment_line(t), summary_width)
    }

    fn detect_comments(&self, lines: &[String], start: usize, end: usize) -> Vec<FoldableRange> {
        scan::comment_blocks(lines, start, end, |t| self.is_comment_line(t))
    }

    fn detect_functions(
        &self,
        lines: &[String],
        start: usize,
        end: usize,
        summary_width: usize,
    ) -> Vec<FoldableRange> {
        scan::signature_blocks(lines, start, end, self.signature_patterns(), summary_width)
    }
}

/// Create the detection strategy for a language family
pub fn create_detector(language: Language) -> Box<dyn DetectorStrategy> {
    match language {
        Language::JavaScript
        | Language::TypeScript
        | Language::Java
        | Language::C
        | Language::Cpp => Box::new(CStyleDetector::new(language)),
        Language::Python => Box::new(PythonDetector),
        other => Box::new(GenericDetector::new(other)),
    }
}

/// Detect foldable ranges inside `viewport`, using the default summary width
pub fn detect(lines: &[String], file_name: &str, viewport: Viewport) -> Vec<FoldableRange> {
    detect_with_width(lines, file_name, viewport, DEFAULT_SUMMARY_WIDTH)
}

/// Detect foldable ranges inside `viewport`.
///
/// The viewport is clamped to the buffer; an empty buffer or a viewport
/// lying wholly past its end yields no ranges. Bracket, comment and
/// signature results are concatenated in that order.
pub fn detect_with_width(
    lines: &[String],
    file_name: &str,
    viewport: Viewport,
    summary_width: usize,
) -> Vec<FoldableRange> {
    let Some((start, end)) = viewport.clamp(lines.len()) else {
        return Vec::new();
    };

    let detector = create_detector(Language::from_file_name(file_name));

    let mut ranges = detector.detect_blocks(lines, start, end, summary_width);
    let blocks = ranges.len();

    ranges.extend(detector.detect_comments(lines, start, end));
    let comments = ranges.len() - blocks;

    ranges.extend(detector.detect_functions(lines, start, end, summary_width));
    let functions = ranges.len() - blocks - comments;

    trace!(
        file = file_name,
        language = %detector.language(),
        start,
        end,
        blocks,
        comments,
        functions,
        "detected foldable ranges"
    );

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoldKind;

    fn lines(src: &[&str]) -> Vec<String> {
        src.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_function_scenario() {
        let src = lines(&["function foo() {", "  a", "  b", "  c", "  d", "}"]);
        let ranges = detect(&src, "x.js", Viewport::new(0, 5));

        let block = ranges.iter().find(|r| r.id == "0-5").unwrap();
        assert_eq!(block.start_line, 0);
        assert_eq!(block.end_line, 5);
        assert_eq!(block.kind, FoldKind::Function);
        assert_eq!(block.summary, "function foo()");

        let func = ranges.iter().find(|r| r.id == "function-0-5").unwrap();
        assert_eq!(func.kind, FoldKind::Function);
        assert_eq!(ranges.len(), 2);
    }

    #[test]
    fn test_viewport_clamped() {
        let src = lines(&["function foo() {", "  a", "  b", "  c", "  d", "}"]);
        assert_eq!(
            detect(&src, "x.js", Viewport::new(0, 500)),
            detect(&src, "x.js", Viewport::new(0, 5))
        );
        assert!(detect(&src, "x.js", Viewport::new(10, 20)).is_empty());
        assert!(detect(&[], "x.js", Viewport::new(0, 5)).is_empty());
    }

    #[test]
    fn test_signature_end_found_past_viewport() {
        let src = lines(&["function foo() {", "  a", "  b", "  c", "  d", "}"]);
        let ranges = detect(&src, "x.js", Viewport::new(0, 2));

        // the closer on line 5 is outside the window, so no bracket range,
        // but the signature pass follows the block to the end of the buffer
        let ids: Vec<&str> = ranges.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["function-0-5"]);
        assert_eq!(ranges[0].end_line, 5);

        let blocks = scan::bracket_blocks(&src, 0, 2, |t| t.starts_with("//"), 50);
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_unknown_language_gets_brackets_and_comments_only() {
        let src = lines(&[
            "# one",
            "# two",
            "# three",
            "function foo() {",
            "  a",
            "  b",
            "}",
        ]);
        let ranges = detect(&src, "notes.unknown", Viewport::full(src.len()));
        let ids: Vec<&str> = ranges.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["3-6", "comment-0-2"]);
    }

    #[test]
    fn test_detect_is_idempotent() {
        let src = lines(&[
            "// header",
            "// more",
            "// done",
            "const cfg = {",
            "  items: [",
            "    1,",
            "    2,",
            "  ],",
            "}",
        ]);
        let viewport = Viewport::new(0, 8);
        assert_eq!(detect(&src, "a.ts", viewport), detect(&src, "a.ts", viewport));
    }

    #[test]
    fn test_size_thresholds_hold() {
        let src = lines(&[
            "// a", "// b", "// c", "class A {", "  m() {", "    [", "      1,", "    ]", "  }",
            "}", "{", "}", "// z",
        ]);
        for range in detect(&src, "a.js", Viewport::full(src.len())) {
            assert!(range.start_line < range.end_line);
            match range.kind {
                FoldKind::Comment => assert!(range.line_count() > 2),
                _ if range.id.starts_with("function-") => {
                    assert!(range.end_line - range.start_line > 2)
                }
                _ => assert!(range.line_count() > 3),
            }
        }
    }
}
