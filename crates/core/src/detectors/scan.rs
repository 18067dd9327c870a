//! The three detection passes, shared by every language strategy.
//!
//! Each pass walks the clamped window `start..=end` once. Passes are
//! independent and their results are concatenated without deduplication.

use super::summary::{comment_summary, function_summary, range_summary};
use crate::models::{FoldKind, FoldableRange};
use regex::Regex;

/// Bracket ranges must span more than this many lines
const MIN_BLOCK_LINES: usize = 3;

/// Comment runs must be longer than this many lines
const MIN_COMMENT_RUN: usize = 2;

/// A signature's block must end more than this many lines after it
const MIN_FUNCTION_SPAN: usize = 2;

const OPENERS: &[char] = &['{', '['];
const CLOSERS: &[char] = &['}', ']'];

/// Guess what an opening line introduces
pub fn infer_kind(line: &str) -> FoldKind {
    if line.contains("function") || line.contains("def ") {
        FoldKind::Function
    } else if line.contains("class ") {
        FoldKind::Class
    } else if line.contains('[') {
        FoldKind::Array
    } else if line.contains('{') && (line.contains(':') || line.contains('=')) {
        FoldKind::Object
    } else {
        FoldKind::Block
    }
}

/// Stack-match `{`/`[` against `}`/`]`, at most one push and one pop per line.
///
/// Comment lines are skipped entirely. Excess closers are ignored and
/// unmatched openers never produce a range.
pub fn bracket_blocks(
    lines: &[String],
    start: usize,
    end: usize,
    is_comment: impl Fn(&str) -> bool,
    summary_width: usize,
) -> Vec<FoldableRange> {
    let mut ranges = Vec::new();
    let mut stack: Vec<(usize, FoldKind)> = Vec::new();

    for (i, line) in lines.iter().enumerate().take(end + 1).skip(start) {
        if is_comment(line.trim()) {
            continue;
        }

        if line.contains(OPENERS) {
            stack.push((i, infer_kind(line)));
        }

        if line.contains(CLOSERS) {
            if let Some((open, kind)) = stack.pop() {
                if i - open + 1 > MIN_BLOCK_LINES {
                    ranges.push(FoldableRange {
                        id: format!("{}-{}", open, i),
                        start_line: open,
                        end_line: i,
                        kind,
                        summary: range_summary(lines, open, i, kind, summary_width),
                    });
                }
            }
        }
    }

    ranges
}

/// Group consecutive comment lines into runs, emitting runs longer than two lines
pub fn comment_blocks(
    lines: &[String],
    start: usize,
    end: usize,
    is_comment: impl Fn(&str) -> bool,
) -> Vec<FoldableRange> {
    let mut ranges = Vec::new();
    let mut run_start: Option<usize> = None;

    let flush = |run: usize, last: usize, ranges: &mut Vec<FoldableRange>| {
        let len = last - run + 1;
        if len > MIN_COMMENT_RUN {
            ranges.push(FoldableRange {
                id: format!("comment-{}-{}", run, last),
                start_line: run,
                end_line: last,
                kind: FoldKind::Comment,
                summary: comment_summary(len),
            });
        }
    };

    for (i, line) in lines.iter().enumerate().take(end + 1).skip(start) {
        if is_comment(line.trim()) {
            run_start.get_or_insert(i);
        } else if let Some(run) = run_start.take() {
            flush(run, i - 1, &mut ranges);
        }
    }

    if let Some(run) = run_start {
        flush(run, end, &mut ranges);
    }

    ranges
}

/// Find the line where the bracket depth opened at `start` returns to zero.
///
/// `{`, `(` and `[` share one depth counter. Returns `start` when the block
/// never closes past its first line.
pub fn find_block_end(lines: &[String], start: usize) -> usize {
    let mut depth = 0usize;

    for (i, line) in lines.iter().enumerate().skip(start) {
        for ch in line.chars() {
            match ch {
                '{' | '(' | '[' => depth += 1,
                '}' | ')' | ']' => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 && i > start {
                        return i;
                    }
                }
                _ => {}
            }
        }
    }

    start
}

/// Match each window line against `patterns` (first match wins) and emit
/// the block that follows a matching signature.
pub fn signature_blocks(
    lines: &[String],
    start: usize,
    end: usize,
    patterns: &[Regex],
    summary_width: usize,
) -> Vec<FoldableRange> {
    let mut ranges = Vec::new();
    if patterns.is_empty() {
        return ranges;
    }

    for (i, line) in lines.iter().enumerate().take(end + 1).skip(start) {
        if !patterns.iter().any(|p| p.is_match(line)) {
            continue;
        }

        let block_end = find_block_end(lines, i);
        if block_end > i + MIN_FUNCTION_SPAN {
            ranges.push(FoldableRange {
                id: format!("function-{}-{}", i, block_end),
                start_line: i,
                end_line: block_end,
                kind: FoldKind::Function,
                summary: function_summary(line, summary_width),
            });
        }
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(src: &[&str]) -> Vec<String> {
        src.iter().map(|s| s.to_string()).collect()
    }

    fn slash_comment(t: &str) -> bool {
        t.starts_with("//")
    }

    #[test]
    fn test_infer_kind() {
        assert_eq!(infer_kind("function foo() {"), FoldKind::Function);
        assert_eq!(infer_kind("class Foo {"), FoldKind::Class);
        assert_eq!(infer_kind("const xs = ["), FoldKind::Array);
        assert_eq!(infer_kind("const o = {"), FoldKind::Object);
        assert_eq!(infer_kind("if (x) {"), FoldKind::Block);
    }

    #[test]
    fn test_nested_brackets() {
        let src = lines(&[
            "if (a) {",
            "  const o = {",
            "    x: 1,",
            "    y: 2,",
            "  }",
            "}",
        ]);
        let ranges = bracket_blocks(&src, 0, 5, slash_comment, 50);
        let ids: Vec<&str> = ranges.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1-4", "0-5"]);
        assert_eq!(ranges[0].kind, FoldKind::Object);
        assert_eq!(ranges[1].kind, FoldKind::Block);
        assert_eq!(ranges[1].summary, "block (6 lines)");
    }

    #[test]
    fn test_short_blocks_and_excess_closers() {
        let src = lines(&["}", "{", "  a", "}", "]", "{"]);
        // 1-3 spans exactly 3 lines, the leading closer and trailing opener are ignored
        assert!(bracket_blocks(&src, 0, 5, slash_comment, 50).is_empty());
    }

    #[test]
    fn test_open_and_close_on_one_line() {
        let src = lines(&["{", "  a", "  b", "} else {", "  c", "}"]);
        let ranges = bracket_blocks(&src, 0, 5, slash_comment, 50);
        // line 3 pushes then pops its own opener, leaving line 0 to match line 5
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].id, "0-5");
    }

    #[test]
    fn test_comment_lines_skipped_by_brackets() {
        let src = lines(&["{", "// }", "  a", "  b", "}"]);
        let ranges = bracket_blocks(&src, 0, 4, slash_comment, 50);
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].id, "0-4");
    }

    #[test]
    fn test_comment_runs() {
        let src = lines(&["// a", "// b", "x", "// c", "// d", "// e", "y", "// f", "// g", "// h"]);
        let ranges = comment_blocks(&src, 0, 9, slash_comment);
        let ids: Vec<&str> = ranges.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["comment-3-5", "comment-7-9"]);
        assert_eq!(ranges[0].summary, "Comment block (3 lines)");
    }

    #[test]
    fn test_comment_run_cut_by_window() {
        let src = lines(&["// a", "// b", "// c", "// d"]);
        let ranges = comment_blocks(&src, 1, 2, slash_comment);
        assert!(ranges.is_empty());
    }

    #[test]
    fn test_find_block_end() {
        let src = lines(&["function f() {", "  x();", "}"]);
        assert_eq!(find_block_end(&src, 0), 2);
        assert_eq!(find_block_end(&lines(&["f() {"]), 0), 0);
    }

    #[test]
    fn test_signature_blocks_first_match_only() {
        let patterns = vec![Regex::new(r"fn\s+\w+").unwrap(), Regex::new(r"\w+\(").unwrap()];
        let src = lines(&["fn run() {", "  a", "  b", "}"]);
        let ranges = signature_blocks(&src, 0, 3, &patterns, 50);
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].id, "function-0-3");
    }
}
