use crate::language::Language;
use ropey::Rope;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Kind of foldable range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoldKind {
    /// Function or method body
    Function,
    /// Class body
    Class,
    /// Object/dict literal
    Object,
    /// Array/list literal
    Array,
    /// Any other bracketed block
    Block,
    /// Run of single-line comments
    Comment,
}

impl FoldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FoldKind::Function => "function",
            FoldKind::Class => "class",
            FoldKind::Object => "object",
            FoldKind::Array => "array",
            FoldKind::Block => "block",
            FoldKind::Comment => "comment",
        }
    }
}

/// A contiguous line span that can be collapsed to its first line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoldableRange {
    /// Identifier used by fold state
    pub id: String,
    /// First line (0-indexed)
    pub start_line: usize,
    /// Last line (0-indexed, inclusive)
    pub end_line: usize,
    pub kind: FoldKind,
    /// One-line description shown when collapsed
    pub summary: String,
}

impl FoldableRange {
    /// Number of lines spanned, both ends included
    pub fn line_count(&self) -> usize {
        self.end_line - self.start_line + 1
    }
}

/// A line that survives projection, with its index in the full buffer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleLine {
    pub text: String,
    pub original_index: usize,
}

/// Window of line indices currently on screen (both ends inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub start: usize,
    pub end: usize,
}

impl Viewport {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Viewport covering a whole buffer of `len` lines
    pub fn full(len: usize) -> Self {
        Self {
            start: 0,
            end: len.saturating_sub(1),
        }
    }

    /// Clamp to `[0, len - 1]`, or `None` when nothing of the buffer is covered
    pub fn clamp(&self, len: usize) -> Option<(usize, usize)> {
        if len == 0 {
            return None;
        }
        let end = self.end.min(len - 1);
        if self.start > end {
            return None;
        }
        Some((self.start, end))
    }
}

/// Ordered lines of one open file, shared cheaply between the engine and callers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Arc<[String]>,
}

impl LineBuffer {
    pub fn new(lines: Vec<String>) -> Self {
        Self {
            lines: lines.into(),
        }
    }

    /// Split text into lines on `\n` only, dropping `\n` / `\r\n` terminators.
    ///
    /// Other Unicode line separators (form feed, lone `\r`, U+2028, ...) stay
    /// inside the line text; ropey is built without `cr_lines`/`unicode_lines`.
    pub fn from_text(text: &str) -> Self {
        let rope = Rope::from_str(text);
        let lines = rope
            .lines()
            .map(|line| {
                let mut s = line.to_string();
                if s.ends_with('\n') {
                    s.pop();
                    if s.ends_with('\r') {
                        s.pop();
                    }
                }
                s
            })
            .collect();
        Self::new(lines)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl From<Vec<String>> for LineBuffer {
    fn from(lines: Vec<String>) -> Self {
        Self::new(lines)
    }
}

impl From<&[&str]> for LineBuffer {
    fn from(lines: &[&str]) -> Self {
        Self::new(lines.iter().map(|s| s.to_string()).collect())
    }
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub timestamp: String,
    pub tool_version: String,
}

impl Default for ReportMetadata {
    fn default() -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Snapshot of one engine session, for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoldReport {
    pub file_name: String,
    pub language: Language,
    pub line_count: usize,
    pub viewport: Viewport,
    pub ranges: Vec<FoldableRange>,
    pub visible_line_count: usize,
    /// Collapsed ids, sorted for stable output
    pub collapsed: Vec<String>,
    pub metadata: ReportMetadata,
}
