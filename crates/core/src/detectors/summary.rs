use crate::models::FoldKind;
use regex::Regex;
use std::sync::LazyLock;

static JS_FUNCTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"function\s+(\w+)\s*\(([^)]*)\)").expect("valid regex"));
static ARROW_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"const\s+(\w+)\s*=\s*\(([^)]*)\)\s*=>").expect("valid regex")
});
static PY_FUNCTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"def\s+(\w+)\s*\(([^)]*)\)").expect("valid regex"));
static CLASS_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"class\s+(\w+)").expect("valid regex"));

/// Summarise a function signature line: `function f(a)`, `f(a) =>`,
/// `def f(a)`, or the truncated line itself.
pub fn function_summary(line: &str, width: usize) -> String {
    let line = line.trim();

    if let Some(caps) = JS_FUNCTION.captures(line) {
        return format!("function {}({})", &caps[1], &caps[2]);
    }
    if let Some(caps) = ARROW_FUNCTION.captures(line) {
        return format!("{}({}) =>", &caps[1], &caps[2]);
    }
    if let Some(caps) = PY_FUNCTION.captures(line) {
        return format!("def {}({})", &caps[1], &caps[2]);
    }

    let preview: String = line.chars().take(width).collect();
    if line.chars().count() > width {
        format!("{}...", preview)
    } else {
        preview
    }
}

/// Summary for a bracket range opened on `lines[start]`
pub fn range_summary(
    lines: &[String],
    start: usize,
    end: usize,
    kind: FoldKind,
    width: usize,
) -> String {
    let line_count = end - start + 1;
    let first = lines.get(start).map(|l| l.trim()).unwrap_or_default();

    match kind {
        FoldKind::Function => function_summary(first, width),
        FoldKind::Class => match CLASS_NAME.captures(first) {
            Some(caps) => format!("class {} ({} lines)", &caps[1], line_count),
            None => format!("Class block ({} lines)", line_count),
        },
        _ => format!("{} ({} lines)", kind.as_str(), line_count),
    }
}

pub fn comment_summary(line_count: usize) -> String {
    format!("Comment block ({} lines)", line_count)
}
