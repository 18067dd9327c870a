use crate::config::IdDecoding;
use crate::engine::fold_state::FoldState;
use crate::engine::projector::decode_id;
use crate::models::{FoldKind, FoldableRange, VisibleLine};
use termcolor::Color;

const GLYPH_COLLAPSED: char = '▸';
const GLYPH_EXPANDED: char = '▾';

/// Text renderer for projected lines, with a line-number gutter and fold glyphs
#[derive(Debug, Clone)]
pub struct Renderer {
    line_numbers: bool,
    id_decoding: IdDecoding,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            line_numbers: true,
            id_decoding: IdDecoding::default(),
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the line-number gutter (builder pattern)
    pub fn with_line_numbers(mut self, enabled: bool) -> Self {
        self.line_numbers = enabled;
        self
    }

    /// Set the id decoding used by projection (builder pattern).
    ///
    /// Only collapsed ids that decode actually hide lines, so only those get
    /// the collapsed glyph and placeholder.
    pub fn with_id_decoding(mut self, decoding: IdDecoding) -> Self {
        self.id_decoding = decoding;
        self
    }

    /// Render visible lines as plain text
    pub fn render(
        &self,
        visible: &[VisibleLine],
        ranges: &[FoldableRange],
        state: &FoldState,
    ) -> String {
        self.render_with(visible, ranges, state, |glyph, _| glyph.to_string(), |text, _| {
            format!("/* {} */", text)
        })
    }

    /// Render visible lines with ANSI-coloured glyphs and placeholders
    pub fn render_ansi(
        &self,
        visible: &[VisibleLine],
        ranges: &[FoldableRange],
        state: &FoldState,
    ) -> String {
        let dim = "\x1b[2m";
        let reset = "\x1b[0m";

        self.render_with(
            visible,
            ranges,
            state,
            |glyph, kind| format!("{}{}{}", ansi_code(fold_color(kind)), glyph, reset),
            |text, kind| format!("{}{}/* {} */{}", dim, ansi_code(fold_color(kind)), text, reset),
        )
    }

    fn render_with(
        &self,
        visible: &[VisibleLine],
        ranges: &[FoldableRange],
        state: &FoldState,
        glyph: impl Fn(char, FoldKind) -> String,
        placeholder: impl Fn(&str, FoldKind) -> String,
    ) -> String {
        let width = visible
            .last()
            .map(|v| (v.original_index + 1).to_string().len())
            .unwrap_or(1);

        let mut output = String::new();

        for line in visible {
            if self.line_numbers {
                output.push_str(&format!("{:>width$} ", line.original_index + 1, width = width));
            }

            let starting: Vec<&FoldableRange> = ranges
                .iter()
                .filter(|r| r.start_line == line.original_index)
                .collect();
            let collapsed = starting.iter().find(|r| {
                state.is_collapsed(&r.id) && decode_id(&r.id, self.id_decoding).is_some()
            });

            match (collapsed, starting.first()) {
                (Some(range), _) => {
                    output.push_str(&glyph(GLYPH_COLLAPSED, range.kind));
                    output.push(' ');
                    output.push_str(&line.text);
                    output.push(' ');
                    output.push_str(&placeholder(&range.summary, range.kind));
                }
                (None, Some(range)) => {
                    output.push_str(&glyph(GLYPH_EXPANDED, range.kind));
                    output.push(' ');
                    output.push_str(&line.text);
                }
                (None, None) => {
                    output.push_str("  ");
                    output.push_str(&line.text);
                }
            }
            output.push('\n');
        }

        output
    }
}

/// Palette per fold kind
fn fold_color(kind: FoldKind) -> Color {
    match kind {
        FoldKind::Function => Color::Blue,
        FoldKind::Class => Color::Magenta,
        FoldKind::Object => Color::Cyan,
        FoldKind::Array => Color::Cyan,
        FoldKind::Block => Color::Yellow,
        FoldKind::Comment => Color::Green,
    }
}

fn ansi_code(color: Color) -> &'static str {
    match color {
        Color::Blue => "\x1b[34m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Red => "\x1b[31m",
        _ => "\x1b[90m", // Gray
    }
}
