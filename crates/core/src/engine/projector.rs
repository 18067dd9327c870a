//! Projection of a line buffer through the current fold state.

use crate::config::IdDecoding;
use crate::models::VisibleLine;

const COMMENT_PREFIX: &str = "comment-";
const FUNCTION_PREFIX: &str = "function-";

/// Decode a collapsed id into the `(start, end)` span it hides.
///
/// Under [`IdDecoding::Compatible`] only bare `start-end` ids decode, so
/// collapsing a comment or signature range is accepted but hides nothing.
/// [`IdDecoding::Structured`] also accepts `comment-` and `function-` ids.
pub fn decode_id(id: &str, decoding: IdDecoding) -> Option<(usize, usize)> {
    let bare = match decoding {
        IdDecoding::Compatible => id,
        IdDecoding::Structured => id
            .strip_prefix(COMMENT_PREFIX)
            .or_else(|| id.strip_prefix(FUNCTION_PREFIX))
            .unwrap_or(id),
    };

    let mut parts = bare.split('-');
    let start = parts.next()?.parse::<usize>().ok()?;
    let end = parts.next()?.parse::<usize>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((start, end))
}

/// Lines left after hiding the interior (`start + 1..=end`) of every
/// collapsed span, in original order. Undecodable ids are inert.
pub fn project<'a>(
    lines: &[String],
    collapsed: impl IntoIterator<Item = &'a str>,
    decoding: IdDecoding,
) -> Vec<VisibleLine> {
    let mut hidden = vec![false; lines.len()];

    for (start, end) in collapsed
        .into_iter()
        .filter_map(|id| decode_id(id, decoding))
    {
        let last = end.min(lines.len().saturating_sub(1));
        for flag in hidden.iter_mut().take(last + 1).skip(start.saturating_add(1)) {
            *flag = true;
        }
    }

    lines
        .iter()
        .zip(hidden)
        .enumerate()
        .filter(|(_, (_, is_hidden))| !is_hidden)
        .map(|(original_index, (text, _))| VisibleLine {
            text: text.clone(),
            original_index,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("line {}", i)).collect()
    }

    fn indices(visible: &[VisibleLine]) -> Vec<usize> {
        visible.iter().map(|v| v.original_index).collect()
    }

    #[test]
    fn test_decode_compatible() {
        assert_eq!(decode_id("3-9", IdDecoding::Compatible), Some((3, 9)));
        assert_eq!(decode_id("comment-3-9", IdDecoding::Compatible), None);
        assert_eq!(decode_id("function-0-5", IdDecoding::Compatible), None);
        assert_eq!(decode_id("1-2-3", IdDecoding::Compatible), None);
        assert_eq!(decode_id("7", IdDecoding::Compatible), None);
        assert_eq!(decode_id("a-b", IdDecoding::Compatible), None);
        assert_eq!(decode_id("", IdDecoding::Compatible), None);
    }

    #[test]
    fn test_decode_structured() {
        assert_eq!(decode_id("comment-3-9", IdDecoding::Structured), Some((3, 9)));
        assert_eq!(decode_id("function-0-5", IdDecoding::Structured), Some((0, 5)));
        assert_eq!(decode_id("3-9", IdDecoding::Structured), Some((3, 9)));
        assert_eq!(decode_id("region-3-9", IdDecoding::Structured), None);
    }

    #[test]
    fn test_empty_state_is_identity() {
        let src = lines(7);
        let visible = project(&src, std::iter::empty(), IdDecoding::Compatible);
        assert_eq!(indices(&visible), (0..7).collect::<Vec<_>>());
        assert_eq!(visible[3].text, "line 3");
    }

    #[test]
    fn test_collapse_hides_interior() {
        let src = lines(8);
        let visible = project(&src, ["1-4"], IdDecoding::Compatible);
        assert_eq!(indices(&visible), vec![0, 1, 5, 6, 7]);
    }

    #[test]
    fn test_nested_and_overlapping() {
        let src = lines(10);
        let visible = project(&src, ["0-8", "2-4", "6-9"], IdDecoding::Compatible);
        assert_eq!(indices(&visible), vec![0]);
    }

    #[test]
    fn test_prefixed_ids_inert_unless_structured() {
        let src = lines(6);
        let ids = ["function-0-5", "comment-1-3"];
        assert_eq!(project(&src, ids, IdDecoding::Compatible).len(), 6);
        assert_eq!(indices(&project(&src, ids, IdDecoding::Structured)), vec![0]);
    }

    #[test]
    fn test_spans_past_buffer_are_clipped() {
        let src = lines(4);
        let visible = project(&src, ["2-40", "90-99"], IdDecoding::Compatible);
        assert_eq!(indices(&visible), vec![0, 1, 2]);
    }
}
