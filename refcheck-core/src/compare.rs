//! Pairwise comparator: one reference text against one candidate text.

use crate::render::{render_side_by_side, Emphasis, SideBySide};
use crate::segment::{diff_segments, Segment, SegmentTag};

/// Outcome of comparing one numbered file pair.
///
/// Created once by the batch runner and read-only afterwards. The side-by-side
/// view is precomputed eagerly so a later render request does not re-run the
/// diff.
#[derive(Debug, Clone)]
pub struct ComparisonResult {
    /// The file number this pair was derived from.
    pub id: usize,
    /// True iff the texts are byte-identical.
    pub matched: bool,
    /// The ordered segment sequence for the pair.
    pub segments: Vec<Segment>,
    /// Precomputed display lines for the side-by-side view.
    pub side_by_side: SideBySide,
}

/// Compares two texts and classifies the pair.
///
/// `matched` is true iff the segment sequence is exactly one `Equal` segment
/// spanning the whole content. An empty sequence — which only occurs when both
/// inputs are empty — also counts as matched.
///
/// Pure computation: no I/O, cannot fail.
pub fn compare(
    id: usize,
    reference: &str,
    candidate: &str,
    emphasis: &dyn Emphasis,
) -> ComparisonResult {
    let segments = diff_segments(reference, candidate);
    let matched = match segments.as_slice() {
        [] => true,
        [only] => only.tag == SegmentTag::Equal,
        _ => false,
    };
    let side_by_side = render_side_by_side(&segments, emphasis);

    ComparisonResult {
        id,
        matched,
        segments,
        side_by_side,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::MarkerEmphasis;

    #[test]
    fn identical_texts_match() {
        let result = compare(1, "abc\n", "abc\n", &MarkerEmphasis);
        assert!(result.matched);
        assert_eq!(result.segments.len(), 1);
    }

    #[test]
    fn both_empty_texts_match() {
        let result = compare(1, "", "", &MarkerEmphasis);
        assert!(result.matched);
        assert!(result.segments.is_empty());
    }

    #[test]
    fn single_byte_difference_does_not_match() {
        assert!(!compare(1, "abc", "abd", &MarkerEmphasis).matched);
        assert!(!compare(2, "abc", "abc ", &MarkerEmphasis).matched);
        assert!(!compare(3, "", "x", &MarkerEmphasis).matched);
    }

    #[test]
    fn side_by_side_is_precomputed() {
        let result = compare(2, "abc", "abd", &MarkerEmphasis);
        assert_eq!(result.side_by_side.reference, vec!["ab[-c-]"]);
        assert_eq!(result.side_by_side.candidate, vec!["ab{+d+}"]);
    }
}
