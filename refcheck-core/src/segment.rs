//! Tagged-segment model of a two-text diff.
//!
//! A diff is an ordered sequence of [`Segment`]s. Concatenating the fragments
//! tagged `Equal` or `Delete` reconstructs the reference text; concatenating
//! `Equal` or `Insert` reconstructs the candidate text. Segments are immutable
//! once produced.

use similar::{ChangeTag, TextDiff};

/// Classification of a diff segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentTag {
    /// Present in both texts.
    Equal,
    /// Present only in the candidate text.
    Insert,
    /// Present only in the reference text.
    Delete,
}

/// A contiguous text fragment carrying a single [`SegmentTag`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub tag: SegmentTag,
    pub text: String,
}

/// Diffs two texts into an ordered segment sequence.
///
/// Uses a character-level diff so arbitrary content (including embedded
/// newlines) round-trips exactly. `similar` yields one change per character;
/// adjacent changes with the same tag are merged here, but callers must not
/// rely on merging having occurred — only on the reconstruction invariant.
///
/// Two empty inputs produce an empty sequence.
pub fn diff_segments(reference: &str, candidate: &str) -> Vec<Segment> {
    let diff = TextDiff::from_chars(reference, candidate);
    let mut segments: Vec<Segment> = Vec::new();

    for change in diff.iter_all_changes() {
        let tag = match change.tag() {
            ChangeTag::Equal => SegmentTag::Equal,
            ChangeTag::Insert => SegmentTag::Insert,
            ChangeTag::Delete => SegmentTag::Delete,
        };
        match segments.last_mut() {
            Some(last) if last.tag == tag => last.text.push_str(change.value()),
            _ => segments.push(Segment {
                tag,
                text: change.value().to_owned(),
            }),
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reconstruct(segments: &[Segment], keep: SegmentTag) -> String {
        segments
            .iter()
            .filter(|s| s.tag == SegmentTag::Equal || s.tag == keep)
            .map(|s| s.text.as_str())
            .collect()
    }

    #[test]
    fn identical_texts_yield_single_equal_segment() {
        let segments = diff_segments("hello\nworld\n", "hello\nworld\n");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].tag, SegmentTag::Equal);
        assert_eq!(segments[0].text, "hello\nworld\n");
    }

    #[test]
    fn empty_inputs_yield_empty_sequence() {
        assert!(diff_segments("", "").is_empty());
    }

    #[test]
    fn no_adjacent_segments_share_a_tag() {
        let segments = diff_segments("abcdef", "abXYef");
        for pair in segments.windows(2) {
            assert_ne!(pair[0].tag, pair[1].tag, "adjacent tags must differ");
        }
    }

    #[test]
    fn reconstruction_holds_for_multiline_edits() {
        let reference = "line one\nline two\nline three\n";
        let candidate = "line one\nline 2\nline three\nline four\n";
        let segments = diff_segments(reference, candidate);
        assert_eq!(reconstruct(&segments, SegmentTag::Delete), reference);
        assert_eq!(reconstruct(&segments, SegmentTag::Insert), candidate);
    }

    #[test]
    fn reconstruction_holds_for_disjoint_texts() {
        let segments = diff_segments("aaaa", "bbbb");
        assert_eq!(reconstruct(&segments, SegmentTag::Delete), "aaaa");
        assert_eq!(reconstruct(&segments, SegmentTag::Insert), "bbbb");
    }

    #[test]
    fn single_trailing_change_is_tagged() {
        let segments = diff_segments("abc", "abd");
        assert_eq!(reconstruct(&segments, SegmentTag::Delete), "abc");
        assert_eq!(reconstruct(&segments, SegmentTag::Insert), "abd");
        assert!(segments.iter().any(|s| s.tag == SegmentTag::Delete && s.text == "c"));
        assert!(segments.iter().any(|s| s.tag == SegmentTag::Insert && s.text == "d"));
    }
}
