//! Rendering strategies for a segment sequence.
//!
//! Two independent pure functions turn a diff into displayable text:
//!
//! - [`render_inline`] — a single interleaved stream where inserted text is
//!   visible in place and deleted text is marked rather than omitted.
//! - [`render_side_by_side`] — two aligned column texts; equal fragments are
//!   duplicated into both, deletions appear only in the reference column and
//!   insertions only in the candidate column.
//!
//! Markup is injected through the [`Emphasis`] seam so that terminal escape
//! codes stay out of the engine and out of test assertions.

use crate::segment::{Segment, SegmentTag};

/// Visual markers applied to inserted and deleted fragments.
///
/// The binary implements this on its color theme with ANSI backgrounds; tests
/// and non-terminal output use [`MarkerEmphasis`].
pub trait Emphasis {
    /// Wraps a fragment present only in the candidate text.
    fn inserted(&self, text: &str) -> String;
    /// Wraps a fragment present only in the reference text.
    fn deleted(&self, text: &str) -> String;
}

/// Escape-free [`Emphasis`] using wdiff-style textual markers.
///
/// Inserted fragments become `{+…+}`, deleted fragments `[-…-]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerEmphasis;

impl Emphasis for MarkerEmphasis {
    fn inserted(&self, text: &str) -> String {
        format!("{{+{text}+}}")
    }

    fn deleted(&self, text: &str) -> String {
        format!("[-{text}-]")
    }
}

/// Precomputed side-by-side view: two parallel sequences of display lines.
///
/// Stored lines keep any blank entries produced by splitting on `'\n'`;
/// suppressing them is a display-time concern, not a property of the data.
#[derive(Debug, Clone, Default)]
pub struct SideBySide {
    /// Reference column: equal fragments plus marked deletions.
    pub reference: Vec<String>,
    /// Candidate column: equal fragments plus marked insertions.
    pub candidate: Vec<String>,
}

/// Renders a segment sequence as one interleaved stream.
///
/// Fragments appear in original segment order: `Insert` wrapped as inserted,
/// `Delete` wrapped as deleted, `Equal` unmarked.
pub fn render_inline(segments: &[Segment], emphasis: &dyn Emphasis) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment.tag {
            SegmentTag::Equal => out.push_str(&segment.text),
            SegmentTag::Insert => out.push_str(&emphasis.inserted(&segment.text)),
            SegmentTag::Delete => out.push_str(&emphasis.deleted(&segment.text)),
        }
    }
    out
}

/// Renders a segment sequence as two aligned column texts.
///
/// Builds the reference and candidate texts fragment by fragment, then splits
/// each on newline characters into display lines.
pub fn render_side_by_side(segments: &[Segment], emphasis: &dyn Emphasis) -> SideBySide {
    let mut reference = String::new();
    let mut candidate = String::new();

    for segment in segments {
        match segment.tag {
            SegmentTag::Equal => {
                reference.push_str(&segment.text);
                candidate.push_str(&segment.text);
            }
            SegmentTag::Insert => candidate.push_str(&emphasis.inserted(&segment.text)),
            SegmentTag::Delete => reference.push_str(&emphasis.deleted(&segment.text)),
        }
    }

    SideBySide {
        reference: reference.split('\n').map(str::to_owned).collect(),
        candidate: candidate.split('\n').map(str::to_owned).collect(),
    }
}
