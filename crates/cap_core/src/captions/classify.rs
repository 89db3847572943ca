//! Track classification.
//!
//! Machine-generated caption sources emit two overlapping cues per logical
//! line: one showing the line as plain context, one re-emitting it with
//! the current word wrapped in a lightweight inline highlight tag
//! (`<c>word</c>`, often with a class such as `<c.colorE5E5E5>`). Tracks
//! of that style are detected by probing the leading cues for a balanced
//! open/close pair of the tag.
//!
//! This is a heuristic inferred from observed generator output, not a
//! documented contract. A tag first appearing after the probe window is an
//! accepted false negative; requiring both the opening and the closing tag
//! in the same cue keeps false positives unlikely.

use crate::captions::types::{Cue, TrackKind};

/// How many leading cues are inspected by default.
pub const DEFAULT_PROBE_CUES: usize = 10;

const HIGHLIGHT_OPEN: &str = "<c";
const HIGHLIGHT_CLOSE: &str = "</c>";

/// Classify a cue sequence using the default probe depth.
pub fn classify(cues: &[Cue]) -> TrackKind {
    classify_with(cues, DEFAULT_PROBE_CUES)
}

/// Classify a cue sequence, probing at most `probe_cues` leading cues.
pub fn classify_with(cues: &[Cue], probe_cues: usize) -> TrackKind {
    let probed = &cues[..cues.len().min(probe_cues)];

    if probed.iter().any(|cue| has_highlight_markup(&cue.raw_text)) {
        TrackKind::AutoGenerated
    } else {
        TrackKind::Normal
    }
}

fn has_highlight_markup(raw: &str) -> bool {
    raw.contains(HIGHLIGHT_OPEN) && raw.contains(HIGHLIGHT_CLOSE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cue(sequence: usize, raw_text: &str) -> Cue {
        let start = sequence as u64 * 1000;
        Cue::new(sequence, start, start + 1000, raw_text, raw_text)
    }

    #[test]
    fn plain_cues_classify_as_normal() {
        let cues: Vec<Cue> = (0..20).map(|i| cue(i, "plain text")).collect();
        assert_eq!(classify(&cues), TrackKind::Normal);
    }

    #[test]
    fn highlight_pair_classifies_as_auto_generated() {
        let mut cues: Vec<Cue> = (0..5).map(|i| cue(i, "context line")).collect();
        cues.push(cue(5, "context <c>word</c> rest"));
        assert_eq!(classify(&cues), TrackKind::AutoGenerated);
    }

    #[test]
    fn class_qualified_tag_is_detected() {
        let cues = vec![cue(0, "a <c.colorE5E5E5>word</c> b")];
        assert_eq!(classify(&cues), TrackKind::AutoGenerated);
    }

    #[test]
    fn unbalanced_tag_is_not_enough() {
        // Opening without closing, and vice versa
        assert_eq!(classify(&[cue(0, "text with <c>open only")]), TrackKind::Normal);
        assert_eq!(classify(&[cue(0, "close only</c> text")]), TrackKind::Normal);
    }

    #[test]
    fn tag_after_probe_window_is_ignored() {
        let mut cues: Vec<Cue> = (0..10).map(|i| cue(i, "plain")).collect();
        cues.push(cue(10, "late <c>word</c>"));
        assert_eq!(classify(&cues), TrackKind::Normal);
    }

    #[test]
    fn probe_depth_is_configurable() {
        let mut cues: Vec<Cue> = (0..10).map(|i| cue(i, "plain")).collect();
        cues.push(cue(10, "late <c>word</c>"));
        assert_eq!(classify_with(&cues, 11), TrackKind::AutoGenerated);
        assert_eq!(classify_with(&cues, 10), TrackKind::Normal);
    }

    #[test]
    fn empty_track_is_normal() {
        assert_eq!(classify(&[]), TrackKind::Normal);
    }
}
