//! Compaction of auto-generated tracks.
//!
//! Machine-generated sources interleave a "context" cue and a
//! "highlighted" re-emission of the same logical line. The even-indexed
//! cues are the stable, non-overlapping display cues; keeping only those
//! yields a track that reads like ordinary captions. The even/odd split
//! is a heuristic tied to the observed generator output, the same caveat
//! as the classifier.

use crate::captions::types::Cue;

/// Keep cues at even original positions and renumber from 0.
///
/// An odd-length input simply yields `ceil(n / 2)` cues.
pub fn compact(cues: Vec<Cue>) -> Vec<Cue> {
    cues.into_iter()
        .step_by(2)
        .enumerate()
        .map(|(i, mut cue)| {
            cue.sequence = i;
            cue
        })
        .collect()
}
