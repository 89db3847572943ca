//! Core caption types.
//!
//! All timing values are integer milliseconds. A cue is displayable up to
//! but not including its end instant: at exactly `end_ms` it is passed.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::captions::cursor::CueCursor;

/// Structural kind of a caption track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackKind {
    /// Ordinary cues, one visible caption at a time.
    #[default]
    Normal,
    /// Machine-generated rolling captions that interleave a context cue
    /// and a highlighted re-emission of the same line.
    AutoGenerated,
}

/// Process-unique identity of a loaded track.
///
/// Cursors are bound to this identity so a replaced track can never be
/// queried through a stale cue index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrackId(u64);

static NEXT_TRACK_ID: AtomicU64 = AtomicU64::new(1);

impl TrackId {
    fn next() -> Self {
        Self(NEXT_TRACK_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A single caption cue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    /// Position in display order (0-based, contiguous within a track).
    pub sequence: usize,
    /// Start time in milliseconds.
    pub start_ms: u64,
    /// End time in milliseconds, `end_ms >= start_ms`.
    pub end_ms: u64,
    /// Payload with inline markup resolved for display.
    pub text: String,
    /// Original payload including inline tags, kept for classification.
    pub raw_text: String,
}

impl Cue {
    /// Create a new cue.
    pub fn new(
        sequence: usize,
        start_ms: u64,
        end_ms: u64,
        text: impl Into<String>,
        raw_text: impl Into<String>,
    ) -> Self {
        Self {
            sequence,
            start_ms,
            end_ms,
            text: text.into(),
            raw_text: raw_text.into(),
        }
    }

    /// Whether playback has moved past this cue.
    pub fn is_passed(&self, current_ms: u64) -> bool {
        self.end_ms <= current_ms
    }

    /// Duration in milliseconds.
    pub fn duration_ms(&self) -> u64 {
        self.end_ms - self.start_ms
    }
}

/// An immutable, time-ordered caption track.
///
/// Built once per load, replaced wholesale on the next load. Cues are
/// sorted by `start_ms` (ties keep input order) and `sequence` values are
/// contiguous from 0; both hold by construction.
#[derive(Debug, Clone)]
pub struct Track {
    id: TrackId,
    kind: TrackKind,
    cues: Vec<Cue>,
}

impl Track {
    /// Create a track from cues, establishing the ordering invariants.
    pub fn new(mut cues: Vec<Cue>, kind: TrackKind) -> Self {
        cues.sort_by_key(|c| c.start_ms);
        for (i, cue) in cues.iter_mut().enumerate() {
            cue.sequence = i;
        }
        Self {
            id: TrackId::next(),
            kind,
            cues,
        }
    }

    /// Identity of this track.
    pub fn id(&self) -> TrackId {
        self.id
    }

    /// Structural kind decided at classification time.
    pub fn kind(&self) -> TrackKind {
        self.kind
    }

    /// Cues in display order.
    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    /// Number of cues.
    pub fn len(&self) -> usize {
        self.cues.len()
    }

    /// Whether the track has no cues.
    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// End of the last-ending cue in milliseconds.
    pub fn duration_ms(&self) -> u64 {
        self.cues.iter().map(|c| c.end_ms).max().unwrap_or(0)
    }

    /// Create a cursor bound to this track.
    pub fn cursor(&self) -> CueCursor {
        CueCursor::new(self)
    }
}
