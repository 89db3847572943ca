//! Timeline cursor.
//!
//! Answers "what caption should be visible at playback time T". The
//! cursor is an explicit value owned by whichever loop drives playback
//! (typically a 100ms timer tick), never ambient shared state.
//!
//! Playback time is normally monotonically increasing, so the matching
//! cue is at or just after the previous match. The scan therefore starts
//! at the last matched index, which amortizes to O(1) per query during
//! sequential playback. A discontinuous seek must go through [`CueCursor::reset`],
//! forcing a full forward scan from 0.
//!
//! The cursor remembers the [`TrackId`] it was created for. Querying it
//! against a different track rebinds it and restarts from 0, so a
//! replaced track can never be served a stale index.
//!
//! When both the single-cue and dual-cue flavors are driven for the same
//! track, each keeps its own cursor.

use crate::captions::types::{Cue, Track, TrackId};

/// Scan position for cue lookups against one track.
#[derive(Debug, Clone)]
pub struct CueCursor {
    track_id: TrackId,
    last: Option<usize>,
}

impl CueCursor {
    /// Create a cursor bound to `track`.
    pub fn new(track: &Track) -> Self {
        Self {
            track_id: track.id(),
            last: None,
        }
    }

    /// Clear the scan position. Must be called on a discontinuous seek.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Index of the last matched cue, if any.
    pub fn last_sequence(&self) -> Option<usize> {
        self.last
    }

    /// Return the cue to display at `current_ms`: the first cue from the
    /// scan position whose `end_ms > current_ms`.
    ///
    /// `None` means no caption at this time, a normal outcome during
    /// silent gaps and past the end of the track.
    pub fn find<'t>(&mut self, track: &'t Track, current_ms: u64) -> Option<&'t Cue> {
        self.scan(track, current_ms).map(|i| &track.cues()[i])
    }

    /// Return the cue pair to display at `current_ms` for compacted
    /// auto-generated tracks, where consecutive cues form the two-line
    /// rolling display.
    ///
    /// Yields `(cue, next)` when a successor exists, `(cue, None)` at the
    /// tail, and `(None, None)` when nothing matches.
    pub fn find_pair<'t>(
        &mut self,
        track: &'t Track,
        current_ms: u64,
    ) -> (Option<&'t Cue>, Option<&'t Cue>) {
        match self.scan(track, current_ms) {
            Some(i) => (Some(&track.cues()[i]), track.cues().get(i + 1)),
            None => (None, None),
        }
    }

    fn scan(&mut self, track: &Track, current_ms: u64) -> Option<usize> {
        if self.track_id != track.id() {
            self.track_id = track.id();
            self.last = None;
        }

        let start = self.last.unwrap_or(0);
        for (i, cue) in track.cues().iter().enumerate().skip(start) {
            if cue.end_ms > current_ms {
                self.last = Some(i);
                return Some(i);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::captions::types::{Cue, TrackKind};

    fn track(times: &[(u64, u64)]) -> Track {
        let cues = times
            .iter()
            .enumerate()
            .map(|(i, &(start, end))| {
                Cue::new(i, start, end, format!("cue {i}"), format!("cue {i}"))
            })
            .collect();
        Track::new(cues, TrackKind::Normal)
    }

    #[test]
    fn finds_current_cue() {
        let t = track(&[(1000, 2000), (3000, 4000)]);
        let mut cursor = t.cursor();

        assert_eq!(cursor.find(&t, 1500).unwrap().sequence, 0);
        assert_eq!(cursor.find(&t, 2500).unwrap().sequence, 1);
        assert!(cursor.find(&t, 5000).is_none());
    }

    #[test]
    fn boundary_is_exclusive_at_end() {
        let t = track(&[(1000, 2000)]);
        let mut cursor = t.cursor();

        assert!(cursor.find(&t, 1999).is_some());
        cursor.reset();
        assert!(cursor.find(&t, 2000).is_none());
    }

    #[test]
    fn empty_track_yields_none() {
        let t = track(&[]);
        let mut cursor = t.cursor();
        assert!(cursor.find(&t, 0).is_none());
        assert_eq!(cursor.find_pair(&t, 0), (None, None));
    }

    #[test]
    fn monotonic_scan_matches_fresh_scan() {
        let t = track(&[(0, 500), (1000, 2000), (2000, 3500), (4000, 5000)]);
        let times = [0, 100, 600, 1500, 2000, 2400, 3600, 4200, 6000];

        let mut carried = t.cursor();
        for &ms in &times {
            let mut fresh = t.cursor();
            let carried_seq = carried.find(&t, ms).map(|c| c.sequence);
            let fresh_seq = fresh.find(&t, ms).map(|c| c.sequence);
            assert_eq!(carried_seq, fresh_seq, "divergence at {ms}ms");
        }
    }

    #[test]
    fn reset_allows_seeking_backwards() {
        let t = track(&[(1000, 2000), (3000, 4000), (5000, 6000)]);
        let mut cursor = t.cursor();

        assert_eq!(cursor.find(&t, 5500).unwrap().sequence, 2);

        // Without reset the scan cannot go back
        assert_eq!(cursor.find(&t, 1500).unwrap().sequence, 2);

        cursor.reset();
        assert_eq!(cursor.find(&t, 1500).unwrap().sequence, 0);
    }

    #[test]
    fn cursor_rebinds_to_replaced_track() {
        let old = track(&[(1000, 2000), (3000, 4000), (5000, 6000)]);
        let mut cursor = old.cursor();
        assert_eq!(cursor.find(&old, 5500).unwrap().sequence, 2);

        // New track with earlier cues only; a stale index would miss them
        let new = track(&[(0, 800)]);
        assert_eq!(cursor.find(&new, 100).unwrap().sequence, 0);
    }

    #[test]
    fn find_returns_upcoming_cue_during_gap() {
        // Between cues the next cue is the one that ends after now
        let t = track(&[(1000, 2000), (3000, 4000)]);
        let mut cursor = t.cursor();
        assert_eq!(cursor.find(&t, 2500).unwrap().sequence, 1);
    }

    #[test]
    fn find_pair_returns_consecutive_cues() {
        let t = track(&[(0, 1000), (1000, 2000), (2000, 3000)]);
        let mut cursor = t.cursor();

        let (a, b) = cursor.find_pair(&t, 500);
        assert_eq!(a.unwrap().sequence, 0);
        assert_eq!(b.unwrap().sequence, 1);

        let (a, b) = cursor.find_pair(&t, 2500);
        assert_eq!(a.unwrap().sequence, 2);
        assert!(b.is_none());

        let (a, b) = cursor.find_pair(&t, 9000);
        assert!(a.is_none());
        assert!(b.is_none());
    }

    #[test]
    fn flavors_keep_independent_state() {
        let t = track(&[(0, 1000), (2000, 3000), (4000, 5000)]);
        let mut single = t.cursor();
        let mut dual = t.cursor();

        assert_eq!(single.find(&t, 4500).unwrap().sequence, 2);

        // The dual cursor still scans from the beginning
        let (a, _) = dual.find_pair(&t, 500);
        assert_eq!(a.unwrap().sequence, 0);
    }
}
