//! Caption timeline engine.
//!
//! Parses subtitle tracks into a normalized, time-indexed cue list and
//! answers "what caption is visible at time T" as playback advances.
//!
//! # Architecture
//!
//! - **Pure functions** in submodules for the parsing and timeline logic
//! - **Immutable tracks** built fully off the driving loop and published
//!   by swapping the value, never mutated in place
//! - **Clean public API** via re-exports
//!
//! # Components
//!
//! - **types**: Core data structures (Cue, Track, TrackKind)
//! - **time**: WebVTT timestamp parsing and formatting
//! - **parser**: WebVTT cue parser
//! - **convert**: SRT to WebVTT normalization
//! - **classify**: Auto-generated track detection
//! - **compact**: Redundant-cue removal for auto-generated tracks
//! - **cursor**: Amortized O(1) playback-time cue lookup
//!
//! # Usage
//!
//! ```ignore
//! use cap_core::captions::{load_file, CueCursor};
//!
//! let track = load_file("captions.srt")?;
//! let mut cursor = track.cursor();
//!
//! // Driven from the playback loop, e.g. every 100ms
//! if let Some(cue) = cursor.find(&track, current_ms) {
//!     display(&cue.text);
//! }
//!
//! // On a discontinuous seek
//! cursor.reset();
//! ```

mod classify;
mod compact;
mod convert;
mod cursor;
mod error;
mod parser;
mod time;
mod types;

use std::fs;
use std::path::Path;

use crate::config::ClassifierSettings;

// Re-export core types
pub use types::{Cue, Track, TrackId, TrackKind};

// Re-export errors
pub use error::{CaptionError, ConvertError, ParseError};

// Re-export parsing and conversion
pub use convert::{convert_file, srt_to_vtt};
pub use parser::{parse_vtt, strip_inline_tags};
pub use time::{format_vtt_time, parse_vtt_time};

// Re-export classification and compaction
pub use classify::{classify, classify_with, DEFAULT_PROBE_CUES};
pub use compact::compact;

// Re-export cursor
pub use cursor::CueCursor;

/// Build a track from WebVTT content: parse, classify, and compact
/// auto-generated tracks.
pub fn build_track(content: &str) -> Result<Track, ParseError> {
    build_track_with(content, &ClassifierSettings::default())
}

/// Build a track with explicit classifier settings.
pub fn build_track_with(
    content: &str,
    settings: &ClassifierSettings,
) -> Result<Track, ParseError> {
    let cues = parser::parse_vtt(content)?;
    let kind = classify::classify_with(&cues, settings.probe_cues);

    let cues = if kind == TrackKind::AutoGenerated && settings.auto_compact {
        let before = cues.len();
        let compacted = compact::compact(cues);
        tracing::debug!(
            "compacted auto-generated track: {} -> {} cues",
            before,
            compacted.len()
        );
        compacted
    } else {
        cues
    };

    Ok(Track::new(cues, kind))
}

/// Load a caption track from disk.
///
/// `.vtt` files parse directly; `.srt` files are normalized to WebVTT in
/// memory first. Any other extension is rejected.
pub fn load_file(path: impl AsRef<Path>) -> Result<Track, CaptionError> {
    load_file_with(path, &ClassifierSettings::default())
}

/// Load a caption track from disk with explicit classifier settings.
pub fn load_file_with(
    path: impl AsRef<Path>,
    settings: &ClassifierSettings,
) -> Result<Track, CaptionError> {
    let path = path.as_ref();

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    let content = match ext.as_deref() {
        Some("vtt") => fs::read_to_string(path).map_err(|e| CaptionError::read(path, e))?,
        Some("srt") => {
            let srt = fs::read_to_string(path).map_err(|e| CaptionError::read(path, e))?;
            srt_to_vtt(&srt)?
        }
        _ => return Err(CaptionError::UnsupportedFormat(path.to_path_buf())),
    };

    let track = build_track_with(&content, settings)?;
    tracing::info!(
        "loaded caption track from '{}': {} cues, {:?}",
        path.display(),
        track.len(),
        track.kind()
    );

    Ok(track)
}
