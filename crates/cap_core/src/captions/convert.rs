//! SRT to WebVTT normalization.
//!
//! SRT input never reaches the cue parser directly; it is converted to
//! WebVTT text first so the parser has a single input format.
//!
//! The conversion itself is a pure text-to-text transform: the `WEBVTT`
//! header is inserted, the comma decimal separator becomes a dot, cue
//! numbering is regenerated sequentially, and payload lines are preserved
//! verbatim. `convert_file` layers the caller-controlled filesystem side
//! effects (sibling `.vtt` output, optional source deletion) on top.

use std::fs;
use std::path::{Path, PathBuf};

use crate::captions::error::{CaptionError, ConvertError};
use crate::captions::time::format_vtt_time;

/// Convert SRT content into semantically equivalent WebVTT content.
///
/// Pure function: the same input always produces byte-identical output.
/// Fails if a non-empty cue block has no parsable timing line.
pub fn srt_to_vtt(content: &str) -> Result<String, ConvertError> {
    let content = content.trim_start_matches('\u{feff}');
    let content = content.replace("\r\n", "\n").replace('\r', "\n");

    let mut output = String::from("WEBVTT\n");
    let mut index = 0;
    let mut line_offset = 0;

    for block in content.split("\n\n") {
        let lines: Vec<&str> = block.lines().collect();
        let block_len = lines.len();

        if lines.iter().all(|l| l.trim().is_empty()) {
            line_offset += block_len + 1;
            continue;
        }

        let (timing_idx, timing_line) = match lines.iter().position(|l| l.contains("-->")) {
            Some(i) => (i, lines[i]),
            None => {
                return Err(ConvertError::invalid_cue_block(
                    line_offset + 1,
                    "no timing line",
                ));
            }
        };

        let timing_line_num = line_offset + timing_idx + 1;
        let parts: Vec<&str> = timing_line.split("-->").collect();
        if parts.len() != 2 {
            return Err(ConvertError::invalid_cue_block(
                timing_line_num,
                format!("invalid timing line: '{}'", timing_line.trim()),
            ));
        }

        let start_ms = parse_srt_time(parts[0])
            .ok_or_else(|| ConvertError::malformed_timing(timing_line_num, parts[0].trim()))?;
        let end_ms = parse_srt_time(parts[1])
            .ok_or_else(|| ConvertError::malformed_timing(timing_line_num, parts[1].trim()))?;

        let text = lines[timing_idx + 1..].join("\n");
        let text = text.trim();

        if !text.is_empty() {
            index += 1;
            output.push('\n');
            output.push_str(&format!("{}\n", index));
            output.push_str(&format!(
                "{} --> {}\n",
                format_vtt_time(start_ms),
                format_vtt_time(end_ms)
            ));
            output.push_str(text);
            output.push('\n');
        }

        line_offset += block_len + 1;
    }

    Ok(output)
}

/// Convert an `.srt` file into a sibling `.vtt` file.
///
/// Writes next to the source with the extension replaced, optionally
/// deleting the source afterwards. Returns the output path.
pub fn convert_file(path: impl AsRef<Path>, delete_source: bool) -> Result<PathBuf, CaptionError> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| CaptionError::read(path, e))?;
    let vtt = srt_to_vtt(&content)?;

    let out_path = path.with_extension("vtt");
    fs::write(&out_path, vtt).map_err(|e| CaptionError::write(&out_path, e))?;

    if delete_source {
        fs::remove_file(path).map_err(|e| CaptionError::remove(path, e))?;
    }

    tracing::info!(
        "converted '{}' to '{}'{}",
        path.display(),
        out_path.display(),
        if delete_source { " (source removed)" } else { "" }
    );

    Ok(out_path)
}

/// Parse an SRT timestamp: `HH:MM:SS,mmm` (dot also accepted).
///
/// SRT files in the wild carry 1-3 fractional digits; the value is
/// normalized to milliseconds.
fn parse_srt_time(s: &str) -> Option<u64> {
    let s = s.trim().replace(',', ".");

    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 3 {
        return None;
    }

    let hours: u64 = parts[0].parse().ok()?;
    let minutes: u64 = parts[1].parse().ok()?;

    let sec_parts: Vec<&str> = parts[2].split('.').collect();
    if sec_parts.len() > 2 {
        return None;
    }

    let seconds: u64 = sec_parts[0].parse().ok()?;

    let millis: u64 = if sec_parts.len() == 2 {
        let ms_str = sec_parts[1];
        let ms_val: u64 = ms_str.parse().ok()?;
        match ms_str.len() {
            1 => ms_val * 100,
            2 => ms_val * 10,
            3 => ms_val,
            n => ms_val / 10u64.pow(n as u32 - 3),
        }
    } else {
        0
    };

    hours
        .checked_mul(60)?
        .checked_add(minutes)?
        .checked_mul(60)?
        .checked_add(seconds)?
        .checked_mul(1000)?
        .checked_add(millis)
}
