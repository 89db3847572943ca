//! WebVTT cue parser.
//!
//! Parses WebVTT content into an ordered cue list.
//!
//! # Format Overview
//!
//! ```text
//! WEBVTT
//!
//! 1
//! 00:00:01.000 --> 00:00:04.000
//! Hello, world!
//!
//! 00:00:05.000 --> 00:00:08.000 align:start position:0%
//! This is a <c.colorCCCCCC>test</c>.
//! ```
//!
//! Each cue block has:
//! - Optional identifier line (ignored, sequence numbers are regenerated)
//! - Timing line: `H+:MM:SS.mmm --> H+:MM:SS.mmm`, optionally followed by
//!   cue settings which are ignored
//! - One or more lines of text
//! - Blank line separator
//!
//! Parsing is strict: a cue block with an unparsable timestamp aborts the
//! whole parse. A partially parsed timeline is worse than none, since it
//! would silently corrupt the sequence numbering of every later cue.
//! Blocks without any timing line (notes, stray identifiers) are not cues
//! and are skipped.

use crate::captions::error::ParseError;
use crate::captions::time::parse_vtt_time;
use crate::captions::types::Cue;

/// Parse WebVTT content into cues ordered by start time.
///
/// Empty or header-only content yields an empty cue list. Non-empty
/// content without a `WEBVTT` header is rejected.
pub fn parse_vtt(content: &str) -> Result<Vec<Cue>, ParseError> {
    // Strip BOM and normalize line endings
    let content = content.trim_start_matches('\u{feff}');
    let content = content.replace("\r\n", "\n").replace('\r', "\n");

    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let blocks: Vec<&str> = content.split("\n\n").collect();

    let mut cues: Vec<Cue> = Vec::new();
    let mut header_seen = false;
    let mut line_offset = 0;

    for block in blocks {
        let block_lines: Vec<&str> = block.lines().collect();
        let block_len = block_lines.len();
        let mut lines: &[&str] = &block_lines;

        if lines.iter().all(|l| l.trim().is_empty()) {
            line_offset += block_len + 1;
            continue;
        }

        if !header_seen {
            let first_idx = lines
                .iter()
                .position(|l| !l.trim().is_empty())
                .unwrap_or(0);
            if !lines[first_idx].trim_start().starts_with("WEBVTT") {
                return Err(ParseError::MissingHeader);
            }
            header_seen = true;
            // The header block may run straight into cue lines when the
            // separating blank line is missing
            lines = &lines[first_idx + 1..];
            if lines.iter().all(|l| l.trim().is_empty()) {
                line_offset += block_len + 1;
                continue;
            }
        }

        let first = lines
            .iter()
            .find(|l| !l.trim().is_empty())
            .map(|l| l.trim())
            .unwrap_or("");
        if first.starts_with("NOTE") || first.starts_with("STYLE") || first.starts_with("REGION") {
            line_offset += block_len + 1;
            continue;
        }

        match find_timing_line(lines) {
            Some((idx, timing)) => {
                let timing_line_num = line_offset + idx + 1;
                let (start_ms, end_ms) = parse_timing_line(timing, timing_line_num)?;

                let raw_text = lines[idx + 1..].join("\n");
                let raw_text = raw_text.trim();
                if !raw_text.is_empty() {
                    let text = strip_inline_tags(raw_text);
                    cues.push(Cue::new(0, start_ms, end_ms, text, raw_text));
                }
            }
            None => {
                tracing::warn!(
                    "skipping cue block without timing line at line {}",
                    line_offset + 1
                );
            }
        }

        line_offset += block_len + 1;
    }

    // Stable sort keeps input order for equal start times
    cues.sort_by_key(|c| c.start_ms);
    for (i, cue) in cues.iter_mut().enumerate() {
        cue.sequence = i;
    }

    Ok(cues)
}

/// Find the timing line in a block of lines.
fn find_timing_line<'a>(lines: &[&'a str]) -> Option<(usize, &'a str)> {
    lines
        .iter()
        .enumerate()
        .find(|(_, line)| line.contains("-->"))
        .map(|(i, line)| (i, *line))
}

/// Parse a timing line: `H+:MM:SS.mmm --> H+:MM:SS.mmm [settings]`
fn parse_timing_line(line: &str, line_num: usize) -> Result<(u64, u64), ParseError> {
    let parts: Vec<&str> = line.split("-->").collect();
    if parts.len() != 2 {
        return Err(ParseError::malformed_track(
            line_num,
            format!("invalid timing line: '{}'", line.trim()),
        ));
    }

    let start_ms = parse_vtt_time(parts[0].trim())?;

    // Cue settings may trail the end timestamp
    let end_str = parts[1].trim().split_whitespace().next().unwrap_or("");
    let end_ms = parse_vtt_time(end_str)?;

    if end_ms < start_ms {
        return Err(ParseError::malformed_track(
            line_num,
            format!("cue ends before it starts: '{}'", line.trim()),
        ));
    }

    Ok((start_ms, end_ms))
}

/// Resolve inline WebVTT markup for display.
///
/// Removes `<...>` tag spans (`<c>`, `<c.colorCCCCCC>`, `</c>`, `<b>`,
/// inline `<00:00:01.000>` time tags) and unescapes the basic character
/// entities.
pub fn strip_inline_tags(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c == '<' {
            for t in chars.by_ref() {
                if t == '>' {
                    break;
                }
            }
            continue;
        }
        result.push(c);
    }

    result
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
