//! WebVTT timestamp parsing and formatting.
//!
//! Timestamps have the shape `H+:MM:SS.mmm`. Hours may be any number of
//! digits; the fractional part is taken literally as milliseconds.

use crate::captions::error::ParseError;

/// Parse a WebVTT timestamp into total milliseconds.
///
/// The string must split into exactly three colon-separated components,
/// the last of which splits into exactly two dot-separated parts, and
/// every part must be a base-10 integer. No negatives, no rounding.
pub fn parse_vtt_time(value: &str) -> Result<u64, ParseError> {
    let parts: Vec<&str> = value.split(':').collect();
    if parts.len() != 3 {
        return Err(ParseError::malformed_timestamp(value));
    }

    let sec_parts: Vec<&str> = parts[2].split('.').collect();
    if sec_parts.len() != 2 {
        return Err(ParseError::malformed_timestamp(value));
    }

    let hours: u64 = parse_component(parts[0], value)?;
    let minutes: u64 = parse_component(parts[1], value)?;
    let seconds: u64 = parse_component(sec_parts[0], value)?;
    let millis: u64 = parse_component(sec_parts[1], value)?;

    // Hours may be arbitrarily many digits; the total must still fit
    hours
        .checked_mul(60)
        .and_then(|v| v.checked_add(minutes))
        .and_then(|v| v.checked_mul(60))
        .and_then(|v| v.checked_add(seconds))
        .and_then(|v| v.checked_mul(1000))
        .and_then(|v| v.checked_add(millis))
        .ok_or_else(|| ParseError::malformed_timestamp(value))
}

fn parse_component(part: &str, whole: &str) -> Result<u64, ParseError> {
    part.parse()
        .map_err(|_| ParseError::malformed_timestamp(whole))
}

/// Format milliseconds as a WebVTT timestamp (`HH:MM:SS.mmm`).
///
/// Hours are zero-padded to two digits but may grow beyond that.
pub fn format_vtt_time(ms: u64) -> String {
    let millis = ms % 1000;
    let total_secs = ms / 1000;
    let secs = total_secs % 60;
    let total_mins = total_secs / 60;
    let mins = total_mins % 60;
    let hours = total_mins / 60;

    format!("{:02}:{:02}:{:02}.{:03}", hours, mins, secs, millis)
}
