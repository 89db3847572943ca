//! Caption error types.

use std::path::PathBuf;

/// Errors that can occur during caption operations.
#[derive(Debug, thiserror::Error)]
pub enum CaptionError {
    /// Failed to read a caption file.
    #[error("Failed to read file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write a caption file.
    #[error("Failed to write file '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to remove a caption file.
    #[error("Failed to remove file '{path}': {source}")]
    Remove {
        path: PathBuf,
        source: std::io::Error,
    },

    /// File extension is neither `.srt` nor `.vtt`.
    #[error("Unsupported caption format for file '{0}'")]
    UnsupportedFormat(PathBuf),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// SRT to WebVTT conversion error.
    #[error("Conversion error: {0}")]
    Convert(#[from] ConvertError),
}

/// Errors that can occur while parsing WebVTT content.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Timestamp string does not match `H+:MM:SS.mmm`.
    #[error("Malformed timestamp: '{value}'")]
    MalformedTimestamp { value: String },

    /// Cue block is structurally invalid.
    #[error("Malformed track at line {line}: {message}")]
    MalformedTrack { line: usize, message: String },

    /// Non-empty content without a WEBVTT header.
    #[error("Missing WEBVTT header")]
    MissingHeader,
}

/// Errors that can occur while converting SRT to WebVTT.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Cue block could not be interpreted as SRT.
    #[error("Invalid SRT cue block at line {line}: {message}")]
    InvalidCueBlock { line: usize, message: String },

    /// Timing line carries an unparsable timestamp.
    #[error("Invalid SRT timing at line {line}: '{value}'")]
    MalformedTiming { line: usize, value: String },
}

impl CaptionError {
    /// Create a read error.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a write error.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Create a remove error.
    pub fn remove(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Remove {
            path: path.into(),
            source,
        }
    }
}

impl ParseError {
    /// Create a malformed timestamp error.
    pub fn malformed_timestamp(value: impl Into<String>) -> Self {
        Self::MalformedTimestamp {
            value: value.into(),
        }
    }

    /// Create a malformed track error.
    pub fn malformed_track(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedTrack {
            line,
            message: message.into(),
        }
    }
}

impl ConvertError {
    /// Create an invalid cue block error.
    pub fn invalid_cue_block(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidCueBlock {
            line,
            message: message.into(),
        }
    }

    /// Create a malformed timing error.
    pub fn malformed_timing(line: usize, value: impl Into<String>) -> Self {
        Self::MalformedTiming {
            line,
            value: value.into(),
        }
    }
}
