//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Missing fields fall back to their defaults, so old config files keep
//! loading after new fields are added.

use serde::{Deserialize, Serialize};

use crate::captions::DEFAULT_PROBE_CUES;
use crate::logging::LogLevel;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Track classifier tuning.
    #[serde(default)]
    pub classifier: ClassifierSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Tuning for auto-generated track detection and compaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierSettings {
    /// How many leading cues are probed for highlight markup.
    #[serde(default = "default_probe_cues")]
    pub probe_cues: usize,

    /// Whether auto-generated tracks are compacted after classification.
    #[serde(default = "default_auto_compact")]
    pub auto_compact: bool,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            probe_cues: default_probe_cues(),
            auto_compact: default_auto_compact(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default level when RUST_LOG is not set.
    #[serde(default)]
    pub level: LogLevel,
}

fn default_probe_cues() -> usize {
    DEFAULT_PROBE_CUES
}

fn default_auto_compact() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let settings = Settings::default();
        assert_eq!(settings.classifier.probe_cues, 10);
        assert!(settings.classifier.auto_compact);
        assert_eq!(settings.logging.level, LogLevel::Info);
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings.classifier.probe_cues, 10);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let settings: Settings =
            toml::from_str("[classifier]\nprobe_cues = 20\n").unwrap();
        assert_eq!(settings.classifier.probe_cues, 20);
        assert!(settings.classifier.auto_compact);
        assert_eq!(settings.logging.level, LogLevel::Info);
    }

    #[test]
    fn toml_round_trip() {
        let mut settings = Settings::default();
        settings.classifier.auto_compact = false;
        settings.logging.level = LogLevel::Debug;

        let text = toml::to_string_pretty(&settings).unwrap();
        let reparsed: Settings = toml::from_str(&text).unwrap();
        assert!(!reparsed.classifier.auto_compact);
        assert_eq!(reparsed.logging.level, LogLevel::Debug);
    }
}
