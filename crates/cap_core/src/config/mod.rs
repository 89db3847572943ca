//! Configuration management for Caption Player.
//!
//! This module provides:
//! - TOML-based configuration with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Defaults for missing fields on load
//!
//! # Example
//!
//! ```no_run
//! use cap_core::config::ConfigManager;
//!
//! // Create manager and load (or create default) config
//! let mut config = ConfigManager::new(".config/caption-player.toml");
//! config.load_or_create().unwrap();
//!
//! // Read settings
//! let probe_cues = config.settings().classifier.probe_cues;
//!
//! // Modify and save
//! config.settings_mut().classifier.auto_compact = false;
//! config.save().unwrap();
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{ClassifierSettings, LoggingSettings, Settings};
