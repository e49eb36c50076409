// SPDX-License-Identifier: MPL-2.0
//! This module handles the page behaviour configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[toast]` - Toast reveal, auto-dismiss and exit delays
//! - `[typewriter]` - Headline phrases and typing rhythm
//! - `[profile]` - Owner details and resume sections used for the resume download
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `FOLIO_FX_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use folio_fx::config;
//!
//! let (mut config, _warning) = config::load();
//! config.toast.auto_dismiss_ms = Some(8000);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::notifications;
use crate::ui::typewriter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Toast notification timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// Delay before a freshly attached toast slides in.
    #[serde(default = "default_reveal_ms", skip_serializing_if = "Option::is_none")]
    pub reveal_ms: Option<u64>,

    /// Time from creation until the toast leaves on its own.
    #[serde(
        default = "default_auto_dismiss_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_dismiss_ms: Option<u64>,

    /// Exit transition length.
    #[serde(default = "default_exit_ms", skip_serializing_if = "Option::is_none")]
    pub exit_ms: Option<u64>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            reveal_ms: default_reveal_ms(),
            auto_dismiss_ms: default_auto_dismiss_ms(),
            exit_ms: default_exit_ms(),
        }
    }
}

impl ToastConfig {
    /// Resolves the section into clamped manager timings.
    #[must_use]
    pub fn timings(&self) -> notifications::Timings {
        let transition = |value: Option<u64>, default: u64| {
            Duration::from_millis(
                value
                    .unwrap_or(default)
                    .clamp(MIN_TOAST_DELAY_MS, MAX_TOAST_TRANSITION_MS),
            )
        };

        notifications::Timings {
            reveal: transition(self.reveal_ms, DEFAULT_TOAST_REVEAL_MS),
            auto_dismiss: Duration::from_millis(
                self.auto_dismiss_ms
                    .unwrap_or(DEFAULT_TOAST_AUTO_DISMISS_MS)
                    .clamp(MIN_TOAST_DELAY_MS, MAX_TOAST_AUTO_DISMISS_MS),
            ),
            exit: transition(self.exit_ms, DEFAULT_TOAST_EXIT_MS),
        }
    }
}

/// Headline typewriter settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TypewriterConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phrases: Option<Vec<String>>,

    #[serde(
        default = "default_start_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_delay_ms: Option<u64>,

    #[serde(default = "default_type_ms", skip_serializing_if = "Option::is_none")]
    pub type_ms: Option<u64>,

    #[serde(default = "default_hold_ms", skip_serializing_if = "Option::is_none")]
    pub hold_ms: Option<u64>,

    #[serde(default = "default_erase_ms", skip_serializing_if = "Option::is_none")]
    pub erase_ms: Option<u64>,

    #[serde(
        default = "default_next_phrase_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub next_phrase_ms: Option<u64>,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            phrases: None,
            start_delay_ms: default_start_delay_ms(),
            type_ms: default_type_ms(),
            hold_ms: default_hold_ms(),
            erase_ms: default_erase_ms(),
            next_phrase_ms: default_next_phrase_ms(),
        }
    }
}

impl TypewriterConfig {
    /// Configured phrases, or the built-in headline list when unset.
    ///
    /// An explicitly empty list is kept as-is; the effect treats it as a no-op.
    #[must_use]
    pub fn phrases(&self) -> Vec<String> {
        match &self.phrases {
            Some(phrases) => phrases.clone(),
            None => DEFAULT_TYPEWRITER_PHRASES
                .iter()
                .map(|phrase| (*phrase).to_string())
                .collect(),
        }
    }

    /// Resolves the section into clamped step delays.
    #[must_use]
    pub fn timings(&self) -> typewriter::Timings {
        let step = |value: Option<u64>, default: u64| {
            Duration::from_millis(
                value
                    .unwrap_or(default)
                    .clamp(MIN_TYPEWRITER_STEP_MS, MAX_TYPEWRITER_STEP_MS),
            )
        };

        typewriter::Timings {
            start_delay: step(self.start_delay_ms, DEFAULT_TYPEWRITER_START_DELAY_MS),
            type_delay: step(self.type_ms, DEFAULT_TYPEWRITER_TYPE_MS),
            hold: step(self.hold_ms, DEFAULT_TYPEWRITER_HOLD_MS),
            erase_delay: step(self.erase_ms, DEFAULT_TYPEWRITER_ERASE_MS),
            next_phrase: step(self.next_phrase_ms, DEFAULT_TYPEWRITER_NEXT_PHRASE_MS),
        }
    }
}

/// Page owner details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProfileConfig {
    /// Full name, also used to name downloaded resume files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Sections of the generated text resume (`[[profile.sections]]`), in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<ResumeSection>,
}

/// One titled block of the generated resume, e.g. `EXPERIENCE`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ResumeSection {
    pub title: String,
    #[serde(default)]
    pub lines: Vec<String>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub toast: ToastConfig,

    #[serde(default)]
    pub typewriter: TypewriterConfig,

    #[serde(default)]
    pub profile: ProfileConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_reveal_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_REVEAL_MS)
}

fn default_auto_dismiss_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_AUTO_DISMISS_MS)
}

fn default_exit_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_EXIT_MS)
}

fn default_start_delay_ms() -> Option<u64> {
    Some(DEFAULT_TYPEWRITER_START_DELAY_MS)
}

fn default_type_ms() -> Option<u64> {
    Some(DEFAULT_TYPEWRITER_TYPE_MS)
}

fn default_hold_ms() -> Option<u64> {
    Some(DEFAULT_TYPEWRITER_HOLD_MS)
}

fn default_erase_ms() -> Option<u64> {
    Some(DEFAULT_TYPEWRITER_ERASE_MS)
}

fn default_next_phrase_ms() -> Option<u64> {
    Some(DEFAULT_TYPEWRITER_NEXT_PHRASE_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
