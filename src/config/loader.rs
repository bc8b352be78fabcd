//! Config file discovery, parsing and layered resolution.

use crate::state::AnimationSettings;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Built-in theme: teal and violet on the terminal background.
pub const THEME_AURORA: &str = "aurora";
/// Built-in theme: blues on black.
pub const THEME_MIDNIGHT: &str = "midnight";
/// Built-in theme: dark text for light terminals.
pub const THEME_PAPER: &str = "paper";
/// Theme used when nothing else is configured.
pub const THEME_DEFAULT: &str = THEME_AURORA;
/// Every accepted theme name.
pub const VALID_THEMES: &[&str] = &[THEME_AURORA, THEME_MIDNIGHT, THEME_PAPER];

/// Environment variable naming a config file.
pub const ENV_CONFIG: &str = "FOLIO_CONFIG";
/// Environment variable overriding the theme.
pub const ENV_THEME: &str = "FOLIO_THEME";
/// Environment variable disabling the loading splash when set to a truthy value.
pub const ENV_NO_INTRO: &str = "FOLIO_NO_INTRO";

/// Failure to read or parse a config file.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// Contents of `config.toml`.
///
/// Every key is optional; absent keys fall back to the built-in defaults.
/// Corresponds to `~/.config/folio/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Theme name (one of [`VALID_THEMES`]).
    #[serde(default)]
    pub theme: Option<String>,

    /// Show the loading splash before the page.
    #[serde(default)]
    pub intro: Option<bool>,

    /// Per-character typing speed of the tagline, in milliseconds.
    #[serde(default)]
    pub typing_speed_ms: Option<u64>,

    /// Pause with a tagline fully typed, in milliseconds.
    #[serde(default)]
    pub pause_ms: Option<u64>,

    /// Count-up duration of the statistics, in milliseconds.
    #[serde(default)]
    pub counter_duration_ms: Option<u64>,

    /// Longest wait between redraw checks, in milliseconds.
    #[serde(default)]
    pub frame_interval_ms: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// TOML file replacing the built-in portfolio content.
    #[serde(default)]
    pub content_file: Option<PathBuf>,
}

/// Final settings after every layer has been applied.
///
/// Built by [`merge_config`], then [`apply_env_overrides`], then [`apply_cli_overrides`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Theme name.
    pub theme: String,
    /// Show the loading splash.
    pub intro: bool,
    /// Tagline typing speed in milliseconds.
    pub typing_speed_ms: u64,
    /// Tagline pause in milliseconds.
    pub pause_ms: u64,
    /// Counter duration in milliseconds.
    pub counter_duration_ms: u64,
    /// Frame interval in milliseconds.
    pub frame_interval_ms: u64,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Content file, or `None` for the built-in content.
    pub content_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        let animation = AnimationSettings::default();
        Self {
            theme: THEME_DEFAULT.to_string(),
            intro: true,
            typing_speed_ms: millis(animation.tagline_speed),
            pause_ms: millis(animation.tagline_pause),
            counter_duration_ms: millis(animation.counter_duration),
            frame_interval_ms: 33,
            log_file_path: default_log_path(),
            content_file: None,
        }
    }
}

impl ResolvedConfig {
    /// Animation timings for the page.
    pub fn animation_settings(&self) -> AnimationSettings {
        AnimationSettings {
            tagline_speed: Duration::from_millis(self.typing_speed_ms),
            tagline_pause: Duration::from_millis(self.pause_ms),
            counter_duration: Duration::from_millis(self.counter_duration_ms),
        }
    }

    /// Longest wait between redraw checks.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.max(1))
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Where logs go unless configured otherwise.
///
/// Returns `~/.local/state/folio/folio.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// Without a state directory the file lands in the working directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("folio").join("folio.log")
    } else {
        PathBuf::from("folio.log")
    }
}

/// Parse the config file at `path`.
///
/// A missing file yields `Ok(None)`.
///
/// # Errors
///
/// [`ConfigError`] when the file exists but is unreadable or malformed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Platform config location, `~/.config/folio/config.toml` on Linux.
///
/// `None` when the platform has no config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("folio").join("config.toml"))
}

/// Find and parse the config file.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `FOLIO_CONFIG` environment variable
/// 3. Default path `~/.config/folio/config.toml`
///
/// A missing file at the chosen location means defaults.
///
/// # Errors
///
/// Only a present but unreadable or malformed file is an error.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Lay environment variables over the resolved config.
///
/// Checks for:
/// - `FOLIO_THEME`: Override theme
/// - `FOLIO_NO_INTRO`: Skip the splash unless empty, `0` or `false`
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(theme) = std::env::var(ENV_THEME) {
        config.theme = theme;
    }

    if let Ok(value) = std::env::var(ENV_NO_INTRO) {
        if is_truthy(&value) {
            config.intro = false;
        }
    }

    config
}

fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    !(value.is_empty() || value == "0" || value.eq_ignore_ascii_case("false"))
}

/// Lay the config file over the defaults.
///
/// Keys present in the file win; the rest keep their default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        theme: config.theme.unwrap_or(defaults.theme),
        intro: config.intro.unwrap_or(defaults.intro),
        typing_speed_ms: config.typing_speed_ms.unwrap_or(defaults.typing_speed_ms),
        pause_ms: config.pause_ms.unwrap_or(defaults.pause_ms),
        counter_duration_ms: config
            .counter_duration_ms
            .unwrap_or(defaults.counter_duration_ms),
        frame_interval_ms: config
            .frame_interval_ms
            .unwrap_or(defaults.frame_interval_ms),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        content_file: config.content_file.or(defaults.content_file),
    }
}

/// Lay command-line flags over everything else.
///
/// `None` means the flag was not given and the earlier layers stand.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    theme_override: Option<String>,
    intro_override: Option<bool>,
    content_override: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(theme) = theme_override {
        config.theme = theme;
    }

    if let Some(intro) = intro_override {
        config.intro = intro;
    }

    if let Some(content) = content_override {
        config.content_file = Some(content);
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
