//! Configuration module.
//!
//! Resolves settings through the precedence chain
//! defaults → config file → environment → CLI, and holds the key map.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    ResolvedConfig, THEME_AURORA, THEME_DEFAULT, THEME_MIDNIGHT, THEME_PAPER, VALID_THEMES,
};
