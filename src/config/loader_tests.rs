//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

#[test]
fn default_config_path_contains_folio_config_toml() {
    let Some(path) = default_config_path() else {
        return;
    };
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("folio") && path_str.ends_with("config.toml"),
        "Path should contain 'folio' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn default_log_path_ends_with_folio_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("folio.log"),
        "Default log path should end with 'folio.log', got: {:?}",
        path
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = env::temp_dir().join("folio_test_config.toml");

    let toml_content = r#"
theme = "midnight"
intro = false
typing_speed_ms = 80
pause_ms = 1500
counter_duration_ms = 1200
frame_interval_ms = 16
content_file = "/srv/me.toml"
"#;

    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.theme, Some(THEME_MIDNIGHT.to_string()));
    assert_eq!(config.intro, Some(false));
    assert_eq!(config.typing_speed_ms, Some(80));
    assert_eq!(config.pause_ms, Some(1500));
    assert_eq!(config.counter_duration_ms, Some(1200));
    assert_eq!(config.frame_interval_ms, Some(16));
    assert_eq!(config.content_file, Some(PathBuf::from("/srv/me.toml")));

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("folio_test_invalid.toml");
    fs::write(&config_path, "theme = [unclosed").expect("Failed to write test config");

    let result = load_config_file(&config_path);
    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Invalid TOML should be a ParseError, got: {:?}",
        result
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn config_file_rejects_unknown_fields() {
    let result: Result<ConfigFile, _> = toml::from_str("follow = true");
    assert!(result.is_err(), "Unknown keys must be rejected");
}

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_uses_defaults_for_none_fields() {
    let config_file = ConfigFile {
        pause_ms: Some(500),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(config_file));
    let defaults = ResolvedConfig::default();

    assert_eq!(resolved.pause_ms, 500);
    assert_eq!(resolved.theme, defaults.theme);
    assert_eq!(resolved.intro, defaults.intro);
    assert_eq!(resolved.typing_speed_ms, defaults.typing_speed_ms);
    assert_eq!(resolved.log_file_path, defaults.log_file_path);
}

#[test]
fn config_file_log_path_overrides_default() {
    let custom_path = PathBuf::from("/custom/path/to/app.log");
    let config_file = ConfigFile {
        log_file_path: Some(custom_path.clone()),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(config_file));
    assert_eq!(resolved.log_file_path, custom_path);
}

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();
    assert_eq!(config.theme, THEME_AURORA);
    assert!(config.intro);
    assert_eq!(config.typing_speed_ms, 100);
    assert_eq!(config.pause_ms, 2000);
    assert_eq!(config.counter_duration_ms, 2000);
    assert_eq!(config.frame_interval_ms, 33);
    assert_eq!(config.content_file, None);
}

#[test]
fn animation_settings_convert_milliseconds() {
    let config = ResolvedConfig {
        typing_speed_ms: 40,
        pause_ms: 900,
        counter_duration_ms: 1500,
        ..ResolvedConfig::default()
    };

    let settings = config.animation_settings();
    assert_eq!(settings.tagline_speed, Duration::from_millis(40));
    assert_eq!(settings.tagline_pause, Duration::from_millis(900));
    assert_eq!(settings.counter_duration, Duration::from_millis(1500));
}

#[test]
fn frame_interval_is_never_zero() {
    let config = ResolvedConfig {
        frame_interval_ms: 0,
        ..ResolvedConfig::default()
    };
    assert_eq!(config.frame_interval(), Duration::from_millis(1));
}

/// RAII guard to ensure environment variable cleanup even under test parallelism.
/// Removes the var on drop, preventing test pollution in parallel execution.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

#[test]
#[serial(folio_env)]
fn apply_env_overrides_respects_folio_theme() {
    let _guard = EnvGuard::new(ENV_THEME);
    env::set_var(ENV_THEME, THEME_PAPER);

    let result = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(result.theme, THEME_PAPER, "FOLIO_THEME should override theme");
}

#[test]
#[serial(folio_env)]
fn apply_env_overrides_no_intro_disables_splash() {
    let _guard = EnvGuard::new(ENV_NO_INTRO);
    env::set_var(ENV_NO_INTRO, "1");

    let result = apply_env_overrides(ResolvedConfig::default());
    assert!(!result.intro);
}

#[test]
#[serial(folio_env)]
fn apply_env_overrides_ignores_falsy_no_intro() {
    let _guard = EnvGuard::new(ENV_NO_INTRO);

    for value in ["", "0", "false", "FALSE"] {
        env::set_var(ENV_NO_INTRO, value);
        let result = apply_env_overrides(ResolvedConfig::default());
        assert!(result.intro, "FOLIO_NO_INTRO={:?} should keep the intro", value);
    }
}

#[test]
#[serial(folio_env)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _theme = EnvGuard::new(ENV_THEME);
    let _intro = EnvGuard::new(ENV_NO_INTRO);

    let base = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(base.clone()), base);
}

#[test]
#[serial(folio_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(ENV_CONFIG);

    let explicit = env::temp_dir().join("folio_test_explicit.toml");
    let from_env = env::temp_dir().join("folio_test_env.toml");
    fs::write(&explicit, r#"theme = "paper""#).expect("Failed to write explicit config");
    fs::write(&from_env, r#"theme = "midnight""#).expect("Failed to write env config");
    env::set_var(ENV_CONFIG, &from_env);

    let config = load_config_with_precedence(Some(explicit.clone()))
        .expect("Should load")
        .expect("Should find explicit config");
    assert_eq!(config.theme, Some(THEME_PAPER.to_string()));

    fs::remove_file(explicit).ok();
    fs::remove_file(from_env).ok();
}

#[test]
#[serial(folio_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new(ENV_CONFIG);

    let from_env = env::temp_dir().join("folio_test_env_only.toml");
    fs::write(&from_env, r#"theme = "midnight""#).expect("Failed to write env config");
    env::set_var(ENV_CONFIG, &from_env);

    let config = load_config_with_precedence(None)
        .expect("Should load")
        .expect("Should find env config");
    assert_eq!(config.theme, Some(THEME_MIDNIGHT.to_string()));

    fs::remove_file(from_env).ok();
}

#[test]
fn apply_cli_overrides_no_overrides() {
    let base = ResolvedConfig::default();
    assert_eq!(apply_cli_overrides(base.clone(), None, None, None), base);
}

#[test]
fn apply_cli_overrides_multiple_overrides() {
    let result = apply_cli_overrides(
        ResolvedConfig::default(),
        Some(THEME_MIDNIGHT.to_string()),
        Some(false),
        Some(PathBuf::from("me.toml")),
    );

    assert_eq!(result.theme, THEME_MIDNIGHT);
    assert!(!result.intro);
    assert_eq!(result.content_file, Some(PathBuf::from("me.toml")));
}

#[test]
#[serial(folio_env)]
fn precedence_chain_full_defaults_to_cli() {
    let _guard = EnvGuard::new(ENV_THEME);

    // Config file sets theme and pause
    let config_file = ConfigFile {
        theme: Some(THEME_PAPER.to_string()),
        pause_ms: Some(750),
        ..ConfigFile::default()
    };
    let merged = merge_config(Some(config_file));
    assert_eq!(merged.theme, THEME_PAPER);

    // Env overrides the file
    env::set_var(ENV_THEME, THEME_MIDNIGHT);
    let with_env = apply_env_overrides(merged);
    assert_eq!(with_env.theme, THEME_MIDNIGHT);

    // CLI overrides the env
    let final_config = apply_cli_overrides(with_env, Some(THEME_AURORA.to_string()), None, None);
    assert_eq!(final_config.theme, THEME_AURORA);
    assert_eq!(final_config.pause_ms, 750, "Untouched fields survive the chain");
}

#[test]
fn theme_default_points_to_aurora() {
    assert_eq!(THEME_DEFAULT, THEME_AURORA);
}

#[test]
fn valid_themes_array_contains_all_themes() {
    assert_eq!(VALID_THEMES, &["aurora", "midnight", "paper"]);
}
