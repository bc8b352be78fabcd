//! Theme and colour configuration.
//!
//! Every widget asks the [`Theme`] for its style, so `--no-color` only has to
//! be honoured in one place.

use crate::config::{THEME_AURORA, THEME_MIDNIGHT, THEME_PAPER};
use ratatui::style::{Color, Modifier, Style};
use tracing::warn;

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Colour output on or off, ignoring the environment.
    pub fn with_colors(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Palette {
    accent: Color,
    secondary: Color,
    text: Color,
    muted: Color,
    star: Color,
}

const AURORA: Palette = Palette {
    accent: Color::Rgb(45, 212, 191),
    secondary: Color::Rgb(167, 139, 250),
    text: Color::Rgb(226, 232, 240),
    muted: Color::Rgb(100, 116, 139),
    star: Color::Rgb(148, 163, 184),
};

const MIDNIGHT: Palette = Palette {
    accent: Color::Rgb(96, 165, 250),
    secondary: Color::Rgb(129, 140, 248),
    text: Color::Rgb(203, 213, 225),
    muted: Color::Rgb(71, 85, 105),
    star: Color::Rgb(191, 219, 254),
};

const PAPER: Palette = Palette {
    accent: Color::Rgb(15, 118, 110),
    secondary: Color::Rgb(109, 40, 217),
    text: Color::Rgb(30, 41, 59),
    muted: Color::Rgb(100, 116, 139),
    star: Color::Rgb(148, 163, 184),
};

// ===== Theme =====

/// Styles for every element of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    palette: Option<Palette>,
}

impl Theme {
    /// Look up a theme by name.
    ///
    /// Unknown names fall back to aurora with a warning; with colours
    /// disabled every style is plain.
    pub fn from_name(name: &str, colors: ColorConfig) -> Self {
        let palette = match name {
            THEME_AURORA => AURORA,
            THEME_MIDNIGHT => MIDNIGHT,
            THEME_PAPER => PAPER,
            other => {
                warn!(theme = other, "Unknown theme, using {}", THEME_AURORA);
                AURORA
            }
        };
        Self {
            palette: colors.colors_enabled().then_some(palette),
        }
    }

    /// Theme with every style plain.
    pub fn plain() -> Self {
        Self { palette: None }
    }

    fn fg(&self, pick: impl Fn(&Palette) -> Color) -> Style {
        match &self.palette {
            Some(palette) => Style::default().fg(pick(palette)),
            None => Style::default(),
        }
    }

    /// Body text.
    pub fn text(&self) -> Style {
        self.fg(|p| p.text)
    }

    /// De-emphasised text: captions, hints, timeline rails.
    pub fn muted(&self) -> Style {
        self.fg(|p| p.muted)
    }

    /// Primary highlight.
    pub fn accent(&self) -> Style {
        self.fg(|p| p.accent)
    }

    /// Secondary highlight.
    pub fn secondary(&self) -> Style {
        self.fg(|p| p.secondary)
    }

    /// Section headings.
    pub fn heading(&self) -> Style {
        self.accent().add_modifier(Modifier::BOLD)
    }

    /// The hero name and other emphasised titles.
    pub fn title(&self) -> Style {
        self.text().add_modifier(Modifier::BOLD)
    }

    /// Counter values.
    pub fn counter(&self) -> Style {
        self.secondary().add_modifier(Modifier::BOLD)
    }

    /// Background stars.
    pub fn star(&self) -> Style {
        self.fg(|p| p.star).add_modifier(Modifier::DIM)
    }

    /// Key names in the help overlay.
    pub fn key(&self) -> Style {
        self.secondary().add_modifier(Modifier::BOLD)
    }

    /// Active navbar entry.
    pub fn nav_active(&self) -> Style {
        self.accent()
            .add_modifier(Modifier::BOLD)
            .add_modifier(Modifier::UNDERLINED)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_name(THEME_AURORA, ColorConfig::with_colors(true))
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // ===== ColorConfig Tests =====

    #[test]
    #[serial(no_color)]
    fn color_config_respects_no_color_flag() {
        std::env::remove_var("NO_COLOR");
        let config = ColorConfig::from_env_and_args(true);
        assert!(
            !config.colors_enabled(),
            "--no-color flag should disable colors"
        );
    }

    #[test]
    #[serial(no_color)]
    fn color_config_no_color_env_any_value_disables() {
        // NO_COLOR can be any value (even empty string)
        std::env::set_var("NO_COLOR", "");
        let config = ColorConfig::from_env_and_args(false);
        assert!(
            !config.colors_enabled(),
            "NO_COLOR with empty string should disable colors"
        );
        std::env::remove_var("NO_COLOR");
    }

    #[test]
    #[serial(no_color)]
    fn color_config_enables_colors_by_default() {
        std::env::remove_var("NO_COLOR");
        let config = ColorConfig::from_env_and_args(false);
        assert!(config.colors_enabled(), "Colors should be enabled by default");
    }

    // ===== Theme Tests =====

    #[test]
    fn themes_have_distinct_accents() {
        let colors = ColorConfig::with_colors(true);
        let aurora = Theme::from_name(THEME_AURORA, colors).accent().fg;
        let midnight = Theme::from_name(THEME_MIDNIGHT, colors).accent().fg;
        let paper = Theme::from_name(THEME_PAPER, colors).accent().fg;

        assert!(aurora.is_some());
        assert_ne!(aurora, midnight);
        assert_ne!(midnight, paper);
    }

    #[test]
    fn unknown_theme_falls_back_to_aurora() {
        let colors = ColorConfig::with_colors(true);
        assert_eq!(
            Theme::from_name("solarized", colors),
            Theme::from_name(THEME_AURORA, colors)
        );
    }

    #[test]
    fn disabled_colors_strip_foregrounds_but_keep_modifiers() {
        let theme = Theme::from_name(THEME_MIDNIGHT, ColorConfig::with_colors(false));

        assert_eq!(theme.accent().fg, None);
        assert_eq!(theme.text(), Style::default());
        assert!(theme.heading().add_modifier.contains(Modifier::BOLD));
    }
}
