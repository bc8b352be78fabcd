//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the navigation bar in lines.
pub const NAVBAR_HEIGHT: u16 = 1;

/// Height of the scroll progress bar in lines.
pub const PROGRESS_BAR_HEIGHT: u16 = 1;

/// Widest the page content grows; wider terminals get side margins.
pub const CONTENT_MAX_WIDTH: u16 = 96;

/// Blank columns on each side of the page content.
pub const CONTENT_MARGIN: u16 = 2;

/// Fewest rows the hero banner occupies, even on short terminals.
pub const HERO_MIN_HEIGHT: u16 = 9;

/// Starfield drift per scrolled row.
pub const STARFIELD_PARALLAX_SPEED: f64 = 0.5;

/// Largest horizontal shift of a section heading while it scrolls past.
pub const HEADING_PARALLAX_OFFSET: f64 = 4.0;

/// Width of the loading splash card in columns.
pub const SPLASH_WIDTH: u16 = 48;

/// Height of the loading splash card in lines.
pub const SPLASH_HEIGHT: u16 = 7;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;
