//! Domain-level keyboard actions independent of key bindings.

use super::SectionId;

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling
    /// Scroll the page up by one line. Default: k/↑
    ScrollUp,
    /// Scroll the page down by one line. Default: j/↓
    ScrollDown,
    /// Scroll up by one viewport height. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down by one viewport height. Default: Ctrl+d/Page Down/Space
    PageDown,
    /// Jump to the top of the page. Default: g/Home
    ScrollToTop,
    /// Jump to the bottom of the page. Default: G/End
    ScrollToBottom,

    // Navigation bar
    /// Jump to the section below the active one. Default: n/Tab
    NextSection,
    /// Jump to the section above the active one. Default: p/Shift+Tab
    PrevSection,
    /// Jump to a specific section. Default: 1-6
    JumpTo(SectionId),

    // Application
    /// Skip the loading splash. Default: Enter/Esc
    SkipIntro,
    /// Toggle the keyboard help overlay. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
