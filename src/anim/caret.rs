//! Blinking caret shared by the typing engines.

use super::timer::Interval;
use std::time::{Duration, Instant};

/// Glyph drawn for a visible caret.
pub const CARET_GLYPH: char = '|';

/// Time between caret visibility toggles.
pub const CARET_BLINK_PERIOD: Duration = Duration::from_millis(500);

/// Caret visibility loop.
///
/// Runs for the whole lifetime of its owner and knows nothing about text
/// progress; the owner only forwards `advance` and `dispose`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caret {
    visible: bool,
    blink: Interval,
}

impl Caret {
    /// Start a visible caret at `now`.
    pub fn start(now: Instant) -> Self {
        Self {
            visible: true,
            blink: Interval::starting_at(now, CARET_BLINK_PERIOD),
        }
    }

    /// Whether the caret is currently drawn.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Apply every toggle due by `now`. Returns `true` if visibility changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        let toggles = self.blink.fire(now);
        if toggles % 2 == 1 {
            self.visible = !self.visible;
            true
        } else {
            false
        }
    }

    /// Stop blinking. Visibility freezes at its current value.
    pub fn dispose(&mut self) {
        self.blink.cancel();
    }
}
