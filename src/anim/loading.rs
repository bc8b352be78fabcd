//! Staged loading splash shown before the page.
//!
//! Progress climbs in fixed increments on a short interval while a status
//! message rotates on a slower one. Once progress tops out the splash lingers
//! briefly, then reports itself finished.

use super::timer::{Interval, Timer};
use std::time::{Duration, Instant};
use tracing::debug;

/// Progress added per progress tick.
pub const PROGRESS_STEP: u8 = 2;

/// Time between progress ticks.
pub const PROGRESS_PERIOD: Duration = Duration::from_millis(50);

/// Time between status message changes.
pub const MESSAGE_PERIOD: Duration = Duration::from_millis(800);

/// How long the full bar stays up before the splash finishes.
pub const EXIT_DELAY: Duration = Duration::from_millis(800);

/// Rotating status messages.
pub const LOADING_MESSAGES: [&str; 6] = [
    "Brewing some magic...",
    "Painting pixels perfectly...",
    "Launching creativity rockets...",
    "Sprinkling design dust...",
    "Setting the stage...",
    "Almost ready to dazzle!",
];

/// Loading splash state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingSplash {
    progress: u8,
    message_index: usize,
    progress_step: Timer,
    message_tick: Interval,
    exit: Timer,
    finished: bool,
}

impl LoadingSplash {
    /// Start the splash at `now`.
    pub fn start(now: Instant) -> Self {
        Self {
            progress: 0,
            message_index: 0,
            progress_step: Timer::at(now + PROGRESS_PERIOD),
            message_tick: Interval::starting_at(now, MESSAGE_PERIOD),
            exit: Timer::idle(),
            finished: false,
        }
    }

    /// Progress percentage, `0..=100`.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Current status message.
    pub fn message(&self) -> &'static str {
        LOADING_MESSAGES[self.message_index]
    }

    /// Whether the splash is done and the page may take over.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Apply everything due by `now`. Returns `true` if the output changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        if self.finished {
            return false;
        }

        let mut changed = false;

        let messages = self.message_tick.fire(now) as usize;
        if messages > 0 {
            self.message_index = (self.message_index + messages) % LOADING_MESSAGES.len();
            changed = true;
        }

        while let Some(due) = self.progress_step.fire(now) {
            self.progress = self.progress.saturating_add(PROGRESS_STEP).min(100);
            changed = true;
            if self.progress == 100 {
                self.exit.schedule(due + EXIT_DELAY);
            } else {
                self.progress_step.schedule(due + PROGRESS_PERIOD);
            }
        }

        if self.exit.fire(now).is_some() {
            debug!("Loading splash finished");
            self.finish();
            changed = true;
        }
        changed
    }

    /// Jump straight to the end.
    pub fn skip(&mut self) {
        if !self.finished {
            debug!(progress = self.progress, "Loading splash skipped");
            self.progress = 100;
            self.finish();
        }
    }

    /// Cancel every loop without finishing.
    pub fn dispose(&mut self) {
        self.progress_step.cancel();
        self.message_tick.cancel();
        self.exit.cancel();
    }

    fn finish(&mut self) {
        self.finished = true;
        self.dispose();
    }
}
