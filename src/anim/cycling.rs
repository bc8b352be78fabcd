//! Multi-phrase typing animation that types, holds, deletes and moves on.

use super::caret::{Caret, CARET_GLYPH};
use super::char_prefix;
use super::timer::{clamp_period, Timer};
use crate::model::AnimError;
use std::time::{Duration, Instant};
use tracing::trace;

/// Default time between typed characters.
pub const DEFAULT_CYCLE_SPEED: Duration = Duration::from_millis(100);

/// Default hold time at a fully typed phrase.
pub const DEFAULT_CYCLE_PAUSE: Duration = Duration::from_millis(2_000);

/// Inputs of a [`CyclingReveal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleParams {
    /// Phrases in cycle order. Must not be empty.
    pub phrases: Vec<String>,
    /// Time per typed character. Deletion runs at half this.
    pub speed: Duration,
    /// Hold time once a phrase is fully typed.
    pub pause: Duration,
}

impl CycleParams {
    /// Params with default speed and pause.
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            speed: DEFAULT_CYCLE_SPEED,
            pause: DEFAULT_CYCLE_PAUSE,
        }
    }

    /// Set the typing speed.
    pub fn with_speed(mut self, speed: Duration) -> Self {
        self.speed = speed;
        self
    }

    /// Set the pause at a full phrase.
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }
}

/// What the engine does on its next step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleMode {
    /// Appending characters of the active phrase.
    Typing,
    /// Holding the fully typed phrase.
    PausedAtFull,
    /// Removing characters from the end.
    Deleting,
}

/// Endless type / hold / delete loop over a list of phrases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CyclingReveal {
    phrases: Vec<String>,
    type_speed: Duration,
    delete_speed: Duration,
    pause: Duration,
    index: usize,
    visible: usize,
    mode: CycleMode,
    step: Timer,
    caret: Caret,
    disposed: bool,
}

impl CyclingReveal {
    /// Start cycling at `now`, typing the first phrase.
    ///
    /// # Errors
    ///
    /// [`AnimError::EmptyPhrases`] when there is nothing to cycle through.
    pub fn start(params: CycleParams, now: Instant) -> Result<Self, AnimError> {
        if params.phrases.is_empty() {
            return Err(AnimError::EmptyPhrases);
        }

        let type_speed = clamp_period(params.speed);
        Ok(Self {
            phrases: params.phrases,
            type_speed,
            delete_speed: clamp_period(type_speed / 2),
            pause: clamp_period(params.pause),
            index: 0,
            visible: 0,
            mode: CycleMode::Typing,
            step: Timer::at(now + type_speed),
            caret: Caret::start(now),
            disposed: false,
        })
    }

    /// Index of the active phrase.
    pub fn phrase_index(&self) -> usize {
        self.index
    }

    /// Current mode.
    pub fn mode(&self) -> CycleMode {
        self.mode
    }

    /// Visible part of the active phrase.
    pub fn visible(&self) -> &str {
        char_prefix(&self.phrases[self.index], self.visible)
    }

    /// Whether the caret is drawn right now.
    pub fn caret_visible(&self) -> bool {
        self.caret.is_visible()
    }

    /// Visible text followed by the caret glyph when it is visible.
    pub fn display(&self) -> String {
        let mut out = self.visible().to_string();
        if self.caret_visible() {
            out.push(CARET_GLYPH);
        }
        out
    }

    /// Apply every step and caret toggle due by `now`.
    ///
    /// Returns `true` when the rendered output changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        if self.disposed {
            return false;
        }

        let mut changed = self.caret.advance(now);
        while let Some(due) = self.step.fire(now) {
            changed |= self.step_at(due);
        }
        changed
    }

    /// Go back to typing the first phrase, as if started at `now`.
    pub fn restart(&mut self, now: Instant) {
        if self.disposed {
            return;
        }
        self.index = 0;
        self.visible = 0;
        self.mode = CycleMode::Typing;
        self.step = Timer::at(now + self.type_speed);
        self.caret = Caret::start(now);
    }

    /// Cancel both loops. Later `advance` calls are no-ops.
    pub fn dispose(&mut self) {
        self.step.cancel();
        self.caret.dispose();
        self.disposed = true;
    }

    /// Run one transition that was due at `due` and schedule the next one.
    fn step_at(&mut self, due: Instant) -> bool {
        let phrase_len = self.phrases[self.index].chars().count();
        match self.mode {
            CycleMode::Typing if phrase_len == 0 => {
                // Empty phrase is fully typed and fully deleted at once
                self.next_phrase();
                self.step.schedule(due + self.type_speed);
                false
            }
            CycleMode::Typing => {
                self.visible += 1;
                if self.visible >= phrase_len {
                    self.mode = CycleMode::PausedAtFull;
                    self.step.schedule(due + self.pause);
                } else {
                    self.step.schedule(due + self.type_speed);
                }
                true
            }
            CycleMode::PausedAtFull => {
                self.mode = CycleMode::Deleting;
                self.step.schedule(due + self.delete_speed);
                false
            }
            CycleMode::Deleting => {
                self.visible = self.visible.saturating_sub(1);
                if self.visible == 0 {
                    self.next_phrase();
                    self.step.schedule(due + self.type_speed);
                } else {
                    self.step.schedule(due + self.delete_speed);
                }
                true
            }
        }
    }

    fn next_phrase(&mut self) {
        self.index = (self.index + 1) % self.phrases.len();
        self.visible = 0;
        self.mode = CycleMode::Typing;
        trace!(index = self.index, "Cycling to next phrase");
    }
}

#[cfg(test)]
#[path = "cycling_tests.rs"]
mod tests;
