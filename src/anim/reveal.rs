//! Single-phrase typing animation.
//!
//! Reveals a fixed string one character at a time after an initial delay,
//! notifies once when done and keeps a blinking caret running alongside.

use super::caret::{Caret, CARET_GLYPH};
use super::char_prefix;
use super::timer::{clamp_period, Timer};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::debug;

/// Default time between revealed characters.
pub const DEFAULT_REVEAL_SPEED: Duration = Duration::from_millis(100);

/// Inputs of a [`TextReveal`] run.
///
/// Two runs with equal params are the same animation; changing any field
/// restarts it (see [`TextReveal::set_params`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealParams {
    /// Text to reveal.
    pub text: String,
    /// Time between consecutive characters.
    pub speed: Duration,
    /// Time before the first character.
    pub delay: Duration,
}

impl RevealParams {
    /// Params with the default speed and no delay.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            speed: DEFAULT_REVEAL_SPEED,
            delay: Duration::ZERO,
        }
    }

    /// Set the per-character speed.
    pub fn with_speed(mut self, speed: Duration) -> Self {
        self.speed = speed;
        self
    }

    /// Set the initial delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

type CompletionHook = Box<dyn FnMut()>;

/// Character-by-character reveal of one string.
pub struct TextReveal {
    params: RevealParams,
    speed: Duration,
    char_count: usize,
    revealed: usize,
    step: Timer,
    caret: Caret,
    completed: bool,
    disposed: bool,
    on_complete: Option<CompletionHook>,
}

impl TextReveal {
    /// Start revealing `params.text` at `now`.
    pub fn start(params: RevealParams, now: Instant) -> Self {
        let mut reveal = Self {
            speed: clamp_period(params.speed),
            char_count: params.text.chars().count(),
            params,
            revealed: 0,
            step: Timer::idle(),
            caret: Caret::start(now),
            completed: false,
            disposed: false,
            on_complete: None,
        };
        reveal.schedule_first_step(now);
        reveal
    }

    /// Attach a completion callback, fired once per run.
    pub fn on_complete(mut self, hook: impl FnMut() + 'static) -> Self {
        self.on_complete = Some(Box::new(hook));
        self
    }

    /// Current params.
    pub fn params(&self) -> &RevealParams {
        &self.params
    }

    /// Revealed prefix of the text, without caret.
    pub fn revealed(&self) -> &str {
        char_prefix(&self.params.text, self.revealed)
    }

    /// Number of characters revealed so far.
    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    /// Whether the caret is drawn right now.
    pub fn caret_visible(&self) -> bool {
        self.caret.is_visible()
    }

    /// Whether the completion notification has fired for the current run.
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Whether [`dispose`](Self::dispose) was called.
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Revealed prefix followed by the caret glyph when it is visible.
    pub fn display(&self) -> String {
        let mut out = self.revealed().to_string();
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
            if self.revealed < self.char_count {
                self.revealed += 1;
                changed = true;
                self.step.schedule(due + self.speed);
            } else {
                self.finish();
            }
        }
        changed
    }

    /// Replace the params. Different params restart from character 0.
    ///
    /// Returns `true` if the animation restarted.
    pub fn set_params(&mut self, params: RevealParams, now: Instant) -> bool {
        if self.disposed || params == self.params {
            return false;
        }

        debug!(text = %params.text, "Restarting text reveal with new params");
        self.speed = clamp_period(params.speed);
        self.char_count = params.text.chars().count();
        self.params = params;
        self.revealed = 0;
        self.completed = false;
        self.step.cancel();
        self.schedule_first_step(now);
        true
    }

    /// Run again from character 0 with the current params, as if started at `now`.
    ///
    /// The completion callback fires again at the end of the new run.
    pub fn restart(&mut self, now: Instant) {
        if self.disposed {
            return;
        }
        self.revealed = 0;
        self.completed = false;
        self.caret = Caret::start(now);
        self.step.cancel();
        self.schedule_first_step(now);
    }

    /// Cancel both loops and drop the callback. Later `advance` calls are no-ops.
    pub fn dispose(&mut self) {
        self.step.cancel();
        self.caret.dispose();
        self.on_complete = None;
        self.disposed = true;
    }

    fn schedule_first_step(&mut self, now: Instant) {
        if self.char_count == 0 {
            // Nothing to type: completion is due right away
            self.step.schedule(now);
        } else {
            self.step.schedule(now + self.params.delay);
        }
    }

    fn finish(&mut self) {
        if self.completed {
            return;
        }
        self.completed = true;
        debug!(text = %self.params.text, "Text reveal complete");
        if let Some(hook) = self.on_complete.as_mut() {
            hook();
        }
    }
}

impl fmt::Debug for TextReveal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextReveal")
            .field("params", &self.params)
            .field("revealed", &self.revealed)
            .field("step", &self.step)
            .field("caret", &self.caret)
            .field("completed", &self.completed)
            .field("disposed", &self.disposed)
            .field("has_on_complete", &self.on_complete.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "reveal_tests.rs"]
mod tests;
