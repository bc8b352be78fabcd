//! Animation engines (pure).
//!
//! Every engine is a self-contained state object driven by the host loop:
//! the host passes `now` into `advance`, reads a display accessor and calls
//! `dispose` on teardown. Engines never read the clock, never share state and
//! never outlive their owner.

pub mod caret;
pub mod counter;
pub mod cycling;
pub mod easing;
pub mod loading;
pub mod reveal;
pub mod timer;

pub use caret::{Caret, CARET_BLINK_PERIOD, CARET_GLYPH};
pub use counter::{
    format_count, CounterParams, CounterPhase, NumericCounter, DEFAULT_COUNTER_DURATION,
};
pub use cycling::{
    CycleMode, CycleParams, CyclingReveal, DEFAULT_CYCLE_PAUSE, DEFAULT_CYCLE_SPEED,
};
pub use easing::{ease_out_cubic, lerp, progress_between};
pub use loading::LoadingSplash;
pub use reveal::{RevealParams, TextReveal};
pub use timer::{clamp_period, Interval, Timer, MIN_PERIOD};

/// Prefix of `text` holding its first `chars` characters.
pub(crate) fn char_prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
