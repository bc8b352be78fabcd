//! Count-up number animation triggered by first visibility.

use super::easing::ease_out_cubic;
use super::timer::clamp_period;
use std::time::{Duration, Instant};
use tracing::debug;

/// Default time to count from zero to the target.
pub const DEFAULT_COUNTER_DURATION: Duration = Duration::from_millis(2_000);

/// Minimum visible fraction of the anchor that activates a counter.
pub const ACTIVATION_THRESHOLD: f32 = 0.5;

/// Inputs of a [`NumericCounter`].
#[derive(Debug, Clone, PartialEq)]
pub struct CounterParams {
    /// Final value.
    pub target: f64,
    /// Text appended to the formatted value; never animated.
    pub suffix: String,
    /// Time from activation to the final value.
    pub duration: Duration,
}

impl CounterParams {
    /// Params with no suffix and the default duration.
    pub fn new(target: f64) -> Self {
        Self {
            target,
            suffix: String::new(),
            duration: DEFAULT_COUNTER_DURATION,
        }
    }

    /// Set the suffix.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Set the duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// Lifecycle of a counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterPhase {
    /// Waiting for the anchor to become visible.
    Dormant,
    /// Counting, sampled once per frame.
    Running {
        /// Activation instant.
        started: Instant,
    },
    /// Reached the target; no further sampling.
    Finished,
}

/// Number that eases from zero to its target once, on first sight.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericCounter {
    target: f64,
    suffix: String,
    duration: Duration,
    value: f64,
    phase: CounterPhase,
    disposed: bool,
}

impl NumericCounter {
    /// Create a dormant counter.
    pub fn new(params: CounterParams) -> Self {
        Self {
            target: params.target,
            suffix: params.suffix,
            duration: clamp_period(params.duration),
            value: 0.0,
            phase: CounterPhase::Dormant,
            disposed: false,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    /// Whether the counter has ever been activated.
    pub fn is_activated(&self) -> bool {
        !matches!(self.phase, CounterPhase::Dormant)
    }

    /// Target value.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Raw (unformatted) displayed value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Report how much of the anchor is on screen.
    ///
    /// The first report at or above [`ACTIVATION_THRESHOLD`] starts the count
    /// at `now`. Every report after activation is ignored. Returns `true` only
    /// for the activating report.
    pub fn observe(&mut self, visible_ratio: f32, now: Instant) -> bool {
        if self.disposed || self.is_activated() {
            return false;
        }
        if visible_ratio < ACTIVATION_THRESHOLD {
            return false;
        }

        debug!(target_value = self.target, "Counter activated");
        self.phase = CounterPhase::Running { started: now };
        true
    }

    /// Sample the animation at `now`. Returns `true` if the formatted output changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        if self.disposed {
            return false;
        }
        let CounterPhase::Running { started } = self.phase else {
            return false;
        };

        let before = self.formatted();
        let elapsed = now.saturating_duration_since(started);
        let fraction = (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0);

        if fraction >= 1.0 {
            // Land on the exact target, independent of float error in the curve
            self.value = self.target;
            self.phase = CounterPhase::Finished;
        } else {
            self.value = self.target * ease_out_cubic(fraction);
        }
        self.formatted() != before
    }

    /// Stop sampling. The value freezes where it is.
    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    /// Formatted value without suffix.
    pub fn formatted(&self) -> String {
        format_count(self.target, self.value)
    }

    /// Formatted value followed by the suffix.
    pub fn display(&self) -> String {
        format!("{}{}", self.formatted(), self.suffix)
    }
}

/// Format `value` the way a counter heading for `target` shows it.
///
/// Integral targets show the floored integer; fractional targets show the
/// value rounded to one decimal place.
pub fn format_count(target: f64, value: f64) -> String {
    // `+ 0.0` folds negative zero so a fresh counter never shows "-0"
    if target.fract() == 0.0 {
        format!("{:.0}", value.floor() + 0.0)
    } else {
        let rounded = (value * 10.0).round() / 10.0 + 0.0;
        format!("{rounded:.1}")
    }
}

#[cfg(test)]
#[path = "counter_tests.rs"]
mod tests;
