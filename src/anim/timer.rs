//! Deadline primitives for cooperative, host-driven animation loops.
//!
//! Nothing here reads the clock. Owners hand in `now` and ask whether a
//! deadline is due; "cancelling" a timer is just disarming it.

use std::time::{Duration, Instant};

/// Smallest period any animation loop may run at.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Clamp a period so it can never schedule a zero-length loop.
pub fn clamp_period(period: Duration) -> Duration {
    period.max(MIN_PERIOD)
}

/// One-shot deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timer {
    deadline: Option<Instant>,
}

impl Timer {
    /// A disarmed timer.
    pub fn idle() -> Self {
        Self { deadline: None }
    }

    /// A timer armed for `deadline`.
    pub fn at(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
        }
    }

    /// Arm (or re-arm) the timer.
    pub fn schedule(&mut self, deadline: Instant) {
        self.deadline = Some(deadline);
    }

    /// Disarm the timer. A cancelled timer never fires.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is pending.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Pending deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fire the timer if it is due.
    ///
    /// Returns the deadline that fired and leaves the timer disarmed, so the
    /// owner decides whether and when to schedule the next step. Scheduling
    /// from the returned deadline rather than from `now` keeps a chain of
    /// steps free of drift when the host ticks late.
    pub fn fire(&mut self, now: Instant) -> Option<Instant> {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                Some(deadline)
            }
            _ => None,
        }
    }
}

/// Repeating deadline with a fixed period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    next: Option<Instant>,
}

impl Interval {
    /// Start an interval whose first firing is one period after `start`.
    pub fn starting_at(start: Instant, period: Duration) -> Self {
        let period = clamp_period(period);
        Self {
            period,
            next: Some(start + period),
        }
    }

    /// The (clamped) period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Whether the interval still fires.
    pub fn is_armed(&self) -> bool {
        self.next.is_some()
    }

    /// Next firing, if armed.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.next
    }

    /// Stop the interval permanently.
    pub fn cancel(&mut self) {
        self.next = None;
    }

    /// Count the periods that elapsed up to `now` and re-arm after them.
    ///
    /// Catch-up is computed arithmetically, so a host that stalled for a long
    /// time pays one division, not one iteration per missed period.
    pub fn fire(&mut self, now: Instant) -> u32 {
        let Some(next) = self.next else {
            return 0;
        };
        if now < next {
            return 0;
        }

        let overdue = now.duration_since(next).as_nanos();
        let missed = overdue / self.period.as_nanos();
        let fired = missed.saturating_add(1);
        let fired_u32 = u32::try_from(fired).unwrap_or(u32::MAX);

        // Re-arm at the first multiple strictly after `now`
        let advance = self
            .period
            .checked_mul(fired_u32)
            .unwrap_or(Duration::MAX);
        self.next = next.checked_add(advance);
        fired_u32
    }
}
