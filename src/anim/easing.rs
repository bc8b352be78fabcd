//! Easing and interpolation helpers.

/// Cubic ease-out: fast start, slow finish.
///
/// `t` is clamped to `[0, 1]`. The curve hits exactly `0.0` at `t = 0` and
/// exactly `1.0` at `t = 1`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Linear interpolation from `from` to `to`.
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Position of `value` between `start` and `end`, clamped to `[0, 1]`.
///
/// A degenerate range (`start == end`) yields `1.0` once `value` reaches it.
pub fn progress_between(value: f64, start: f64, end: f64) -> f64 {
    if end == start {
        return if value >= end { 1.0 } else { 0.0 };
    }
    ((value - start) / (end - start)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_cubic_hits_both_endpoints_exactly() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
    }

    #[test]
    fn ease_out_cubic_is_ahead_of_linear() {
        assert_eq!(ease_out_cubic(0.5), 0.875);
        assert!(ease_out_cubic(0.1) > 0.1);
    }

    #[test]
    fn ease_out_cubic_clamps_out_of_range_input() {
        assert_eq!(ease_out_cubic(-3.0), 0.0);
        assert_eq!(ease_out_cubic(7.5), 1.0);
    }

    #[test]
    fn lerp_maps_endpoints() {
        assert_eq!(lerp(4.0, -4.0, 0.0), 4.0);
        assert_eq!(lerp(4.0, -4.0, 1.0), -4.0);
        assert_eq!(lerp(4.0, -4.0, 0.5), 0.0);
    }

    #[test]
    fn progress_between_clamps_and_handles_empty_range() {
        assert_eq!(progress_between(5.0, 0.0, 10.0), 0.5);
        assert_eq!(progress_between(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(progress_between(20.0, 0.0, 10.0), 1.0);
        assert_eq!(progress_between(3.0, 3.0, 3.0), 1.0);
    }
}
