use serde::{Deserialize, Serialize};

/// Default half-width of a slider window.
pub const DEFAULT_RADIUS: f64 = 6.0;

/// Adaptive slider domain. `default` is always the baseline that produced
/// it, even when clamping pushed the window away from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeBounds {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl RangeBounds {
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp a value for display inside the window.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }
}

/// Compute a window of `2 * radius` centred on `baseline`, shifted or cut
/// so it stays inside `[abs_min, abs_max]`.
///
/// When the ideal window overflows the top, it is pinned to `abs_max`;
/// when it underflows the bottom, it is pinned to `abs_min`. The overflow
/// check runs first, so a domain narrower than the window ends up as
/// `[max(abs_min, abs_max - 2r), abs_max]`.
pub fn compute_range(baseline: f64, abs_min: f64, abs_max: f64, radius: f64) -> RangeBounds {
    let lo = baseline - radius;
    let hi = baseline + radius;
    let span = 2.0 * radius;

    let (min, max) = if lo >= abs_min && hi <= abs_max {
        (lo, hi)
    } else if hi > abs_max {
        (abs_min.max(abs_max - span), abs_max)
    } else {
        (abs_min, abs_max.min(abs_min + span))
    };

    RangeBounds {
        min,
        max,
        default: baseline,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_baseline_gets_symmetric_window() {
        let r = compute_range(100.0, 60.0, 137.0, DEFAULT_RADIUS);
        assert_eq!(r, RangeBounds { min: 94.0, max: 106.0, default: 100.0 });
    }

    #[test]
    fn pinned_to_upper_limit() {
        let r = compute_range(137.0, 60.0, 137.0, DEFAULT_RADIUS);
        assert_eq!(r, RangeBounds { min: 125.0, max: 137.0, default: 137.0 });
    }

    #[test]
    fn pinned_to_lower_limit() {
        let r = compute_range(60.0, 60.0, 120.0, DEFAULT_RADIUS);
        assert_eq!(r, RangeBounds { min: 60.0, max: 72.0, default: 60.0 });
    }

    #[test]
    fn window_touching_limits_exactly_is_unchanged() {
        let r = compute_range(66.0, 60.0, 72.0, DEFAULT_RADIUS);
        assert_eq!(r, RangeBounds { min: 60.0, max: 72.0, default: 66.0 });
    }

    #[test]
    fn narrow_domain_collapses_to_domain() {
        let r = compute_range(65.0, 60.0, 68.0, DEFAULT_RADIUS);
        assert_eq!(r, RangeBounds { min: 60.0, max: 68.0, default: 65.0 });
    }

    #[test]
    fn baseline_outside_limits_keeps_default() {
        let r = compute_range(150.0, 60.0, 137.0, DEFAULT_RADIUS);
        assert_eq!(r.min, 125.0);
        assert_eq!(r.max, 137.0);
        assert_eq!(r.default, 150.0);
        assert!(!r.contains(r.default));
        assert_eq!(r.clamp(r.default), 137.0);

        let r = compute_range(40.0, 60.0, 137.0, DEFAULT_RADIUS);
        assert_eq!((r.min, r.max, r.default), (60.0, 72.0, 40.0));
    }

    #[test]
    fn custom_radius() {
        let r = compute_range(100.0, 0.0, 200.0, 2.5);
        assert_eq!((r.min, r.max), (97.5, 102.5));
        assert_eq!(r.width(), 5.0);
    }
}
