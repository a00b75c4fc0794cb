use serde::{Deserialize, Serialize};

use super::range::compute_range;

/// Default number of intervals on a slider.
pub const DEFAULT_STEP_COUNT: u32 = 12;

/// Everything a slider needs to draw its scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderScale {
    pub min: f64,
    pub max: f64,
    /// `step_count + 1` evenly spaced values from `min` to `max`.
    pub ticks: Vec<f64>,
    /// The raw baseline. Not guaranteed to sit on a tick, nor inside
    /// `[min, max]`.
    pub indicator_position: f64,
    /// Baseline is below the outer domain maximum.
    pub can_increase: bool,
    /// Baseline is above the outer domain minimum.
    pub can_decrease: bool,
}

/// Build a slider scale around `baseline`.
///
/// The window uses the same clamping rules as
/// [`compute_range`](super::range::compute_range) with a radius of
/// `step_count / 2`. `can_increase` / `can_decrease` are judged against the
/// outer `[domain_min, domain_max]`, not the window.
pub fn generate_ticks(
    baseline: f64,
    domain_min: f64,
    domain_max: f64,
    step_count: u32,
) -> SliderScale {
    let radius = f64::from(step_count) / 2.0;
    let window = compute_range(baseline, domain_min, domain_max, radius);

    let ticks = if step_count == 0 {
        vec![window.min]
    } else {
        let step = (window.max - window.min) / f64::from(step_count);
        (0..=step_count)
            .map(|i| window.min + f64::from(i) * step)
            .collect()
    };

    SliderScale {
        min: window.min,
        max: window.max,
        ticks,
        indicator_position: baseline,
        can_increase: baseline < domain_max,
        can_decrease: baseline > domain_min,
    }
}
