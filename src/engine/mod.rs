//! The estimation and morph-mapping pipeline.
//!
//! ```text
//!  height, weight, gender
//!        │
//!        ▼
//!   ┌───────────┐
//!   │ estimator  │  nearest reference row (or formula) → baseline
//!   └───────────┘
//!        │
//!        ├──────────────┐
//!        ▼              ▼
//!   ┌────────┐     ┌────────┐
//!   │ range   │     │ ticks   │  baseline + absolute limits → slider domain
//!   └────────┘     └────────┘
//!        │
//!        ▼  (user drags slider)
//!   ┌────────┐
//!   │ morph   │  live value vs baseline → weight in [-1, 1]
//!   └────────┘
//! ```
//!
//! Every function here is pure; [`SizingEngine`] only bundles the reference
//! data with the host configuration.

pub mod estimator;
pub mod morph;
pub mod range;
pub mod ticks;

use crate::config::EngineConfig;
use crate::data::model::Gender;
use crate::data::repository::ReferenceRepository;
use crate::measurement::{MeasurementEstimate, MeasurementType};

pub use estimator::{estimate, formula_estimate, sanitize};
pub use morph::{normalize, MorphWeight};
pub use range::{compute_range, RangeBounds};
pub use ticks::{generate_ticks, SliderScale};

// ---------------------------------------------------------------------------
// SizingEngine
// ---------------------------------------------------------------------------

/// Reference tables plus configuration. Immutable once built.
#[derive(Debug, Clone)]
pub struct SizingEngine {
    repository: ReferenceRepository,
    config: EngineConfig,
}

impl SizingEngine {
    pub fn new(repository: ReferenceRepository, config: EngineConfig) -> Self {
        SizingEngine { repository, config }
    }

    pub fn repository(&self) -> &ReferenceRepository {
        &self.repository
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replace missing or non-numeric height/weight with the configured
    /// default midpoints.
    pub fn sanitize_inputs(&self, height: Option<f64>, weight: Option<f64>) -> (f64, f64) {
        (
            sanitize(height, self.config.default_height),
            sanitize(weight, self.config.default_weight),
        )
    }

    pub fn estimate(&self, height: f64, weight: f64, gender: Gender) -> MeasurementEstimate {
        let (height, weight) = self.sanitize_inputs(Some(height), Some(weight));
        estimate(&self.repository, height, weight, gender)
    }

    /// Expected value of `measurement` for this body. Height and weight are
    /// their own baseline (rounded, like the estimator's inputs).
    pub fn baseline(
        &self,
        measurement: MeasurementType,
        height: f64,
        weight: f64,
        gender: Gender,
    ) -> f64 {
        let (height, weight) = self.sanitize_inputs(Some(height), Some(weight));
        match measurement {
            MeasurementType::Height => height.round(),
            MeasurementType::Weight => weight.round(),
            circumference => self
                .estimate(height, weight, gender)
                .get(circumference)
                .unwrap_or_default(),
        }
    }

    /// Adaptive slider window for `measurement`.
    pub fn adaptive_range(
        &self,
        measurement: MeasurementType,
        height: f64,
        weight: f64,
        gender: Gender,
    ) -> RangeBounds {
        let baseline = self.baseline(measurement, height, weight, gender);
        let limits = self.config.limits.get(measurement);
        compute_range(baseline, limits.min, limits.max, self.config.range_radius)
    }

    /// Tick scale for `measurement`.
    pub fn slider_scale(
        &self,
        measurement: MeasurementType,
        height: f64,
        weight: f64,
        gender: Gender,
    ) -> SliderScale {
        let baseline = self.baseline(measurement, height, weight, gender);
        let limits = self.config.limits.get(measurement);
        generate_ticks(baseline, limits.min, limits.max, self.config.step_count)
    }

    pub fn morph_weight(&self, current: f64, baseline: f64) -> MorphWeight {
        normalize(current, baseline, self.config.morph_factor)
    }
}

impl Default for SizingEngine {
    fn default() -> Self {
        SizingEngine::new(ReferenceRepository::embedded(), EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_and_weight_are_their_own_baseline() {
        let engine = SizingEngine::default();
        assert_eq!(
            engine.baseline(MeasurementType::Height, 181.4, 77.0, Gender::Male),
            181.0
        );
        assert_eq!(
            engine.baseline(MeasurementType::Weight, 181.4, 77.6, Gender::Male),
            78.0
        );
    }

    #[test]
    fn non_numeric_inputs_use_default_midpoints() {
        let engine = SizingEngine::default();
        assert_eq!(
            engine.estimate(f64::NAN, f64::NAN, Gender::Female),
            engine.estimate(170.0, 70.0, Gender::Female)
        );
        assert_eq!(
            engine.baseline(MeasurementType::Height, f64::NAN, 70.0, Gender::Male),
            170.0
        );
    }

    #[test]
    fn adaptive_range_stays_inside_limits() {
        let engine = SizingEngine::default();
        for m in MeasurementType::ALL {
            let r = engine.adaptive_range(m, 205.0, 145.0, Gender::Male);
            let limits = engine.config().limits.get(m);
            assert!(r.min >= limits.min && r.max <= limits.max, "{m}: {r:?}");
            assert!(r.width() <= 12.0);
        }
    }

    #[test]
    fn adaptive_range_default_is_baseline() {
        let engine = SizingEngine::default();
        let r = engine.adaptive_range(MeasurementType::Chest, 180.0, 80.0, Gender::Unspecified);
        assert_eq!(r.default, 109.8);
        assert_eq!((r.min, r.max), (109.8 - 6.0, 109.8 + 6.0));
    }

    #[test]
    fn slider_scale_uses_configured_step_count() {
        let mut config = EngineConfig::default();
        config.step_count = 6;
        let engine = SizingEngine::new(ReferenceRepository::embedded(), config);
        let s = engine.slider_scale(MeasurementType::Height, 175.0, 70.0, Gender::Male);
        assert_eq!(s.ticks, vec![172.0, 173.0, 174.0, 175.0, 176.0, 177.0, 178.0]);
    }
}
