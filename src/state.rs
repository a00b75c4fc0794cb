use std::collections::BTreeMap;

use serde::Serialize;

use crate::cache::RangeCache;
use crate::data::model::Gender;
use crate::engine::{MorphWeight, RangeBounds, SizingEngine, SliderScale};
use crate::measurement::{MeasurementType, MorphTarget};

/// Morph weights keyed by the renderer's target identifiers.
pub type MorphFrame = BTreeMap<MorphTarget, MorphWeight>;

// ---------------------------------------------------------------------------
// Fit session state
// ---------------------------------------------------------------------------

/// The sizing state behind one open widget, independent of rendering.
pub struct FitSession<'a> {
    engine: &'a SizingEngine,

    /// Height as entered (None until the user fills it in).
    height: Option<f64>,

    /// Weight as entered.
    weight: Option<f64>,

    gender: Gender,

    /// Current slider positions, raw (may lie outside the window).
    values: BTreeMap<MeasurementType, f64>,

    /// Adaptive ranges for the current profile.
    ranges: RangeCache,
}

/// Snapshot of one slider for the host UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderState {
    pub measurement: MeasurementType,
    pub baseline: f64,
    pub value: f64,
    pub displayed_value: f64,
    pub range: RangeBounds,
    pub scale: SliderScale,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub morph: Option<(MorphTarget, MorphWeight)>,
}

impl<'a> FitSession<'a> {
    pub fn new(engine: &'a SizingEngine) -> Self {
        let mut session = FitSession {
            engine,
            height: None,
            weight: None,
            gender: Gender::Unspecified,
            values: BTreeMap::new(),
            ranges: RangeCache::new(),
        };
        session.reset_values();
        session
    }

    /// Ingest a new profile and move every slider back to its baseline.
    pub fn set_profile(&mut self, height: Option<f64>, weight: Option<f64>, gender: Gender) {
        self.height = height;
        self.weight = weight;
        self.gender = gender;
        self.reset_values();
    }

    /// Height and weight with defaults substituted for missing input.
    pub fn body(&self) -> (f64, f64) {
        self.engine.sanitize_inputs(self.height, self.weight)
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn baseline(&self, measurement: MeasurementType) -> f64 {
        let (height, weight) = self.body();
        self.engine.baseline(measurement, height, weight, self.gender)
    }

    pub fn range(&mut self, measurement: MeasurementType) -> RangeBounds {
        let (height, weight) = self.body();
        self.ranges
            .get_or_compute(self.engine, measurement, height, weight, self.gender)
    }

    pub fn scale(&self, measurement: MeasurementType) -> SliderScale {
        let (height, weight) = self.body();
        self.engine
            .slider_scale(measurement, height, weight, self.gender)
    }

    /// Record a slider move. Non-finite values are ignored.
    pub fn set_value(&mut self, measurement: MeasurementType, value: f64) {
        if !value.is_finite() {
            log::warn!("ignoring non-finite {measurement} value");
            return;
        }
        self.values.insert(measurement, value);
    }

    pub fn value(&self, measurement: MeasurementType) -> f64 {
        self.values
            .get(&measurement)
            .copied()
            .unwrap_or_else(|| self.baseline(measurement))
    }

    /// The current value clamped into the slider window.
    pub fn displayed_value(&mut self, measurement: MeasurementType) -> f64 {
        let value = self.value(measurement);
        self.range(measurement).clamp(value)
    }

    /// Move a slider back to its baseline.
    pub fn reset(&mut self, measurement: MeasurementType) {
        let baseline = self.baseline(measurement);
        self.values.insert(measurement, baseline);
    }

    /// Weight for a single circumference; `None` for height and weight.
    pub fn morph_weight(&self, measurement: MeasurementType) -> Option<(MorphTarget, MorphWeight)> {
        let target = measurement.morph_target()?;
        let weight = self
            .engine
            .morph_weight(self.value(measurement), self.baseline(measurement));
        Some((target, weight))
    }

    /// Weights for every morph target, ready to hand to the renderer.
    pub fn morph_frame(&self) -> MorphFrame {
        MeasurementType::CIRCUMFERENCES
            .into_iter()
            .filter_map(|m| self.morph_weight(m))
            .collect()
    }

    /// Full snapshot of one slider.
    pub fn slider(&mut self, measurement: MeasurementType) -> SliderState {
        SliderState {
            measurement,
            baseline: self.baseline(measurement),
            value: self.value(measurement),
            displayed_value: self.displayed_value(measurement),
            range: self.range(measurement),
            scale: self.scale(measurement),
            morph: self.morph_weight(measurement),
        }
    }

    fn reset_values(&mut self) {
        self.values.clear();
        for measurement in MeasurementType::ALL {
            self.reset(measurement);
        }
    }
}
