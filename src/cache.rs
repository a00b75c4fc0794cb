use std::collections::HashMap;

use crate::data::model::Gender;
use crate::engine::{RangeBounds, SizingEngine};
use crate::measurement::MeasurementType;

// ---------------------------------------------------------------------------
// Memoisation of adaptive ranges
// ---------------------------------------------------------------------------

/// Cache key: the measurement plus the rounded inputs the estimator sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeKey {
    pub measurement: MeasurementType,
    pub height: i64,
    pub weight: i64,
    pub gender: Gender,
}

impl RangeKey {
    pub fn new(measurement: MeasurementType, height: f64, weight: f64, gender: Gender) -> Self {
        RangeKey {
            measurement,
            height: height.round() as i64,
            weight: weight.round() as i64,
            gender,
        }
    }
}

/// Caller-owned cache of [`SizingEngine::adaptive_range`] results.
///
/// Entries never expire; a different key is the only way to get a fresh
/// value. Clear it when the engine's configuration changes.
#[derive(Debug, Default)]
pub struct RangeCache {
    entries: HashMap<RangeKey, RangeBounds>,
}

impl RangeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(
        &mut self,
        engine: &SizingEngine,
        measurement: MeasurementType,
        height: f64,
        weight: f64,
        gender: Gender,
    ) -> RangeBounds {
        let (height, weight) = engine.sanitize_inputs(Some(height), Some(weight));
        let key = RangeKey::new(measurement, height, weight, gender);
        *self.entries.entry(key).or_insert_with(|| {
            log::debug!("range cache miss: {key:?}");
            engine.adaptive_range(measurement, height, weight, gender)
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
