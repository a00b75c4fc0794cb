use serde::{Deserialize, Serialize};

/// Default distance from baseline at which a weight saturates.
pub const DEFAULT_FACTOR: f64 = 6.0;

/// Signed deformation weight in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MorphWeight(f64);

impl MorphWeight {
    pub const NEUTRAL: MorphWeight = MorphWeight(0.0);

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<MorphWeight> for f64 {
    fn from(w: MorphWeight) -> f64 {
        w.0
    }
}

/// Map `current` relative to `baseline` onto a morph weight:
/// `clamp((current - baseline) / factor, -1, 1)`.
///
/// A non-positive or non-finite `factor`, or a NaN difference, gives the
/// neutral weight.
pub fn normalize(current: f64, baseline: f64, factor: f64) -> MorphWeight {
    if !(factor.is_finite() && factor > 0.0) {
        return MorphWeight::NEUTRAL;
    }
    let raw = (current - baseline) / factor;
    if raw.is_nan() {
        return MorphWeight::NEUTRAL;
    }
    MorphWeight(raw.clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_baseline() {
        assert_eq!(normalize(97.0, 97.0, DEFAULT_FACTOR), MorphWeight::NEUTRAL);
        assert_eq!(normalize(0.0, 0.0, 0.5).value(), 0.0);
    }

    #[test]
    fn saturates_at_factor() {
        assert_eq!(normalize(103.0, 97.0, 6.0).value(), 1.0);
        assert_eq!(normalize(91.0, 97.0, 6.0).value(), -1.0);
        assert_eq!(normalize(200.0, 97.0, 6.0).value(), 1.0);
        assert_eq!(normalize(-50.0, 97.0, 6.0).value(), -1.0);
    }

    #[test]
    fn linear_inside_band() {
        assert_eq!(normalize(100.0, 97.0, 6.0).value(), 0.5);
        assert_eq!(normalize(95.5, 97.0, 6.0).value(), -0.25);
    }

    #[test]
    fn degenerate_factor_is_neutral() {
        assert_eq!(normalize(110.0, 97.0, 0.0), MorphWeight::NEUTRAL);
        assert_eq!(normalize(110.0, 97.0, -3.0), MorphWeight::NEUTRAL);
        assert_eq!(normalize(110.0, 97.0, f64::NAN), MorphWeight::NEUTRAL);
        assert_eq!(normalize(f64::NAN, 97.0, 6.0), MorphWeight::NEUTRAL);
    }

    #[test]
    fn serializes_as_bare_number() {
        assert_eq!(serde_json::to_string(&normalize(100.0, 97.0, 6.0)).unwrap(), "0.5");
    }
}
