use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// MeasurementType – what a slider controls
// ---------------------------------------------------------------------------

/// A body measurement exposed as a slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementType {
    Height,
    Weight,
    Chest,
    Waist,
    Hips,
}

impl MeasurementType {
    pub const ALL: [MeasurementType; 5] = [
        MeasurementType::Height,
        MeasurementType::Weight,
        MeasurementType::Chest,
        MeasurementType::Waist,
        MeasurementType::Hips,
    ];

    /// The circumference measurements that drive morph targets.
    pub const CIRCUMFERENCES: [MeasurementType; 3] = [
        MeasurementType::Chest,
        MeasurementType::Waist,
        MeasurementType::Hips,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MeasurementType::Height => "height",
            MeasurementType::Weight => "weight",
            MeasurementType::Chest => "chest",
            MeasurementType::Waist => "waist",
            MeasurementType::Hips => "hips",
        }
    }

    /// The deformation this measurement drives on the avatar, if any.
    pub fn morph_target(self) -> Option<MorphTarget> {
        match self {
            MeasurementType::Chest => Some(MorphTarget::ChestWidth),
            MeasurementType::Waist => Some(MorphTarget::WaistThickness),
            MeasurementType::Hips => Some(MorphTarget::HipsSize),
            MeasurementType::Height | MeasurementType::Weight => None,
        }
    }
}

impl fmt::Display for MeasurementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown measurement type: {0:?}")]
pub struct UnknownMeasurement(pub String);

impl FromStr for MeasurementType {
    type Err = UnknownMeasurement;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MeasurementType::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownMeasurement(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// MorphTarget – identifiers understood by the 3D deformation system
// ---------------------------------------------------------------------------

/// Named morph target on the avatar mesh.
///
/// The identifiers are matched case-sensitively by the renderer; a typo
/// there silently does nothing, so they only exist in this one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MorphTarget {
    #[serde(rename = "Chest Width")]
    ChestWidth,
    #[serde(rename = "Waist Thickness")]
    WaistThickness,
    #[serde(rename = "Hips Size")]
    HipsSize,
}

impl MorphTarget {
    pub fn identifier(self) -> &'static str {
        match self {
            MorphTarget::ChestWidth => "Chest Width",
            MorphTarget::WaistThickness => "Waist Thickness",
            MorphTarget::HipsSize => "Hips Size",
        }
    }
}

impl fmt::Display for MorphTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

// ---------------------------------------------------------------------------
// MeasurementEstimate
// ---------------------------------------------------------------------------

/// Estimated circumferences (cm) for one height/weight/gender.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MeasurementEstimate {
    pub chest: f64,
    pub waist: f64,
    pub hips: f64,
}

impl MeasurementEstimate {
    pub const ZERO: MeasurementEstimate = MeasurementEstimate {
        chest: 0.0,
        waist: 0.0,
        hips: 0.0,
    };

    /// Value for a circumference measurement; `None` for height and weight.
    pub fn get(&self, measurement: MeasurementType) -> Option<f64> {
        match measurement {
            MeasurementType::Chest => Some(self.chest),
            MeasurementType::Waist => Some(self.waist),
            MeasurementType::Hips => Some(self.hips),
            MeasurementType::Height | MeasurementType::Weight => None,
        }
    }
}
