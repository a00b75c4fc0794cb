use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::measurement::MeasurementType;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("limits for {measurement} are inverted: min {min} > max {max}")]
    InvertedLimits {
        measurement: MeasurementType,
        min: f64,
        max: f64,
    },

    #[error("invalid setting {name}: {value}")]
    InvalidSetting { name: &'static str, value: f64 },
}

// ---------------------------------------------------------------------------
// Absolute limits
// ---------------------------------------------------------------------------

/// Hard bounds for one measurement type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Limits {
    pub min: f64,
    pub max: f64,
}

impl Limits {
    pub const fn new(min: f64, max: f64) -> Self {
        Limits { min, max }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// Per-measurement absolute limits, combined across genders.
///
/// Deserialises from a JSON object such as
/// `{"chest": {"min": 70, "max": 137}}`; measurements missing from the
/// object keep their default limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<MeasurementType, Limits>", into = "BTreeMap<MeasurementType, Limits>")]
pub struct AbsoluteLimits {
    height: Limits,
    weight: Limits,
    chest: Limits,
    waist: Limits,
    hips: Limits,
}

impl Default for AbsoluteLimits {
    fn default() -> Self {
        AbsoluteLimits {
            height: Limits::new(140.0, 210.0),
            weight: Limits::new(40.0, 150.0),
            chest: Limits::new(70.0, 137.0),
            waist: Limits::new(60.0, 130.0),
            hips: Limits::new(75.0, 140.0),
        }
    }
}

impl AbsoluteLimits {
    pub fn get(&self, measurement: MeasurementType) -> Limits {
        match measurement {
            MeasurementType::Height => self.height,
            MeasurementType::Weight => self.weight,
            MeasurementType::Chest => self.chest,
            MeasurementType::Waist => self.waist,
            MeasurementType::Hips => self.hips,
        }
    }

    pub fn set(&mut self, measurement: MeasurementType, limits: Limits) {
        let slot = match measurement {
            MeasurementType::Height => &mut self.height,
            MeasurementType::Weight => &mut self.weight,
            MeasurementType::Chest => &mut self.chest,
            MeasurementType::Waist => &mut self.waist,
            MeasurementType::Hips => &mut self.hips,
        };
        *slot = limits;
    }

    pub fn with(mut self, measurement: MeasurementType, limits: Limits) -> Self {
        self.set(measurement, limits);
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for measurement in MeasurementType::ALL {
            let Limits { min, max } = self.get(measurement);
            if !min.is_finite() || !max.is_finite() || min > max {
                return Err(ConfigError::InvertedLimits { measurement, min, max });
            }
        }
        Ok(())
    }
}

impl From<BTreeMap<MeasurementType, Limits>> for AbsoluteLimits {
    fn from(map: BTreeMap<MeasurementType, Limits>) -> Self {
        map.into_iter()
            .fold(AbsoluteLimits::default(), |acc, (m, l)| acc.with(m, l))
    }
}

impl From<AbsoluteLimits> for BTreeMap<MeasurementType, Limits> {
    fn from(limits: AbsoluteLimits) -> Self {
        MeasurementType::ALL
            .into_iter()
            .map(|m| (m, limits.get(m)))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Engine configuration
// ---------------------------------------------------------------------------

/// Settings the host application supplies to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub limits: AbsoluteLimits,
    /// Half-width of the adaptive slider window.
    pub range_radius: f64,
    /// Number of intervals between slider ticks.
    pub step_count: u32,
    /// Distance from baseline at which a morph weight saturates.
    pub morph_factor: f64,
    /// Used when the user's height is missing or not a number.
    pub default_height: f64,
    /// Used when the user's weight is missing or not a number.
    pub default_weight: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            limits: AbsoluteLimits::default(),
            range_radius: 6.0,
            step_count: 12,
            morph_factor: 6.0,
            default_height: 170.0,
            default_weight: 70.0,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.limits.validate()?;
        for (name, value) in [
            ("range_radius", self.range_radius),
            ("morph_factor", self.morph_factor),
            ("default_height", self.default_height),
            ("default_weight", self.default_weight),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidSetting { name, value });
            }
        }
        Ok(())
    }
}
