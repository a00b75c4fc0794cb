use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Gender – selects which reference table to consult
// ---------------------------------------------------------------------------

/// Gender as entered by the user.
///
/// Only `Male` and `Female` have a reference table; anything else goes
/// through the closed-form estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[serde(rename = "other", other)]
    Unspecified,
}

impl Gender {
    /// Parse free-form input. Unknown or empty strings map to `Unspecified`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Gender::Male,
            "female" => Gender::Female,
            _ => Gender::Unspecified,
        }
    }
}

impl Default for Gender {
    fn default() -> Self {
        Gender::Unspecified
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
            Gender::Unspecified => write!(f, "other"),
        }
    }
}

// ---------------------------------------------------------------------------
// ReferenceRow – one observed body
// ---------------------------------------------------------------------------

/// One row of a reference table. All values in cm / kg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRow {
    pub height: f64,
    pub weight: f64,
    pub chest: f64,
    pub waist: f64,
    pub hips: f64,
    pub inseam: f64,
}

impl ReferenceRow {
    /// Euclidean distance from this row to `(height, weight)` in the
    /// height/weight plane.
    pub fn distance_to(&self, height: f64, weight: f64) -> f64 {
        let dh = self.height - height;
        let dw = self.weight - weight;
        (dh * dh + dw * dw).sqrt()
    }
}

// ---------------------------------------------------------------------------
// ReferenceDataset – the parsed table for one gender
// ---------------------------------------------------------------------------

/// Ordered rows of a reference table. Order is the file order and decides
/// ties in the nearest-neighbour lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceDataset {
    rows: Vec<ReferenceRow>,
}

impl ReferenceDataset {
    pub fn from_rows(rows: Vec<ReferenceRow>) -> Self {
        ReferenceDataset { rows }
    }

    pub fn rows(&self) -> &[ReferenceRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
