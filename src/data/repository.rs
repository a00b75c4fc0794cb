use std::path::Path;

use anyhow::Result;

use super::loader::{
    load_reference_table, parse_reference_table, EMBEDDED_FEMALE_TABLE, EMBEDDED_MALE_TABLE,
};
use super::model::{Gender, ReferenceDataset};

// ---------------------------------------------------------------------------
// ReferenceRepository – read-only access to both tables
// ---------------------------------------------------------------------------

/// Both reference tables, built once and handed to the engine.
///
/// Nothing here is global: tests build repositories from synthetic rows and
/// the host decides whether to use the embedded tables or its own files.
#[derive(Debug, Clone, Default)]
pub struct ReferenceRepository {
    male: ReferenceDataset,
    female: ReferenceDataset,
}

impl ReferenceRepository {
    pub fn new(male: ReferenceDataset, female: ReferenceDataset) -> Self {
        if male.is_empty() || female.is_empty() {
            log::warn!(
                "reference repository has an empty table (male: {}, female: {})",
                male.len(),
                female.len()
            );
        }
        ReferenceRepository { male, female }
    }

    /// Parse the tables compiled into the crate.
    pub fn embedded() -> Self {
        Self::new(
            parse_reference_table(EMBEDDED_MALE_TABLE),
            parse_reference_table(EMBEDDED_FEMALE_TABLE),
        )
    }

    /// Load both tables from CSV files.
    pub fn from_files(male_path: &Path, female_path: &Path) -> Result<Self> {
        Ok(Self::new(
            load_reference_table(male_path)?,
            load_reference_table(female_path)?,
        ))
    }

    /// The table for `gender`, or `None` when the gender has no table.
    pub fn dataset(&self, gender: Gender) -> Option<&ReferenceDataset> {
        match gender {
            Gender::Male => Some(&self.male),
            Gender::Female => Some(&self.female),
            Gender::Unspecified => None,
        }
    }
}
