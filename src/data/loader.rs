use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord, Trim};

use super::model::{ReferenceDataset, ReferenceRow};

/// Male reference table compiled into the binary.
pub const EMBEDDED_MALE_TABLE: &str = include_str!("../../data/male.csv");

/// Female reference table compiled into the binary.
pub const EMBEDDED_FEMALE_TABLE: &str = include_str!("../../data/female.csv");

/// Number of leading numeric columns every row must carry.
const REQUIRED_FIELDS: usize = 6;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a reference table from a CSV file on disk.
///
/// Only I/O failures are reported; malformed rows are skipped exactly as in
/// [`parse_reference_table`].
pub fn load_reference_table(path: &Path) -> Result<ReferenceDataset> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading reference table {}", path.display()))?;
    let dataset = parse_reference_table(&text);
    log::info!(
        "loaded {} reference rows from {}",
        dataset.len(),
        path.display()
    );
    Ok(dataset)
}

/// Parse a reference table.
///
/// CSV layout: one header row, then
/// `height,weight,chest,waist,hips,inseam` per line. Extra trailing columns
/// are ignored. A row is kept only when its first six fields all parse as
/// finite numbers; everything else is dropped without failing the parse.
pub fn parse_reference_table(text: &str) -> ReferenceDataset {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                log::debug!("reference row {row_no}: unreadable ({err}), skipped");
                continue;
            }
        };
        match parse_row(&record) {
            Some(row) => rows.push(row),
            None => log::debug!("reference row {row_no}: {record:?} skipped"),
        }
    }

    ReferenceDataset::from_rows(rows)
}

fn parse_row(record: &StringRecord) -> Option<ReferenceRow> {
    if record.len() < REQUIRED_FIELDS {
        return None;
    }
    let mut values = [0.0f64; REQUIRED_FIELDS];
    for (slot, field) in values.iter_mut().zip(record.iter()) {
        let v = field.parse::<f64>().ok()?;
        if !v.is_finite() {
            return None;
        }
        *slot = v;
    }
    let [height, weight, chest, waist, hips, inseam] = values;
    Some(ReferenceRow {
        height,
        weight,
        chest,
        waist,
        hips,
        inseam,
    })
}
