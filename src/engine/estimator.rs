use crate::data::model::Gender;
use crate::data::repository::ReferenceRepository;
use crate::measurement::MeasurementEstimate;

// ---------------------------------------------------------------------------
// Anthropometric estimate
// ---------------------------------------------------------------------------

/// Estimate chest/waist/hips for a body of the given height (cm) and
/// weight (kg).
///
/// * `Male` / `Female`: nearest row of the gender's reference table in the
///   height/weight plane, copied as-is. Equidistant rows resolve to the one
///   that appears first in the table.
/// * `Unspecified`: closed-form linear estimate, see [`formula_estimate`].
/// * Empty table: all zeros.
///
/// Inputs are rounded to whole numbers before the lookup.
pub fn estimate(
    repository: &ReferenceRepository,
    height_cm: f64,
    weight_kg: f64,
    gender: Gender,
) -> MeasurementEstimate {
    let height = height_cm.round();
    let weight = weight_kg.round();

    let Some(dataset) = repository.dataset(gender) else {
        return formula_estimate(height, weight);
    };

    let mut best: Option<(f64, MeasurementEstimate)> = None;
    for row in dataset.rows() {
        let distance = row.distance_to(height, weight);
        // Strict comparison keeps the earliest row on ties.
        if best.map_or(true, |(d, _)| distance < d) {
            best = Some((
                distance,
                MeasurementEstimate {
                    chest: row.chest,
                    waist: row.waist,
                    hips: row.hips,
                },
            ));
        }
    }

    match best {
        Some((distance, est)) => {
            log::trace!("{gender} {height}/{weight}: nearest row at distance {distance:.2}");
            est
        }
        None => {
            log::warn!("no {gender} reference rows, returning zero estimate");
            MeasurementEstimate::ZERO
        }
    }
}

/// Linear fallback used when no reference table applies.
pub fn formula_estimate(height: f64, weight: f64) -> MeasurementEstimate {
    MeasurementEstimate {
        chest: round1(0.53 * height + 0.18 * weight),
        waist: round1(0.42 * height + 0.22 * weight),
        hips: round1(0.54 * height + 0.26 * weight),
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Replace a missing or non-numeric input with `fallback`.
pub fn sanitize(value: Option<f64>, fallback: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{ReferenceDataset, ReferenceRow};

    fn row(height: f64, weight: f64, chest: f64) -> ReferenceRow {
        ReferenceRow {
            height,
            weight,
            chest,
            waist: chest - 15.0,
            hips: chest + 2.0,
            inseam: height * 0.45,
        }
    }

    fn repo(rows: Vec<ReferenceRow>) -> ReferenceRepository {
        ReferenceRepository::new(
            ReferenceDataset::from_rows(rows.clone()),
            ReferenceDataset::from_rows(rows),
        )
    }

    #[test]
    fn formula_for_unspecified_gender() {
        let est = estimate(&ReferenceRepository::default(), 180.0, 80.0, Gender::Unspecified);
        assert_eq!(est.chest, 109.8);
        assert_eq!(est.waist, 93.2);
        assert_eq!(est.hips, 118.0);
    }

    #[test]
    fn exact_row_is_returned_unchanged() {
        let r = repo(vec![row(170.0, 70.0, 95.3), row(180.0, 80.0, 101.7)]);
        let est = estimate(&r, 180.0, 80.0, Gender::Male);
        assert_eq!(est.chest, 101.7);
        assert_eq!(est.waist, 101.7 - 15.0);
        assert_eq!(est.hips, 101.7 + 2.0);
    }

    #[test]
    fn inputs_are_rounded_before_lookup() {
        // 174.4 rounds to 174, nearer the first row; 175.6 rounds to 176,
        // nearer the second.
        let r = repo(vec![row(170.0, 70.0, 90.0), row(180.0, 70.0, 100.0)]);
        assert_eq!(estimate(&r, 174.4, 70.2, Gender::Female).chest, 90.0);
        assert_eq!(estimate(&r, 175.6, 69.8, Gender::Female).chest, 100.0);
    }

    #[test]
    fn ties_go_to_first_row() {
        let r = repo(vec![row(170.0, 70.0, 90.0), row(180.0, 70.0, 100.0)]);
        assert_eq!(estimate(&r, 175.0, 70.0, Gender::Male).chest, 90.0);

        let reversed = repo(vec![row(180.0, 70.0, 100.0), row(170.0, 70.0, 90.0)]);
        assert_eq!(estimate(&reversed, 175.0, 70.0, Gender::Male).chest, 100.0);
    }

    #[test]
    fn empty_table_gives_zeros() {
        let est = estimate(&ReferenceRepository::default(), 180.0, 80.0, Gender::Male);
        assert_eq!(est, MeasurementEstimate::ZERO);
    }

    #[test]
    fn sanitize_falls_back_on_missing_or_nan() {
        assert_eq!(sanitize(Some(182.0), 170.0), 182.0);
        assert_eq!(sanitize(None, 170.0), 170.0);
        assert_eq!(sanitize(Some(f64::NAN), 170.0), 170.0);
        assert_eq!(sanitize(Some(f64::INFINITY), 70.0), 70.0);
    }
}
