//! Shape-gated aggregation over a [`Dataset`].

use indexmap::{IndexMap, IndexSet};

use crate::error::{ChartDataError, ChartDataResult};
use crate::types::{Dataset, Row};

use super::precision::decimal_places;
use super::summary::{RowSetSummary, RowSummary, Summary};
use super::thresholds::derive_thresholds;

/// Analyze a dataset and derive the summary statistics chart constructors use
/// to build their scales and color thresholds.
///
/// The computation is gated on the dataset shape:
///
/// - a single series yields a [`RowSummary`]: its total, category keys, and
///   global extrema
/// - a series collection yields a [`RowSetSummary`]: per-series and
///   per-category totals with their maxima, the first-seen-order category-key
///   union, global extrema, and the decimal precision used to round the
///   derived thresholds
///
/// A NaN observation (a missing value) poisons the totals, extrema, and
/// thresholds it contributes to rather than raising an error. Datasets with no
/// observations at all return [`ChartDataError::EmptyDataset`].
pub fn analyze(dataset: &Dataset) -> ChartDataResult<Summary> {
    match dataset {
        Dataset::Row(row) => analyze_row(row).map(Summary::Row),
        Dataset::Rows(rows) => analyze_rows(rows).map(Summary::Rows),
    }
}

fn analyze_row(row: &Row) -> ChartDataResult<RowSummary> {
    if row.values.is_empty() {
        return Err(ChartDataError::EmptyDataset {
            message: format!("series '{}' has no values", row.key),
        });
    }

    let mut row_total = 0.0;
    let mut column_keys: IndexSet<String> = IndexSet::new();
    let mut min_value: Option<f64> = None;
    let mut max_value: Option<f64> = None;

    for point in &row.values {
        row_total += point.value;
        column_keys.insert(point.key.clone());
        min_value = Some(fold_min(min_value, point.value));
        max_value = Some(fold_max(max_value, point.value));
    }

    let min_value = min_value.unwrap_or(f64::NAN);
    let max_value = max_value.unwrap_or(f64::NAN);

    Ok(RowSummary {
        row_key: row.key.clone(),
        row_total,
        column_keys: column_keys.into_iter().collect(),
        min_value,
        max_value,
        // Single-series precision is not inspected; thresholds round to whole
        // numbers.
        thresholds: derive_thresholds(min_value, max_value, 0),
    })
}

fn analyze_rows(rows: &[Row]) -> ChartDataResult<RowSetSummary> {
    if rows.is_empty() {
        return Err(ChartDataError::EmptyDataset {
            message: "row set has no series".to_string(),
        });
    }
    if rows.iter().all(|row| row.values.is_empty()) {
        return Err(ChartDataError::EmptyDataset {
            message: "row set contains no values".to_string(),
        });
    }

    let mut row_totals: IndexMap<String, f64> = IndexMap::new();
    let mut column_totals: IndexMap<String, f64> = IndexMap::new();
    let mut column_keys: IndexSet<String> = IndexSet::new();
    let mut min_value: Option<f64> = None;
    let mut max_value: Option<f64> = None;
    let mut max_decimal_place = 0;

    for row in rows {
        for point in &row.values {
            *row_totals.entry(row.key.clone()).or_insert(0.0) += point.value;
            *column_totals.entry(point.key.clone()).or_insert(0.0) += point.value;
            column_keys.insert(point.key.clone());
            min_value = Some(fold_min(min_value, point.value));
            max_value = Some(fold_max(max_value, point.value));
            max_decimal_place = max_decimal_place.max(decimal_places(point.value));
        }
    }

    let min_value = min_value.unwrap_or(f64::NAN);
    let max_value = max_value.unwrap_or(f64::NAN);

    Ok(RowSetSummary {
        row_keys: rows.iter().map(|row| row.key.clone()).collect(),
        row_totals_max: map_max(&row_totals),
        column_totals_max: map_max(&column_totals),
        row_totals,
        column_keys: column_keys.into_iter().collect(),
        column_totals,
        min_value,
        max_value,
        max_decimal_place,
        thresholds: derive_thresholds(min_value, max_value, max_decimal_place),
    })
}

// `f64::min`/`f64::max` would silently drop a NaN operand; a missing
// observation must poison the bound instead.
fn fold_min(acc: Option<f64>, value: f64) -> f64 {
    match acc {
        None => value,
        Some(current) if current.is_nan() || value.is_nan() => f64::NAN,
        Some(current) => current.min(value),
    }
}

fn fold_max(acc: Option<f64>, value: f64) -> f64 {
    match acc {
        None => value,
        Some(current) if current.is_nan() || value.is_nan() => f64::NAN,
        Some(current) => current.max(value),
    }
}

fn map_max(totals: &IndexMap<String, f64>) -> f64 {
    let mut max: Option<f64> = None;
    for &total in totals.values() {
        max = Some(fold_max(max, total));
    }
    max.unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::analyze;
    use crate::analysis::summary::Summary;
    use crate::error::ChartDataError;
    use crate::types::{DataPoint, Dataset, Row};

    fn point(key: &str, value: f64) -> DataPoint {
        DataPoint::new(key, value)
    }

    fn two_series() -> Dataset {
        Dataset::Rows(vec![
            Row::new("a", vec![point("x", 1.0), point("y", 2.0)]),
            Row::new("b", vec![point("y", 3.0), point("z", 4.0)]),
        ])
    }

    #[test]
    fn single_series_totals_and_extrema() {
        let dataset = Dataset::Row(Row::new(
            "Fruit",
            vec![point("Apples", 9.0), point("Oranges", 3.0)],
        ));
        let summary = match analyze(&dataset).unwrap() {
            Summary::Row(s) => s,
            Summary::Rows(_) => panic!("expected a single-series summary"),
        };

        assert_eq!(summary.row_key, "Fruit");
        assert_eq!(summary.row_total, 12.0);
        assert_eq!(summary.column_keys, vec!["Apples", "Oranges"]);
        assert_eq!(summary.min_value, 3.0);
        assert_eq!(summary.max_value, 9.0);
    }

    #[test]
    fn column_key_union_is_first_seen_order() {
        let summary = analyze(&two_series()).unwrap();
        assert_eq!(summary.column_keys(), ["x", "y", "z"]);
    }

    #[test]
    fn duplicate_series_keys_accumulate_into_one_bucket() {
        let dataset = Dataset::Rows(vec![
            Row::new("a", vec![point("x", 1.0)]),
            Row::new("a", vec![point("x", 2.0)]),
        ]);
        let summary = match analyze(&dataset).unwrap() {
            Summary::Rows(s) => s,
            Summary::Row(_) => panic!("expected a multi-series summary"),
        };

        assert_eq!(summary.row_keys, vec!["a", "a"]);
        assert_eq!(summary.row_totals.len(), 1);
        assert_eq!(summary.row_totals["a"], 3.0);
        assert_eq!(summary.row_totals_max, 3.0);
    }

    #[test]
    fn a_missing_observation_poisons_downstream_aggregates() {
        let dataset = Dataset::Rows(vec![
            Row::new("a", vec![point("x", 1.0), point("y", f64::NAN)]),
            Row::new("b", vec![point("x", 2.0)]),
        ]);
        let summary = match analyze(&dataset).unwrap() {
            Summary::Rows(s) => s,
            Summary::Row(_) => panic!("expected a multi-series summary"),
        };

        assert!(summary.row_totals["a"].is_nan());
        assert_eq!(summary.row_totals["b"], 2.0);
        assert!(summary.row_totals_max.is_nan());
        assert!(summary.column_totals["y"].is_nan());
        assert!(summary.min_value.is_nan());
        assert!(summary.max_value.is_nan());
        assert!(summary.thresholds.iter().all(|t| t.is_nan()));
        // Classification and key bookkeeping stay intact.
        assert_eq!(summary.column_keys, vec!["x", "y"]);
    }

    #[test]
    fn empty_inputs_are_rejected() {
        let err = analyze(&Dataset::Rows(Vec::new())).unwrap_err();
        assert!(matches!(err, ChartDataError::EmptyDataset { .. }));

        let err = analyze(&Dataset::Row(Row::new("empty", Vec::new()))).unwrap_err();
        assert!(matches!(err, ChartDataError::EmptyDataset { .. }));

        let err = analyze(&Dataset::Rows(vec![Row::new("a", Vec::new())])).unwrap_err();
        assert!(matches!(err, ChartDataError::EmptyDataset { .. }));
    }

    #[test]
    fn fractional_values_drive_threshold_precision() {
        let dataset = Dataset::Rows(vec![
            Row::new("a", vec![point("x", 0.5)]),
            Row::new("b", vec![point("x", 2.5)]),
        ]);
        let summary = match analyze(&dataset).unwrap() {
            Summary::Rows(s) => s,
            Summary::Row(_) => panic!("expected a multi-series summary"),
        };

        assert_eq!(summary.max_decimal_place, 1);
        assert_eq!(summary.thresholds, [0.8, 1.3, 1.6, 2.3]);
    }
}
