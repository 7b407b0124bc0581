//! The derived statistics record produced by [`crate::analysis::analyze`].

use indexmap::IndexMap;
use serde::Serialize;

/// Summary of a single-series dataset (levels = 1).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowSummary {
    /// The series' own name.
    pub row_key: String,
    /// Sum of the series' observation values.
    pub row_total: f64,
    /// Category keys in first-seen order.
    pub column_keys: Vec<String>,
    /// Smallest observed value.
    pub min_value: f64,
    /// Largest observed value.
    pub max_value: f64,
    /// Four ascending break points spanning `[min_value, max_value]`.
    pub thresholds: [f64; 4],
}

/// Summary of a multi-series dataset (levels = 2).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowSetSummary {
    /// Series names in input order (repeats preserved).
    pub row_keys: Vec<String>,
    /// Series name to sum of its observation values. Series sharing a name
    /// accumulate into one bucket, keyed in first-seen order.
    pub row_totals: IndexMap<String, f64>,
    /// Largest value in `row_totals`.
    pub row_totals_max: f64,
    /// Union of category keys across all series, first-seen order.
    pub column_keys: Vec<String>,
    /// Category key to sum of its value across all series.
    pub column_totals: IndexMap<String, f64>,
    /// Largest value in `column_totals`.
    pub column_totals_max: f64,
    /// Smallest observed value across every series.
    pub min_value: f64,
    /// Largest observed value across every series.
    pub max_value: f64,
    /// Most significant fractional decimal digits among all values.
    pub max_decimal_place: u32,
    /// Four ascending break points spanning `[min_value, max_value]`, rounded
    /// to `max_decimal_place` digits.
    pub thresholds: [f64; 4],
}

/// Shape-dependent analysis output.
///
/// The variant mirrors the input shape, so fields that only exist for the
/// other shape are unrepresentable rather than absent. Accessors cover the
/// fields both shapes share.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Summary {
    /// Single-series summary (levels = 1).
    Row(RowSummary),
    /// Multi-series summary (levels = 2).
    Rows(RowSetSummary),
}

impl Summary {
    /// Shape level: 1 for a single series, 2 for a collection.
    pub fn levels(&self) -> u8 {
        match self {
            Summary::Row(_) => 1,
            Summary::Rows(_) => 2,
        }
    }

    /// Category keys in first-seen order.
    pub fn column_keys(&self) -> &[String] {
        match self {
            Summary::Row(s) => &s.column_keys,
            Summary::Rows(s) => &s.column_keys,
        }
    }

    /// Smallest observed value.
    pub fn min_value(&self) -> f64 {
        match self {
            Summary::Row(s) => s.min_value,
            Summary::Rows(s) => s.min_value,
        }
    }

    /// Largest observed value.
    pub fn max_value(&self) -> f64 {
        match self {
            Summary::Row(s) => s.max_value,
            Summary::Rows(s) => s.max_value,
        }
    }

    /// The four derived threshold break points.
    pub fn thresholds(&self) -> &[f64; 4] {
        match self {
            Summary::Row(s) => &s.thresholds,
            Summary::Rows(s) => &s.thresholds,
        }
    }

    /// The single-series summary, if that is the shape.
    pub fn as_row(&self) -> Option<&RowSummary> {
        match self {
            Summary::Row(s) => Some(s),
            Summary::Rows(_) => None,
        }
    }

    /// The multi-series summary, if that is the shape.
    pub fn as_rows(&self) -> Option<&RowSetSummary> {
        match self {
            Summary::Row(_) => None,
            Summary::Rows(s) => Some(s),
        }
    }
}
