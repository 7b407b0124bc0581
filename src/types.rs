//! Core data model types for chart dataset analysis.
//!
//! A dataset comes in one of two shapes built from the same primitive: a single
//! named series ([`Row`]) of labeled observations ([`DataPoint`]), or an ordered
//! collection of such series. [`Dataset`] makes the shape explicit as a tagged
//! union, so downstream code never guesses which one it was handed.

use serde::{Deserialize, Serialize};

/// One labeled numeric observation within a [`Row`].
///
/// A missing observation is carried as `f64::NAN` and propagates through every
/// aggregate derived from it. Key uniqueness is not enforced; duplicate keys
/// accumulate into the same bucket when totals are built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Category label.
    pub key: String,
    /// Observed value.
    pub value: f64,
}

impl DataPoint {
    /// Create a new data point.
    pub fn new(key: impl Into<String>, value: f64) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// A single named series of category observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Series name.
    pub key: String,
    /// Observations, one per category.
    pub values: Vec<DataPoint>,
}

impl Row {
    /// Create a new series row.
    pub fn new(key: impl Into<String>, values: Vec<DataPoint>) -> Self {
        Self {
            key: key.into(),
            values,
        }
    }

    /// Number of observations in this series.
    pub fn point_count(&self) -> usize {
        self.values.len()
    }
}

/// A dataset in one of the two accepted shapes.
///
/// Serializes untagged into the library's native JSON form (a series object or
/// an array of series objects). Use [`crate::parse`] to classify raw input into
/// a `Dataset`; malformed input there is a defined error, never a guess.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Dataset {
    /// A single series (levels = 1).
    Row(Row),
    /// An ordered collection of series (levels = 2).
    Rows(Vec<Row>),
}

impl Dataset {
    /// Shape level: 1 for a single series, 2 for a collection.
    pub fn levels(&self) -> u8 {
        match self {
            Dataset::Row(_) => 1,
            Dataset::Rows(_) => 2,
        }
    }

    /// Number of series in the dataset.
    pub fn series_count(&self) -> usize {
        match self {
            Dataset::Row(_) => 1,
            Dataset::Rows(rows) => rows.len(),
        }
    }

    /// Total number of observations across all series.
    pub fn point_count(&self) -> usize {
        match self {
            Dataset::Row(row) => row.point_count(),
            Dataset::Rows(rows) => rows.iter().map(Row::point_count).sum(),
        }
    }

    /// True when the dataset carries no observations at all.
    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }
}
