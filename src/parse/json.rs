//! JSON dataset parsing.
//!
//! Supported inputs, mirroring the model's native serialized form:
//!
//! - a single series object: `{"key": "Fruit", "values": [{"key": "Apples", "value": 9}, ...]}`
//! - an array of series objects (a multi-series collection)
//!
//! Classification is structural and strict: input matching neither shape is a
//! [`ChartDataError::ShapeMismatch`] naming the offending element, never a
//! silent guess. A `null` observation value is a missing observation and is
//! carried as NaN.

use std::fs;
use std::path::Path;

use crate::error::{ChartDataError, ChartDataResult};
use crate::types::{DataPoint, Dataset, Row};

/// Parse a JSON file into a [`Dataset`].
pub fn parse_json_from_path(path: impl AsRef<Path>) -> ChartDataResult<Dataset> {
    let text = fs::read_to_string(path)?;
    parse_json_str(&text)
}

/// Parse JSON from an in-memory string into a [`Dataset`].
pub fn parse_json_str(input: &str) -> ChartDataResult<Dataset> {
    let value: serde_json::Value = serde_json::from_str(input)?;

    match value {
        serde_json::Value::Object(_) => convert_row(&value, None).map(Dataset::Row),
        serde_json::Value::Array(items) => {
            let rows = items
                .iter()
                .enumerate()
                .map(|(idx0, item)| convert_row(item, Some(idx0 + 1)))
                .collect::<ChartDataResult<Vec<Row>>>()?;
            Ok(Dataset::Rows(rows))
        }
        _ => Err(ChartDataError::ShapeMismatch {
            message: "json must be a series object or an array of series objects".to_string(),
        }),
    }
}

fn convert_row(value: &serde_json::Value, ordinal: Option<usize>) -> ChartDataResult<Row> {
    let label = match ordinal {
        Some(n) => format!("series {n}"),
        None => "series".to_string(),
    };

    let obj = value
        .as_object()
        .ok_or_else(|| ChartDataError::ShapeMismatch {
            message: format!("{label} is not a json object"),
        })?;

    let key = obj
        .get("key")
        .and_then(|k| k.as_str())
        .ok_or_else(|| ChartDataError::ShapeMismatch {
            message: format!("{label} missing required string field 'key'"),
        })?;

    let values = obj
        .get("values")
        .and_then(|v| v.as_array())
        .ok_or_else(|| ChartDataError::ShapeMismatch {
            message: format!("{label} ('{key}') missing required array field 'values'"),
        })?;

    let points = values
        .iter()
        .enumerate()
        .map(|(idx0, point)| convert_point(key, idx0 + 1, point))
        .collect::<ChartDataResult<Vec<DataPoint>>>()?;

    Ok(Row::new(key, points))
}

fn convert_point(
    series: &str,
    position: usize,
    value: &serde_json::Value,
) -> ChartDataResult<DataPoint> {
    let obj = value
        .as_object()
        .ok_or_else(|| ChartDataError::ShapeMismatch {
            message: format!("value {position} of series '{series}' is not a json object"),
        })?;

    let key = obj
        .get("key")
        .and_then(|k| k.as_str())
        .ok_or_else(|| ChartDataError::ShapeMismatch {
            message: format!(
                "value {position} of series '{series}' missing required string field 'key'"
            ),
        })?;

    let observed = match obj.get("value") {
        None => {
            return Err(ChartDataError::ShapeMismatch {
                message: format!(
                    "value {position} of series '{series}' missing required field 'value'"
                ),
            });
        }
        // Missing observation; carried as NaN so it propagates through
        // aggregation.
        Some(serde_json::Value::Null) => f64::NAN,
        Some(jv) => jv.as_f64().ok_or_else(|| ChartDataError::ParseError {
            row: position,
            column: key.to_string(),
            raw: jv.to_string(),
            message: "expected number or null".to_string(),
        })?,
    };

    Ok(DataPoint::new(key, observed))
}
