//! Wide-format CSV dataset parsing.
//!
//! The first header cell names the series column; the remaining headers are
//! category keys. Each record becomes one series row:
//!
//! ```text
//! Year,UK,France,Spain
//! 2000,9,2,18
//! 2001,10,10,2
//! ```
//!
//! parses into a two-series collection keyed `2000`/`2001` with categories
//! `UK`/`France`/`Spain`. Blank cells are missing observations and are
//! carried as NaN.

use std::path::Path;

use crate::error::{ChartDataError, ChartDataResult};
use crate::types::{DataPoint, Dataset, Row};

/// Parse a wide-format CSV file into a [`Dataset`].
///
/// Rules:
///
/// - CSV must have headers; the first header cell labels the series column.
/// - Every remaining header is a category key, in column order.
/// - Each record's first field is the series key; the rest are numeric
///   observations aligned to the headers.
pub fn parse_csv_from_path(path: impl AsRef<Path>) -> ChartDataResult<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    parse_csv_from_reader(&mut rdr)
}

/// Parse wide-format CSV data from an existing CSV reader.
pub fn parse_csv_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> ChartDataResult<Dataset> {
    let headers = rdr.headers()?.clone();
    if headers.len() < 2 {
        return Err(ChartDataError::ShapeMismatch {
            message: format!(
                "wide-format csv needs a series column and at least one category column. headers={:?}",
                headers.iter().collect::<Vec<_>>()
            ),
        });
    }

    let category_keys: Vec<String> = headers.iter().skip(1).map(str::to_owned).collect();

    let mut rows: Vec<Row> = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // Report 1-based row numbers for users; +1 again because the header is
        // row 1.
        let user_row = row_idx0 + 2;
        let record = result?;

        let series_key = record.get(0).unwrap_or("").trim();
        if series_key.is_empty() {
            return Err(ChartDataError::ShapeMismatch {
                message: format!("row {user_row} has an empty series key"),
            });
        }

        let mut points: Vec<DataPoint> = Vec::with_capacity(category_keys.len());
        for (idx, category) in category_keys.iter().enumerate() {
            let raw = record.get(idx + 1).unwrap_or("");
            points.push(DataPoint::new(
                category.clone(),
                parse_observation(user_row, category, raw)?,
            ));
        }
        rows.push(Row::new(series_key, points));
    }

    Ok(Dataset::Rows(rows))
}

fn parse_observation(row: usize, column: &str, raw: &str) -> ChartDataResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        // Missing observation; carried as NaN so it propagates through
        // aggregation.
        return Ok(f64::NAN);
    }

    trimmed
        .parse::<f64>()
        .map_err(|e| ChartDataError::ParseError {
            row,
            column: column.to_owned(),
            raw: raw.to_owned(),
            message: e.to_string(),
        })
}
