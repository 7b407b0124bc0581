//! `chart-data-analysis` is a small library for inspecting chart datasets of
//! unknown shape (single series vs. multi-series) and deriving the summary
//! statistics chart constructors use to build their scales and color
//! thresholds.
//!
//! The primary entrypoint is [`analysis::analyze`], which takes a classified
//! [`types::Dataset`] and returns an immutable [`analysis::Summary`]: totals,
//! extrema, the category-key union, decimal precision, and four auto-derived
//! threshold break points.
//!
//! ## What you can analyze
//!
//! **Dataset shapes** (explicit, never guessed):
//!
//! - [`types::Dataset::Row`]: one named series of labeled observations
//! - [`types::Dataset::Rows`]: an ordered collection of named series
//!
//! Raw JSON/CSV input is classified into a `Dataset` by [`parse`], which fails
//! with a defined error when input matches neither shape. Missing observations
//! (JSON `null`, blank CSV cells) are carried as NaN and propagate through
//! every aggregate they contribute to.
//!
//! ## Quick example: analyze a single series
//!
//! ```rust
//! use chart_data_analysis::analysis::analyze;
//! use chart_data_analysis::types::{DataPoint, Dataset, Row};
//!
//! # fn main() -> Result<(), chart_data_analysis::ChartDataError> {
//! let dataset = Dataset::Row(Row::new(
//!     "Fruit",
//!     vec![
//!         DataPoint::new("Apples", 9.0),
//!         DataPoint::new("Oranges", 3.0),
//!         DataPoint::new("Grapes", 5.0),
//!         DataPoint::new("Bananas", 7.0),
//!     ],
//! ));
//!
//! let summary = analyze(&dataset)?;
//! assert_eq!(summary.levels(), 1);
//! assert_eq!(summary.min_value(), 3.0);
//! assert_eq!(summary.max_value(), 9.0);
//! assert_eq!(summary.thresholds(), &[4.0, 5.0, 6.0, 8.0]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Quick example: parse, rotate, analyze
//!
//! ```rust
//! use chart_data_analysis::analysis::analyze;
//! use chart_data_analysis::parse::json::parse_json_str;
//! use chart_data_analysis::transform::rotate;
//! use chart_data_analysis::types::Dataset;
//!
//! # fn main() -> Result<(), chart_data_analysis::ChartDataError> {
//! let dataset = parse_json_str(
//!     r#"[
//!         {"key": "2000", "values": [{"key": "UK", "value": 9}, {"key": "France", "value": 2}]},
//!         {"key": "2001", "values": [{"key": "UK", "value": 10}, {"key": "France", "value": 10}]}
//!     ]"#,
//! )?;
//!
//! // Per-category totals for a stacked layout.
//! let summary = analyze(&dataset)?;
//! assert_eq!(summary.column_keys(), ["UK", "France"]);
//!
//! // Flip the orientation: categories become series.
//! let Dataset::Rows(rows) = dataset else { unreachable!() };
//! let rotated = rotate(&rows)?;
//! assert_eq!(rotated[0].key, "UK");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`analysis`]: shape-gated aggregation into the [`analysis::Summary`] record
//! - [`types`]: the dataset model (data points, series, the shape union)
//! - [`transform`]: dataset transforms ahead of analysis (rotation)
//! - [`parse`]: JSON/CSV classification into the model, with observer hooks
//! - [`error`]: the error type shared across the crate

pub mod analysis;
pub mod error;
pub mod parse;
pub mod transform;
pub mod types;

pub use error::{ChartDataError, ChartDataResult};
