//! Dataset shape analysis.
//!
//! The analysis layer turns a [`crate::types::Dataset`] into the single
//! immutable [`Summary`] record chart constructors consume to build their
//! scales and color thresholds. It is a pure synchronous computation over the
//! input; nothing is cached and the input is never mutated.
//!
//! Currently implemented:
//!
//! - [`analyze()`]: totals, extrema, column-key union, decimal precision, and
//!   four auto-derived threshold break points, gated on the dataset shape
//!
//! ## Example: single series
//!
//! ```rust
//! use chart_data_analysis::analysis::{analyze, Summary};
//! use chart_data_analysis::types::{DataPoint, Dataset, Row};
//!
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
//! let summary = analyze(&dataset).unwrap();
//! assert_eq!(summary.levels(), 1);
//! assert_eq!(summary.max_value(), 9.0);
//! assert_eq!(summary.thresholds(), &[4.0, 5.0, 6.0, 8.0]);
//!
//! let row = match summary {
//!     Summary::Row(row) => row,
//!     Summary::Rows(_) => unreachable!(),
//! };
//! assert_eq!(row.row_total, 24.0);
//! ```

pub mod precision;
pub mod summarize;
pub mod summary;
pub mod thresholds;

pub use summarize::analyze;
pub use summary::{RowSetSummary, RowSummary, Summary};
