use thiserror::Error;

/// Convenience result type for analysis and parsing operations.
pub type ChartDataResult<T> = Result<T, ChartDataError>;

/// Error type returned across the crate.
///
/// This is a single error enum shared by the analysis core and the JSON/CSV
/// parse layer. NaN observations are not errors; they flow through aggregation
/// as NaN so that consumers iterating datasets of uncertain quality keep a
/// fail-soft surface.
#[derive(Debug, Error)]
pub enum ChartDataError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parse error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parse error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input matches neither accepted dataset shape (single series or
    /// series collection), or a transform precondition on the shape failed.
    #[error("shape mismatch: {message}")]
    ShapeMismatch { message: String },

    /// A value could not be parsed as a numeric observation.
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },

    /// The dataset carries no observations to aggregate.
    #[error("empty dataset: {message}")]
    EmptyDataset { message: String },
}
