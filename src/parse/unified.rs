//! Unified parse entrypoint.
//!
//! Most callers should use [`parse_from_path`], which parses a file into a
//! classified [`crate::types::Dataset`].
//!
//! - If [`ParseOptions::format`] is `None`, the parse format is inferred from
//!   the file extension.
//! - If a [`super::observability::ParseObserver`] is provided,
//!   success/failure/alerts are reported to it.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{ChartDataError, ChartDataResult};
use crate::types::Dataset;

use super::observability::{ParseContext, ParseObserver, ParseSeverity, ParseStats};
use super::{csv, json};

/// Supported parse formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFormat {
    /// Wide-format comma-separated values.
    Csv,
    /// A series object or an array of series objects.
    Json,
}

impl ParseFormat {
    /// Parse a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Options controlling unified parse behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct ParseOptions {
    /// If `None`, auto-detect format from file extension.
    pub format: Option<ParseFormat>,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn ParseObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: ParseSeverity,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            format: None,
            observer: None,
            alert_at_or_above: ParseSeverity::Critical,
        }
    }
}

impl fmt::Debug for ParseOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseOptions")
            .field("format", &self.format)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

/// Unified parse entry point for path-based sources.
///
/// - If `options.format` is `None`, format is inferred from the file
///   extension (`.csv`/`.json`).
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with series/point count stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= the alert
///   threshold (default [`ParseSeverity::Critical`])
///
/// # Examples
///
/// ```no_run
/// use chart_data_analysis::parse::{parse_from_path, ParseOptions};
///
/// # fn main() -> Result<(), chart_data_analysis::ChartDataError> {
/// // Uses `.json` to select JSON parsing.
/// let dataset = parse_from_path("revenue.json", &ParseOptions::default())?;
/// println!("series={}", dataset.series_count());
/// # Ok(())
/// # }
/// ```
///
/// ## Observability (stderr logging + alert threshold)
///
/// ```no_run
/// use std::sync::Arc;
///
/// use chart_data_analysis::parse::{parse_from_path, ParseOptions, StdErrObserver};
///
/// # fn main() -> Result<(), chart_data_analysis::ChartDataError> {
/// let opts = ParseOptions {
///     observer: Some(Arc::new(StdErrObserver::default())),
///     ..Default::default()
/// };
///
/// // Missing files are Critical and trigger `on_alert` at the default
/// // threshold.
/// let _err = parse_from_path("does_not_exist.csv", &opts).unwrap_err();
/// # Ok(())
/// # }
/// ```
pub fn parse_from_path(
    path: impl AsRef<Path>,
    options: &ParseOptions,
) -> ChartDataResult<Dataset> {
    let path = path.as_ref();
    let format = match options.format {
        Some(f) => f,
        None => infer_format_from_path(path)?,
    };

    let ctx = ParseContext {
        path: path.to_path_buf(),
        format,
    };

    let result = match format {
        ParseFormat::Csv => csv::parse_csv_from_path(path),
        ParseFormat::Json => json::parse_json_from_path(path),
    };

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(dataset) => obs.on_success(
                &ctx,
                ParseStats {
                    series: dataset.series_count(),
                    points: dataset.point_count(),
                },
            ),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

fn severity_for_error(e: &ChartDataError) -> ParseSeverity {
    match e {
        ChartDataError::Io(_) => ParseSeverity::Critical,
        ChartDataError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => ParseSeverity::Critical,
            _ => ParseSeverity::Error,
        },
        ChartDataError::Json(_) => ParseSeverity::Error,
        ChartDataError::ShapeMismatch { .. } => ParseSeverity::Error,
        ChartDataError::ParseError { .. } => ParseSeverity::Error,
        ChartDataError::EmptyDataset { .. } => ParseSeverity::Warning,
    }
}

fn infer_format_from_path(path: &Path) -> ChartDataResult<ParseFormat> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| ChartDataError::ShapeMismatch {
            message: format!(
                "cannot infer format: path has no extension ({})",
                path.display()
            ),
        })?;

    ParseFormat::from_extension(ext).ok_or_else(|| ChartDataError::ShapeMismatch {
        message: format!(
            "cannot infer format from extension '{ext}' for path ({})",
            path.display()
        ),
    })
}

/// Convenience helper for callers that want an owned request object.
///
/// This can be useful if you want to enqueue parse work in a job system.
#[derive(Clone)]
pub struct ParseRequest {
    /// Path to the input file.
    pub path: PathBuf,
    /// Options controlling parsing.
    pub options: ParseOptions,
}

impl fmt::Debug for ParseRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseRequest")
            .field("path", &self.path)
            .field("options", &self.options)
            .finish()
    }
}

impl ParseRequest {
    /// Execute the request by calling [`parse_from_path`].
    pub fn run(&self) -> ChartDataResult<Dataset> {
        parse_from_path(&self.path, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::{infer_format_from_path, ParseFormat};
    use std::path::Path;

    #[test]
    fn format_from_extension_is_case_insensitive() {
        assert_eq!(ParseFormat::from_extension("csv"), Some(ParseFormat::Csv));
        assert_eq!(ParseFormat::from_extension("JSON"), Some(ParseFormat::Json));
        assert_eq!(ParseFormat::from_extension("parquet"), None);
    }

    #[test]
    fn inference_fails_without_a_known_extension() {
        assert!(infer_format_from_path(Path::new("data.parquet")).is_err());
        assert!(infer_format_from_path(Path::new("no_extension")).is_err());
    }

    #[test]
    fn inference_picks_up_known_extensions() {
        assert_eq!(
            infer_format_from_path(Path::new("data.csv")).unwrap(),
            ParseFormat::Csv
        );
        assert_eq!(
            infer_format_from_path(Path::new("data.json")).unwrap(),
            ParseFormat::Json
        );
    }
}
