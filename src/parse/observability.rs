use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ChartDataError;

use super::unified::ParseFormat;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ParseSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (operation failed).
    Error,
    /// Critical error (typically I/O or other infrastructure failures).
    Critical,
}

/// Context about a parse attempt.
#[derive(Debug, Clone)]
pub struct ParseContext {
    /// The input path used for parsing.
    pub path: PathBuf,
    /// Format used for parsing.
    pub format: ParseFormat,
}

/// Minimal stats reported on a successful parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseStats {
    /// Number of parsed series.
    pub series: usize,
    /// Number of parsed observations across all series.
    pub points: usize,
}

/// Observer interface for parse outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait ParseObserver: Send + Sync {
    /// Called when parsing succeeds.
    fn on_success(&self, _ctx: &ParseContext, _stats: ParseStats) {}

    /// Called when parsing fails.
    fn on_failure(&self, _ctx: &ParseContext, _severity: ParseSeverity, _error: &ChartDataError) {}

    /// Called when a parse failure meets an alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &ParseContext, severity: ParseSeverity, error: &ChartDataError) {
        self.on_failure(ctx, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn ParseObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn ParseObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl ParseObserver for CompositeObserver {
    fn on_success(&self, ctx: &ParseContext, stats: ParseStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &ParseContext, severity: ParseSeverity, error: &ChartDataError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &ParseContext, severity: ParseSeverity, error: &ChartDataError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Logs parse events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl ParseObserver for StdErrObserver {
    fn on_success(&self, ctx: &ParseContext, stats: ParseStats) {
        eprintln!(
            "[parse][ok] format={:?} path={} series={} points={}",
            ctx.format,
            ctx.path.display(),
            stats.series,
            stats.points
        );
    }

    fn on_failure(&self, ctx: &ParseContext, severity: ParseSeverity, error: &ChartDataError) {
        eprintln!(
            "[parse][{:?}] format={:?} path={} err={}",
            severity,
            ctx.format,
            ctx.path.display(),
            error
        );
    }

    fn on_alert(&self, ctx: &ParseContext, severity: ParseSeverity, error: &ChartDataError) {
        eprintln!(
            "[ALERT][parse][{:?}] format={:?} path={} err={}",
            severity,
            ctx.format,
            ctx.path.display(),
            error
        );
    }
}

/// Appends parse events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl ParseObserver for FileObserver {
    fn on_success(&self, ctx: &ParseContext, stats: ParseStats) {
        self.append_line(&format!(
            "{} ok format={:?} path={} series={} points={}",
            unix_ts(),
            ctx.format,
            ctx.path.display(),
            stats.series,
            stats.points
        ));
    }

    fn on_failure(&self, ctx: &ParseContext, severity: ParseSeverity, error: &ChartDataError) {
        self.append_line(&format!(
            "{} fail severity={:?} format={:?} path={} err={}",
            unix_ts(),
            severity,
            ctx.format,
            ctx.path.display(),
            error
        ));
    }

    fn on_alert(&self, ctx: &ParseContext, severity: ParseSeverity, error: &ChartDataError) {
        self.append_line(&format!(
            "{} ALERT severity={:?} format={:?} path={} err={}",
            unix_ts(),
            severity,
            ctx.format,
            ctx.path.display(),
            error
        ));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
