//! Dataset parsing entrypoints and implementations.
//!
//! Most callers should use [`parse_from_path`] (from [`unified`]) which:
//!
//! - auto-detects format by file extension (or you can override via
//!   [`ParseOptions`])
//! - classifies the input into a [`crate::types::Dataset`], failing with a
//!   defined error when it matches neither accepted shape
//! - optionally reports success/failure/alerts to a [`ParseObserver`]
//!
//! Format-specific functions are also available under:
//! - [`csv`]
//! - [`json`]

pub mod csv;
pub mod json;
pub mod observability;
pub mod unified;

pub use observability::{
    CompositeObserver, FileObserver, ParseContext, ParseObserver, ParseSeverity, ParseStats,
    StdErrObserver,
};
pub use unified::{parse_from_path, ParseFormat, ParseOptions, ParseRequest};
