//! Error types for path navigation, mutation and typed extraction.

use crate::path::{Path, Segment, SegmentKind};
use thiserror::Error;

/// Errors that can occur while navigating or editing a JSON tree.
#[derive(Error, Debug)]
pub enum GenJsonError {
    /// A segment's kind (index vs key) does not match the node it is applied to.
    #[error("expected {expected}, found `{found}`")]
    InvalidPathSegment { expected: SegmentKind, found: Segment },

    /// Integer segment outside `[0, len)` of the addressed array.
    #[error("index out of bounds {index} (length {len})")]
    IndexOutOfBounds { index: i64, len: usize },

    /// A typed accessor resolved a value of the wrong variant.
    #[error("value at {path} is {found}, not {expected}")]
    TypeMismatch {
        path: Path,
        expected: &'static str,
        found: &'static str,
    },

    /// The `int` accessor resolved a number that is not integral.
    #[error("value at {path} is {value}, which is not an integer")]
    NotAnInteger { path: Path, value: f64 },

    /// No further navigation is possible from a non-container node, or an
    /// empty path was given where a slot is required.
    #[error("incorrect or non-existent json path")]
    PathDoesNotExist,

    /// A textual path could not be parsed.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// Encoding or decoding through the JSON codec failed.
    #[error("JSON codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Convenience alias used throughout genjson.
pub type Result<T> = std::result::Result<T, GenJsonError>;
