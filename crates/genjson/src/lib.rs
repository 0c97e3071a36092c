//! # genjson
//!
//! Path-addressed access to loosely-structured JSON.
//!
//! Decode a document whose schema is unknown or varies, then read, write,
//! delete and search it with a sequence of keys and indices instead of
//! fixed struct fields.
//!
//! ## Quick start
//!
//! ```rust
//! use genjson::{path, GenJson, GenJsonError};
//!
//! let mut doc = GenJson::from_str(r#"{"a":{"b":1},"list":[1,2,3]}"#).unwrap();
//!
//! doc.set(99, &path!["a", "b"]).unwrap();
//! assert_eq!(doc.int(&path!["a", "b"]).unwrap(), 99);
//!
//! assert!(matches!(
//!     doc.unwind(&path!["list", 5]),
//!     Err(GenJsonError::IndexOutOfBounds { .. })
//! ));
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the six-variant JSON tree
//! - [`path`](mod@path) — path segments, [`Path`], the [`path!`] macro
//! - [`navigator`] — `unwind`: path → sub-value
//! - [`accessors`] — typed extraction (`bool`, `int`, `float`, `string`, `array`)
//! - [`mutator`] — `set` and `delete`
//! - [`scanner`] — predicate search with wildcard indices
//! - [`codec`] — JSON text in and out, deep clone
//! - [`document`] — the [`GenJson`] handle with per-document tracing
//! - [`config`] / [`error`] — configuration and error types

pub mod accessors;
pub mod codec;
pub mod config;
pub mod document;
pub mod error;
pub mod mutator;
pub mod navigator;
pub mod path;
pub mod scanner;
pub mod value;

pub use config::Config;
pub use document::GenJson;
pub use error::{GenJsonError, Result};
pub use path::{Path, Segment, SegmentKind, WILDCARD};
pub use scanner::ScanMatch;
pub use value::{Map, Value};
