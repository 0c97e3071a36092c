//! Path segments and paths.
//!
//! A [`Path`] is an ordered sequence of [`Segment`]s applied left to right.
//! Arrays are addressed by [`Segment::Index`], objects by [`Segment::Key`].
//! The index [`WILDCARD`] (`-1`) means "any element" and is only honored by
//! [`Value::scan_object`](crate::Value::scan_object); everywhere else it is
//! simply out of bounds.
//!
//! # Example
//! ```
//! use genjson::{path, Path, Segment};
//!
//! let p = path!["items", 0, "id"];
//! assert_eq!(p.len(), 3);
//! assert_eq!(p[1], Segment::Index(0));
//! assert_eq!(Path::parse("items.0.id").unwrap(), p);
//! ```

use crate::error::{GenJsonError, Result};
use crate::value::Value;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// Index that matches every element of an array during a scan.
pub const WILDCARD: i64 = -1;

/// One step of a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Object member name.
    Key(String),
    /// Array position. Negative values never address an element.
    Index(i64),
}

/// The kind of segment a container expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Key,
    Index,
}

impl Segment {
    /// The "any element" segment.
    pub const ANY: Segment = Segment::Index(WILDCARD);

    pub fn kind(&self) -> SegmentKind {
        match self {
            Segment::Key(_) => SegmentKind::Key,
            Segment::Index(_) => SegmentKind::Index,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Segment::Index(WILDCARD))
    }

    pub fn as_key(&self) -> Option<&str> {
        match self {
            Segment::Key(key) => Some(key),
            Segment::Index(_) => None,
        }
    }

    pub fn as_index(&self) -> Option<i64> {
        match self {
            Segment::Index(index) => Some(*index),
            Segment::Key(_) => None,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => write!(f, "{key:?}"),
            Segment::Index(index) => write!(f, "{index}"),
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentKind::Key => f.write_str("string key"),
            SegmentKind::Index => f.write_str("integer index"),
        }
    }
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Segment::Key(key.to_string())
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Self {
        Segment::Key(key)
    }
}

impl From<&String> for Segment {
    fn from(key: &String) -> Self {
        Segment::Key(key.clone())
    }
}

macro_rules! index_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Segment {
                fn from(index: $ty) -> Self {
                    Segment::Index(index as i64)
                }
            }
        )*
    };
}

index_from!(i8, i16, i32, i64, u8, u16, u32);

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Segment::Index(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

/// An owned sequence of segments.
///
/// Dereferences to `[Segment]`, so `&path` can be passed wherever the
/// navigation API takes `&[Segment]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<Segment>);

impl Path {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, segment: impl Into<Segment>) {
        self.0.push(segment.into());
    }

    pub fn into_vec(self) -> Vec<Segment> {
        self.0
    }

    /// Parse a textual path.
    ///
    /// Two forms are accepted:
    ///
    /// - dotted: `items.-1.ok`. Every token that parses as an integer
    ///   becomes an index, everything else a key. The empty string is the
    ///   empty path.
    /// - JSON array: `["items", -1, "ok"]`. Strings become keys and
    ///   integral numbers become indices, which allows keys that look like
    ///   numbers.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.starts_with('[') {
            return Self::parse_json(trimmed);
        }
        if trimmed.is_empty() {
            return Ok(Self::new());
        }
        trimmed
            .split('.')
            .map(|token| {
                if token.is_empty() {
                    return Err(GenJsonError::InvalidPath(format!(
                        "empty segment in `{text}`"
                    )));
                }
                Ok(match token.parse::<i64>() {
                    Ok(index) => Segment::Index(index),
                    Err(_) => Segment::Key(token.to_string()),
                })
            })
            .collect()
    }

    fn parse_json(text: &str) -> Result<Self> {
        let value = crate::codec::decode_str(text)?;
        let Value::Array(items) = value else {
            return Err(GenJsonError::InvalidPath(format!(
                "`{text}` is not a JSON array"
            )));
        };
        items
            .into_iter()
            .map(|item| match item {
                Value::String(key) => Ok(Segment::Key(key)),
                Value::Number(n) if n.fract() == 0.0 && n.is_finite() => {
                    Ok(Segment::Index(n as i64))
                }
                other => Err(GenJsonError::InvalidPath(format!(
                    "segment {other} is neither a string nor an integer"
                ))),
            })
            .collect()
    }
}

impl Deref for Path {
    type Target = [Segment];

    fn deref(&self) -> &[Segment] {
        &self.0
    }
}

impl AsRef<[Segment]> for Path {
    fn as_ref(&self) -> &[Segment] {
        &self.0
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Self(segments)
    }
}

impl From<&[Segment]> for Path {
    fn from(segments: &[Segment]) -> Self {
        Self(segments.to_vec())
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Segment> for Path {
    fn extend<I: IntoIterator<Item = Segment>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Path {
    type Item = Segment;
    type IntoIter = std::vec::IntoIter<Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromStr for Path {
    type Err = GenJsonError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Renders as a JSON-like list, e.g. `["items", 1]`.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{segment}")?;
        }
        f.write_str("]")
    }
}

/// Build a [`Path`] from a mix of keys and indices.
///
/// ```
/// use genjson::{path, Segment};
///
/// let p = path!["items", -1];
/// assert_eq!(p[0], Segment::Key("items".into()));
/// assert!(p[1].is_wildcard());
/// assert!(path![].is_empty());
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::Path::new()
    };
    ($($segment:expr),+ $(,)?) => {
        $crate::Path::from(vec![$($crate::Segment::from($segment)),+])
    };
}
