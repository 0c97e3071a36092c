//! Path resolution.
//!
//! [`Value::unwind`] folds a path over the tree one segment at a time:
//!
//! 1. **Array + index**: the index must lie in `[0, len)`, otherwise
//!    [`GenJsonError::IndexOutOfBounds`].
//! 2. **Object + key**: total lookup. An absent key resolves to `null`, so
//!    failure only happens if a later segment tries to descend into it.
//! 3. **Kind mismatch** (array + key, object + index):
//!    [`GenJsonError::InvalidPathSegment`].
//! 4. **Anything else** under a remaining segment:
//!    [`GenJsonError::PathDoesNotExist`].
//!
//! The variant of the final value is never checked here; that is the job of
//! the typed accessors.

use crate::error::{GenJsonError, Result};
use crate::path::{Segment, SegmentKind};
use crate::value::{Value, NULL};

impl Value {
    /// Resolve `path` to a reference into this tree. The empty path is the
    /// identity.
    ///
    /// ```
    /// use genjson::{codec, path, GenJsonError};
    ///
    /// let doc = codec::decode_str(r#"{"a":[1,2,3]}"#).unwrap();
    /// assert_eq!(doc.unwind(&path!["a", 1]).unwrap().as_f64(), Some(2.0));
    /// assert!(doc.unwind(&path!["missing"]).unwrap().is_null());
    /// assert!(matches!(
    ///     doc.unwind(&path!["a", 5]),
    ///     Err(GenJsonError::IndexOutOfBounds { index: 5, len: 3 })
    /// ));
    /// ```
    pub fn unwind(&self, path: &[Segment]) -> Result<&Value> {
        path.iter().try_fold(self, |node, segment| node.child(segment))
    }

    /// Mutable counterpart of [`unwind`](Value::unwind), used to reach the
    /// container a mutation applies to.
    ///
    /// An absent object key cannot be borrowed mutably, so it fails with
    /// [`GenJsonError::PathDoesNotExist`] straight away. That is the same
    /// error the read path reports once it tries to go through the `null`.
    pub fn unwind_mut(&mut self, path: &[Segment]) -> Result<&mut Value> {
        path.iter().try_fold(self, |node, segment| node.child_mut(segment))
    }

    fn child(&self, segment: &Segment) -> Result<&Value> {
        match (self, segment) {
            (Value::Array(items), Segment::Index(index)) => {
                Ok(&items[checked_index(*index, items.len())?])
            }
            (Value::Object(map), Segment::Key(key)) => Ok(map.get(key).unwrap_or(&NULL)),
            (Value::Array(_), Segment::Key(_)) => Err(mismatch(SegmentKind::Index, segment)),
            (Value::Object(_), Segment::Index(_)) => Err(mismatch(SegmentKind::Key, segment)),
            _ => Err(GenJsonError::PathDoesNotExist),
        }
    }

    fn child_mut(&mut self, segment: &Segment) -> Result<&mut Value> {
        match (self, segment) {
            (Value::Array(items), Segment::Index(index)) => {
                let index = checked_index(*index, items.len())?;
                Ok(&mut items[index])
            }
            (Value::Object(map), Segment::Key(key)) => {
                map.get_mut(key).ok_or(GenJsonError::PathDoesNotExist)
            }
            (Value::Array(_), Segment::Key(_)) => Err(mismatch(SegmentKind::Index, segment)),
            (Value::Object(_), Segment::Index(_)) => Err(mismatch(SegmentKind::Key, segment)),
            _ => Err(GenJsonError::PathDoesNotExist),
        }
    }
}

/// Convert a signed segment index into a position inside an array of `len`.
pub(crate) fn checked_index(index: i64, len: usize) -> Result<usize> {
    usize::try_from(index)
        .ok()
        .filter(|&i| i < len)
        .ok_or(GenJsonError::IndexOutOfBounds { index, len })
}

pub(crate) fn mismatch(expected: SegmentKind, found: &Segment) -> GenJsonError {
    GenJsonError::InvalidPathSegment {
        expected,
        found: found.clone(),
    }
}
