//! In-place mutation: [`Value::set`] and [`Value::delete`].
//!
//! Both split the path into "parent" (all but the last segment) and "slot"
//! (the last segment). The parent is resolved mutably and the slot is edited
//! directly inside it, so the root never changes identity and no container
//! has to be rebuilt and written back through its own parent.
//!
//! Neither operation creates missing intermediate containers, and `set`
//! never grows an array. Inserting a new object member is the only way the
//! shape of the tree can grow.

use crate::error::{GenJsonError, Result};
use crate::navigator::{checked_index, mismatch};
use crate::path::{Segment, SegmentKind};
use crate::value::Value;

impl Value {
    /// Install `value` at the slot addressed by `path`.
    ///
    /// - Array parent: the index must be in bounds; the element is replaced.
    /// - Object parent: the key is inserted or overwritten.
    /// - Any other parent, or an empty path: [`GenJsonError::PathDoesNotExist`].
    ///
    /// ```
    /// use genjson::{codec, path};
    ///
    /// let mut doc = codec::decode_str(r#"{"a":{"b":1}}"#).unwrap();
    /// doc.set(99, &path!["a", "b"]).unwrap();
    /// assert_eq!(doc.unwind(&path!["a", "b"]).unwrap().as_f64(), Some(99.0));
    /// ```
    pub fn set(&mut self, value: impl Into<Value>, path: &[Segment]) -> Result<()> {
        let (slot, parent_path) = path.split_last().ok_or(GenJsonError::PathDoesNotExist)?;
        match (self.unwind_mut(parent_path)?, slot) {
            (Value::Array(items), Segment::Index(index)) => {
                let index = checked_index(*index, items.len())?;
                items[index] = value.into();
                Ok(())
            }
            (Value::Object(map), Segment::Key(key)) => {
                map.insert(key.clone(), value.into());
                Ok(())
            }
            (Value::Array(_), Segment::Key(_)) => Err(mismatch(SegmentKind::Index, slot)),
            (Value::Object(_), Segment::Index(_)) => Err(mismatch(SegmentKind::Key, slot)),
            _ => Err(GenJsonError::PathDoesNotExist),
        }
    }

    /// Remove the slot addressed by `path` and return what was there.
    ///
    /// Removing an absent object key succeeds and returns `None`. Removing
    /// an array element shifts every later element down by one, keeping
    /// their relative order; this works for a one-segment path on a root
    /// array as well.
    ///
    /// ```
    /// use genjson::{codec, path};
    ///
    /// let mut doc = codec::decode_str("[1,2,3]").unwrap();
    /// doc.delete(&path![0]).unwrap();
    /// assert_eq!(doc.to_string(), "[2,3]");
    /// ```
    pub fn delete(&mut self, path: &[Segment]) -> Result<Option<Value>> {
        let (slot, parent_path) = path.split_last().ok_or(GenJsonError::PathDoesNotExist)?;
        match (self.unwind_mut(parent_path)?, slot) {
            (Value::Array(items), Segment::Index(index)) => {
                let index = checked_index(*index, items.len())?;
                Ok(Some(items.remove(index)))
            }
            (Value::Object(map), Segment::Key(key)) => Ok(map.remove(key)),
            (Value::Array(_), Segment::Key(_)) => Err(mismatch(SegmentKind::Index, slot)),
            (Value::Object(_), Segment::Index(_)) => Err(mismatch(SegmentKind::Key, slot)),
            _ => Err(GenJsonError::PathDoesNotExist),
        }
    }
}
