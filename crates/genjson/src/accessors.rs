//! Typed extraction: resolve a path, then check the variant.
//!
//! Each accessor returns `Err` on a navigation failure or a variant
//! mismatch. The zero value a caller wants in that case is their choice
//! (`unwrap_or_default()`, `unwrap_or(f64::NAN)`, ...);
//! [`array_or_empty`](Value::array_or_empty) is the one accessor that
//! swallows the error for call sites where absence is expected.

use crate::error::{GenJsonError, Result};
use crate::path::{Path, Segment};
use crate::value::Value;

impl Value {
    pub fn bool(&self, path: &[Segment]) -> Result<bool> {
        let node = self.unwind(path)?;
        node.as_bool().ok_or_else(|| type_mismatch(path, "a bool", node))
    }

    /// Integral number at `path`.
    ///
    /// Fails with [`GenJsonError::NotAnInteger`] when the number has a
    /// fractional part or does not fit in an `i64`.
    ///
    /// ```
    /// use genjson::{codec, path, GenJsonError};
    ///
    /// let doc = codec::decode_str(r#"{"n":4.0,"x":4.5,"s":"4"}"#).unwrap();
    /// assert_eq!(doc.int(&path!["n"]).unwrap(), 4);
    /// assert!(matches!(doc.int(&path!["x"]), Err(GenJsonError::NotAnInteger { .. })));
    /// assert!(matches!(doc.int(&path!["s"]), Err(GenJsonError::TypeMismatch { .. })));
    /// ```
    pub fn int(&self, path: &[Segment]) -> Result<i64> {
        let node = self.unwind(path)?;
        let n = node
            .as_f64()
            .ok_or_else(|| type_mismatch(path, "an integer", node))?;
        // i64::MAX as f64 rounds up to 2^63, which is already out of range.
        if !node.is_integer() || n < i64::MIN as f64 || n >= i64::MAX as f64 {
            return Err(GenJsonError::NotAnInteger {
                path: Path::from(path),
                value: n,
            });
        }
        Ok(n as i64)
    }

    pub fn float(&self, path: &[Segment]) -> Result<f64> {
        let node = self.unwind(path)?;
        node.as_f64().ok_or_else(|| type_mismatch(path, "a number", node))
    }

    pub fn string(&self, path: &[Segment]) -> Result<&str> {
        let node = self.unwind(path)?;
        node.as_str().ok_or_else(|| type_mismatch(path, "a string", node))
    }

    pub fn array(&self, path: &[Segment]) -> Result<&[Value]> {
        let node = self.unwind(path)?;
        node.as_array().ok_or_else(|| type_mismatch(path, "an array", node))
    }

    /// Like [`array`](Value::array), but any failure yields an empty slice.
    pub fn array_or_empty(&self, path: &[Segment]) -> &[Value] {
        self.array(path).unwrap_or_default()
    }
}

fn type_mismatch(path: &[Segment], expected: &'static str, found: &Value) -> GenJsonError {
    GenJsonError::TypeMismatch {
        path: Path::from(path),
        expected,
        found: found.kind(),
    }
}
