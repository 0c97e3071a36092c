//! The [`GenJson`] handle: a root [`Value`] plus its [`Config`].
//!
//! All path operations delegate to the algorithms on [`Value`]; the handle
//! adds per-document diagnostic tracing. When `config.trace` is set, each
//! call emits a `tracing::debug!` event under the `genjson` target with the
//! path, the operation and its outcome.

use crate::codec;
use crate::config::Config;
use crate::error::Result;
use crate::path::Segment;
use crate::scanner::ScanMatch;
use crate::value::Value;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An owned JSON document with path-addressed access.
///
/// # Example
/// ```
/// use genjson::{path, GenJson, WILDCARD};
///
/// let mut doc = GenJson::from_str(r#"{"items":[{"id":1},{"id":2,"ok":true}]}"#).unwrap();
/// assert_eq!(doc.int(&path!["items", 0, "id"]).unwrap(), 1);
///
/// let hit = doc.scan_object(|n| n.get("ok").is_some(), &path!["items", WILDCARD]).unwrap();
/// assert_eq!(hit.path, path!["items", 1]);
///
/// doc.delete(&path!["items", 0]).unwrap();
/// assert_eq!(doc.array(&path!["items"]).unwrap().len(), 1);
/// ```
#[derive(Debug, Default, PartialEq)]
pub struct GenJson {
    root: Value,
    config: Config,
}

impl GenJson {
    pub fn new(root: Value) -> Self {
        Self::with_config(root, Config::default())
    }

    pub fn with_config(root: Value, config: Config) -> Self {
        Self { root, config }
    }

    /// Wrap an already-typed value.
    pub fn from_generic(value: impl Into<Value>) -> Self {
        Self::new(value.into())
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(Self::new(codec::decode(bytes)?))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Result<Self> {
        Ok(Self::new(codec::decode_str(text)?))
    }

    pub fn to_vec(&self) -> Result<Vec<u8>> {
        codec::encode(&self.root)
    }

    pub fn to_string_pretty(&self) -> Result<String> {
        codec::encode_pretty(&self.root)
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Value {
        &mut self.root
    }

    pub fn into_inner(self) -> Value {
        self.root
    }

    pub fn config(&self) -> Config {
        self.config
    }

    pub fn set_trace(&mut self, trace: bool) {
        self.config.trace = trace;
    }

    /// True when the whole document is `null`.
    pub fn is_empty(&self) -> bool {
        self.root.is_null()
    }

    pub fn unwind(&self, path: &[Segment]) -> Result<&Value> {
        let result = self.root.unwind(path);
        self.trace("unwind", path, result.as_ref().map(|v| v.kind()));
        result
    }

    pub fn bool(&self, path: &[Segment]) -> Result<bool> {
        let result = self.root.bool(path);
        self.trace("bool", path, result.as_ref());
        result
    }

    pub fn int(&self, path: &[Segment]) -> Result<i64> {
        let result = self.root.int(path);
        self.trace("int", path, result.as_ref());
        result
    }

    pub fn float(&self, path: &[Segment]) -> Result<f64> {
        let result = self.root.float(path);
        self.trace("float", path, result.as_ref());
        result
    }

    pub fn string(&self, path: &[Segment]) -> Result<&str> {
        let result = self.root.string(path);
        self.trace("string", path, result.as_ref());
        result
    }

    pub fn array(&self, path: &[Segment]) -> Result<&[Value]> {
        let result = self.root.array(path);
        self.trace("array", path, result.as_ref().map(|items| items.len()));
        result
    }

    pub fn array_or_empty(&self, path: &[Segment]) -> &[Value] {
        self.array(path).unwrap_or_default()
    }

    pub fn set(&mut self, value: impl Into<Value>, path: &[Segment]) -> Result<()> {
        let result = self.root.set(value, path);
        self.trace("set", path, result.as_ref());
        result
    }

    pub fn delete(&mut self, path: &[Segment]) -> Result<Option<Value>> {
        let result = self.root.delete(path);
        self.trace("delete", path, result.as_ref().map(|old| old.is_some()));
        result
    }

    pub fn scan_object<P>(&self, predicate: P, path: &[Segment]) -> Option<ScanMatch<'_>>
    where
        P: Fn(&Value) -> bool,
    {
        let found = self.root.scan_object(predicate, path);
        if self.config.trace {
            tracing::debug!(
                target: "genjson",
                path = ?path,
                resolved = ?found.as_ref().map(|m| m.path.to_string()),
                "scan_object"
            );
        }
        found
    }

    /// Deep copy through the codec. The copy keeps this handle's config.
    pub fn clone_tree(&self) -> Result<Self> {
        let root = codec::clone_value(&self.root)?;
        if self.config.trace {
            tracing::debug!(target: "genjson", "clone_tree");
        }
        Ok(Self::with_config(root, self.config))
    }

    fn trace<T: fmt::Debug>(
        &self,
        op: &'static str,
        path: &[Segment],
        outcome: std::result::Result<T, &crate::GenJsonError>,
    ) {
        if !self.config.trace {
            return;
        }
        match outcome {
            Ok(value) => tracing::debug!(
                target: "genjson",
                path = ?path,
                result = ?value,
                "{}",
                op
            ),
            Err(err) => tracing::debug!(
                target: "genjson",
                path = ?path,
                error = %err,
                "{} failed",
                op
            ),
        }
    }
}

impl From<Value> for GenJson {
    fn from(root: Value) -> Self {
        Self::new(root)
    }
}

impl fmt::Display for GenJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}

impl Serialize for GenJson {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.root.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GenJson {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::new)
    }
}
