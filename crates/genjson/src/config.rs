//! Per-document configuration.

use serde::{Deserialize, Serialize};

/// Options carried by a [`GenJson`](crate::GenJson) handle.
///
/// Deserializable so it can live inside a caller's own configuration file:
///
/// ```
/// let config: genjson::Config = serde_json::from_str(r#"{"trace": true}"#).unwrap();
/// assert!(config.trace);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Emit `tracing` debug events (target `genjson`) for every accessor and
    /// path resolution made through the handle.
    pub trace: bool,
}

impl Config {
    /// Configuration with tracing enabled.
    pub fn traced() -> Self {
        Self { trace: true }
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}
