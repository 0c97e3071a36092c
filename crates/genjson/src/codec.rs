//! JSON text in and out of the generic tree, via `serde_json`.
//!
//! The tree's own `Serialize`/`Deserialize` impls do the mapping, so every
//! JSON number decodes to an `f64` and every object to an order-insensitive
//! map. [`clone_value`] is a full encode/decode round trip: the copy shares
//! nothing with its source and carries whatever normalization the codec
//! applies (integral numbers lose any `.0`, non-finite numbers become `null`).

use crate::error::Result;
use crate::value::Value;

/// Decode JSON bytes into a [`Value`].
pub fn decode(bytes: &[u8]) -> Result<Value> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Decode JSON text into a [`Value`].
pub fn decode_str(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}

/// Encode a [`Value`] as compact JSON bytes.
pub fn encode(value: &Value) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(value)?)
}

/// Encode a [`Value`] as compact JSON text.
pub fn encode_string(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Encode a [`Value`] as indented JSON text.
pub fn encode_pretty(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Deep copy through the codec.
///
/// # Examples
///
/// ```
/// use genjson::{codec, Value};
///
/// let original = codec::decode_str(r#"{"a":[1,2]}"#).unwrap();
/// let mut copy = codec::clone_value(&original).unwrap();
/// copy.set(Value::from(9), &genjson::path!["a", 0]).unwrap();
/// assert_eq!(original.to_string(), r#"{"a":[1,2]}"#);
/// ```
pub fn clone_value(value: &Value) -> Result<Value> {
    decode(&encode(value)?)
}
