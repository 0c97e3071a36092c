//! Path resolution over decoded documents.

use genjson::{path, GenJsonError, Segment, SegmentKind, Value, WILDCARD};
use serde_json::json;

fn doc(value: serde_json::Value) -> Value {
    Value::from(value)
}

// ============================================================================
// 1. Successful resolution
// ============================================================================

#[test]
fn empty_path_is_identity() {
    let v = doc(json!({"a": 1}));
    assert_eq!(v.unwind(&[]).unwrap(), &v);
}

#[test]
fn resolves_nested_keys_and_indices() {
    let v = doc(json!({"a": [{"b": "x"}, {"b": "y"}]}));
    assert_eq!(v.unwind(&path!["a", 1, "b"]).unwrap().as_str(), Some("y"));
}

#[test]
fn resolves_into_root_array() {
    let v = doc(json!([10, 20, 30]));
    assert_eq!(v.unwind(&path![2]).unwrap().as_f64(), Some(30.0));
}

#[test]
fn final_value_variant_is_not_checked() {
    let v = doc(json!({"a": {"b": [1]}}));
    assert!(v.unwind(&path!["a"]).unwrap().as_object().is_some());
    assert!(v.unwind(&path!["a", "b"]).unwrap().as_array().is_some());
}

// ============================================================================
// 2. Absent keys resolve to null
// ============================================================================

#[test]
fn missing_key_resolves_to_null() {
    let v = doc(json!({"a": 1}));
    assert!(v.unwind(&path!["nope"]).unwrap().is_null());
}

#[test]
fn descending_through_missing_key_fails() {
    let v = doc(json!({"a": 1}));
    assert!(matches!(
        v.unwind(&path!["nope", "deeper"]),
        Err(GenJsonError::PathDoesNotExist)
    ));
}

#[test]
fn descending_through_scalar_fails() {
    let v = doc(json!({"a": "text"}));
    assert!(matches!(
        v.unwind(&path!["a", 0]),
        Err(GenJsonError::PathDoesNotExist)
    ));
}

// ============================================================================
// 3. Bounds and segment kinds
// ============================================================================

#[test]
fn index_past_end_is_out_of_bounds() {
    let v = doc(json!({"a": [1, 2, 3]}));
    match v.unwind(&path!["a", 5]) {
        Err(GenJsonError::IndexOutOfBounds { index, len }) => {
            assert_eq!(index, 5);
            assert_eq!(len, 3);
        }
        other => panic!("expected IndexOutOfBounds, got {other:?}"),
    }
}

#[test]
fn negative_index_is_out_of_bounds() {
    let v = doc(json!([1, 2]));
    assert!(matches!(
        v.unwind(&path![-2]),
        Err(GenJsonError::IndexOutOfBounds { index: -2, .. })
    ));
}

#[test]
fn wildcard_is_out_of_bounds_outside_scan() {
    let v = doc(json!([1, 2]));
    assert!(matches!(
        v.unwind(&path![WILDCARD]),
        Err(GenJsonError::IndexOutOfBounds { index: -1, .. })
    ));
}

#[test]
fn key_on_array_is_invalid_segment() {
    let v = doc(json!([1, 2]));
    match v.unwind(&path!["a"]) {
        Err(GenJsonError::InvalidPathSegment { expected, found }) => {
            assert_eq!(expected, SegmentKind::Index);
            assert_eq!(found, Segment::Key("a".into()));
        }
        other => panic!("expected InvalidPathSegment, got {other:?}"),
    }
}

#[test]
fn index_on_object_is_invalid_segment() {
    let v = doc(json!({"0": true}));
    assert!(matches!(
        v.unwind(&path![0]),
        Err(GenJsonError::InvalidPathSegment {
            expected: SegmentKind::Key,
            ..
        })
    ));
}

#[test]
fn unwind_mut_edits_in_place() {
    let mut v = doc(json!({"a": [1, {"b": 2}]}));
    *v.unwind_mut(&path!["a", 1, "b"]).unwrap() = Value::from("two");
    assert_eq!(v, doc(json!({"a": [1, {"b": "two"}]})));
}

#[test]
fn unwind_mut_does_not_materialize_missing_keys() {
    let mut v = doc(json!({"a": {}}));
    assert!(matches!(
        v.unwind_mut(&path!["a", "b"]),
        Err(GenJsonError::PathDoesNotExist)
    ));
    assert_eq!(v, doc(json!({"a": {}})));
}
