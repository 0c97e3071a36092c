//! Predicate search with wildcard indices.

use genjson::{path, Value, WILDCARD};
use serde_json::json;

fn doc(value: serde_json::Value) -> Value {
    Value::from(value)
}

fn is_ok(node: &Value) -> bool {
    node.get("ok").and_then(Value::as_bool) == Some(true)
}

fn has_id(id: f64) -> impl Fn(&Value) -> bool {
    move |node| node.get("id").and_then(Value::as_f64) == Some(id)
}

// ============================================================================
// 1. Wildcard as last segment
// ============================================================================

#[test]
fn finds_second_item_with_concrete_path() {
    let v = doc(json!({"items": [{"id": 1, "ok": false}, {"id": 2, "ok": true}]}));
    let hit = v.scan_object(is_ok, &path!["items", WILDCARD]).unwrap();
    assert_eq!(hit.path, path!["items", 1]);
    assert_eq!(hit.value, &doc(json!({"id": 2, "ok": true})));
}

#[test]
fn first_match_wins_in_ascending_order() {
    let v = doc(json!({"items": [{"ok": false}, {"ok": true, "n": 1}, {"ok": true, "n": 2}]}));
    let hit = v.scan_object(is_ok, &path!["items", WILDCARD]).unwrap();
    assert_eq!(hit.path, path!["items", 1]);
    assert_eq!(hit.value.get("n"), Some(&Value::Number(1.0)));
}

#[test]
fn no_match_is_none_not_error() {
    let v = doc(json!({"items": [{"ok": false}]}));
    assert!(v.scan_object(is_ok, &path!["items", WILDCARD]).is_none());
}

#[test]
fn empty_array_has_no_match() {
    let v = doc(json!({"items": []}));
    assert!(v.scan_object(|_| false, &path!["items", WILDCARD]).is_none());
}

#[test]
fn root_array_wildcard() {
    let v = doc(json!([{"id": 5}, {"id": 6}]));
    let hit = v.scan_object(has_id(6.0), &path![WILDCARD]).unwrap();
    assert_eq!(hit.path, path![1]);
}

// ============================================================================
// 2. Wildcard followed by more segments
// ============================================================================

#[test]
fn wildcard_then_key_then_wildcard() {
    let v = doc(json!({
        "groups": [
            {"members": [{"id": 1}, {"id": 2}]},
            {"members": [{"id": 3}, {"id": 4}]}
        ]
    }));
    let hit = v
        .scan_object(has_id(4.0), &path!["groups", WILDCARD, "members", WILDCARD])
        .unwrap();
    assert_eq!(hit.path, path!["groups", 1, "members", 1]);
    assert_eq!(hit.value, &doc(json!({"id": 4})));
}

#[test]
fn depth_first_prefers_earlier_outer_element() {
    let v = doc(json!({
        "groups": [
            {"members": [{"id": 9, "tag": "first"}]},
            {"members": [{"id": 9, "tag": "second"}]}
        ]
    }));
    let hit = v
        .scan_object(has_id(9.0), &path!["groups", WILDCARD, "members", WILDCARD])
        .unwrap();
    assert_eq!(hit.path, path!["groups", 0, "members", 0]);
    assert_eq!(hit.value.get("tag").and_then(Value::as_str), Some("first"));
}

#[test]
fn elements_missing_the_key_are_skipped() {
    let v = doc(json!({"rows": [{"other": 1}, "scalar", {"cells": [{"id": 7}]}]}));
    let hit = v
        .scan_object(has_id(7.0), &path!["rows", WILDCARD, "cells", WILDCARD])
        .unwrap();
    assert_eq!(hit.path, path!["rows", 2, "cells", 0]);
}

#[test]
fn wildcard_then_key_matches_parent_of_last_segment() {
    // The predicate runs on each element before the final key is consumed,
    // so the element holding "ok" is the match.
    let v = doc(json!({"items": [{"ok": false}, {"ok": true}]}));
    let hit = v.scan_object(is_ok, &path!["items", WILDCARD, "ok"]).unwrap();
    assert_eq!(hit.path, path!["items", 1]);
}

// ============================================================================
// 3. Concrete segments and misses
// ============================================================================

#[test]
fn predicate_tested_before_final_segment() {
    let v = doc(json!({"a": {"ok": true, "b": 1}}));
    let hit = v.scan_object(is_ok, &path!["a", "b"]).unwrap();
    assert_eq!(hit.path, path!["a"]);
}

#[test]
fn concrete_index_descends() {
    let v = doc(json!({"list": [{"inner": [{"ok": false}, {"ok": true}]}]}));
    let hit = v
        .scan_object(is_ok, &path!["list", 0, "inner", WILDCARD])
        .unwrap();
    assert_eq!(hit.path, path!["list", 0, "inner", 1]);
}

#[test]
fn concrete_final_index_alone_never_matches_element() {
    let v = doc(json!({"items": [{"ok": true}]}));
    assert!(v.scan_object(is_ok, &path!["items", 0]).is_none());
}

#[test]
fn out_of_range_index_is_a_miss() {
    let v = doc(json!({"items": [{"ok": true}]}));
    assert!(v.scan_object(is_ok, &path!["items", 3, WILDCARD]).is_none());
    assert!(v.scan_object(is_ok, &path!["items", -5, WILDCARD]).is_none());
}

#[test]
fn mismatched_segment_kind_is_a_miss() {
    let v = doc(json!({"items": [{"ok": true}]}));
    assert!(v.scan_object(is_ok, &path!["items", "x", WILDCARD]).is_none());
    assert!(v.scan_object(is_ok, &path![0, WILDCARD]).is_none());
}

#[test]
fn missing_key_yields_null_that_matches_nothing() {
    let v = doc(json!({"items": []}));
    assert!(v.scan_object(is_ok, &path!["absent", WILDCARD]).is_none());
}

#[test]
fn predicate_may_accept_null_from_missing_key() {
    let v = doc(json!({"a": {}}));
    let hit = v
        .scan_object(Value::is_null, &path!["a", "missing", "x"])
        .unwrap();
    assert_eq!(hit.path, path!["a", "missing"]);
    assert!(hit.value.is_null());
}

#[test]
fn empty_path_reports_not_found() {
    let v = doc(json!({"ok": true}));
    assert!(v.scan_object(|_| true, &[]).is_none());
}

#[test]
fn scan_does_not_resume_after_exhausted_wildcard() {
    // Nothing under the wildcard matches; the scan must stop there rather
    // than keep walking from the last element it visited.
    let v = doc(json!({"items": [{"sub": {"ok": false}}, {"sub": {"ok": true}}]}));
    let never_top_level = |node: &Value| node.get("sub").is_none() && is_ok(node);
    assert!(v
        .scan_object(never_top_level, &path!["items", WILDCARD, "nothing", "x"])
        .is_none());
}
