//! Predicate search with wildcard array segments.
//!
//! [`Value::scan_object`] walks a path whose index segments may be
//! [`WILDCARD`](crate::WILDCARD). The predicate sees raw nodes and decides
//! what counts as a match:
//!
//! - Before the **last** segment is consumed, the predicate is tried on the
//!   current node (its parent, in path terms). A hit ends the search with
//!   the path walked so far.
//! - A wildcard as the last segment tries the predicate on every element.
//! - A wildcard with segments after it scans the rest of the path inside
//!   every element.
//! - Concrete indices and keys just descend; an absent key descends into
//!   `null`, which matches nothing further down.
//!
//! Elements are tried in ascending order, depth first, and the first match
//! wins. A mismatched segment kind, an out-of-range index or a scalar under
//! a remaining segment is a plain miss: scanning never returns an error.

use crate::path::{Path, Segment};
use crate::value::{Value, NULL};

/// A node accepted by the predicate, with the wildcard-free path that leads to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanMatch<'a> {
    pub value: &'a Value,
    pub path: Path,
}

impl Value {
    /// Find the first node reachable through `path` that satisfies `predicate`.
    ///
    /// ```
    /// use genjson::{codec, path, WILDCARD};
    ///
    /// let doc = codec::decode_str(
    ///     r#"{"items":[{"id":1,"ok":false},{"id":2,"ok":true}]}"#,
    /// ).unwrap();
    /// let hit = doc
    ///     .scan_object(|node| node.get("ok").and_then(|v| v.as_bool()) == Some(true),
    ///                  &path!["items", WILDCARD])
    ///     .unwrap();
    /// assert_eq!(hit.path, path!["items", 1]);
    /// assert_eq!(hit.value.get("id").and_then(|v| v.as_f64()), Some(2.0));
    /// ```
    pub fn scan_object<P>(&self, predicate: P, path: &[Segment]) -> Option<ScanMatch<'_>>
    where
        P: Fn(&Value) -> bool,
    {
        scan(self, &predicate, path)
    }
}

fn scan<'a, P>(root: &'a Value, predicate: &P, path: &[Segment]) -> Option<ScanMatch<'a>>
where
    P: Fn(&Value) -> bool,
{
    let mut node = root;
    let mut walked = Path::new();

    for (position, segment) in path.iter().enumerate() {
        let is_last = position + 1 == path.len();
        if is_last && predicate(node) {
            return Some(ScanMatch { value: node, path: walked });
        }

        match (node, segment) {
            (Value::Array(items), segment) if segment.is_wildcard() => {
                let rest = &path[position + 1..];
                return items.iter().enumerate().find_map(|(index, item)| {
                    let found = if is_last {
                        predicate(item).then(|| ScanMatch {
                            value: item,
                            path: Path::new(),
                        })
                    } else {
                        scan(item, predicate, rest)
                    }?;
                    let mut path = walked.clone();
                    path.push(index);
                    path.extend(found.path);
                    Some(ScanMatch {
                        value: found.value,
                        path,
                    })
                });
            }
            (Value::Array(items), Segment::Index(index)) => {
                node = usize::try_from(*index).ok().and_then(|i| items.get(i))?;
            }
            (Value::Object(map), Segment::Key(key)) => {
                node = map.get(key).unwrap_or(&NULL);
            }
            _ => return None,
        }
        walked.push(segment.clone());
    }

    None
}
