//! Pointer-path navigation and copy-on-write updates.
//!
//! A pointer is a `/`-delimited address such as `/accesses/2/users`. Each
//! segment is matched literally against object keys, or parsed as a base-10
//! index when the current node is an array. The empty path addresses the root.
//!
//! [`find_pointer`] is a pure read. [`set_at_pointer`] never touches its input:
//! it rebuilds the chain of containers from the root down to the addressed
//! location and copies every sibling it passes unchanged, so the caller gets
//! either a complete new tree or nothing.
//!
//! # Example
//! ```
//! use dict_core::{array, find_pointer, object, set_at_pointer, Value};
//!
//! let doc = Value::from(object! { "tags" => array!["aaa", "bbb", "ccc"] });
//!
//! assert_eq!(find_pointer(&doc, "/tags/1"), Some(&Value::from("bbb")));
//!
//! let updated = set_at_pointer(&doc, "/tags/1", Value::from("111")).unwrap();
//! assert_eq!(updated.pointer("/tags"), Some(&array!["aaa", "111", "ccc"]));
//! assert_eq!(doc.pointer("/tags/1"), Some(&Value::from("bbb")));
//! ```

use crate::error::{DictError, Result};
use crate::value::{Object, Value};

/// Resolve `path` inside `root`, returning `None` if any step fails.
///
/// The failure reason is logged; use [`try_find_pointer`] to receive it.
pub fn find_pointer<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    try_find_pointer(root, path)
        .map_err(|err| log::error!("find_pointer {path}: {err}"))
        .ok()
}

/// Resolve `path` inside `root`.
///
/// # Errors
///
/// Fails with [`DictError::NotNavigable`] when a segment remains but the
/// current node is a leaf, [`DictError::KeyNotFound`] for a missing member,
/// [`DictError::InvalidIndex`] / [`DictError::IndexOutOfRange`] for a bad
/// array segment, and a path syntax error when a non-empty path does not
/// start with `/`.
pub fn try_find_pointer<'a>(root: &'a Value, path: &str) -> Result<&'a Value> {
    let mut current = root;
    let mut remaining = path;

    while !remaining.is_empty() {
        let (child, rest) = match current {
            Value::Object(object) => {
                let (key, rest) = split_pointer(remaining)?;
                let child = object
                    .get(key)
                    .ok_or_else(|| DictError::KeyNotFound(key.to_string()))?;
                (child, rest)
            }
            Value::Array(items) => {
                let (segment, rest) = split_pointer(remaining)?;
                let index = parse_index(segment, items.len())?;
                (&items[index], rest)
            }
            _ => return Err(DictError::NotNavigable),
        };
        current = child;
        remaining = rest;
    }

    Ok(current)
}

/// Produce a copy of `root` with the location at `path` replaced.
///
/// Returns `None`, leaving nothing half-updated, if any step fails. The
/// failure reason is logged; use [`try_set_at_pointer`] to receive it.
pub fn set_at_pointer(root: &Value, path: &str, replacement: Value) -> Option<Value> {
    try_set_at_pointer(root, path, replacement)
        .map_err(|err| log::error!("set_at_pointer {path}: {err}"))
        .ok()
}

/// Produce a copy of `root` with the location at `path` replaced.
///
/// The empty path replaces the whole document rather than failing with
/// [`DictError::EmptyPath`]. On an object, the last
/// segment may name a key that does not exist yet; it is appended. Every
/// intermediate segment must resolve, exactly as for [`try_find_pointer`].
///
/// # Errors
///
/// Same as [`try_find_pointer`], reported for the first step that fails.
pub fn try_set_at_pointer(root: &Value, path: &str, replacement: Value) -> Result<Value> {
    if path.is_empty() {
        return Ok(replacement);
    }
    set_in(root, path, replacement)
}

fn set_in(node: &Value, path: &str, replacement: Value) -> Result<Value> {
    match node {
        Value::Object(object) => set_in_object(object, path, replacement).map(Value::Object),
        Value::Array(items) => set_in_array(items, path, replacement).map(Value::Array),
        _ => Err(DictError::NotNavigable),
    }
}

fn set_in_object(object: &Object, path: &str, replacement: Value) -> Result<Object> {
    let (key, rest) = split_pointer(path)?;

    let child = if rest.is_empty() {
        replacement
    } else {
        let existing = object
            .get(key)
            .ok_or_else(|| DictError::KeyNotFound(key.to_string()))?;
        set_in(existing, rest, replacement)?
    };

    let mut updated = Object::with_capacity(object.len() + 1);
    let mut child = Some(child);
    for (k, v) in object {
        let value = if k == key { child.take() } else { None };
        updated.push_unique(k.to_string(), value.unwrap_or_else(|| v.clone()));
    }
    if let Some(child) = child {
        updated.push_unique(key.to_string(), child);
    }
    Ok(updated)
}

fn set_in_array(items: &[Value], path: &str, replacement: Value) -> Result<Vec<Value>> {
    let (segment, rest) = split_pointer(path)?;
    let index = parse_index(segment, items.len())?;

    let child = if rest.is_empty() {
        replacement
    } else {
        set_in(&items[index], rest, replacement)?
    };

    let mut updated = Vec::with_capacity(items.len());
    updated.extend_from_slice(&items[..index]);
    updated.push(child);
    updated.extend_from_slice(&items[index + 1..]);
    Ok(updated)
}

/// Split the leading `/<segment>` off `path`, returning the segment and the
/// remainder (which keeps its own leading `/`, or is empty).
pub(crate) fn split_pointer(path: &str) -> Result<(&str, &str)> {
    let rest = match path.strip_prefix('/') {
        Some(rest) => rest,
        None if path.is_empty() => return Err(DictError::EmptyPath),
        None => return Err(DictError::MissingLeadingSlash(path.to_string())),
    };

    Ok(match rest.find('/') {
        Some(slash) => rest.split_at(slash),
        None => (rest, ""),
    })
}

/// Parse an array segment and bounds-check it against `len`.
fn parse_index(segment: &str, len: usize) -> Result<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DictError::InvalidIndex(segment.to_string()));
    }
    let index: usize = segment
        .parse()
        .map_err(|_| DictError::InvalidIndex(segment.to_string()))?;
    if index >= len {
        return Err(DictError::IndexOutOfRange { index, len });
    }
    Ok(index)
}

impl Value {
    /// Method form of [`find_pointer`].
    pub fn pointer(&self, path: &str) -> Option<&Value> {
        find_pointer(self, path)
    }

    /// Method form of [`set_at_pointer`].
    pub fn with_pointer(&self, path: &str, replacement: Value) -> Option<Value> {
        set_at_pointer(self, path, replacement)
    }
}
