/*
 * meta.rs
 * Copyright (c) 2025 Posit, PBC
 */

use serde_json::{Map, Value, json};

/// Document metadata: top-level key to wire meta value.
pub type Meta = Map<String, Value>;

/// Builds a `MetaBlocks` value from block nodes.
pub fn meta_blocks(blocks: Vec<Value>) -> Value {
    json!({"t": "MetaBlocks", "c": blocks})
}

/// Merges `value` into `meta[key]` without discarding prior content.
///
/// Absent key: the value is stored as-is. Existing `MetaList`: the value is
/// appended to it. Any other existing value is a single value and both end
/// up in a fresh `MetaList`.
pub fn append_meta_value(meta: &mut Meta, key: &str, value: Value) {
    let Some(existing) = meta.get_mut(key) else {
        meta.insert(key.to_string(), value);
        return;
    };

    if let Some(items) = meta_list_items(existing) {
        items.push(value);
        return;
    }

    let old = existing.take();
    *existing = json!({"t": "MetaList", "c": [old, value]});
}

fn meta_list_items(value: &mut Value) -> Option<&mut Vec<Value>> {
    let obj = value.as_object_mut()?;
    if obj.get("t").and_then(Value::as_str) != Some("MetaList") {
        return None;
    }
    match obj.get_mut("c") {
        Some(Value::Array(items)) => Some(items),
        _ => None,
    }
}
