/*
 * pandoc.rs
 * Copyright (c) 2025 Posit, PBC
 */

use serde_json::{Map, Value};

use crate::meta::Meta;

/// A complete pandoc document.
#[derive(Debug, Clone, PartialEq)]
pub struct Pandoc {
    /// `pandoc-api-version`, when the producer sent one. Never interpreted.
    pub api_version: Option<Vec<u64>>,
    pub meta: Meta,
    pub blocks: Vec<Value>,
    /// Top-level fields beyond the standard three, carried through untouched.
    pub extra: Map<String, Value>,
}

impl Pandoc {
    pub fn into_value(self) -> Value {
        let mut obj = Map::new();
        if let Some(version) = self.api_version {
            obj.insert(
                "pandoc-api-version".to_string(),
                Value::Array(version.into_iter().map(Value::from).collect()),
            );
        }
        obj.insert("meta".to_string(), Value::Object(self.meta));
        obj.insert("blocks".to_string(), Value::Array(self.blocks));
        for (key, value) in self.extra {
            obj.insert(key, value);
        }
        Value::Object(obj)
    }
}
