/*
 * json.rs
 * Copyright (c) 2025 Posit, PBC
 */

use std::io::Read;

use pandoc_tree::{Pandoc, TreeError};
use serde_json::Value;

/// Reads a document from a JSON stream.
pub fn read<R: Read>(reader: &mut R) -> Result<Pandoc, TreeError> {
    let mut buffer = String::new();
    reader
        .read_to_string(&mut buffer)
        .map_err(|e| TreeError::InvalidJson(serde_json::Error::io(e)))?;
    read_str(&buffer)
}

/// Reads a document from JSON text.
pub fn read_str(input: &str) -> Result<Pandoc, TreeError> {
    let json: Value = serde_json::from_str(input)?;
    read_pandoc(json)
}

fn read_pandoc(value: Value) -> Result<Pandoc, TreeError> {
    let mut obj = match value {
        Value::Object(obj) => obj,
        // Covers the pre-1.18 two-element-array form as well; only the
        // object document shape is supported.
        _ => {
            return Err(TreeError::InvalidType(
                "document root must be an object".to_string(),
            ));
        }
    };

    let api_version = match obj.remove("pandoc-api-version") {
        None => None,
        Some(value) => Some(read_api_version(value)?),
    };

    let meta = match obj.remove("meta") {
        Some(Value::Object(meta)) => meta,
        Some(_) => return Err(TreeError::InvalidType("meta must be an object".to_string())),
        None => return Err(TreeError::MissingField("meta".to_string())),
    };

    let blocks = match obj.remove("blocks") {
        Some(Value::Array(blocks)) => blocks,
        Some(_) => {
            return Err(TreeError::InvalidType(
                "blocks must be an array".to_string(),
            ));
        }
        None => return Err(TreeError::MissingField("blocks".to_string())),
    };

    Ok(Pandoc {
        api_version,
        meta,
        blocks,
        extra: obj,
    })
}

fn read_api_version(value: Value) -> Result<Vec<u64>, TreeError> {
    let items = match value {
        Value::Array(items) => items,
        _ => {
            return Err(TreeError::InvalidType(
                "pandoc-api-version must be an array".to_string(),
            ));
        }
    };
    items
        .into_iter()
        .map(|item| {
            item.as_u64().ok_or_else(|| {
                TreeError::InvalidType("pandoc-api-version must contain integers".to_string())
            })
        })
        .collect()
}
