/*
 * json.rs
 * Copyright (c) 2025 Posit, PBC
 */

use std::io::Write;

use pandoc_tree::{Pandoc, TreeError};

/// Serializes a document compactly into a writer.
pub fn write<W: Write>(doc: Pandoc, writer: &mut W) -> Result<(), TreeError> {
    serde_json::to_writer(&mut *writer, &doc.into_value()).map_err(TreeError::Serialize)
}

/// Serializes a document to a compact JSON string.
pub fn write_string(doc: Pandoc) -> Result<String, TreeError> {
    serde_json::to_string(&doc.into_value()).map_err(TreeError::Serialize)
}
