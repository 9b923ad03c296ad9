/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

use thiserror::Error;

/// Errors produced while reading, rewriting, or writing a document tree.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("missing field: {0}")]
    MissingField(String),

    #[error("invalid type: {0}")]
    InvalidType(String),

    #[error("failed to serialize document: {0}")]
    Serialize(serde_json::Error),
}
