/*
 * errors.rs
 * Copyright (c) 2025 Posit, PBC
 */

use pandoc_tree::TreeError;
use thiserror::Error;

/// Errors the filter can abort with.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("unknown admonition type: {0}")]
    UnknownAdmonition(String),

    #[error("unknown icon: {0}")]
    UnknownIcon(String),

    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FilterError>;
