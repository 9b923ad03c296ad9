/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Wire-level Pandoc document model and traversal.
 *
 * This crate works directly on the JSON shape pandoc speaks on stdin and
 * stdout: a document object holding a metadata map and a block sequence,
 * where every node is a `{"t": ..., "c": ...}` tagged object. A small set
 * of node kinds is given typed views; everything else passes through a
 * rewrite untouched, so a filter built on top of this crate never has to
 * understand more of the format than it rewrites.
 */

pub mod attr;
pub mod error;
pub mod meta;
pub mod node;
pub mod pandoc;
pub mod walk;

// Re-export commonly used types at the crate root
pub use attr::{Attr, empty_attr, is_empty_attr};
pub use error::TreeError;
pub use meta::{Meta, append_meta_value, meta_blocks};
pub use node::{Div, RawBlock, RawInline, Str, Tagged};
pub use pandoc::Pandoc;
pub use walk::{Filter, FilterReturn, walk, walk_items, walk_map};
