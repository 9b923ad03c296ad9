/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Pandoc JSON filter rendering admonition boxes.
 *
 * Documents mark admonitions two ways: a Div carrying an admonition type
 * name in its class list becomes a styled callout box, and a text run of
 * the form `&admon:<type>;` becomes a standalone colored icon. The filter
 * rewrites both and injects the per-format header material (LaTeX preamble
 * or HTML stylesheet) into `header-includes`.
 */

pub mod errors;
pub mod filters;
pub mod header;
pub mod icons;
pub mod readers;
pub mod styles;
pub mod writers;
