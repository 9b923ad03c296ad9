/*
 * filters.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * The admonition rewrite: container Divs and text-run sentinels.
 */

use pandoc_tree::{
    Div, Filter, FilterReturn, Pandoc, RawBlock, RawInline, Str, append_meta_value, walk_items,
    walk_map,
};

use crate::errors::{FilterError, Result};
use crate::header;
use crate::icons;
use crate::styles::StyleRegistry;

/// Output formats with dedicated markup. Everything else falls back to
/// class stripping only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Html,
    Latex,
    Other,
}

impl Format {
    /// Maps the format name pandoc passes as the filter's argument.
    pub fn from_name(name: &str) -> Format {
        match name {
            "html" => Format::Html,
            "latex" => Format::Latex,
            _ => Format::Other,
        }
    }
}

/// Rewrites a whole document: header injection for the target format, then
/// both admonition hooks over metadata, blocks, and any extra document
/// fields.
pub fn transform(doc: Pandoc, format: Format, registry: &StyleRegistry) -> Result<Pandoc> {
    let Pandoc {
        api_version,
        mut meta,
        blocks,
        extra,
    } = doc;

    if let Some(payload) = header::payload(format, registry)? {
        append_meta_value(&mut meta, "header-includes", payload);
    }

    let mut filter: Filter<'_, FilterError> = Filter::new()
        .with_div(move |div| rewrite_container(div, format, registry))
        .with_str(move |node| rewrite_sentinel(node, format, registry));

    let meta = walk_map(meta, &mut filter)?;
    let blocks = walk_items(blocks, &mut filter)?;
    let extra = walk_map(extra, &mut filter)?;

    Ok(Pandoc {
        api_version,
        meta,
        blocks,
        extra,
    })
}

/// A Div whose class list names a registered admonition type becomes a
/// callout box. The first registry entry present in the class list wins and
/// that class is removed for every format; an unregistered class is just a
/// class.
fn rewrite_container(
    mut div: Div,
    format: Format,
    registry: &StyleRegistry,
) -> Result<FilterReturn<Div>> {
    let Some(kind) = registry
        .iter()
        .map(|(name, _)| name.as_str())
        .find(|name| div.attr.1.iter().any(|class| class == name))
    else {
        return Ok(FilterReturn::Unchanged(div));
    };

    if let Some(index) = div.attr.1.iter().position(|class| class == kind) {
        div.attr.1.remove(index);
    }

    match format {
        Format::Html => {
            div.attr.1.push("admonition-box".to_string());
            div.attr.1.push(format!("admonition-box-{kind}"));
        }
        Format::Latex => {
            let children = std::mem::take(&mut div.content);
            let mut wrapped = Vec::with_capacity(children.len() + 2);
            wrapped.push(RawBlock::new("latex", format!("\\admon{kind}box{{")).into_value());
            wrapped.extend(children);
            wrapped.push(RawBlock::new("latex", "}").into_value());
            div.content = wrapped;
        }
        Format::Other => {}
    }

    Ok(FilterReturn::Rewritten(vec![div.into_tagged()]))
}

/// A text run `&admon:<type>;` becomes a standalone colored icon: a raw
/// LaTeX `\textcolor` fragment, or a styled span for everything else.
fn rewrite_sentinel(
    node: Str,
    format: Format,
    registry: &StyleRegistry,
) -> Result<FilterReturn<Str>> {
    let Some(kind) = sentinel_kind(&node.text) else {
        return Ok(FilterReturn::Unchanged(node));
    };
    let style = registry
        .get(kind)
        .ok_or_else(|| FilterError::UnknownAdmonition(kind.to_string()))?;

    let fragment = match format {
        Format::Latex => RawInline::new(
            "latex",
            format!(
                "\\textcolor{{{kind}color}}{{\\Huge\\{}}}",
                icons::fa_macro_name(&style.icon)
            ),
        ),
        _ => {
            let codepoint = icons::lookup(&style.icon)
                .ok_or_else(|| FilterError::UnknownIcon(style.icon.clone()))?;
            RawInline::new(
                "html",
                format!(
                    "<span class=\"{}\" style=\"color: {}\">&#x{:x};</span>",
                    style.icon_class(),
                    style.color.to_css(),
                    codepoint as u32
                ),
            )
        }
    };

    Ok(FilterReturn::Rewritten(vec![fragment.into_tagged()]))
}

/// The type name carried by a sentinel text run, if it is one.
fn sentinel_kind(text: &str) -> Option<&str> {
    text.strip_prefix("&admon:")?.strip_suffix(';')
}
