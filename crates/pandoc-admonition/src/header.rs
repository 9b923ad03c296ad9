/*
 * header.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Per-format header material: the LaTeX preamble and the HTML stylesheet
 * that make the rewritten markup render on its own.
 */

use serde_json::Value;

use pandoc_tree::{RawBlock, meta_blocks};

use crate::errors::{FilterError, Result};
use crate::filters::Format;
use crate::icons;
use crate::styles::{IconSource, IconStyle, StyleRegistry};

/// Header material for the target format, as a meta value ready to merge
/// into `header-includes`. Formats without dedicated markup get none.
pub fn payload(format: Format, registry: &StyleRegistry) -> Result<Option<Value>> {
    let block = match format {
        Format::Latex => RawBlock::new("latex", latex_header(registry)),
        Format::Html => RawBlock::new("html", html_header(registry)?),
        Format::Other => return Ok(None),
    };
    Ok(Some(meta_blocks(vec![block.into_value()])))
}

/// `awesomebox` setup plus one color and one box macro per admonition type.
fn latex_header(registry: &StyleRegistry) -> String {
    let mut tex =
        String::from("%% pandoc-admonition: required package\n\\usepackage{awesomebox}\n");
    for (name, style) in registry.iter() {
        tex.push_str(&format!(
            "\\definecolor{{{name}color}}{{RGB}}{{{}}}\n",
            style.color.to_latex()
        ));
        tex.push_str(&format!("\\newcommand{{\\admon{name}box}}[1]{{%\n"));
        tex.push_str(&format!(
            "    \\awesomebox{{2pt}}{{\\{}}}{{{name}color}}{{#1}}\n",
            icons::fa_macro_name(&style.icon)
        ));
        tex.push_str("}\n");
    }
    tex
}

/// Icon font link plus the stylesheet: generic icon-span classes, the box
/// frame, and one `:before` rule per admonition type.
fn html_header(registry: &StyleRegistry) -> Result<String> {
    let mut html = String::from(
        "<link rel=\"stylesheet\" href=\"https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.2.0/css/all.css\">\n<style>\n",
    );

    for source in [IconSource::Free, IconSource::Brands] {
        for style in [IconStyle::Regular, IconStyle::Solid] {
            html.push_str(&format!(
                ".awesome_{}_{}_icon {{\n    font-family: '{}';\n    font-size: xx-large;\n    font-weight: {};\n}}\n",
                source.as_str(),
                style.as_str(),
                source.font_family(),
                style.font_weight()
            ));
        }
    }

    html.push_str(BOX_FRAME_RULES);

    for (name, style) in registry.iter() {
        let codepoint = icons::lookup(&style.icon)
            .ok_or_else(|| FilterError::UnknownIcon(style.icon.clone()))?;
        html.push_str(&format!(
            ".admonition-box-{name}:before {{\n    font: var(--fa-font-{});\n    color: {};\n    content: '\\{:x}';\n}}\n",
            style.style.as_str(),
            style.color.to_css(),
            codepoint as u32
        ));
    }

    html.push_str("</style>");
    Ok(html)
}

const BOX_FRAME_RULES: &str = "\
.admonition-box {
    padding-left: 0.5em;
    margin-left: 12%;
    border-style: solid;
    border-width: 0 0 0 2pt;
    position: relative;
}
.admonition-box:before {
    font-size: xx-large !important;
    position: absolute;
    left: -12%;
}
";
