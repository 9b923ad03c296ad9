/*
 * styles.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * The style registry: which admonition types exist and how each renders.
 * The registry is built once at startup and passed by reference into the
 * rewrite; nothing here is global.
 */

use hashlink::LinkedHashMap;

/// Accent color as a packed 24-bit RGB value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u32);

impl Rgb {
    fn components(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        )
    }

    /// CSS color function form, e.g. `rgb(210,58,69)`.
    pub fn to_css(self) -> String {
        let (r, g, b) = self.components();
        format!("rgb({r},{g},{b})")
    }

    /// Bare decimal triplet for `\definecolor{...}{RGB}{...}`.
    pub fn to_latex(self) -> String {
        let (r, g, b) = self.components();
        format!("{r},{g},{b}")
    }
}

/// Icon collection a glyph is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSource {
    Free,
    Brands,
}

impl IconSource {
    pub fn as_str(self) -> &'static str {
        match self {
            IconSource::Free => "free",
            IconSource::Brands => "brands",
        }
    }

    pub fn font_family(self) -> &'static str {
        match self {
            IconSource::Free => "Font Awesome 5 Free",
            IconSource::Brands => "Font Awesome 5 Brands",
        }
    }
}

/// Weight class of a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconStyle {
    Regular,
    Solid,
}

impl IconStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            IconStyle::Regular => "regular",
            IconStyle::Solid => "solid",
        }
    }

    pub fn font_weight(self) -> u32 {
        match self {
            IconStyle::Regular => 400,
            IconStyle::Solid => 900,
        }
    }
}

/// How one admonition type renders.
#[derive(Debug, Clone, PartialEq)]
pub struct AdmonitionStyle {
    pub color: Rgb,
    pub icon: String,
    pub source: IconSource,
    pub style: IconStyle,
}

impl AdmonitionStyle {
    pub fn new(
        color: Rgb,
        icon: impl Into<String>,
        source: IconSource,
        style: IconStyle,
    ) -> AdmonitionStyle {
        AdmonitionStyle {
            color,
            icon: icon.into(),
            source,
            style,
        }
    }

    /// Class of the span a sentinel icon renders into.
    pub fn icon_class(&self) -> String {
        format!(
            "awesome_{}_{}_icon",
            self.source.as_str(),
            self.style.as_str()
        )
    }
}

/// Admonition type name to style, in registration order. Container matching
/// scans entries in that order and the first match wins.
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    styles: LinkedHashMap<String, AdmonitionStyle>,
}

impl StyleRegistry {
    pub fn new() -> StyleRegistry {
        StyleRegistry {
            styles: LinkedHashMap::new(),
        }
    }

    /// The default admonition set.
    pub fn builtin() -> StyleRegistry {
        let mut registry = StyleRegistry::new();
        registry.insert(
            "note",
            AdmonitionStyle::new(
                Rgb(0xd23a45),
                "hand-point-right",
                IconSource::Free,
                IconStyle::Regular,
            ),
        );
        registry.insert(
            "tip",
            AdmonitionStyle::new(
                Rgb(0xf5bb2c),
                "lightbulb",
                IconSource::Free,
                IconStyle::Regular,
            ),
        );
        registry.insert(
            "video",
            AdmonitionStyle::new(Rgb(0x11ac11), "film", IconSource::Free, IconStyle::Solid),
        );
        registry.insert(
            "exercise",
            AdmonitionStyle::new(
                Rgb(0xf37726),
                "book-open",
                IconSource::Free,
                IconStyle::Solid,
            ),
        );
        registry.insert(
            "python",
            AdmonitionStyle::new(
                Rgb(0x4482b4),
                "python",
                IconSource::Brands,
                IconStyle::Solid,
            ),
        );
        registry
    }

    pub fn insert(&mut self, name: impl Into<String>, style: AdmonitionStyle) {
        self.styles.insert(name.into(), style);
    }

    pub fn get(&self, name: &str) -> Option<&AdmonitionStyle> {
        self.styles.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AdmonitionStyle)> {
        self.styles.iter()
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        StyleRegistry::new()
    }
}
