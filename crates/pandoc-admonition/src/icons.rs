/*
 * icons.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Icon catalog: the subset of the Font Awesome 6 Free and Brands
 * collections the built-in styles draw from, plus common alternates for
 * registries built in code.
 */

/// One catalog row: icon name and its codepoint in the icon font.
pub struct IconEntry {
    pub name: &'static str,
    pub codepoint: char,
}

/// Codepoint lookup by icon name.
pub fn lookup(name: &str) -> Option<char> {
    ICONS
        .iter()
        .find(|entry| entry.name == name)
        .map(|entry| entry.codepoint)
}

/// LaTeX macro name of an icon: `fa` plus the capitalized name parts,
/// so `hand-point-right` becomes `faHandPointRight`.
pub fn fa_macro_name(name: &str) -> String {
    let mut out = String::from("fa");
    for part in name.split('-') {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
    }
    out
}

static ICONS: &[IconEntry] = &[
    IconEntry {
        name: "bell",
        codepoint: '\u{f0f3}',
    },
    IconEntry {
        name: "book",
        codepoint: '\u{f02d}',
    },
    IconEntry {
        name: "book-open",
        codepoint: '\u{f518}',
    },
    IconEntry {
        name: "bug",
        codepoint: '\u{f188}',
    },
    IconEntry {
        name: "check",
        codepoint: '\u{f00c}',
    },
    IconEntry {
        name: "circle-info",
        codepoint: '\u{f05a}',
    },
    IconEntry {
        name: "circle-question",
        codepoint: '\u{f059}',
    },
    IconEntry {
        name: "code",
        codepoint: '\u{f121}',
    },
    IconEntry {
        name: "comment",
        codepoint: '\u{f075}',
    },
    IconEntry {
        name: "envelope",
        codepoint: '\u{f0e0}',
    },
    IconEntry {
        name: "eye",
        codepoint: '\u{f06e}',
    },
    IconEntry {
        name: "film",
        codepoint: '\u{f008}',
    },
    IconEntry {
        name: "fire",
        codepoint: '\u{f06d}',
    },
    IconEntry {
        name: "flag",
        codepoint: '\u{f024}',
    },
    IconEntry {
        name: "flask",
        codepoint: '\u{f0c3}',
    },
    IconEntry {
        name: "gear",
        codepoint: '\u{f013}',
    },
    IconEntry {
        name: "github",
        codepoint: '\u{f09b}',
    },
    IconEntry {
        name: "graduation-cap",
        codepoint: '\u{f19d}',
    },
    IconEntry {
        name: "hand-point-right",
        codepoint: '\u{f0a4}',
    },
    IconEntry {
        name: "heart",
        codepoint: '\u{f004}',
    },
    IconEntry {
        name: "java",
        codepoint: '\u{f4e4}',
    },
    IconEntry {
        name: "js",
        codepoint: '\u{f3b8}',
    },
    IconEntry {
        name: "key",
        codepoint: '\u{f084}',
    },
    IconEntry {
        name: "keyboard",
        codepoint: '\u{f11c}',
    },
    IconEntry {
        name: "lightbulb",
        codepoint: '\u{f0eb}',
    },
    IconEntry {
        name: "link",
        codepoint: '\u{f0c1}',
    },
    IconEntry {
        name: "linux",
        codepoint: '\u{f17c}',
    },
    IconEntry {
        name: "lock",
        codepoint: '\u{f023}',
    },
    IconEntry {
        name: "magnifying-glass",
        codepoint: '\u{f002}',
    },
    IconEntry {
        name: "markdown",
        codepoint: '\u{f60f}',
    },
    IconEntry {
        name: "paperclip",
        codepoint: '\u{f0c6}',
    },
    IconEntry {
        name: "pen",
        codepoint: '\u{f304}',
    },
    IconEntry {
        name: "python",
        codepoint: '\u{f3e2}',
    },
    IconEntry {
        name: "r-project",
        codepoint: '\u{f4f7}',
    },
    IconEntry {
        name: "rocket",
        codepoint: '\u{f135}',
    },
    IconEntry {
        name: "rust",
        codepoint: '\u{e07a}',
    },
    IconEntry {
        name: "star",
        codepoint: '\u{f005}',
    },
    IconEntry {
        name: "terminal",
        codepoint: '\u{f120}',
    },
    IconEntry {
        name: "thumbtack",
        codepoint: '\u{f08d}',
    },
    IconEntry {
        name: "triangle-exclamation",
        codepoint: '\u{f071}',
    },
    IconEntry {
        name: "user",
        codepoint: '\u{f007}',
    },
    IconEntry {
        name: "video",
        codepoint: '\u{f03d}',
    },
    IconEntry {
        name: "wrench",
        codepoint: '\u{f0ad}',
    },
    IconEntry {
        name: "xmark",
        codepoint: '\u{f00d}',
    },
];
