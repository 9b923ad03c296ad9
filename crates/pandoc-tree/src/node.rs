/*
 * node.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Typed views over wire-level tagged nodes. Only the kinds a rewrite can
 * produce or take apart get a view; every other kind stays raw JSON.
 */

use serde_json::{Map, Value, json};

use crate::attr::{Attr, attr_from_value, attr_to_value};
use crate::error::TreeError;

/// A tagged node in wire form: object with a string `t` and optional `c`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tagged {
    pub tag: String,
    pub content: Option<Value>,
}

impl Tagged {
    pub fn new(tag: impl Into<String>, content: Value) -> Tagged {
        Tagged {
            tag: tag.into(),
            content: Some(content),
        }
    }

    /// A node with no content, such as `Space` or `HorizontalRule`.
    pub fn nullary(tag: impl Into<String>) -> Tagged {
        Tagged {
            tag: tag.into(),
            content: None,
        }
    }

    pub fn into_value(self) -> Value {
        let mut obj = Map::new();
        obj.insert("t".to_string(), Value::String(self.tag));
        if let Some(content) = self.content {
            obj.insert("c".to_string(), content);
        }
        Value::Object(obj)
    }
}

/// A text run.
#[derive(Debug, Clone, PartialEq)]
pub struct Str {
    pub text: String,
    /// Original fields beyond the contract, kept for reassembly.
    rest: Map<String, Value>,
}

impl Str {
    pub fn new(text: impl Into<String>) -> Str {
        Str {
            text: text.into(),
            rest: Map::new(),
        }
    }

    pub fn from_value(value: Value) -> Result<Str, TreeError> {
        let (content, rest) = split_content(value, "Str")?;
        Ok(Str {
            text: expect_string(content, "Str content")?,
            rest,
        })
    }

    /// Canonical `{t, c}` form, for building replacement nodes. Fields a
    /// parsed node arrived with are not carried over; `into_value` keeps
    /// them.
    pub fn into_tagged(self) -> Tagged {
        Tagged::new("Str", Value::String(self.text))
    }

    pub fn into_value(self) -> Value {
        rebuild(self.rest, "Str", Value::String(self.text))
    }
}

/// A generic block container with attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Div {
    pub attr: Attr,
    pub content: Vec<Value>,
    rest: Map<String, Value>,
}

impl Div {
    pub fn new(attr: Attr, content: Vec<Value>) -> Div {
        Div {
            attr,
            content,
            rest: Map::new(),
        }
    }

    pub fn from_value(value: Value) -> Result<Div, TreeError> {
        let (content, rest) = split_content(value, "Div")?;
        let [attr, blocks]: [Value; 2] = expect_array(content, "Div content")?
            .try_into()
            .map_err(|_| {
                TreeError::InvalidType("Div content must have two elements".to_string())
            })?;
        Ok(Div {
            attr: attr_from_value(attr)?,
            content: expect_array(blocks, "Div blocks")?,
            rest,
        })
    }

    /// Canonical `{t, c}` form, for building replacement nodes. Fields a
    /// parsed node arrived with are not carried over; `into_value` keeps
    /// them.
    pub fn into_tagged(self) -> Tagged {
        Tagged::new("Div", json!([attr_to_value(self.attr), self.content]))
    }

    pub fn into_value(self) -> Value {
        rebuild(
            self.rest,
            "Div",
            json!([attr_to_value(self.attr), self.content]),
        )
    }
}

/// A block of raw text in a specific output format.
#[derive(Debug, Clone, PartialEq)]
pub struct RawBlock {
    pub format: String,
    pub text: String,
}

impl RawBlock {
    pub fn new(format: impl Into<String>, text: impl Into<String>) -> RawBlock {
        RawBlock {
            format: format.into(),
            text: text.into(),
        }
    }

    pub fn from_value(value: Value) -> Result<RawBlock, TreeError> {
        let (format, text) = raw_content(value, "RawBlock")?;
        Ok(RawBlock { format, text })
    }

    pub fn into_tagged(self) -> Tagged {
        Tagged::new("RawBlock", json!([self.format, self.text]))
    }

    pub fn into_value(self) -> Value {
        self.into_tagged().into_value()
    }
}

/// An inline run of raw text in a specific output format.
#[derive(Debug, Clone, PartialEq)]
pub struct RawInline {
    pub format: String,
    pub text: String,
}

impl RawInline {
    pub fn new(format: impl Into<String>, text: impl Into<String>) -> RawInline {
        RawInline {
            format: format.into(),
            text: text.into(),
        }
    }

    pub fn from_value(value: Value) -> Result<RawInline, TreeError> {
        let (format, text) = raw_content(value, "RawInline")?;
        Ok(RawInline { format, text })
    }

    pub fn into_tagged(self) -> Tagged {
        Tagged::new("RawInline", json!([self.format, self.text]))
    }

    pub fn into_value(self) -> Value {
        self.into_tagged().into_value()
    }
}

/// The tag of a wire node, when `value` is one.
pub(crate) fn tag_of(value: &Value) -> Option<&str> {
    value.as_object()?.get("t")?.as_str()
}

/// Takes the `c` field of a tagged node, checking the tag on the way. The
/// returned map still holds every field the node arrived with, the `c`
/// slot hollowed out in place, so reassembly keeps field order.
fn split_content(value: Value, tag: &str) -> Result<(Value, Map<String, Value>), TreeError> {
    let mut obj = expect_object(value, tag)?;
    match obj.get("t").and_then(Value::as_str) {
        Some(found) if found == tag => {}
        Some(found) => {
            return Err(TreeError::InvalidType(format!(
                "expected {tag} node, found {found}"
            )));
        }
        None => return Err(TreeError::MissingField("t".to_string())),
    }
    let content = match obj.get_mut("c") {
        Some(slot) => slot.take(),
        None => return Err(TreeError::MissingField(format!("{tag}.c"))),
    };
    Ok((content, obj))
}

/// Reassembles a node around fresh content: back into the envelope it was
/// parsed from when one was captured, canonical `{t, c}` otherwise.
fn rebuild(mut rest: Map<String, Value>, tag: &str, content: Value) -> Value {
    if rest.is_empty() {
        return Tagged::new(tag, content).into_value();
    }
    if let Some(slot) = rest.get_mut("c") {
        *slot = content;
    }
    Value::Object(rest)
}

fn raw_content(value: Value, tag: &str) -> Result<(String, String), TreeError> {
    let (content, _) = split_content(value, tag)?;
    let [format, text]: [Value; 2] = expect_array(content, tag)?.try_into().map_err(|_| {
        TreeError::InvalidType(format!("{tag} content must have two elements"))
    })?;
    Ok((
        expect_string(format, "raw format")?,
        expect_string(text, "raw text")?,
    ))
}

pub(crate) fn expect_object(value: Value, what: &str) -> Result<Map<String, Value>, TreeError> {
    match value {
        Value::Object(obj) => Ok(obj),
        _ => Err(TreeError::InvalidType(format!("{what} must be an object"))),
    }
}

pub(crate) fn expect_array(value: Value, what: &str) -> Result<Vec<Value>, TreeError> {
    match value {
        Value::Array(items) => Ok(items),
        _ => Err(TreeError::InvalidType(format!("{what} must be an array"))),
    }
}

pub(crate) fn expect_string(value: Value, what: &str) -> Result<String, TreeError> {
    match value {
        Value::String(text) => Ok(text),
        _ => Err(TreeError::InvalidType(format!("{what} must be a string"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn str_round_trips() {
        let node = Str::from_value(json!({"t": "Str", "c": "hello"})).unwrap();
        assert_eq!(node.text, "hello");
        assert_eq!(node.into_value(), json!({"t": "Str", "c": "hello"}));
    }

    #[test]
    fn div_round_trips() {
        let wire = json!({
            "t": "Div",
            "c": [
                ["box", ["note"], [["width", "50%"]]],
                [{"t": "Para", "c": [{"t": "Str", "c": "hi"}]}]
            ]
        });
        let div = Div::from_value(wire.clone()).unwrap();
        assert_eq!(div.attr.0, "box");
        assert_eq!(div.attr.1, vec!["note"]);
        assert_eq!(div.content.len(), 1);
        assert_eq!(div.into_value(), wire);
    }

    #[test]
    fn nullary_nodes_have_no_content_field() {
        assert_eq!(Tagged::nullary("Space").into_value(), json!({"t": "Space"}));
    }

    #[test]
    fn wrong_tag_is_rejected() {
        let err = Str::from_value(json!({"t": "Space"})).unwrap_err();
        assert!(matches!(err, TreeError::InvalidType(_)));
    }

    #[test]
    fn malformed_content_is_rejected() {
        assert!(Str::from_value(json!({"t": "Str", "c": 3})).is_err());
        assert!(Div::from_value(json!({"t": "Div", "c": [[], []]})).is_err());
        assert!(Div::from_value(json!({"t": "Div", "c": ["attr"]})).is_err());
        assert!(RawBlock::from_value(json!({"t": "RawBlock", "c": ["latex"]})).is_err());
        assert!(Str::from_value(json!({"t": "Str"})).is_err());
    }

    #[test]
    fn extra_fields_round_trip_through_views() {
        let wire = json!({"t": "Str", "c": "hello", "s": 7});
        assert_eq!(Str::from_value(wire.clone()).unwrap().into_value(), wire);

        // Field order survives too, even with the extra ahead of `c`.
        let wire = json!({"t": "Div", "s": [0, 4], "c": [["", ["note"], []], []]});
        let round = Div::from_value(wire.clone()).unwrap().into_value();
        assert_eq!(
            serde_json::to_string(&round).unwrap(),
            serde_json::to_string(&wire).unwrap()
        );
    }

    #[test]
    fn into_tagged_is_canonical() {
        let wire = json!({"t": "Str", "c": "hello", "s": 7});
        let tagged = Str::from_value(wire).unwrap().into_tagged();
        assert_eq!(tagged.into_value(), json!({"t": "Str", "c": "hello"}));
    }
}
