/*
 * attr.rs
 * Copyright (c) 2025 Posit, PBC
 */

use serde_json::{Value, json};

use crate::error::TreeError;
use crate::node::{expect_array, expect_string};

/// Attributes of a node: identifier, classes, key-value pairs.
///
/// Key-value pairs stay an ordered list of pairs rather than a map: the wire
/// format permits duplicate keys, and a filter must hand back exactly what it
/// was given.
pub type Attr = (String, Vec<String>, Vec<(String, String)>);

pub fn empty_attr() -> Attr {
    (String::new(), vec![], vec![])
}

pub fn is_empty_attr(attr: &Attr) -> bool {
    attr.0.is_empty() && attr.1.is_empty() && attr.2.is_empty()
}

/// Reads the wire form `[identifier, [classes], [[key, value], ...]]`.
pub fn attr_from_value(value: Value) -> Result<Attr, TreeError> {
    let items = expect_array(value, "attr")?;
    let [identifier, classes, attributes]: [Value; 3] = items
        .try_into()
        .map_err(|_| TreeError::InvalidType("attr must have three elements".to_string()))?;

    let identifier = expect_string(identifier, "attr identifier")?;

    let mut class_list = Vec::new();
    for class in expect_array(classes, "attr classes")? {
        class_list.push(expect_string(class, "attr class")?);
    }

    let mut kvs = Vec::new();
    for pair in expect_array(attributes, "attr key-values")? {
        let [key, value]: [Value; 2] = expect_array(pair, "attr key-value pair")?
            .try_into()
            .map_err(|_| {
                TreeError::InvalidType("attr key-value pair must have two elements".to_string())
            })?;
        kvs.push((
            expect_string(key, "attr key")?,
            expect_string(value, "attr value")?,
        ));
    }

    Ok((identifier, class_list, kvs))
}

pub fn attr_to_value(attr: Attr) -> Value {
    let (identifier, classes, attributes) = attr;
    let kvs: Vec<Value> = attributes
        .into_iter()
        .map(|(key, value)| json!([key, value]))
        .collect();
    json!([identifier, classes, kvs])
}
