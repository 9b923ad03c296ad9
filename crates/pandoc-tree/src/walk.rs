/*
 * walk.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Generic rewriting traversal over wire-level documents.
 *
 * Hooks fire on tagged nodes that are items of an array, which is how
 * pandoc lays out every node sequence. A hook takes ownership of a typed
 * view of the node and either hands it back unchanged or splices
 * replacement nodes into the parent sequence. A node handed back keeps
 * every field it arrived with. Children of replacements are still visited,
 * the replacements themselves are not re-examined, so a rewrite that
 * produces its own trigger terminates.
 */

use serde_json::{Map, Value};

use crate::error::TreeError;
use crate::node::{self, Div, Str, Tagged};

/// Outcome of a hook: keep the node, or splice replacements in its place.
#[derive(Debug)]
pub enum FilterReturn<T> {
    Unchanged(T),
    Rewritten(Vec<Tagged>),
}

type StrFilterFn<'a, E> = Box<dyn FnMut(Str) -> Result<FilterReturn<Str>, E> + 'a>;
type DivFilterFn<'a, E> = Box<dyn FnMut(Div) -> Result<FilterReturn<Div>, E> + 'a>;

/// Per-node-kind rewrite hooks. Kinds without a hook pass through with
/// their fields preserved verbatim.
pub struct Filter<'a, E> {
    pub str: Option<StrFilterFn<'a, E>>,
    pub div: Option<DivFilterFn<'a, E>>,
}

impl<'a, E> Filter<'a, E> {
    pub fn new() -> Filter<'a, E> {
        Filter {
            str: None,
            div: None,
        }
    }

    pub fn with_str<F>(mut self, f: F) -> Filter<'a, E>
    where
        F: FnMut(Str) -> Result<FilterReturn<Str>, E> + 'a,
    {
        self.str = Some(Box::new(f));
        self
    }

    pub fn with_div<F>(mut self, f: F) -> Filter<'a, E>
    where
        F: FnMut(Div) -> Result<FilterReturn<Div>, E> + 'a,
    {
        self.div = Some(Box::new(f));
        self
    }
}

impl<E> Default for Filter<'_, E> {
    fn default() -> Self {
        Filter::new()
    }
}

/// Rewrites an arbitrary wire value.
pub fn walk<E>(value: Value, filter: &mut Filter<'_, E>) -> Result<Value, E>
where
    E: From<TreeError>,
{
    match value {
        Value::Array(items) => Ok(Value::Array(walk_items(items, filter)?)),
        Value::Object(fields) => Ok(Value::Object(walk_map(fields, filter)?)),
        scalar => Ok(scalar),
    }
}

/// Rewrites a node sequence. This is where hooks fire.
pub fn walk_items<E>(items: Vec<Value>, filter: &mut Filter<'_, E>) -> Result<Vec<Value>, E>
where
    E: From<TreeError>,
{
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        apply(item, filter, &mut out)?;
    }
    Ok(out)
}

/// Rewrites every value of an object, keeping field order. The object
/// itself is not eligible for hooks; only array items are.
pub fn walk_map<E>(
    fields: Map<String, Value>,
    filter: &mut Filter<'_, E>,
) -> Result<Map<String, Value>, E>
where
    E: From<TreeError>,
{
    let mut out = Map::new();
    for (key, value) in fields {
        out.insert(key, walk(value, filter)?);
    }
    Ok(out)
}

/// The closed set of node kinds the traversal can take apart. Everything
/// else is `Other` and passes through structurally.
enum NodeKind {
    Str,
    Div,
    Other,
}

fn classify(value: &Value) -> NodeKind {
    match node::tag_of(value) {
        Some("Str") => NodeKind::Str,
        Some("Div") => NodeKind::Div,
        _ => NodeKind::Other,
    }
}

fn apply<E>(item: Value, filter: &mut Filter<'_, E>, out: &mut Vec<Value>) -> Result<(), E>
where
    E: From<TreeError>,
{
    match classify(&item) {
        NodeKind::Str => {
            if let Some(f) = &mut filter.str {
                let ret = f(Str::from_value(item)?)?;
                return match ret {
                    FilterReturn::Unchanged(node) => {
                        out.push(walk_children(node.into_value(), filter)?);
                        Ok(())
                    }
                    FilterReturn::Rewritten(nodes) => splice(nodes, filter, out),
                };
            }
            out.push(walk_children(item, filter)?);
            Ok(())
        }
        NodeKind::Div => {
            if let Some(f) = &mut filter.div {
                let ret = f(Div::from_value(item)?)?;
                return match ret {
                    FilterReturn::Unchanged(node) => {
                        out.push(walk_children(node.into_value(), filter)?);
                        Ok(())
                    }
                    FilterReturn::Rewritten(nodes) => splice(nodes, filter, out),
                };
            }
            out.push(walk_children(item, filter)?);
            Ok(())
        }
        NodeKind::Other => {
            out.push(walk_children(item, filter)?);
            Ok(())
        }
    }
}

fn splice<E>(nodes: Vec<Tagged>, filter: &mut Filter<'_, E>, out: &mut Vec<Value>) -> Result<(), E>
where
    E: From<TreeError>,
{
    for node in nodes {
        out.push(walk_children(node.into_value(), filter)?);
    }
    Ok(())
}

/// Visits the children of a node without re-examining the node itself.
fn walk_children<E>(value: Value, filter: &mut Filter<'_, E>) -> Result<Value, E>
where
    E: From<TreeError>,
{
    match value {
        Value::Object(fields) => Ok(Value::Object(walk_map(fields, filter)?)),
        other => walk(other, filter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::empty_attr;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn rewrite_marker(node: Str) -> Result<FilterReturn<Str>, TreeError> {
        if node.text == "x" {
            Ok(FilterReturn::Rewritten(vec![
                Str::new("y").into_tagged(),
                Tagged::nullary("Space"),
                Str::new("z").into_tagged(),
            ]))
        } else {
            Ok(FilterReturn::Unchanged(node))
        }
    }

    #[test]
    fn plain_values_pass_through() {
        let value = json!([1, "two", null, {"deep": [true, {"t": 3}]}, [["nested"]]]);
        let mut filter: Filter<'_, TreeError> =
            Filter::new().with_str(|node| Ok(FilterReturn::Unchanged(node)));
        assert_eq!(walk(value.clone(), &mut filter).unwrap(), value);
    }

    #[test]
    fn unchanged_nodes_round_trip() {
        let blocks = json!([
            {"t": "Para", "c": [
                {"t": "Str", "c": "hello"},
                {"t": "Space"},
                {"t": "Str", "c": "world"}
            ]},
            {"t": "Div", "c": [["", ["plain"], []], [{"t": "HorizontalRule"}]]}
        ]);
        let mut filter: Filter<'_, TreeError> = Filter::new()
            .with_str(|node| Ok(FilterReturn::Unchanged(node)))
            .with_div(|node| Ok(FilterReturn::Unchanged(node)));
        assert_eq!(walk(blocks.clone(), &mut filter).unwrap(), blocks);
    }

    #[test]
    fn unchanged_nodes_keep_extra_fields() {
        // Producers annotate nodes with fields beyond t and c; a hook that
        // declines to rewrite must hand them back intact, in order.
        let blocks = json!([
            {"t": "Str", "c": "hello", "s": 7},
            {"t": "Div", "s": [0, 4], "c": [["", ["plain"], []], [
                {"t": "Str", "c": "in", "s": 9}
            ]]}
        ]);
        let mut filter: Filter<'_, TreeError> = Filter::new()
            .with_str(|node| Ok(FilterReturn::Unchanged(node)))
            .with_div(|node| Ok(FilterReturn::Unchanged(node)));
        let walked = walk(blocks.clone(), &mut filter).unwrap();
        assert_eq!(walked, blocks);
        assert_eq!(
            serde_json::to_string(&walked).unwrap(),
            serde_json::to_string(&blocks).unwrap()
        );
    }

    #[test]
    fn rewrites_splice_into_the_sequence() {
        let para = json!({"t": "Para", "c": [
            {"t": "Str", "c": "a"},
            {"t": "Str", "c": "x"},
            {"t": "Str", "c": "b"}
        ]});
        let mut filter: Filter<'_, TreeError> = Filter::new().with_str(rewrite_marker);
        let walked = walk(json!([para]), &mut filter).unwrap();
        assert_eq!(
            walked,
            json!([{"t": "Para", "c": [
                {"t": "Str", "c": "a"},
                {"t": "Str", "c": "y"},
                {"t": "Space"},
                {"t": "Str", "c": "z"},
                {"t": "Str", "c": "b"}
            ]}])
        );
    }

    #[test]
    fn children_of_replacements_are_visited() {
        // The div hook wraps its children; the sentinel inside the wrapped
        // children must still be rewritten.
        let blocks = json!([
            {"t": "Div", "c": [["", ["wrap"], []], [
                {"t": "Para", "c": [{"t": "Str", "c": "x"}]}
            ]]}
        ]);
        let mut filter: Filter<'_, TreeError> = Filter::new()
            .with_str(rewrite_marker)
            .with_div(|div: Div| {
                let mut content = vec![Tagged::nullary("HorizontalRule").into_value()];
                content.extend(div.content);
                Ok(FilterReturn::Rewritten(vec![
                    Div::new(div.attr, content).into_tagged(),
                ]))
            });
        let walked = walk(blocks, &mut filter).unwrap();
        assert_eq!(
            walked,
            json!([
                {"t": "Div", "c": [["", ["wrap"], []], [
                    {"t": "HorizontalRule"},
                    {"t": "Para", "c": [
                        {"t": "Str", "c": "y"},
                        {"t": "Space"},
                        {"t": "Str", "c": "z"}
                    ]}
                ]]}
            ])
        );
    }

    #[test]
    fn replacements_are_not_reexamined() {
        // A hook that rewrites every div would loop forever if the engine
        // re-applied it to replacements. Two divs, two calls.
        let blocks = json!([
            {"t": "Div", "c": [["", [], []], [
                {"t": "Div", "c": [["", [], []], []]}
            ]]}
        ]);
        let mut calls = 0;
        let mut filter: Filter<'_, TreeError> = Filter::new().with_div(|div: Div| {
            calls += 1;
            Ok(FilterReturn::Rewritten(vec![div.into_tagged()]))
        });
        walk(blocks, &mut filter).unwrap();
        drop(filter);
        assert_eq!(calls, 2);
    }

    #[test]
    fn hook_errors_propagate() {
        let blocks = json!([
            {"t": "Para", "c": [{"t": "Str", "c": "fine"}]},
            {"t": "BulletList", "c": [[{"t": "Para", "c": [{"t": "Str", "c": "boom"}]}]]}
        ]);
        let mut filter: Filter<'_, TreeError> = Filter::new().with_str(|node: Str| {
            if node.text == "boom" {
                Err(TreeError::InvalidType("boom".to_string()))
            } else {
                Ok(FilterReturn::Unchanged(node))
            }
        });
        assert!(walk(blocks, &mut filter).is_err());
    }

    #[test]
    fn malformed_hooked_nodes_error() {
        let bad = json!([{"t": "Div", "c": "not content"}]);
        let mut hooked: Filter<'_, TreeError> =
            Filter::new().with_div(|node| Ok(FilterReturn::Unchanged(node)));
        assert!(walk(bad.clone(), &mut hooked).is_err());

        // Without a div hook the same node is opaque data and survives.
        let mut unhooked: Filter<'_, TreeError> =
            Filter::new().with_str(|node| Ok(FilterReturn::Unchanged(node)));
        assert_eq!(walk(bad.clone(), &mut unhooked).unwrap(), bad);
    }

    #[test]
    fn object_field_values_are_not_hooked() {
        // A tagged node sitting directly under an object field is not an
        // array item, so it is descended into but never rewritten itself.
        let mut meta = Map::new();
        meta.insert("title".to_string(), json!({"t": "Str", "c": "x"}));
        meta.insert(
            "subtitle".to_string(),
            json!({"t": "MetaInlines", "c": [{"t": "Str", "c": "x"}]}),
        );
        let mut filter: Filter<'_, TreeError> = Filter::new().with_str(rewrite_marker);
        let walked = walk_map(meta, &mut filter).unwrap();
        assert_eq!(walked["title"], json!({"t": "Str", "c": "x"}));
        assert_eq!(
            walked["subtitle"],
            json!({"t": "MetaInlines", "c": [
                {"t": "Str", "c": "y"},
                {"t": "Space"},
                {"t": "Str", "c": "z"}
            ]})
        );
    }

    #[test]
    fn empty_rewrite_drops_the_node() {
        let para = json!([{"t": "Para", "c": [{"t": "Str", "c": "x"}, {"t": "Space"}]}]);
        let mut filter: Filter<'_, TreeError> =
            Filter::new().with_str(|_| Ok(FilterReturn::Rewritten(vec![])));
        assert_eq!(
            walk(para, &mut filter).unwrap(),
            json!([{"t": "Para", "c": [{"t": "Space"}]}])
        );
    }

    #[test]
    fn div_attrs_survive_an_unchanged_pass() {
        let div = Div::new(empty_attr(), vec![]);
        assert_eq!(
            div.into_value(),
            json!({"t": "Div", "c": [["", [], []], []]})
        );
    }
}
