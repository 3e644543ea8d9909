//! Token tree flattening
//!
//! Collapses a [`TokenNode`] tree into `name -> value` pairs. The name of a leaf
//! is the path of keys from the namespace prefix down to the leaf, joined by the
//! separator:
//!
//! ```text
//! prefix "x", separator "-"
//! { a: { b: { value: 1 }, c: { value: 2 } } }  =>  { "x-a-b": 1, "x-a-c": 2 }
//! ```

use indexmap::IndexMap;
use serde_json::Value;

use crate::tokens::{TokenNode, TokenValue};

/// Flattened tokens in traversal order (depth-first, declaration order)
pub type FlatTokenMap = IndexMap<String, TokenValue>;

/// Flatten `node` under `prefix`.
///
/// Two leaf paths composing to the same name collapse into one entry; the one
/// visited last provides the value.
pub fn flatten(node: &TokenNode, prefix: &str, separator: &str) -> FlatTokenMap {
    let mut out = FlatTokenMap::new();
    flatten_into(node, prefix, separator, &mut out);
    out
}

/// Ingest and flatten raw JSON in one step
pub fn flatten_json(
    value: &Value,
    leaf_field: &str,
    marker: &str,
    prefix: &str,
    separator: &str,
) -> FlatTokenMap {
    flatten(&TokenNode::from_json(value, leaf_field, marker), prefix, separator)
}

fn flatten_into(node: &TokenNode, path: &str, separator: &str, out: &mut FlatTokenMap) {
    match node {
        TokenNode::Leaf(value) => {
            out.insert(path.to_string(), value.clone());
        }
        TokenNode::Group(children) => {
            for (key, child) in children {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}{separator}{key}")
                };
                flatten_into(child, &child_path, separator, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const MARKER: &str = "cabin x theme.cabin x";

    fn flat(value: Value, prefix: &str) -> FlatTokenMap {
        flatten_json(&value, "value", MARKER, prefix, "-")
    }

    #[test]
    fn nested_paths_are_joined() {
        let map = flat(json!({ "a": { "b": { "value": 1 }, "c": { "value": 2 } } }), "x");
        let expected: FlatTokenMap = [
            ("x-a-b".to_string(), TokenValue::number(1)),
            ("x-a-c".to_string(), TokenValue::number(2)),
        ]
        .into_iter()
        .collect();
        assert_eq!(map, expected);
    }

    #[test]
    fn no_leaves_yields_empty_map() {
        assert!(flat(json!({ "a": 1, "b": "str" }), "x").is_empty());
        assert!(flat(json!({}), "").is_empty());
    }

    #[test]
    fn root_leaf_uses_prefix_as_name() {
        let map = flat(json!({ "value": "#fff" }), "--dm-token-palette");
        assert_eq!(map.get("--dm-token-palette"), Some(&TokenValue::text("#fff")));
    }

    #[test]
    fn empty_prefix_has_no_leading_separator() {
        let map = flat(json!({ "gray": { "20": { "value": 4 } } }), "");
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["gray-20"]);
    }

    #[test]
    fn entry_count_matches_leaf_count() {
        let tree = TokenNode::from_json(
            &json!({
                "gray": { "10": { "value": "#fafafa" }, "20": { "value": "#f5f5f5" } },
                "blue": { "5": { "value": "#1677ff" }, "note": "skipped" },
                "empty": {}
            }),
            "value",
            MARKER,
        );
        assert_eq!(flatten(&tree, "p", "-").len(), tree.leaf_count());
        assert_eq!(tree.leaf_count(), 3);
    }

    #[test]
    fn colliding_paths_keep_last_value() {
        let map = flat(
            json!({ "a-b": { "value": 1 }, "a": { "b": { "value": 2 } } }),
            "x",
        );
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("x-a-b"), Some(&TokenValue::number(2)));
    }

    #[test]
    fn order_follows_declaration() {
        let map = flat(
            json!({ "z": { "value": 1 }, "a": { "value": 2 }, "m": { "value": 3 } }),
            "",
        );
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["z", "a", "m"]);
    }
}
