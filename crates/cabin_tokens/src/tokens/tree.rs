//! Token tree nodes

use indexmap::IndexMap;
use serde_json::Value;

use super::TokenValue;

/// A node of a theme's token tree.
///
/// The leaf/group decision is made once, at ingestion: an object that carries
/// the leaf field is a [`TokenNode::Leaf`], whatever else it holds.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenNode {
    Leaf(TokenValue),
    Group(IndexMap<String, TokenNode>),
}

impl TokenNode {
    /// Build a tree from JSON.
    ///
    /// Objects with `leaf_field` become leaves (any value counts, including
    /// `null`, `0`, `""` and `false`). Other objects and arrays become groups;
    /// array children are keyed by index. Scalar children are dropped.
    ///
    /// Cyclic input cannot be expressed in JSON, but very deep nesting recurses
    /// without a bound.
    pub fn from_json(value: &Value, leaf_field: &str, marker: &str) -> Self {
        match value {
            Value::Object(map) => {
                if let Some(leaf) = map.get(leaf_field) {
                    return Self::Leaf(TokenValue::from_json(leaf, marker));
                }
                let children = map
                    .iter()
                    .filter(|(_, child)| is_container(child))
                    .map(|(key, child)| (key.clone(), Self::from_json(child, leaf_field, marker)))
                    .collect();
                Self::Group(children)
            }
            Value::Array(items) => Self::Group(
                items
                    .iter()
                    .enumerate()
                    .filter(|(_, child)| is_container(child))
                    .map(|(i, child)| (i.to_string(), Self::from_json(child, leaf_field, marker)))
                    .collect(),
            ),
            _ => Self::empty(),
        }
    }

    pub fn empty() -> Self {
        Self::Group(IndexMap::new())
    }

    pub fn leaf(value: impl Into<TokenValue>) -> Self {
        Self::Leaf(value.into())
    }

    /// Group built from `(key, node)` pairs, keeping their order
    pub fn group<K, I>(children: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, TokenNode)>,
    {
        Self::Group(children.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Child of a group node
    pub fn get(&self, key: &str) -> Option<&TokenNode> {
        match self {
            Self::Group(children) => children.get(key),
            Self::Leaf(_) => None,
        }
    }

    /// Number of leaves reachable from this node
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Group(children) => children.values().map(TokenNode::leaf_count).sum(),
        }
    }
}

fn is_container(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}
