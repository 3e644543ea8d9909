//! Leaf token values

use serde_json::{Number, Value};

use super::Reference;

/// Value held by a leaf token, classified at ingestion
#[derive(Clone, Debug, PartialEq)]
pub enum TokenValue {
    /// Numeric value, emitted with a `px` unit
    Number(Number),
    /// Opaque literal text
    Text(String),
    /// Pointer to another token
    Reference(Reference),
    Bool(bool),
    Null,
    /// Array or object stored in the leaf field
    Composite(Value),
}

impl TokenValue {
    /// Classify a JSON leaf value. Strings carrying `marker` become references.
    pub fn from_json(value: &Value, marker: &str) -> Self {
        match value {
            Value::Number(n) => Self::Number(n.clone()),
            Value::String(s) => match Reference::parse(s, marker) {
                Some(reference) => Self::Reference(reference),
                None => Self::Text(s.clone()),
            },
            Value::Bool(b) => Self::Bool(*b),
            Value::Null => Self::Null,
            other => Self::Composite(other.clone()),
        }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn number(n: impl Into<Number>) -> Self {
        Self::Number(n.into())
    }

    /// Literal rendering of the raw value, without any unit
    pub fn to_literal(&self, separator: &str) -> String {
        match self {
            Self::Number(n) => format_number(n),
            Self::Text(s) => s.clone(),
            Self::Reference(r) => r.path(separator),
            Self::Bool(b) => b.to_string(),
            Self::Null => "null".to_string(),
            Self::Composite(v) => v.to_string(),
        }
    }
}

impl From<&str> for TokenValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Format a number the way stylesheet authors write it: `4`, `1.5`, never `4.0`
pub fn format_number(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
            format!("{}", f as i64)
        }
        Some(f) => format!("{f}"),
        None => n.to_string(),
    }
}
