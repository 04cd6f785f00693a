//! Node types for minjson
//!
//! This module defines [`Node`], the parsed JSON tree every decode starts from.
//! A parser (see `minjson-wire`) produces it; the core only reads it.
//!
//! ## The Eight Shapes
//!
//! | Variant | JSON |
//! |---------|------|
//! | Null | `null` |
//! | Bool | `true` / `false` |
//! | Int | number without fraction or exponent that fits `i64` |
//! | UInt | number without fraction or exponent in `i64::MAX + 1 ..= u64::MAX` |
//! | Float | every other number |
//! | String | `"..."` |
//! | Array | `[...]` |
//! | Object | `{...}` |
//!
//! `Int`, `UInt` and `Float` together are the JSON number. There is no implicit
//! coercion between shapes: `Int(1)` != `Float(1.0)` and `String("1")` is
//! never a number.

use std::collections::HashMap;
use std::fmt;

/// A parsed JSON value.
///
/// ## Equality Rules
///
/// - Different shapes are NEVER equal (no type coercion)
/// - `Int(1)` != `Float(1.0)`
/// - Float uses IEEE-754 equality: `NaN != NaN`, `-0.0 == 0.0`
#[derive(Debug, Clone)]
pub enum Node {
    /// JSON null
    Null,

    /// Boolean true or false
    Bool(bool),

    /// Integral number that fits in 64 signed bits
    Int(i64),

    /// Integral number above `i64::MAX` that fits in 64 unsigned bits.
    ///
    /// Values that fit `i64` are always `Int`; `Node::from(u64)` keeps that
    /// split.
    UInt(u64),

    /// Any other number
    Float(f64),

    /// UTF-8 string
    String(String),

    /// Ordered sequence of nodes
    Array(Vec<Node>),

    /// String-keyed map of nodes, keys unique
    Object(HashMap<String, Node>),
}

impl Node {
    /// Returns the shape name as a string (for error messages)
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Bool(_) => "bool",
            Node::Int(_) | Node::UInt(_) | Node::Float(_) => "number",
            Node::String(_) => "string",
            Node::Array(_) => "array",
            Node::Object(_) => "dictionary",
        }
    }

    /// Check if this node is null
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// Check if this node is a number (`Int`, `UInt` or `Float`)
    pub fn is_number(&self) -> bool {
        matches!(self, Node::Int(_) | Node::UInt(_) | Node::Float(_))
    }

    /// Try to get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as i64
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Node::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as u64; negative and fractional numbers give `None`
    pub fn as_uint(&self) -> Option<u64> {
        match self {
            Node::Int(i) => u64::try_from(*i).ok(),
            Node::UInt(u) => Some(*u),
            _ => None,
        }
    }

    /// Try to get as f64
    ///
    /// Integral numbers widen to f64; this is the only numeric widening the
    /// crate performs.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Node::Float(f) => Some(*f),
            Node::Int(i) => Some(*i as f64),
            Node::UInt(u) => Some(*u as f64),
            _ => None,
        }
    }

    /// Try to get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as array slice
    pub fn as_array(&self) -> Option<&[Node]> {
        match self {
            Node::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Try to get as object reference
    pub fn as_object(&self) -> Option<&HashMap<String, Node>> {
        match self {
            Node::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Nesting depth of this node.
    ///
    /// Scalars have depth 0; `[]` and `{}` have depth 1; `[[1]]` has depth 2.
    pub fn depth(&self) -> usize {
        match self {
            Node::Array(items) => 1 + items.iter().map(Node::depth).max().unwrap_or(0),
            Node::Object(map) => 1 + map.values().map(Node::depth).max().unwrap_or(0),
            _ => 0,
        }
    }
}

// ============================================================================
// Custom PartialEq Implementation (IEEE-754 semantics, no type coercion)
// ============================================================================

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Null, Node::Null) => true,
            (Node::Bool(a), Node::Bool(b)) => a == b,
            (Node::Int(a), Node::Int(b)) => a == b,
            (Node::UInt(a), Node::UInt(b)) => a == b,
            (Node::Float(a), Node::Float(b)) => a == b,
            (Node::String(a), Node::String(b)) => a == b,
            (Node::Array(a), Node::Array(b)) => a == b,
            (Node::Object(a), Node::Object(b)) => a == b,

            // Different shapes: NEVER equal
            _ => false,
        }
    }
}

/// Compact JSON-like rendering used in error descriptions.
///
/// Object keys are written in sorted order so snapshots are stable.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Null => f.write_str("null"),
            Node::Bool(b) => write!(f, "{}", b),
            Node::Int(i) => write!(f, "{}", i),
            Node::UInt(u) => write!(f, "{}", u),
            Node::Float(x) => write!(f, "{:?}", x),
            Node::String(s) => write!(f, "{:?}", s),
            Node::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Node::Object(map) => {
                let mut entries: Vec<_> = map.iter().collect();
                entries.sort_by_key(|(k, _)| *k);
                f.write_str("{")?;
                for (i, (k, v)) in entries.into_iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{:?}:{}", k, v)?;
                }
                f.write_str("}")
            }
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Bool(b)
    }
}

impl From<i64> for Node {
    fn from(i: i64) -> Self {
        Node::Int(i)
    }
}

impl From<i32> for Node {
    fn from(i: i32) -> Self {
        Node::Int(i64::from(i))
    }
}

impl From<u64> for Node {
    fn from(u: u64) -> Self {
        match i64::try_from(u) {
            Ok(i) => Node::Int(i),
            Err(_) => Node::UInt(u),
        }
    }
}

impl From<f64> for Node {
    fn from(f: f64) -> Self {
        Node::Float(f)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::String(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::String(s)
    }
}

impl<T: Into<Node>> From<Vec<T>> for Node {
    fn from(items: Vec<T>) -> Self {
        Node::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<HashMap<String, Node>> for Node {
    fn from(map: HashMap<String, Node>) -> Self {
        Node::Object(map)
    }
}

impl<K: Into<String>, V: Into<Node>> FromIterator<(K, V)> for Node {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Node::Object(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<serde_json::Value> for Node {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Node::Null,
            serde_json::Value::Bool(b) => Node::Bool(b),
            serde_json::Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => Node::Int(i),
                (None, Some(u)) => Node::UInt(u),
                (None, None) => Node::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Node::String(s),
            serde_json::Value::Array(items) => {
                Node::Array(items.into_iter().map(Node::from).collect())
            }
            serde_json::Value::Object(map) => {
                Node::Object(map.into_iter().map(|(k, v)| (k, Node::from(v))).collect())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
