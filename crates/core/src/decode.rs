//! The decoding capability and the built-in decoders
//!
//! Two tiers:
//!
//! - [`Decodable`]: the type reads itself from a [`JsonValue`]
//! - [`Initializable`]: the type constructs itself from a [`JsonValue`];
//!   every `Initializable` type is `Decodable` for free
//!
//! User types normally implement `Initializable`:
//!
//! ```
//! use minjson_core::{DecodeError, Initializable, JsonValue, Node};
//!
//! struct Person {
//!     id: i64,
//!     name: String,
//!     nickname: Option<String>,
//! }
//!
//! impl Initializable for Person {
//!     fn init(json: &JsonValue<'_>) -> Result<Self, DecodeError> {
//!         Ok(Person {
//!             id: json.get("id").decode()?,
//!             name: json.get("name").decode()?,
//!             nickname: json.get("nickname").decode_optional(),
//!         })
//!     }
//! }
//!
//! let node: Node = [("id", Node::Int(3)), ("name", Node::from("Chris"))]
//!     .into_iter()
//!     .collect();
//! let person: Person = JsonValue::new(&node).decode().unwrap();
//! assert_eq!(person.id, 3);
//! assert_eq!(person.name, "Chris");
//! assert!(person.nickname.is_none());
//! ```
//!
//! ## Built-in Decoders
//!
//! | Type | Accepted node |
//! |------|---------------|
//! | `String` | `String` |
//! | `bool` | `Bool` |
//! | `i8`..`i64`, `u8`..`u64`, `isize`, `usize` | `Int` or `UInt` within the target's range |
//! | `f64` | `Int`, `UInt` or `Float` |
//! | `f32` | as `f64`, rejecting finite values beyond `f32::MAX` |
//! | `Vec<T>` | `Array` whose elements all decode as `T` |
//! | `HashMap<String, T>` | `Object` whose values all decode as `T` |
//! | `Node` | anything (clones the subtree) |

use crate::error::DecodeError;
use crate::json_value::JsonValue;
use crate::node::Node;
use std::collections::HashMap;

/// A type that can be read from a [`JsonValue`].
pub trait Decodable: Sized {
    /// Attempt to read `Self` from `value`.
    ///
    /// Implementations should return the carried error unchanged when
    /// `value` is failed; [`JsonValue::node`] does that.
    fn decode(value: &JsonValue<'_>) -> Result<Self, DecodeError>;
}

/// A type that constructs itself from a [`JsonValue`].
///
/// Implementing this gives [`Decodable`] through a blanket impl whose
/// `decode` calls `init`.
pub trait Initializable: Sized {
    /// Build `Self` from `value`, typically by decoding sub-values by key.
    fn init(value: &JsonValue<'_>) -> Result<Self, DecodeError>;
}

impl<T: Initializable> Decodable for T {
    fn decode(value: &JsonValue<'_>) -> Result<Self, DecodeError> {
        T::init(value)
    }
}

fn mismatch(type_name: &str, node: &Node) -> DecodeError {
    DecodeError::incompatible_type(type_name).with_value(node)
}

impl Decodable for String {
    fn decode(value: &JsonValue<'_>) -> Result<Self, DecodeError> {
        match value.node()? {
            Node::String(s) => Ok(s.clone()),
            other => Err(mismatch("String", other)),
        }
    }
}

impl Decodable for bool {
    fn decode(value: &JsonValue<'_>) -> Result<Self, DecodeError> {
        match value.node()? {
            Node::Bool(b) => Ok(*b),
            other => Err(mismatch("bool", other)),
        }
    }
}

macro_rules! integer_decoder {
    ($($ty:ty),*) => {$(
        impl Decodable for $ty {
            fn decode(value: &JsonValue<'_>) -> Result<Self, DecodeError> {
                let node = value.node()?;
                let converted = match node {
                    Node::Int(i) => <$ty>::try_from(*i).ok(),
                    Node::UInt(u) => <$ty>::try_from(*u).ok(),
                    _ => None,
                };
                converted.ok_or_else(|| mismatch(stringify!($ty), node))
            }
        }
    )*};
}

integer_decoder!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Decodable for f64 {
    fn decode(value: &JsonValue<'_>) -> Result<Self, DecodeError> {
        let node = value.node()?;
        node.as_float().ok_or_else(|| mismatch("f64", node))
    }
}

impl Decodable for f32 {
    fn decode(value: &JsonValue<'_>) -> Result<Self, DecodeError> {
        let node = value.node()?;
        let wide = node.as_float().ok_or_else(|| mismatch("f32", node))?;
        let narrow = wide as f32;
        // Overflow to infinity; infinities and NaN already in the tree pass through
        if wide.is_finite() && !narrow.is_finite() {
            return Err(mismatch("f32", node));
        }
        Ok(narrow)
    }
}

impl<T: Decodable> Decodable for Vec<T> {
    fn decode(value: &JsonValue<'_>) -> Result<Self, DecodeError> {
        let node = value.node()?;
        let Node::Array(items) = node else {
            return Err(mismatch("array", node));
        };
        // First failing element wins; no aggregation
        items
            .iter()
            .map(|item| T::decode(&JsonValue::Positioned(item)))
            .collect()
    }
}

impl<T: Decodable> Decodable for HashMap<String, T> {
    fn decode(value: &JsonValue<'_>) -> Result<Self, DecodeError> {
        let node = value.node()?;
        let Node::Object(map) = node else {
            return Err(mismatch("dictionary", node));
        };
        map.iter()
            .map(|(key, item)| Ok((key.clone(), T::decode(&JsonValue::Positioned(item))?)))
            .collect()
    }
}

impl Decodable for Node {
    fn decode(value: &JsonValue<'_>) -> Result<Self, DecodeError> {
        value.node().cloned()
    }
}
