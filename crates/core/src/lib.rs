//! Core types for minjson
//!
//! This crate holds the decode/traversal engine:
//!
//! - [`Node`]: the parsed JSON tree
//! - [`DecodeError`] / [`ErrorKind`]: the error model
//! - [`JsonValue`]: the value wrapper with failing and deferred traversal
//! - [`Decodable`] / [`Initializable`]: the decoding capability
//! - [`adapters`]: coordinate, URL, date and timezone decoders
//!
//! It does not parse text; `minjson-wire` turns bytes into a [`Node`].
//!
//! ## Examples
//!
//! ```
//! use minjson_core::{JsonValue, Node};
//!
//! let node = Node::from(serde_json::json!([{"name": "Ben"}, {"name": "Kat"}]));
//! let people = JsonValue::new(&node);
//!
//! let last: String = people.get(-1).get("name").decode().unwrap();
//! assert_eq!(last, "Kat");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
mod de;
mod decode;
mod error;
mod json_value;
mod node;

// Re-export main types
pub use adapters::Coordinate;
pub use decode::{Decodable, Initializable};
pub use error::{DecodeError, ErrorKind};
pub use json_value::{Elements, JsonIndex, JsonValue};
pub use node::Node;
