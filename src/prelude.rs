//! Convenient imports for minjson.
//!
//! ```
//! use minjson::prelude::*;
//!
//! struct Point {
//!     x: i64,
//!     y: i64,
//! }
//!
//! impl Initializable for Point {
//!     fn init(json: &JsonValue<'_>) -> Result<Self, DecodeError> {
//!         Ok(Point {
//!             x: json.get("x").decode()?,
//!             y: json.get("y").decode()?,
//!         })
//!     }
//! }
//!
//! let doc = Document::parse_str(r#"{"x": 1, "y": 2}"#);
//! let point: Point = doc.decode().unwrap();
//! assert_eq!(point.x + point.y, 3);
//! ```

// Entry points
pub use crate::document::{Document, DocumentBuilder};

// Decoding
pub use minjson_core::{Decodable, DecodeError, ErrorKind, Initializable, JsonValue, Node};
