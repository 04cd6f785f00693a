//! # minjson
//!
//! Typed decoding over dynamically-typed JSON trees.
//!
//! Parse once into a [`Document`], walk it with [`JsonValue`] steps, and
//! decode leaves into concrete types. Failures travel with the traversal: a
//! chain of deferred steps reports the error of its earliest failing step,
//! including a parse failure.
//!
//! ## Quick Start
//!
//! ```
//! use minjson::prelude::*;
//!
//! let doc = Document::parse_str(r#"
//!     {"people": [
//!         {"id": 1, "name": "Ben", "website": "http://bencochran.com"},
//!         {"id": 3, "name": "Chris"}
//!     ]}
//! "#);
//!
//! let name: String = doc.get("people").get(-1).get("name").decode().unwrap();
//! assert_eq!(name, "Chris");
//!
//! let website: Option<String> = doc.get("people").get(1).get("website").decode_optional();
//! assert!(website.is_none());
//!
//! let err = doc.get("people").get(5).get("name").decode::<String>().unwrap_err();
//! assert_eq!(err.kind(), &ErrorKind::OutOfBounds(5));
//! ```
//!
//! ## Layers
//!
//! | Crate | Role |
//! |-------|------|
//! | `minjson-wire` | Bytes to [`Node`], with [`ParseOptions`] limits |
//! | `minjson-core` | [`JsonValue`] traversal, [`Decodable`] and the built-in decoders |
//! | `minjson` | [`Document`], one-shot [`from_slice`] / [`from_str`], [`prelude`] |
//!
//! ## Features
//!
//! - `url`: decode `url::Url` from strings
//! - `chrono`: decode `chrono::DateTime` from `yyyy-MM-dd'T'HH:mm:ss.SSSZ` strings
//! - `tz`: decode `jiff::tz::TimeZone` from IANA identifiers
//!
//! All are enabled by default.

#![warn(missing_docs)]

mod document;
mod error;

pub mod prelude;

// Re-export main entry points
pub use document::{from_slice, from_str, Document, DocumentBuilder};
pub use error::{Error, Result};

// Re-export the decode layer
pub use minjson_core::{
    adapters, Coordinate, Decodable, DecodeError, Elements, ErrorKind, Initializable, JsonIndex,
    JsonValue, Node,
};

// Re-export the parser boundary
pub use minjson_wire::{ParseError, ParseFailureCategory, ParseOptions};
