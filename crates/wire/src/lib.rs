//! Wire parsing for minjson
//!
//! Turns raw JSON bytes into a [`minjson_core::Node`] tree. The decode layer
//! never sees text; it only consumes the tree this crate produces.
//!
//! ## Failure Categories
//!
//! | Error | Category | Cause |
//! |-------|----------|-------|
//! | `Syntax` | `syntax` | Malformed JSON, trailing characters |
//! | `UnexpectedEof` | `eof` | Input ended inside a value |
//! | `Encoding` | `encoding` | Input is not UTF-8 |
//! | `DepthLimit` | `depth-limit` | Nesting deeper than [`ParseOptions::max_depth`] |
//! | `InputTooLarge` | `input-too-large` | Longer than [`ParseOptions::max_input_len`] |
//!
//! ## Example
//!
//! ```
//! use minjson_wire::{parse_str, ParseFailureCategory};
//!
//! let node = parse_str(r#"{"name": "Kat"}"#).unwrap();
//! assert_eq!(node.type_name(), "dictionary");
//!
//! let err = parse_str(r#"{"name": "#).unwrap_err();
//! assert_eq!(err.category(), ParseFailureCategory::Eof);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod json;

pub use json::{
    parse_slice, parse_slice_with, parse_str, ParseError, ParseFailureCategory, ParseOptions,
    MAX_DEPTH_LIMIT,
};
