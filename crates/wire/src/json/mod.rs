//! JSON text parsing into [`minjson_core::Node`]

mod error;
mod options;
mod parse;

pub use error::{ParseError, ParseFailureCategory};
pub use options::{ParseOptions, MAX_DEPTH_LIMIT};
pub use parse::{parse_slice, parse_slice_with, parse_str};
