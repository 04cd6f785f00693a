//! Unified error type for the one-shot entry points.
//!
//! [`Document`](crate::Document) keeps parse failures inside the value
//! wrapper. [`from_slice`](crate::from_slice) and friends surface them
//! directly, so they need one type covering both stages.

use minjson_core::DecodeError;
use minjson_wire::ParseError;
use thiserror::Error;

/// Parse or decode failure.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The input was rejected by the parser
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The input parsed but did not decode
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if the parser rejected the input
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse(_))
    }

    /// Check if decoding failed after a successful parse
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }

    /// The decode failure, if any
    pub fn as_decode(&self) -> Option<&DecodeError> {
        match self {
            Error::Decode(err) => Some(err),
            Error::Parse(_) => None,
        }
    }
}

/// The parse error as a decode failure, the way a document records it.
pub(crate) fn unable_to_parse(err: &ParseError) -> DecodeError {
    DecodeError::unable_to_parse().with_detail(err.to_string())
}
