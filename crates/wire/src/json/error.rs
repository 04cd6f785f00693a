//! Parse error types
//!
//! Every parser rejection is a [`ParseError`] with a stable
//! [`ParseFailureCategory`] label:
//!
//! | Category | Label |
//! |----------|-------|
//! | Syntax | `syntax` |
//! | Eof | `eof` |
//! | Encoding | `encoding` |
//! | DepthLimit | `depth-limit` |
//! | InputTooLarge | `input-too-large` |

use thiserror::Error;

/// Parser failure
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Malformed JSON
    #[error("invalid JSON at line {line}, column {column}: {message}")]
    Syntax {
        /// 1-based line of the offending character
        line: usize,
        /// 1-based column of the offending character
        column: usize,
        /// Parser message
        message: String,
    },

    /// Input ended inside a value
    #[error("unexpected end of input at line {line}, column {column}")]
    UnexpectedEof {
        /// 1-based line where input ended
        line: usize,
        /// 1-based column where input ended
        column: usize,
    },

    /// Input is not valid UTF-8
    #[error("invalid UTF-8: {message}")]
    Encoding {
        /// Decoder message
        message: String,
    },

    /// Nesting deeper than allowed
    #[error("nesting exceeds depth limit of {limit}")]
    DepthLimit {
        /// The configured limit
        limit: usize,
    },

    /// Input longer than allowed
    #[error("input of {len} bytes exceeds limit of {limit}")]
    InputTooLarge {
        /// Input length in bytes
        len: usize,
        /// The configured limit
        limit: usize,
    },
}

/// Stable classification of parse failures for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseFailureCategory {
    /// Malformed JSON
    Syntax,
    /// Truncated input
    Eof,
    /// Not UTF-8
    Encoding,
    /// Nesting too deep
    DepthLimit,
    /// Input too long
    InputTooLarge,
}

impl ParseFailureCategory {
    /// The stable label
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseFailureCategory::Syntax => "syntax",
            ParseFailureCategory::Eof => "eof",
            ParseFailureCategory::Encoding => "encoding",
            ParseFailureCategory::DepthLimit => "depth-limit",
            ParseFailureCategory::InputTooLarge => "input-too-large",
        }
    }
}

impl std::fmt::Display for ParseFailureCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ParseError {
    /// The failure category
    pub fn category(&self) -> ParseFailureCategory {
        match self {
            ParseError::Syntax { .. } => ParseFailureCategory::Syntax,
            ParseError::UnexpectedEof { .. } => ParseFailureCategory::Eof,
            ParseError::Encoding { .. } => ParseFailureCategory::Encoding,
            ParseError::DepthLimit { .. } => ParseFailureCategory::DepthLimit,
            ParseError::InputTooLarge { .. } => ParseFailureCategory::InputTooLarge,
        }
    }
}
