//! Text to [`Node`]
//!
//! Input is checked in a fixed order: length, then UTF-8, then nesting
//! depth, then JSON syntax. The first check that fails decides the error.
//!
//! Depth is measured by a bracket scan before serde_json runs, so the
//! parser never reaches its own recursion limit.

use super::error::ParseError;
use super::options::ParseOptions;
use minjson_core::Node;
use serde_json::error::Category;
use tracing::debug;

/// Parse UTF-8 JSON bytes with default options.
pub fn parse_slice(bytes: &[u8]) -> Result<Node, ParseError> {
    parse_slice_with(bytes, &ParseOptions::default())
}

/// Parse JSON text with default options.
pub fn parse_str(text: &str) -> Result<Node, ParseError> {
    parse_slice_with(text.as_bytes(), &ParseOptions::default())
}

/// Parse UTF-8 JSON bytes under `options`.
pub fn parse_slice_with(bytes: &[u8], options: &ParseOptions) -> Result<Node, ParseError> {
    let result = parse_inner(bytes, options);
    if let Err(ref err) = result {
        debug!(
            category = err.category().as_str(),
            len = bytes.len(),
            error = %err,
            "JSON parse failed"
        );
    }
    result
}

fn parse_inner(bytes: &[u8], options: &ParseOptions) -> Result<Node, ParseError> {
    if let Some(limit) = options.input_len_limit() {
        if bytes.len() > limit {
            return Err(ParseError::InputTooLarge {
                len: bytes.len(),
                limit,
            });
        }
    }

    let text = std::str::from_utf8(bytes).map_err(|e| ParseError::Encoding {
        message: e.to_string(),
    })?;

    let limit = options.depth_limit();
    if nesting_exceeds(bytes, limit) {
        return Err(ParseError::DepthLimit { limit });
    }

    serde_json::from_str(text).map_err(classify)
}

/// Whether `[`/`{` nesting outside string literals ever goes past `limit`.
///
/// Matches [`Node::depth`] on well-formed input. On malformed input it never
/// undercounts the nesting serde_json reaches before it reports an error.
fn nesting_exceeds(bytes: &[u8], limit: usize) -> bool {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for &byte in bytes {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                if depth > limit {
                    return true;
                }
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    false
}

fn classify(err: serde_json::Error) -> ParseError {
    let (line, column) = (err.line(), err.column());
    match err.classify() {
        Category::Eof => ParseError::UnexpectedEof { line, column },
        _ => ParseError::Syntax {
            line,
            column,
            message: message_without_position(&err),
        },
    }
}

// serde_json appends " at line L column C"; the position has its own fields
fn message_without_position(err: &serde_json::Error) -> String {
    let text = err.to_string();
    match text.rfind(" at line ") {
        Some(idx) => text[..idx].to_string(),
        None => text,
    }
}
