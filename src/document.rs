//! Parsed documents and the parse entry points.

use crate::error::{unable_to_parse, Result};
use minjson_core::{Decodable, DecodeError, JsonIndex, JsonValue, Node};
use minjson_wire::{parse_slice_with, ParseError, ParseOptions};

/// An owned parse result.
///
/// A document always exists, even when parsing failed: its root is then a
/// failed wrapper carrying `UnableToParse`, and every traversal or decode
/// from it reports that error.
///
/// # Example
///
/// ```
/// use minjson::{Document, ErrorKind};
///
/// let doc = Document::parse_str(r#"[{"name": "Ben"}, {"name": "Kat"}]"#);
/// assert_eq!(doc.get(-1).get("name").decode::<String>().unwrap(), "Kat");
///
/// let broken = Document::parse_str("[1, 2");
/// let err = broken.get(0).decode::<i64>().unwrap_err();
/// assert_eq!(err.kind(), &ErrorKind::UnableToParse);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: std::result::Result<Node, DecodeError>,
}

impl Document {
    /// Parse UTF-8 JSON bytes with default limits.
    pub fn parse(bytes: &[u8]) -> Self {
        Self::builder().parse(bytes)
    }

    /// Parse JSON text with default limits.
    pub fn parse_str(text: &str) -> Self {
        Self::parse(text.as_bytes())
    }

    /// Parse bytes, returning the parser's error instead of a failed document.
    pub fn try_parse(bytes: &[u8]) -> std::result::Result<Self, ParseError> {
        Self::builder().try_parse(bytes)
    }

    /// Parse text, returning the parser's error instead of a failed document.
    pub fn try_parse_str(text: &str) -> std::result::Result<Self, ParseError> {
        Self::try_parse(text.as_bytes())
    }

    /// Wrap an already-built tree
    pub fn from_node(node: Node) -> Self {
        Self { root: Ok(node) }
    }

    /// Create a builder for parse limits.
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::new()
    }

    /// The root wrapper
    pub fn root(&self) -> JsonValue<'_> {
        match &self.root {
            Ok(node) => JsonValue::Positioned(node),
            Err(err) => JsonValue::Failed(err.clone()),
        }
    }

    /// Check if parsing failed
    pub fn is_failed(&self) -> bool {
        self.root.is_err()
    }

    /// The parsed tree, if parsing succeeded
    pub fn node(&self) -> Option<&Node> {
        self.root.as_ref().ok()
    }

    /// Deferred step from the root; see [`JsonValue::get`].
    #[track_caller]
    pub fn get<I: JsonIndex>(&self, index: I) -> JsonValue<'_> {
        self.root().get(index)
    }

    /// Decode the root; see [`JsonValue::decode`].
    #[track_caller]
    pub fn decode<T: Decodable>(&self) -> std::result::Result<T, DecodeError> {
        self.root().decode()
    }

    /// Take the tree out, or the recorded parse failure.
    pub fn into_node(self) -> std::result::Result<Node, DecodeError> {
        self.root
    }
}

impl From<Node> for Document {
    fn from(node: Node) -> Self {
        Document::from_node(node)
    }
}

/// Builder for parse limits.
///
/// # Example
///
/// ```
/// use minjson::{Document, ErrorKind};
///
/// let doc = Document::builder().max_depth(2).parse(b"[[[]]]");
/// assert!(doc.is_failed());
///
/// let doc = Document::builder()
///     .max_depth(8)
///     .max_input_len(1024)
///     .parse(br#"{"ok": true}"#);
/// assert!(doc.get("ok").decode::<bool>().unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentBuilder {
    options: ParseOptions,
}

impl DocumentBuilder {
    /// Create a builder with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum nesting depth.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options = self.options.max_depth(depth);
        self
    }

    /// Maximum input length in bytes.
    pub fn max_input_len(mut self, len: usize) -> Self {
        self.options = self.options.max_input_len(len);
        self
    }

    /// The limits this builder will parse with
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse bytes into a document; failures land in the document's root.
    pub fn parse(&self, bytes: &[u8]) -> Document {
        let root = parse_slice_with(bytes, &self.options).map_err(|err| unable_to_parse(&err));
        Document { root }
    }

    /// Parse bytes, surfacing the parser's error directly.
    pub fn try_parse(&self, bytes: &[u8]) -> std::result::Result<Document, ParseError> {
        let node = parse_slice_with(bytes, &self.options)?;
        Ok(Document::from_node(node))
    }
}

/// Parse and decode in one step.
///
/// # Example
///
/// ```
/// let numbers: Vec<i64> = minjson::from_str("[1, 2, 3]").unwrap();
/// assert_eq!(numbers, vec![1, 2, 3]);
///
/// let err = minjson::from_str::<Vec<i64>>("[1, 2").unwrap_err();
/// assert!(err.is_parse());
/// ```
#[track_caller]
pub fn from_slice<T: Decodable>(bytes: &[u8]) -> Result<T> {
    let doc = Document::try_parse(bytes)?;
    Ok(doc.decode()?)
}

/// Parse and decode text in one step.
#[track_caller]
pub fn from_str<T: Decodable>(text: &str) -> Result<T> {
    from_slice(text.as_bytes())
}
