//! Decode error types
//!
//! Every failure in minjson is a [`DecodeError`]: one [`ErrorKind`] from a
//! closed set, plus diagnostics.
//!
//! ## Error Kinds
//!
//! | Kind | Raised when |
//! |------|-------------|
//! | UnableToParse | The parser rejected the raw input |
//! | MissingKey | Object lookup missed |
//! | OutOfBounds | Array index missed (original, unresolved index) |
//! | IncompatibleType | Node shape or content does not fit the requested type |
//!
//! ## Diagnostics
//!
//! - `value`: snapshot of the node the failing operation was looking at
//! - `site`: source location of the call that surfaced or deferred the error
//! - `detail`: free-form context (parser message, adapter failure)
//!
//! None of the diagnostics take part in equality.

use crate::node::Node;
use std::fmt;
use std::panic::Location;
use thiserror::Error;

/// The closed set of failure kinds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The raw input could not be parsed
    UnableToParse,

    /// Key absent from an object
    MissingKey(String),

    /// Index outside an array, as originally requested (may be negative)
    OutOfBounds(isize),

    /// Node could not be read as the named type
    IncompatibleType(String),
}

impl ErrorKind {
    /// Get the canonical error code
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::UnableToParse => "UnableToParse",
            ErrorKind::MissingKey(_) => "MissingKey",
            ErrorKind::OutOfBounds(_) => "OutOfBounds",
            ErrorKind::IncompatibleType(_) => "IncompatibleType",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::UnableToParse => f.write_str("unable to parse"),
            ErrorKind::MissingKey(key) => write!(f, "missing key {:?}", key),
            ErrorKind::OutOfBounds(index) => write!(f, "index {} out of bounds", index),
            ErrorKind::IncompatibleType(name) => write!(f, "incompatible type, expected {}", name),
        }
    }
}

/// A decode or traversal failure.
#[derive(Debug, Clone, Error)]
#[error("{kind}{}{}{}", fmt_detail(.detail), fmt_value(.value), fmt_site(.site))]
pub struct DecodeError {
    kind: ErrorKind,
    value: Option<Node>,
    site: Option<&'static Location<'static>>,
    detail: Option<String>,
}

fn fmt_detail(detail: &Option<String>) -> String {
    detail
        .as_ref()
        .map(|d| format!(": {}", d))
        .unwrap_or_default()
}

fn fmt_value(value: &Option<Node>) -> String {
    match value {
        Some(node) => format!(" (json: {})", node),
        None => " (json: none)".to_string(),
    }
}

fn fmt_site(site: &Option<&'static Location<'static>>) -> String {
    site.map(|s| format!(" at {}:{}", s.file(), s.line()))
        .unwrap_or_default()
}

impl DecodeError {
    /// Create an error with no diagnostics attached
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            value: None,
            site: None,
            detail: None,
        }
    }

    /// `UnableToParse`
    pub fn unable_to_parse() -> Self {
        Self::new(ErrorKind::UnableToParse)
    }

    /// `MissingKey(key)`
    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingKey(key.into()))
    }

    /// `OutOfBounds(index)`
    pub fn out_of_bounds(index: isize) -> Self {
        Self::new(ErrorKind::OutOfBounds(index))
    }

    /// `IncompatibleType(type_name)`
    pub fn incompatible_type(type_name: impl Into<String>) -> Self {
        Self::new(ErrorKind::IncompatibleType(type_name.into()))
    }

    /// Attach a snapshot of the offending node
    pub fn with_value(mut self, node: &Node) -> Self {
        self.value = Some(node.clone());
        self
    }

    /// Attach free-form context
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Record the caller's location unless a site is already recorded.
    ///
    /// The first recorded site is kept, so an error carried through a chain
    /// points at the step that failed first.
    #[track_caller]
    pub fn located(self) -> Self {
        self.at(Location::caller())
    }

    /// Record `site` unless a site is already recorded
    pub fn at(mut self, site: &'static Location<'static>) -> Self {
        if self.site.is_none() {
            self.site = Some(site);
        }
        self
    }

    /// The failure kind
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Snapshot of the node the failing operation was looking at
    pub fn value(&self) -> Option<&Node> {
        self.value.as_ref()
    }

    /// Where the error was surfaced or first deferred
    pub fn site(&self) -> Option<&'static Location<'static>> {
        self.site
    }

    /// Free-form context
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Check if this is a missing-key error.
    pub fn is_missing_key(&self) -> bool {
        matches!(self.kind, ErrorKind::MissingKey(_))
    }

    /// Check if this is a type-mismatch error.
    pub fn is_incompatible_type(&self) -> bool {
        matches!(self.kind, ErrorKind::IncompatibleType(_))
    }
}

impl PartialEq for DecodeError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

impl From<ErrorKind> for DecodeError {
    fn from(kind: ErrorKind) -> Self {
        DecodeError::new(kind)
    }
}
