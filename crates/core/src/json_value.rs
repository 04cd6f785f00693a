//! The value wrapper and its traversal operators
//!
//! [`JsonValue`] is either positioned over a [`Node`] or carries a
//! [`DecodeError`] forward. Traversal comes in two tiers:
//!
//! | Failing (terminal) | Deferred (never fails) |
//! |--------------------|------------------------|
//! | `sub_key(key)` | `by_key(key)` |
//! | `sub_index(i)` | `by_index(i)` |
//! | `sub(index)` | `get(index)` |
//! | `decode::<T>()` | `decode_optional::<T>()` |
//!
//! Deferred steps on a failed wrapper are no-ops, so a chain reports the
//! error of its earliest failing step:
//!
//! ```
//! use minjson_core::{ErrorKind, JsonValue, Node};
//!
//! let node: Node = [("a", Node::from(vec![1, 2, 3]))].into_iter().collect();
//! let root = JsonValue::new(&node);
//!
//! assert_eq!(root.get("a").get(-1).decode::<i64>().unwrap(), 3);
//!
//! let err = root.get("missing").get(0).get("b").decode::<i64>().unwrap_err();
//! assert_eq!(err.kind(), &ErrorKind::MissingKey("missing".into()));
//! ```

use crate::decode::Decodable;
use crate::error::DecodeError;
use crate::node::Node;
use std::panic::Location;

/// A node reached by zero or more traversal steps, or the error that stopped
/// the traversal.
///
/// Positioned wrappers borrow the tree; cloning one is a pointer copy.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue<'a> {
    /// Traversal succeeded so far
    Positioned(&'a Node),

    /// Traversal failed; every later operation returns this error
    Failed(DecodeError),
}

impl<'a> JsonValue<'a> {
    /// Wrap an already-parsed node
    pub fn new(node: &'a Node) -> Self {
        JsonValue::Positioned(node)
    }

    /// Wrap an error as a failed value
    pub fn failed(error: DecodeError) -> Self {
        JsonValue::Failed(error)
    }

    /// Check if this wrapper carries an error
    pub fn is_failed(&self) -> bool {
        matches!(self, JsonValue::Failed(_))
    }

    /// The carried error, if any
    pub fn error(&self) -> Option<&DecodeError> {
        match self {
            JsonValue::Positioned(_) => None,
            JsonValue::Failed(err) => Some(err),
        }
    }

    /// The positioned node, or a clone of the carried error
    pub fn node(&self) -> Result<&'a Node, DecodeError> {
        match self {
            JsonValue::Positioned(node) => Ok(node),
            JsonValue::Failed(err) => Err(err.clone()),
        }
    }

    /// Convert into the positioned node or the carried error
    pub fn into_result(self) -> Result<&'a Node, DecodeError> {
        match self {
            JsonValue::Positioned(node) => Ok(node),
            JsonValue::Failed(err) => Err(err),
        }
    }

    // ========================================================================
    // Failing traversal
    // ========================================================================

    /// Look up `key` in the object this wrapper is positioned over.
    ///
    /// # Errors
    ///
    /// - the carried error, unchanged, if the wrapper is failed
    /// - `IncompatibleType("dictionary")` if the node is not an object
    /// - `MissingKey(key)` if the key is absent
    #[track_caller]
    pub fn sub_key(&self, key: &str) -> Result<JsonValue<'a>, DecodeError> {
        let node = self.node()?;
        let Node::Object(map) = node else {
            return Err(DecodeError::incompatible_type("dictionary")
                .with_value(node)
                .located());
        };
        match map.get(key) {
            Some(child) => Ok(JsonValue::Positioned(child)),
            None => Err(DecodeError::missing_key(key).with_value(node).located()),
        }
    }

    /// Look up element `index` in the array this wrapper is positioned over.
    ///
    /// Negative indices count from the end: `-1` is the last element.
    ///
    /// # Errors
    ///
    /// - the carried error, unchanged, if the wrapper is failed
    /// - `IncompatibleType("array")` if the node is not an array
    /// - `OutOfBounds(index)` with the index as requested (before resolving
    ///   a negative index) if no element exists there
    #[track_caller]
    pub fn sub_index(&self, index: isize) -> Result<JsonValue<'a>, DecodeError> {
        let node = self.node()?;
        let Node::Array(items) = node else {
            return Err(DecodeError::incompatible_type("array")
                .with_value(node)
                .located());
        };
        let resolved = if index < 0 {
            // Vec lengths never exceed isize::MAX
            items.len() as isize + index
        } else {
            index
        };
        match usize::try_from(resolved).ok().and_then(|i| items.get(i)) {
            Some(child) => Ok(JsonValue::Positioned(child)),
            None => Err(DecodeError::out_of_bounds(index).with_value(node).located()),
        }
    }

    /// Failing traversal by key or index.
    #[track_caller]
    pub fn sub<I: JsonIndex>(&self, index: I) -> Result<JsonValue<'a>, DecodeError> {
        index.sub_of(self)
    }

    // ========================================================================
    // Deferred traversal
    // ========================================================================

    /// Like [`sub_key`](Self::sub_key), but a failure becomes a failed
    /// wrapper instead of an `Err`.
    #[track_caller]
    pub fn by_key(&self, key: &str) -> JsonValue<'a> {
        Self::defer(self.sub_key(key))
    }

    /// Like [`sub_index`](Self::sub_index), but a failure becomes a failed
    /// wrapper instead of an `Err`.
    #[track_caller]
    pub fn by_index(&self, index: isize) -> JsonValue<'a> {
        Self::defer(self.sub_index(index))
    }

    /// Deferred traversal by key or index; the building block of unguarded
    /// chains such as `value.get("a").get(2).get("b")`.
    #[track_caller]
    pub fn get<I: JsonIndex>(&self, index: I) -> JsonValue<'a> {
        Self::defer(index.sub_of(self))
    }

    fn defer(result: Result<JsonValue<'a>, DecodeError>) -> JsonValue<'a> {
        result.unwrap_or_else(|err| {
            tracing::trace!(kind = err.kind().code(), "deferring traversal failure");
            JsonValue::Failed(err)
        })
    }

    // ========================================================================
    // Decoding
    // ========================================================================

    /// Decode the wrapped node as `T`.
    ///
    /// A failed wrapper returns its carried error without consulting `T`.
    /// `Vec<T>` decodes an array element by element and stops at the first
    /// failing element.
    #[track_caller]
    pub fn decode<T: Decodable>(&self) -> Result<T, DecodeError> {
        let site = Location::caller();
        match self {
            JsonValue::Failed(err) => Err(err.clone().at(site)),
            JsonValue::Positioned(_) => T::decode(self).map_err(|err| err.at(site)),
        }
    }

    /// Decode as `T`, turning any failure into `None`.
    ///
    /// This is the error-to-optional adapter for optional fields; it does not
    /// distinguish an absent key from a present value of the wrong type.
    #[track_caller]
    pub fn decode_optional<T: Decodable>(&self) -> Option<T> {
        match self.decode() {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::trace!(error = %err, "optional decode treated as absent");
                None
            }
        }
    }

    // ========================================================================
    // Sequence view
    // ========================================================================

    /// Element count for index-based access.
    ///
    /// This is the array length when positioned over an array and **1** in
    /// every other case, including failed wrappers. A loop over `0..len()` on
    /// a non-array therefore still visits index 0 and surfaces the failure
    /// there. It is not a collection-size query; use
    /// [`Node::as_array`] for that.
    pub fn len(&self) -> usize {
        match self {
            JsonValue::Positioned(Node::Array(items)) => items.len(),
            _ => 1,
        }
    }

    /// `len() == 0`; only an empty array is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate `by_index(i)` for every `i` in `0..len()`.
    pub fn iter(&self) -> Elements<'_, 'a> {
        Elements {
            value: self,
            next: 0,
            len: self.len(),
        }
    }
}

impl<'a> From<&'a Node> for JsonValue<'a> {
    fn from(node: &'a Node) -> Self {
        JsonValue::Positioned(node)
    }
}

impl<'a> From<DecodeError> for JsonValue<'a> {
    fn from(err: DecodeError) -> Self {
        JsonValue::Failed(err)
    }
}

impl<'v, 'a> IntoIterator for &'v JsonValue<'a> {
    type Item = JsonValue<'a>;
    type IntoIter = Elements<'v, 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the index-based view of a [`JsonValue`].
///
/// See [`JsonValue::len`] for the element count rules.
#[derive(Debug, Clone)]
pub struct Elements<'v, 'a> {
    value: &'v JsonValue<'a>,
    next: usize,
    len: usize,
}

impl<'v, 'a> Iterator for Elements<'v, 'a> {
    type Item = JsonValue<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.len {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(self.value.by_index(index as isize))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Elements<'_, '_> {}

// ============================================================================
// Index types
// ============================================================================

mod private {
    pub trait Sealed {}
}

/// Types usable with [`JsonValue::sub`] and [`JsonValue::get`]: string keys
/// and signed or unsigned indices.
///
/// Indices are carried as `isize`. An `i64` or `usize` outside that range
/// clamps to `isize::MIN` or `isize::MAX` first; no array is that long, so
/// the lookup fails `OutOfBounds` carrying the clamped value.
///
/// This trait is sealed.
pub trait JsonIndex: private::Sealed {
    /// Perform the failing lookup on `value`
    #[track_caller]
    fn sub_of<'a>(&self, value: &JsonValue<'a>) -> Result<JsonValue<'a>, DecodeError>;
}

impl private::Sealed for str {}
impl JsonIndex for str {
    #[track_caller]
    fn sub_of<'a>(&self, value: &JsonValue<'a>) -> Result<JsonValue<'a>, DecodeError> {
        value.sub_key(self)
    }
}

impl private::Sealed for String {}
impl JsonIndex for String {
    #[track_caller]
    fn sub_of<'a>(&self, value: &JsonValue<'a>) -> Result<JsonValue<'a>, DecodeError> {
        value.sub_key(self)
    }
}

impl<T: JsonIndex + ?Sized> private::Sealed for &T {}
impl<T: JsonIndex + ?Sized> JsonIndex for &T {
    #[track_caller]
    fn sub_of<'a>(&self, value: &JsonValue<'a>) -> Result<JsonValue<'a>, DecodeError> {
        (**self).sub_of(value)
    }
}

macro_rules! signed_index {
    ($($ty:ty),*) => {$(
        impl private::Sealed for $ty {}
        impl JsonIndex for $ty {
            #[track_caller]
            fn sub_of<'a>(&self, value: &JsonValue<'a>) -> Result<JsonValue<'a>, DecodeError> {
                // Out of isize range can only mean out of bounds
                let index = isize::try_from(*self).unwrap_or(if *self < 0 {
                    isize::MIN
                } else {
                    isize::MAX
                });
                value.sub_index(index)
            }
        }
    )*};
}

signed_index!(isize, i32, i64);

impl private::Sealed for usize {}
impl JsonIndex for usize {
    #[track_caller]
    fn sub_of<'a>(&self, value: &JsonValue<'a>) -> Result<JsonValue<'a>, DecodeError> {
        value.sub_index(isize::try_from(*self).unwrap_or(isize::MAX))
    }
}
