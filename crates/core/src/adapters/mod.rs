//! Platform-type adapters
//!
//! Each adapter is a thin registration of how to build a type from a decoded
//! primitive or sub-object. Feature gates:
//!
//! | Module | Type | Feature |
//! |--------|------|---------|
//! | `coordinate` | [`Coordinate`] | always |
//! | `url` | `url::Url` | `url` |
//! | `date` | `chrono::DateTime<FixedOffset>`, `chrono::DateTime<Utc>` | `chrono` |
//! | `timezone` | `jiff::tz::TimeZone` | `tz` |

mod coordinate;
#[cfg(feature = "chrono")]
mod date;
#[cfg(feature = "tz")]
mod timezone;
#[cfg(feature = "url")]
mod url;

pub use coordinate::Coordinate;
#[cfg(feature = "chrono")]
pub use date::DATE_FORMAT;

use crate::error::DecodeError;
use crate::json_value::JsonValue;
use crate::node::Node;

/// Decode `value` as a string, then build `T` from it.
///
/// A string that `build` rejects fails `IncompatibleType(type_name)` with the
/// builder's message as detail.
pub(crate) fn from_string<T, E: std::fmt::Display>(
    value: &JsonValue<'_>,
    type_name: &str,
    build: impl FnOnce(&str) -> Result<T, E>,
) -> Result<T, DecodeError> {
    let node = value.node()?;
    let Node::String(text) = node else {
        return Err(DecodeError::incompatible_type("String").with_value(node));
    };
    build(text).map_err(|e| {
        DecodeError::incompatible_type(type_name)
            .with_value(node)
            .with_detail(e.to_string())
    })
}
