use super::from_string;
use crate::decode::Decodable;
use crate::error::DecodeError;
use crate::json_value::JsonValue;
use url::Url;

/// Decodes an absolute URL string with [`Url::parse`].
impl Decodable for Url {
    fn decode(value: &JsonValue<'_>) -> Result<Self, DecodeError> {
        from_string(value, "Url", Url::parse)
    }
}
