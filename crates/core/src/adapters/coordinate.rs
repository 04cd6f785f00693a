use crate::decode::Initializable;
use crate::error::DecodeError;
use crate::json_value::JsonValue;

/// A geographic coordinate in degrees.
///
/// Decodes from an object of the form
/// `{"latitude": 37.7241452, "longitude": -122.4409553}`; extra keys are
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Degrees north of the equator
    pub latitude: f64,
    /// Degrees east of the prime meridian
    pub longitude: f64,
}

impl Initializable for Coordinate {
    fn init(json: &JsonValue<'_>) -> Result<Self, DecodeError> {
        Ok(Coordinate {
            latitude: json.get("latitude").decode()?,
            longitude: json.get("longitude").decode()?,
        })
    }
}
