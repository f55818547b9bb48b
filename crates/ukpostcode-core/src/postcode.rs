//! The accepted postcode value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validator::validate;

/// A postcode that passed every structural check.
///
/// Only obtainable through [`validate`] (or the `FromStr`/`TryFrom`/serde
/// impls, which call it), so holding one means the text is well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Postcode {
    outward: String,
    inward: String,
}

impl Postcode {
    pub(crate) fn new(outward: &str, inward: &str) -> Self {
        Self {
            outward: outward.to_string(),
            inward: inward.to_string(),
        }
    }

    /// Segment before the space (area + district).
    pub fn outward(&self) -> &str {
        &self.outward
    }

    /// Segment after the space (sector + unit).
    pub fn inward(&self) -> &str {
        &self.inward
    }

    /// Leading alphabetic run of the outward part, e.g. `EC` in `EC1A`.
    pub fn area(&self) -> &str {
        let end = self
            .outward
            .char_indices()
            .find(|(_, c)| !c.is_alphabetic())
            .map_or(self.outward.len(), |(i, _)| i);
        &self.outward[..end]
    }

    /// Remainder of the outward part after the area, e.g. `1A` in `EC1A`.
    pub fn district(&self) -> &str {
        &self.outward[self.area().len()..]
    }

    /// Numeric first character of the inward part.
    pub fn sector(&self) -> &str {
        let end = self
            .inward
            .char_indices()
            .nth(1)
            .map_or(self.inward.len(), |(i, _)| i);
        &self.inward[..end]
    }

    /// Trailing letters of the inward part.
    pub fn unit(&self) -> &str {
        &self.inward[self.sector().len()..]
    }
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.outward, self.inward)
    }
}

impl FromStr for Postcode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)
    }
}

impl TryFrom<&str> for Postcode {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        validate(value)
    }
}

impl TryFrom<String> for Postcode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate(&value)
    }
}

impl From<Postcode> for String {
    fn from(postcode: Postcode) -> Self {
        postcode.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_decomposition() {
        let postcode: Postcode = "EC1A 1BB".parse().unwrap();
        assert_eq!(postcode.outward(), "EC1A");
        assert_eq!(postcode.inward(), "1BB");
        assert_eq!(postcode.area(), "EC");
        assert_eq!(postcode.district(), "1A");
        assert_eq!(postcode.sector(), "1");
        assert_eq!(postcode.unit(), "BB");
    }

    #[test]
    fn test_all_letter_outward_has_empty_district() {
        let postcode = Postcode::try_from("TKCA 1ZZ").unwrap();
        assert_eq!(postcode.area(), "TKCA");
        assert_eq!(postcode.district(), "");
    }

    #[test]
    fn test_display_round_trips_input() {
        let postcode = Postcode::try_from(String::from("M1 1AE")).unwrap();
        assert_eq!(postcode.to_string(), "M1 1AE");
    }

    #[test]
    fn test_parse_rejects() {
        let err = "GU26 6".parse::<Postcode>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLength);
    }

    #[test]
    fn test_serde_as_string() {
        let postcode: Postcode = "SW1W 0NY".parse().unwrap();
        assert_eq!(serde_json::to_string(&postcode).unwrap(), r#""SW1W 0NY""#);

        let back: Postcode = serde_json::from_str(r#""SW1W 0NY""#).unwrap();
        assert_eq!(back, postcode);

        assert!(serde_json::from_str::<Postcode>(r#""1234 AAA""#).is_err());
    }
}
