//! Validation error types.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::rules::Part;

/// Category of rule a rejected postcode violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The candidate could not be split into exactly two parts.
    MalformedInput,
    /// A part contains a non-alphanumeric character.
    InvalidCharacter,
    /// A part's length is outside its allowed bounds.
    InvalidLength,
    /// A positional alphabetic or numeric constraint is violated.
    InvalidPattern,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MalformedInput => "malformed_input",
            ErrorKind::InvalidCharacter => "invalid_character",
            ErrorKind::InvalidLength => "invalid_length",
            ErrorKind::InvalidPattern => "invalid_pattern",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A postcode rejection: the first rule the candidate violated.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{kind}: {message}")]
pub struct ValidationError {
    kind: ErrorKind,

    /// `None` when the candidate never got split into parts
    #[serde(skip_serializing_if = "Option::is_none")]
    part: Option<Part>,

    message: String,
}

impl ValidationError {
    pub(crate) fn malformed() -> Self {
        Self {
            kind: ErrorKind::MalformedInput,
            part: None,
            message: "cannot extract parts, postcode must have exactly one space between \
                      outward and inward parts"
                .to_string(),
        }
    }

    pub(crate) fn in_part(kind: ErrorKind, part: Part, message: impl Into<String>) -> Self {
        Self {
            kind,
            part: Some(part),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn part(&self) -> Option<Part> {
        self.part
    }

    /// Human-readable description naming the offending part and rule.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind() {
        let err = ValidationError::in_part(
            ErrorKind::InvalidLength,
            Part::Inward,
            "inward part `6` must be exactly 3 characters long, got 1",
        );
        assert_eq!(
            err.to_string(),
            "invalid_length: inward part `6` must be exactly 3 characters long, got 1"
        );
    }

    #[test]
    fn test_malformed_has_no_part() {
        let err = ValidationError::malformed();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
        assert_eq!(err.part(), None);
        assert!(err.message().contains("exactly one space"));
    }

    #[test]
    fn test_serialize_shape() {
        let err = ValidationError::in_part(ErrorKind::InvalidPattern, Part::Outward, "bad");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "invalid_pattern");
        assert_eq!(json["part"], "outward");
        assert_eq!(json["message"], "bad");

        let json = serde_json::to_value(ValidationError::malformed()).unwrap();
        assert!(json.get("part").is_none());
    }
}
