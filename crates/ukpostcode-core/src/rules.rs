//! Fixed structural rules for each postcode part.
//!
//! All position windows are half-open `[start, end)` ranges counted in
//! characters, not bytes.

use std::fmt;
use std::ops::{Range, RangeInclusive};

use serde::{Deserialize, Serialize};

/// Allowed length of the outward part.
pub const OUTWARD_LENGTH_RANGE: RangeInclusive<usize> = 2..=4;

/// Window of the outward part that must be alphabetic.
pub const OUTWARD_ALPHA_RANGE: Range<usize> = 0..1;

/// Allowed length of the inward part.
pub const INWARD_LENGTH_RANGE: RangeInclusive<usize> = 3..=3;

/// Window of the inward part that must be alphabetic.
pub const INWARD_ALPHA_RANGE: Range<usize> = 1..3;

/// Window of the inward part that must be numeric.
pub const INWARD_NUMERIC_RANGE: Range<usize> = 0..1;

/// Rules for the outward part (area + district).
pub const OUTWARD_RULES: PartRules = PartRules {
    part: Part::Outward,
    length: OUTWARD_LENGTH_RANGE,
    alphabetic: OUTWARD_ALPHA_RANGE,
    numeric: None,
};

/// Rules for the inward part (sector + unit).
pub const INWARD_RULES: PartRules = PartRules {
    part: Part::Inward,
    length: INWARD_LENGTH_RANGE,
    alphabetic: INWARD_ALPHA_RANGE,
    numeric: Some(INWARD_NUMERIC_RANGE),
};

/// Which half of a postcode a check applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Part {
    /// Segment before the space: postal area and district.
    Outward,
    /// Segment after the space: sector and unit.
    Inward,
}

impl Part {
    pub fn as_str(&self) -> &'static str {
        match self {
            Part::Outward => "outward",
            Part::Inward => "inward",
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Length bounds and character-class windows for one part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartRules {
    /// The part these rules describe
    pub part: Part,

    /// Inclusive length bounds
    pub length: RangeInclusive<usize>,

    /// Window that must contain only alphabetic characters
    pub alphabetic: Range<usize>,

    /// Window that must contain only numeric characters, if any
    pub numeric: Option<Range<usize>>,
}

impl PartRules {
    /// Rules for the given part.
    pub fn for_part(part: Part) -> Self {
        match part {
            Part::Outward => OUTWARD_RULES,
            Part::Inward => INWARD_RULES,
        }
    }
}
