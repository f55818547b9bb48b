//! Validation pipeline: split, check outward, check inward.
//!
//! Checks run in a fixed order and the first failure short-circuits the rest:
//! 1. alphanumeric
//! 2. length
//! 3. alphabetic window
//! 4. numeric window (inward only)

use tracing::{debug, trace};

use crate::checks::{
    check_alphabetic, check_alphanumeric, check_length, check_numeric, split_parts,
};
use crate::error::ValidationError;
use crate::postcode::Postcode;
use crate::rules::{PartRules, INWARD_RULES, OUTWARD_RULES};

/// Validate a candidate UK postcode.
///
/// The candidate is taken as-is: no trimming, no case folding. It must hold
/// exactly one space separating the outward and inward parts.
///
/// # Returns
///
/// The accepted [`Postcode`], or a [`ValidationError`] describing the first
/// rule violated.
pub fn validate(candidate: &str) -> Result<Postcode, ValidationError> {
    let result = split_parts(candidate).and_then(|(outward, inward)| {
        validate_part(outward, &OUTWARD_RULES)?;
        validate_part(inward, &INWARD_RULES)?;
        Ok(Postcode::new(outward, inward))
    });

    match &result {
        Ok(_) => trace!(candidate, "postcode accepted"),
        Err(e) => debug!(candidate, kind = %e.kind(), part = ?e.part(), "postcode rejected"),
    }

    result
}

/// Check whether a candidate is a structurally valid UK postcode.
pub fn is_valid(candidate: &str) -> bool {
    validate(candidate).is_ok()
}

/// Run one part's check sequence against a segment.
pub fn validate_part(segment: &str, rules: &PartRules) -> Result<(), ValidationError> {
    check_alphanumeric(segment, rules.part)?;
    check_length(segment, rules.part, &rules.length)?;
    check_alphabetic(segment, rules.part, &rules.alphabetic)?;
    if let Some(numeric) = &rules.numeric {
        check_numeric(segment, rules.part, numeric)?;
    }
    Ok(())
}
