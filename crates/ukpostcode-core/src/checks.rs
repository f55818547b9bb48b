//! Individual structural checks.
//!
//! Each check is a stateless predicate over one segment and returns the
//! error for its rule category on failure.

use std::ops::{Range, RangeInclusive};

use crate::error::{ErrorKind, ValidationError};
use crate::rules::Part;

/// Split a candidate on a single space into non-empty outward and inward segments.
pub(crate) fn split_parts(candidate: &str) -> Result<(&str, &str), ValidationError> {
    let mut segments = candidate.split(' ');
    match (segments.next(), segments.next(), segments.next()) {
        (Some(outward), Some(inward), None) if !outward.is_empty() && !inward.is_empty() => {
            Ok((outward, inward))
        }
        _ => Err(ValidationError::malformed()),
    }
}

pub(crate) fn check_alphanumeric(segment: &str, part: Part) -> Result<(), ValidationError> {
    if segment.is_empty() || !segment.chars().all(char::is_alphanumeric) {
        return Err(ValidationError::in_part(
            ErrorKind::InvalidCharacter,
            part,
            format!("{part} part `{segment}` includes non-alphanumeric characters"),
        ));
    }
    Ok(())
}

pub(crate) fn check_length(
    segment: &str,
    part: Part,
    bounds: &RangeInclusive<usize>,
) -> Result<(), ValidationError> {
    let length = segment.chars().count();
    if bounds.contains(&length) {
        return Ok(());
    }

    let expected = if bounds.start() == bounds.end() {
        format!("exactly {}", bounds.start())
    } else {
        format!("between {} and {}", bounds.start(), bounds.end())
    };
    Err(ValidationError::in_part(
        ErrorKind::InvalidLength,
        part,
        format!("{part} part `{segment}` must be {expected} characters long, got {length}"),
    ))
}

pub(crate) fn check_alphabetic(
    segment: &str,
    part: Part,
    window: &Range<usize>,
) -> Result<(), ValidationError> {
    check_window(segment, part, window, char::is_alphabetic, "alphabetic")
}

pub(crate) fn check_numeric(
    segment: &str,
    part: Part,
    window: &Range<usize>,
) -> Result<(), ValidationError> {
    check_window(segment, part, window, char::is_numeric, "numeric")
}

fn check_window(
    segment: &str,
    part: Part,
    window: &Range<usize>,
    class: fn(char) -> bool,
    class_name: &str,
) -> Result<(), ValidationError> {
    let length = segment.chars().count();
    if window.is_empty() || window.end > length {
        return Err(ValidationError::in_part(
            ErrorKind::InvalidPattern,
            part,
            format!(
                "{part} part `{segment}` is too short to hold {class_name} characters at positions {}..{}",
                window.start, window.end
            ),
        ));
    }

    let matches = segment
        .chars()
        .skip(window.start)
        .take(window.len())
        .all(class);
    if !matches {
        return Err(ValidationError::in_part(
            ErrorKind::InvalidPattern,
            part,
            format!(
                "{part} part `{segment}` must be {class_name} at positions {}..{}",
                window.start, window.end
            ),
        ));
    }
    Ok(())
}
