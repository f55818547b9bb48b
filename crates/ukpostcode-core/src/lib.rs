//! # ukpostcode-core
//!
//! Structural validation of UK postcodes.
//!
//! A postcode is split on a single space into an outward part (area +
//! district) and an inward part (sector + unit), and each part runs an
//! ordered sequence of checks. The first violated rule is reported.
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same input always produces same output
//! 2. **Pure**: No I/O, no shared state, safe to call from any thread
//! 3. **Specific**: Every rejection names its kind, part, and rule
//!
//! ## Example
//!
//! ```rust
//! use ukpostcode_core::{validate, ErrorKind};
//!
//! let postcode = validate("EC1A 1BB").unwrap();
//! assert_eq!(postcode.area(), "EC");
//!
//! let err = validate("GU26 6").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidLength);
//! ```

mod checks;
pub mod error;
pub mod postcode;
pub mod rules;
pub mod validator;

// Re-export main types at crate root
pub use error::{ErrorKind, ValidationError};
pub use postcode::Postcode;
pub use rules::{
    Part, PartRules, INWARD_ALPHA_RANGE, INWARD_LENGTH_RANGE, INWARD_NUMERIC_RANGE,
    INWARD_RULES, OUTWARD_ALPHA_RANGE, OUTWARD_LENGTH_RANGE, OUTWARD_RULES,
};
pub use validator::{is_valid, validate, validate_part};
