//! Node.js bindings for ukpostcode.

use napi::{Error, Result, Status};
use napi_derive::napi;
use serde_json::{json, Value};

/// Validate a UK postcode, returning true or throwing an `InvalidArg` error.
#[napi]
pub fn validate(postcode: String) -> Result<bool> {
    ukpostcode_core::validate(&postcode)
        .map(|_| true)
        .map_err(|e| Error::new(Status::InvalidArg, e.to_string()))
}

#[napi]
pub fn is_valid(postcode: String) -> bool {
    ukpostcode_core::is_valid(&postcode)
}

/// Validate without throwing: `{ valid, postcode }` or `{ valid, error: { kind, part, message } }`.
#[napi]
pub fn check(postcode: String) -> Value {
    match ukpostcode_core::validate(&postcode) {
        Ok(accepted) => json!({ "valid": true, "postcode": accepted }),
        Err(error) => json!({ "valid": false, "error": error }),
    }
}
