//! Python bindings for ukpostcode.
//!
//! ```python
//! from ukpostcode import validate, PostCodeValidationError
//!
//! validate("EC1A 1BB")  # True
//! validate("GU26 6")    # raises PostCodeValidationError
//! ```

use pyo3::create_exception;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

create_exception!(
    ukpostcode,
    PostCodeValidationError,
    PyValueError,
    "Raised when a postcode breaks a structural rule. args are (kind, message)."
);

/// Validate a UK postcode, returning True or raising PostCodeValidationError.
#[pyfunction]
fn validate(postcode: &str) -> PyResult<bool> {
    ukpostcode_core::validate(postcode)
        .map(|_| true)
        .map_err(|e| PostCodeValidationError::new_err((e.kind().as_str(), e.message().to_string())))
}

/// Return whether a UK postcode is structurally valid.
#[pyfunction]
fn is_valid(postcode: &str) -> bool {
    ukpostcode_core::is_valid(postcode)
}

#[pymodule]
fn ukpostcode(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(validate, m)?)?;
    m.add_function(wrap_pyfunction!(is_valid, m)?)?;
    m.add(
        "PostCodeValidationError",
        m.py().get_type::<PostCodeValidationError>(),
    )?;
    Ok(())
}
