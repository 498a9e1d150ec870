//! Field-level validation for pet writes.
//!
//! These checks run before any insert or update reaches the store. They are
//! pure: they look only at the supplied [`PetValues`].

use crate::error::{Error, Result};
use crate::pet::{Gender, PetValues};

/// Validates a field set for insertion.
///
/// `name` is required and must not be blank. `gender` and `weight` are
/// optional and default to [`Gender::Unknown`] and 0.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] with reason `"name required"`,
/// `"invalid gender"` or `"negative weight"`.
///
/// # Examples
///
/// ```
/// use shelter::validation::validate_insert;
/// use shelter::PetValues;
///
/// assert!(validate_insert(&PetValues::new().name("Toto")).is_ok());
/// assert!(validate_insert(&PetValues::new()).is_err());
/// ```
pub fn validate_insert(values: &PetValues) -> Result<()> {
    match values.name.as_deref() {
        Some(name) if !name.trim().is_empty() => {}
        _ => return Err(Error::invalid_argument("name required")),
    }
    validate_present_fields(values)
}

/// Validates a field set for update.
///
/// Only supplied fields are checked. A zero-field set is valid.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if a supplied field holds an invalid
/// value.
pub fn validate_update(values: &PetValues) -> Result<()> {
    if let Some(name) = values.name.as_deref() {
        if name.trim().is_empty() {
            return Err(Error::invalid_argument("name required"));
        }
    }
    validate_present_fields(values)
}

fn validate_present_fields(values: &PetValues) -> Result<()> {
    if let Some(code) = values.gender {
        if !Gender::is_valid_code(code) {
            return Err(Error::invalid_argument("invalid gender"));
        }
    }

    if let Some(weight) = values.weight {
        if weight < 0 {
            return Err(Error::invalid_argument("negative weight"));
        }
        if weight > i64::from(u32::MAX) {
            return Err(Error::invalid_argument("weight out of range"));
        }
    }

    Ok(())
}
