//! Pet record types.
//!
//! This module provides the stored [`Pet`] record, the [`Gender`]
//! enumeration, and [`PetValues`], the partial field set used for inserts and
//! updates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Gender of a pet, stored as an integer code.
///
/// # Examples
///
/// ```
/// use shelter::Gender;
///
/// assert_eq!(Gender::Male.code(), 1);
/// assert_eq!(Gender::try_from(2).unwrap(), Gender::Female);
/// assert!(Gender::try_from(5).is_err());
/// assert_eq!("unknown".parse::<Gender>().unwrap(), Gender::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Gender not recorded.
    #[default]
    Unknown,
    /// Male.
    Male,
    /// Female.
    Female,
}

impl Gender {
    /// All valid genders, ordered by code.
    pub const ALL: [Self; 3] = [Self::Unknown, Self::Male, Self::Female];

    /// Returns the integer code stored in the database.
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Unknown => 0,
            Self::Male => 1,
            Self::Female => 2,
        }
    }

    /// Returns true if `code` names one of the valid genders.
    #[must_use]
    pub fn is_valid_code(code: i64) -> bool {
        Self::ALL.iter().any(|g| g.code() == code)
    }
}

impl TryFrom<i64> for Gender {
    type Error = Error;

    fn try_from(code: i64) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|g| g.code() == code)
            .ok_or_else(|| Error::invalid_argument("invalid gender"))
    }
}

impl FromStr for Gender {
    type Err = Error;

    /// Parses a gender name (case-insensitive) or its integer code.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "unknown" => Ok(Self::Unknown),
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => other
                .parse::<i64>()
                .map_err(|_| Error::invalid_argument("invalid gender"))
                .and_then(Self::try_from),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

/// A stored pet record.
///
/// Records are only ever handed out by value; the store owns the rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    /// Store-assigned identifier, never reused.
    pub id: i64,
    /// Name of the pet, never empty.
    pub name: String,
    /// Optional breed.
    pub breed: Option<String>,
    /// Gender of the pet.
    pub gender: Gender,
    /// Weight in whole units, never negative.
    pub weight: u32,
}

/// A partial set of pet fields.
///
/// Fields left unset are not written: on insert they take their defaults, on
/// update they keep their stored value. `gender` and `weight` hold raw
/// integers so that out-of-range input reaches the validator intact.
///
/// # Examples
///
/// ```
/// use shelter::{Gender, PetValues};
///
/// let values = PetValues::new()
///     .name("Toto")
///     .breed("Terrier")
///     .gender(Gender::Male)
///     .weight(7);
/// assert_eq!(values.name.as_deref(), Some("Toto"));
/// assert!(!values.is_empty());
///
/// assert!(PetValues::new().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetValues {
    /// New name, if supplied.
    pub name: Option<String>,
    /// `Some(None)` clears the breed; `None` leaves it untouched.
    pub breed: Option<Option<String>>,
    /// Raw gender code, if supplied.
    pub gender: Option<i64>,
    /// Raw weight, if supplied.
    pub weight: Option<i64>,
}

impl PetValues {
    /// Creates an empty field set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the breed.
    #[must_use]
    pub fn breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = Some(Some(breed.into()));
        self
    }

    /// Clears the breed (stores NULL).
    #[must_use]
    pub fn clear_breed(mut self) -> Self {
        self.breed = Some(None);
        self
    }

    /// Sets the gender.
    #[must_use]
    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender.code());
        self
    }

    /// Sets the gender from a raw code, valid or not.
    #[must_use]
    pub fn gender_code(mut self, code: i64) -> Self {
        self.gender = Some(code);
        self
    }

    /// Sets the weight.
    #[must_use]
    pub fn weight(mut self, weight: i64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Returns true if no field is supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.breed.is_none() && self.gender.is_none() && self.weight.is_none()
    }

    /// Returns the number of supplied fields.
    #[must_use]
    pub fn len(&self) -> usize {
        [
            self.name.is_some(),
            self.breed.is_some(),
            self.gender.is_some(),
            self.weight.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }
}

impl From<&Pet> for PetValues {
    fn from(pet: &Pet) -> Self {
        Self {
            name: Some(pet.name.clone()),
            breed: Some(pet.breed.clone()),
            gender: Some(pet.gender.code()),
            weight: Some(i64::from(pet.weight)),
        }
    }
}
