//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the shelter library.

pub mod database;

use shelter::{Gender, PetValues};

/// Creates a temporary directory for testing.
#[allow(dead_code)]
pub fn create_temp_dir() -> std::io::Result<tempfile::TempDir> {
    tempfile::tempdir()
}

/// Builder for pet field sets with sensible defaults.
///
/// # Examples
///
/// ```no_run
/// # use common::PetFixture;
/// let values = PetFixture::new().with_name("Rex").with_weight(12).build();
/// ```
#[allow(dead_code)]
pub struct PetFixture {
    name: String,
    breed: Option<String>,
    gender: Gender,
    weight: i64,
}

#[allow(dead_code)]
impl PetFixture {
    /// Creates a fixture for the sample pet Toto.
    pub fn new() -> Self {
        Self {
            name: "Toto".to_string(),
            breed: Some("Terrier".to_string()),
            gender: Gender::Male,
            weight: 7,
        }
    }

    /// Sets the name.
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Sets the breed.
    pub fn with_breed(mut self, breed: &str) -> Self {
        self.breed = Some(breed.to_string());
        self
    }

    /// Clears the breed.
    pub fn without_breed(mut self) -> Self {
        self.breed = None;
        self
    }

    /// Sets the gender.
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    /// Sets the weight.
    pub fn with_weight(mut self, weight: i64) -> Self {
        self.weight = weight;
        self
    }

    /// Builds the field set.
    pub fn build(self) -> PetValues {
        let values = PetValues::new()
            .name(self.name)
            .gender(self.gender)
            .weight(self.weight);
        match self.breed {
            Some(breed) => values.breed(breed),
            None => values,
        }
    }
}

impl Default for PetFixture {
    fn default() -> Self {
        Self::new()
    }
}
