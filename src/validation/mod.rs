//! Request validation module
//!
//! Field checks run before anything touches the database and report every
//! problem at once. Uniqueness and reference checks need the unit of work
//! and stop at the first violation.

pub mod fields;
pub mod references;
pub mod uniqueness;

use serde::{Deserialize, Serialize};
use crate::utils::errors::{UniversityError, Result};

pub use fields::{
    validate_group, validate_student, validate_teacher, validate_subject,
    validate_classroom, validate_event,
};
pub use references::{Reference, ReferenceCatalog, validate_event_references};
pub use uniqueness::{ensure_classroom_number_available, ensure_group_name_available};

/// A single rejected field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub field_name: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            message: message.into(),
        }
    }
}

/// Every field error collected while checking one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field_name: &str, message: impl Into<String>) {
        self.0.push(FieldError::new(field_name, message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Check whether a given field was rejected
    pub fn contains_field(&self, field_name: &str) -> bool {
        self.0.iter().any(|e| e.field_name == field_name)
    }

    /// `Ok(())` when nothing was collected, otherwise a validation error
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(UniversityError::Validation(self))
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field_name, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}
