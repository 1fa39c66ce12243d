//! Error handling for the university schedule service
//!
//! This module defines the main error type used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;
use crate::validation::{FieldError, ValidationErrors};

/// Main error type for the university schedule service
#[derive(Error, Debug)]
pub enum UniversityError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Group not found: {group_id}")]
    GroupNotFound { group_id: i32 },

    #[error("Group not found by name: {name}")]
    GroupNameNotFound { name: String },

    #[error("Student not found: {student_id}")]
    StudentNotFound { student_id: i32 },

    #[error("Student not found by name: {first_name} {last_name}")]
    StudentNameNotFound { first_name: String, last_name: String },

    #[error("Teacher not found: {teacher_id}")]
    TeacherNotFound { teacher_id: i32 },

    #[error("Subject not found: {subject_id}")]
    SubjectNotFound { subject_id: i32 },

    #[error("Subject not found by name: {name}")]
    SubjectNameNotFound { name: String },

    #[error("Classroom not found: {classroom_id}")]
    ClassroomNotFound { classroom_id: i32 },

    #[error("Classroom not found by number: {number}")]
    ClassroomNumberNotFound { number: i32 },

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: i32 },

    #[error("Classroom number {number} is already taken")]
    ClassroomNumberTaken { number: i32 },

    #[error("Group name {name} is already taken")]
    GroupNameTaken { name: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for university schedule operations
pub type Result<T> = std::result::Result<T, UniversityError>;

impl UniversityError {
    /// Check if the error reports a missing row
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            UniversityError::GroupNotFound { .. }
                | UniversityError::GroupNameNotFound { .. }
                | UniversityError::StudentNotFound { .. }
                | UniversityError::StudentNameNotFound { .. }
                | UniversityError::TeacherNotFound { .. }
                | UniversityError::SubjectNotFound { .. }
                | UniversityError::SubjectNameNotFound { .. }
                | UniversityError::ClassroomNotFound { .. }
                | UniversityError::ClassroomNumberNotFound { .. }
                | UniversityError::EventNotFound { .. }
        )
    }

    /// Check if the error is a uniqueness violation
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            UniversityError::ClassroomNumberTaken { .. } | UniversityError::GroupNameTaken { .. }
        )
    }

    /// Field-level details for errors that carry them
    pub fn field_errors(&self) -> Vec<FieldError> {
        match self {
            UniversityError::Validation(errors) => errors.iter().cloned().collect(),
            UniversityError::ClassroomNumberTaken { .. } => {
                vec![FieldError::new("number", self.to_string())]
            }
            UniversityError::GroupNameTaken { .. } => {
                vec![FieldError::new("name", self.to_string())]
            }
            _ => Vec::new(),
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            UniversityError::Database(_) => ErrorSeverity::Critical,
            UniversityError::Migration(_) => ErrorSeverity::Critical,
            UniversityError::Config(_) => ErrorSeverity::Critical,
            UniversityError::Validation(_) => ErrorSeverity::Info,
            UniversityError::InvalidInput(_) => ErrorSeverity::Info,
            e if e.is_not_found() => ErrorSeverity::Info,
            e if e.is_conflict() => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        assert!(UniversityError::EventNotFound { event_id: 7 }.is_not_found());
        assert!(UniversityError::SubjectNameNotFound { name: "MATH".to_string() }.is_not_found());
        assert!(!UniversityError::GroupNameTaken { name: "H-10".to_string() }.is_not_found());
        assert!(!UniversityError::InvalidInput("bad".to_string()).is_not_found());
    }

    #[test]
    fn test_conflict_carries_field_error() {
        let error = UniversityError::ClassroomNumberTaken { number: 785 };
        assert!(error.is_conflict());

        let fields = error.field_errors();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].field_name, "number");
        assert!(fields[0].message.contains("785"));
    }

    #[test]
    fn test_severity() {
        assert_eq!(UniversityError::Config("x".to_string()).severity(), ErrorSeverity::Critical);
        assert_eq!(UniversityError::TeacherNotFound { teacher_id: 1 }.severity(), ErrorSeverity::Info);
        assert_eq!(UniversityError::GroupNameTaken { name: "G".to_string() }.severity(), ErrorSeverity::Warning);
        assert_eq!(ErrorSeverity::Warning.to_string(), "WARN");
    }
}
