//! University Schedule
//!
//! A REST service for a university's scheduling data: groups, students,
//! teachers, subjects, classrooms and the class events that tie them
//! together. This library provides the storage layer, request validation,
//! business services and the axum router.

pub mod config;
pub mod database;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{UniversityError, Result};

// Re-export main components for easy access
pub use database::{Database, UnitOfWork};
pub use handlers::{router, AppState};
pub use services::ServiceFactory;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
