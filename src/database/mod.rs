//! Database module
//!
//! This module handles database connections, the per-request unit of work
//! and the repositories that run inside it.

pub mod connection;
pub mod repositories;
pub mod unit_of_work;

// Re-export commonly used database components
pub use connection::{DatabasePool, create_pool, run_migrations, health_check};
pub use repositories::{
    GroupRepository, StudentRepository, TeacherRepository, SubjectRepository,
    ClassroomRepository, EventRepository,
};
pub use unit_of_work::{Database, UnitOfWork};
