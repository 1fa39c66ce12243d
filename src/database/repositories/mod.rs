//! Database repositories module
//!
//! This module contains all repository implementations for data access.
//! Every repository borrows the connection of the current unit of work.

pub mod group;
pub mod student;
pub mod teacher;
pub mod subject;
pub mod classroom;
pub mod event;

// Re-export repositories
pub use group::GroupRepository;
pub use student::StudentRepository;
pub use teacher::TeacherRepository;
pub use subject::SubjectRepository;
pub use classroom::ClassroomRepository;
pub use event::EventRepository;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Constraint named by a unique or foreign key violation
///
/// Concurrent writers can slip past the checks run before a write, so the
/// repositories translate these into the matching domain errors.
pub(crate) fn violated_constraint(err: &sqlx::Error) -> Option<&str> {
    let sqlx::Error::Database(db) = err else {
        return None;
    };

    match db.code().as_deref() {
        Some(UNIQUE_VIOLATION) | Some(FOREIGN_KEY_VIOLATION) => db.constraint(),
        _ => None,
    }
}
