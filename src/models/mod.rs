//! Data models module
//!
//! This module contains the persisted rows, the validated insert shapes and
//! the request/response transfer objects, together with the conversions
//! between them.

pub mod group;
pub mod student;
pub mod teacher;
pub mod subject;
pub mod classroom;
pub mod event;

// Re-export commonly used models
pub use group::{Group, NewGroup, GroupCreateRequest, GroupResponse};
pub use student::{Student, NewStudent, StudentCreateRequest, StudentResponse};
pub use teacher::{Teacher, NewTeacher, TeacherCreateRequest, TeacherResponse};
pub use subject::{Subject, NewSubject, SubjectCreateRequest, SubjectResponse};
pub use classroom::{Classroom, NewClassroom, ClassroomCreateRequest, ClassroomResponse};
pub use event::{EventDetails, EventReferences, NewEvent, EventCreateRequest, EventResponse};
