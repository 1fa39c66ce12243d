//! Services module
//!
//! This module contains business logic services. Each operation runs inside
//! the unit of work handed in by the caller.

pub mod group;
pub mod student;
pub mod teacher;
pub mod subject;
pub mod classroom;
pub mod event;

// Re-export commonly used services
pub use group::GroupService;
pub use student::StudentService;
pub use teacher::TeacherService;
pub use subject::SubjectService;
pub use classroom::ClassroomService;
pub use event::EventService;

/// Service factory holding one instance of every service
#[derive(Debug, Clone, Default)]
pub struct ServiceFactory {
    pub groups: GroupService,
    pub students: StudentService,
    pub teachers: TeacherService,
    pub subjects: SubjectService,
    pub classrooms: ClassroomService,
    pub events: EventService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new() -> Self {
        Self {
            groups: GroupService::new(),
            students: StudentService::new(),
            teachers: TeacherService::new(),
            subjects: SubjectService::new(),
            classrooms: ClassroomService::new(),
            events: EventService::new(),
        }
    }
}
