//! Reference checks for events
//!
//! An event points at a subject, a classroom, a group and a teacher. All four
//! must exist before the event is written. Lookups run in a fixed order and
//! the first missing row aborts the check.

use tracing::{debug, warn};
use crate::database::UnitOfWork;
use crate::models::EventReferences;
use crate::utils::errors::{UniversityError, Result};

/// An entity table an event may reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reference {
    Subject,
    Classroom,
    Group,
    Teacher,
}

impl Reference {
    /// Order in which references are looked up
    pub const CHECK_ORDER: [Reference; 4] = [
        Reference::Subject,
        Reference::Classroom,
        Reference::Group,
        Reference::Teacher,
    ];

    /// The not-found error for a missing row of this kind
    pub fn not_found(self, id: i32) -> UniversityError {
        match self {
            Reference::Subject => UniversityError::SubjectNotFound { subject_id: id },
            Reference::Classroom => UniversityError::ClassroomNotFound { classroom_id: id },
            Reference::Group => UniversityError::GroupNotFound { group_id: id },
            Reference::Teacher => UniversityError::TeacherNotFound { teacher_id: id },
        }
    }

    pub fn field_name(self) -> &'static str {
        match self {
            Reference::Subject => "subjectId",
            Reference::Classroom => "classroomId",
            Reference::Group => "groupId",
            Reference::Teacher => "teacherId",
        }
    }

    fn id_in(self, references: &EventReferences) -> i32 {
        match self {
            Reference::Subject => references.subject_id,
            Reference::Classroom => references.classroom_id,
            Reference::Group => references.group_id,
            Reference::Teacher => references.teacher_id,
        }
    }
}

/// Anything that can answer whether a referenced row exists
#[allow(async_fn_in_trait)]
pub trait ReferenceCatalog {
    async fn reference_exists(&mut self, reference: Reference, id: i32) -> Result<bool>;
}

impl ReferenceCatalog for UnitOfWork {
    async fn reference_exists(&mut self, reference: Reference, id: i32) -> Result<bool> {
        match reference {
            Reference::Subject => self.subjects().exists_by_id(id).await,
            Reference::Classroom => self.classrooms().exists_by_id(id).await,
            Reference::Group => self.groups().exists_by_id(id).await,
            Reference::Teacher => self.teachers().exists_by_id(id).await,
        }
    }
}

/// Confirm every row an event points at exists
pub async fn validate_event_references<C: ReferenceCatalog>(
    catalog: &mut C,
    references: &EventReferences,
) -> Result<()> {
    for reference in Reference::CHECK_ORDER {
        let id = reference.id_in(references);
        if !catalog.reference_exists(reference, id).await? {
            warn!(field = reference.field_name(), id = id, "Event references a missing row");
            return Err(reference.not_found(id));
        }
    }

    debug!(?references, "Event references resolved");
    Ok(())
}
