//! Uniqueness checks for classroom numbers and group names
//!
//! On update the row being changed is excluded, so keeping the current value
//! is never a conflict.

use tracing::warn;
use crate::database::UnitOfWork;
use crate::utils::errors::{UniversityError, Result};

/// Reject a classroom number used by any other classroom
pub async fn ensure_classroom_number_available(
    uow: &mut UnitOfWork,
    number: i32,
    current_id: Option<i32>,
) -> Result<()> {
    if uow.classrooms().exists_by_number(number, current_id).await? {
        warn!(number = number, ?current_id, "Classroom number already taken");
        return Err(UniversityError::ClassroomNumberTaken { number });
    }

    Ok(())
}

/// Reject a group name used by any other group
pub async fn ensure_group_name_available(
    uow: &mut UnitOfWork,
    name: &str,
    current_id: Option<i32>,
) -> Result<()> {
    if uow.groups().exists_by_name(name, current_id).await? {
        warn!(name = name, ?current_id, "Group name already taken");
        return Err(UniversityError::GroupNameTaken { name: name.to_string() });
    }

    Ok(())
}
