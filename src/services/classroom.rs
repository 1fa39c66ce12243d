//! Classroom service implementation
//!
//! Classroom numbers are unique; both create and update check the number
//! before writing.

use tracing::{info, debug};
use crate::database::UnitOfWork;
use crate::models::{ClassroomCreateRequest, ClassroomResponse};
use crate::utils::errors::{UniversityError, Result};
use crate::utils::logging::{log_entity_action, log_bulk_action};
use crate::validation::{validate_classroom, ensure_classroom_number_available};

/// Classroom service for managing classroom operations
#[derive(Debug, Clone, Default)]
pub struct ClassroomService;

impl ClassroomService {
    pub fn new() -> Self {
        Self
    }

    /// Create a new classroom with a unique number
    pub async fn create(&self, uow: &mut UnitOfWork, request: &ClassroomCreateRequest) -> Result<ClassroomResponse> {
        debug!(number = ?request.number, "Creating classroom");

        let new_classroom = validate_classroom(request)?;
        ensure_classroom_number_available(uow, new_classroom.number, None).await?;

        let classroom = uow.classrooms().save(&new_classroom).await?;
        log_entity_action("classroom", "create", Some(classroom.id));

        Ok(classroom.into())
    }

    /// Create several classrooms; one rejected item rejects the batch
    pub async fn save_all(&self, uow: &mut UnitOfWork, requests: &[ClassroomCreateRequest]) -> Result<Vec<ClassroomResponse>> {
        let mut saved = Vec::with_capacity(requests.len());
        for request in requests {
            saved.push(self.create(uow, request).await?);
        }

        info!(count = saved.len(), "Classroom batch saved");
        Ok(saved)
    }

    /// Change a classroom number; keeping the current number is allowed
    pub async fn update(&self, uow: &mut UnitOfWork, classroom_id: i32, request: &ClassroomCreateRequest) -> Result<ClassroomResponse> {
        debug!(classroom_id = classroom_id, number = ?request.number, "Updating classroom");

        if !uow.classrooms().exists_by_id(classroom_id).await? {
            return Err(UniversityError::ClassroomNotFound { classroom_id });
        }

        let new_classroom = validate_classroom(request)?;
        ensure_classroom_number_available(uow, new_classroom.number, Some(classroom_id)).await?;

        let classroom = uow
            .classrooms()
            .update(classroom_id, &new_classroom)
            .await?
            .ok_or(UniversityError::ClassroomNotFound { classroom_id })?;
        log_entity_action("classroom", "update", Some(classroom_id));

        Ok(classroom.into())
    }

    pub async fn find_by_id(&self, uow: &mut UnitOfWork, classroom_id: i32) -> Result<ClassroomResponse> {
        let classroom = uow
            .classrooms()
            .find_by_id(classroom_id)
            .await?
            .ok_or(UniversityError::ClassroomNotFound { classroom_id })?;

        Ok(classroom.into())
    }

    /// Get all classrooms ordered by number
    pub async fn find_all(&self, uow: &mut UnitOfWork) -> Result<Vec<ClassroomResponse>> {
        let classrooms = uow.classrooms().find_all().await?;
        Ok(classrooms.into_iter().map(ClassroomResponse::from).collect())
    }

    pub async fn find_by_number(&self, uow: &mut UnitOfWork, number: i32) -> Result<ClassroomResponse> {
        debug!(number = number, "Getting classroom by number");
        let classroom = uow
            .classrooms()
            .find_by_number(number)
            .await?
            .ok_or(UniversityError::ClassroomNumberNotFound { number })?;

        Ok(classroom.into())
    }

    pub async fn count(&self, uow: &mut UnitOfWork) -> Result<i64> {
        uow.classrooms().count().await
    }

    pub async fn delete_by_id(&self, uow: &mut UnitOfWork, classroom_id: i32) -> Result<()> {
        if !uow.classrooms().delete_by_id(classroom_id).await? {
            return Err(UniversityError::ClassroomNotFound { classroom_id });
        }

        log_entity_action("classroom", "delete", Some(classroom_id));
        Ok(())
    }

    pub async fn delete_all(&self, uow: &mut UnitOfWork) -> Result<u64> {
        let deleted = uow.classrooms().delete_all().await?;
        log_bulk_action("classroom", "delete_all", deleted);
        Ok(deleted)
    }
}
