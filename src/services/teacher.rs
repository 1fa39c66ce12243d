//! Teacher service implementation
//!
//! This service handles teacher records and the subjects each teacher
//! teaches.

use tracing::{info, debug};
use crate::database::UnitOfWork;
use crate::models::{SubjectResponse, TeacherCreateRequest, TeacherResponse};
use crate::utils::errors::{UniversityError, Result};
use crate::utils::logging::{log_entity_action, log_bulk_action};
use crate::validation::validate_teacher;

/// Teacher service for managing teacher operations
#[derive(Debug, Clone, Default)]
pub struct TeacherService;

impl TeacherService {
    pub fn new() -> Self {
        Self
    }

    /// Create a new teacher
    pub async fn create(&self, uow: &mut UnitOfWork, request: &TeacherCreateRequest) -> Result<TeacherResponse> {
        debug!(first_name = ?request.first_name, last_name = ?request.last_name, "Creating teacher");

        let new_teacher = validate_teacher(request)?;
        let teacher = uow.teachers().save(&new_teacher).await?;
        log_entity_action("teacher", "create", Some(teacher.id));

        Ok(teacher.into())
    }

    /// Create several teachers; one rejected item rejects the batch
    pub async fn save_all(&self, uow: &mut UnitOfWork, requests: &[TeacherCreateRequest]) -> Result<Vec<TeacherResponse>> {
        let mut saved = Vec::with_capacity(requests.len());
        for request in requests {
            saved.push(self.create(uow, request).await?);
        }

        info!(count = saved.len(), "Teacher batch saved");
        Ok(saved)
    }

    pub async fn update(&self, uow: &mut UnitOfWork, teacher_id: i32, request: &TeacherCreateRequest) -> Result<TeacherResponse> {
        debug!(teacher_id = teacher_id, "Updating teacher");

        if !uow.teachers().exists_by_id(teacher_id).await? {
            return Err(UniversityError::TeacherNotFound { teacher_id });
        }

        let new_teacher = validate_teacher(request)?;
        let teacher = uow
            .teachers()
            .update(teacher_id, &new_teacher)
            .await?
            .ok_or(UniversityError::TeacherNotFound { teacher_id })?;
        log_entity_action("teacher", "update", Some(teacher_id));

        Ok(teacher.into())
    }

    pub async fn find_by_id(&self, uow: &mut UnitOfWork, teacher_id: i32) -> Result<TeacherResponse> {
        let teacher = uow
            .teachers()
            .find_by_id(teacher_id)
            .await?
            .ok_or(UniversityError::TeacherNotFound { teacher_id })?;

        Ok(teacher.into())
    }

    pub async fn find_all(&self, uow: &mut UnitOfWork) -> Result<Vec<TeacherResponse>> {
        let teachers = uow.teachers().find_all().await?;
        Ok(teachers.into_iter().map(TeacherResponse::from).collect())
    }

    pub async fn count(&self, uow: &mut UnitOfWork) -> Result<i64> {
        uow.teachers().count().await
    }

    pub async fn delete_by_id(&self, uow: &mut UnitOfWork, teacher_id: i32) -> Result<()> {
        if !uow.teachers().delete_by_id(teacher_id).await? {
            return Err(UniversityError::TeacherNotFound { teacher_id });
        }

        log_entity_action("teacher", "delete", Some(teacher_id));
        Ok(())
    }

    /// Delete every teacher with this full name, returns how many went
    pub async fn delete_by_name(&self, uow: &mut UnitOfWork, first_name: &str, last_name: &str) -> Result<u64> {
        debug!(first_name = %first_name, last_name = %last_name, "Deleting teachers by name");
        let deleted = uow.teachers().delete_by_name(first_name, last_name).await?;
        log_bulk_action("teacher", "delete_by_name", deleted);
        Ok(deleted)
    }

    pub async fn delete_all(&self, uow: &mut UnitOfWork) -> Result<u64> {
        let deleted = uow.teachers().delete_all().await?;
        log_bulk_action("teacher", "delete_all", deleted);
        Ok(deleted)
    }

    /// Record that a teacher teaches a subject; linking twice changes nothing
    pub async fn add_subject(&self, uow: &mut UnitOfWork, teacher_id: i32, subject_id: i32) -> Result<Vec<SubjectResponse>> {
        debug!(teacher_id = teacher_id, subject_id = subject_id, "Adding subject to teacher");

        if !uow.teachers().exists_by_id(teacher_id).await? {
            return Err(UniversityError::TeacherNotFound { teacher_id });
        }
        if !uow.subjects().exists_by_id(subject_id).await? {
            return Err(UniversityError::SubjectNotFound { subject_id });
        }

        if uow.teachers().add_subject(teacher_id, subject_id).await? {
            info!(teacher_id = teacher_id, subject_id = subject_id, "Subject added to teacher");
        }

        self.subjects(uow, teacher_id).await
    }

    /// Get the subjects a teacher teaches
    pub async fn subjects(&self, uow: &mut UnitOfWork, teacher_id: i32) -> Result<Vec<SubjectResponse>> {
        if !uow.teachers().exists_by_id(teacher_id).await? {
            return Err(UniversityError::TeacherNotFound { teacher_id });
        }

        let subjects = uow.teachers().find_subjects(teacher_id).await?;
        Ok(subjects.into_iter().map(SubjectResponse::from).collect())
    }
}
