//! Subject service implementation

use tracing::{info, debug};
use crate::database::UnitOfWork;
use crate::models::{SubjectCreateRequest, SubjectResponse};
use crate::utils::errors::{UniversityError, Result};
use crate::utils::logging::{log_entity_action, log_bulk_action};
use crate::validation::validate_subject;

/// Subject service for managing subject operations
#[derive(Debug, Clone, Default)]
pub struct SubjectService;

impl SubjectService {
    pub fn new() -> Self {
        Self
    }

    /// Create a new subject
    pub async fn create(&self, uow: &mut UnitOfWork, request: &SubjectCreateRequest) -> Result<SubjectResponse> {
        debug!(name = ?request.name, "Creating subject");

        let new_subject = validate_subject(request)?;
        let subject = uow.subjects().save(&new_subject).await?;
        log_entity_action("subject", "create", Some(subject.id));

        Ok(subject.into())
    }

    /// Create several subjects; one rejected item rejects the batch
    pub async fn save_all(&self, uow: &mut UnitOfWork, requests: &[SubjectCreateRequest]) -> Result<Vec<SubjectResponse>> {
        let mut saved = Vec::with_capacity(requests.len());
        for request in requests {
            saved.push(self.create(uow, request).await?);
        }

        info!(count = saved.len(), "Subject batch saved");
        Ok(saved)
    }

    pub async fn update(&self, uow: &mut UnitOfWork, subject_id: i32, request: &SubjectCreateRequest) -> Result<SubjectResponse> {
        debug!(subject_id = subject_id, "Updating subject");

        if !uow.subjects().exists_by_id(subject_id).await? {
            return Err(UniversityError::SubjectNotFound { subject_id });
        }

        let new_subject = validate_subject(request)?;
        let subject = uow
            .subjects()
            .update(subject_id, &new_subject)
            .await?
            .ok_or(UniversityError::SubjectNotFound { subject_id })?;
        log_entity_action("subject", "update", Some(subject_id));

        Ok(subject.into())
    }

    pub async fn find_by_id(&self, uow: &mut UnitOfWork, subject_id: i32) -> Result<SubjectResponse> {
        let subject = uow
            .subjects()
            .find_by_id(subject_id)
            .await?
            .ok_or(UniversityError::SubjectNotFound { subject_id })?;

        Ok(subject.into())
    }

    pub async fn find_all(&self, uow: &mut UnitOfWork) -> Result<Vec<SubjectResponse>> {
        let subjects = uow.subjects().find_all().await?;
        Ok(subjects.into_iter().map(SubjectResponse::from).collect())
    }

    pub async fn find_by_name(&self, uow: &mut UnitOfWork, name: &str) -> Result<SubjectResponse> {
        let subject = uow
            .subjects()
            .find_by_name(name)
            .await?
            .ok_or_else(|| UniversityError::SubjectNameNotFound { name: name.to_string() })?;

        Ok(subject.into())
    }

    pub async fn count(&self, uow: &mut UnitOfWork) -> Result<i64> {
        uow.subjects().count().await
    }

    /// Delete a subject together with the events scheduled for it
    pub async fn delete_by_id(&self, uow: &mut UnitOfWork, subject_id: i32) -> Result<()> {
        if !uow.subjects().delete_by_id(subject_id).await? {
            return Err(UniversityError::SubjectNotFound { subject_id });
        }

        log_entity_action("subject", "delete", Some(subject_id));
        Ok(())
    }

    pub async fn delete_all(&self, uow: &mut UnitOfWork) -> Result<u64> {
        let deleted = uow.subjects().delete_all().await?;
        log_bulk_action("subject", "delete_all", deleted);
        Ok(deleted)
    }
}
