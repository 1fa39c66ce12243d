//! Group service implementation
//!
//! This service handles group creation with name uniqueness, lookups, and
//! listing the students that belong to a group.

use tracing::{info, debug};
use crate::database::UnitOfWork;
use crate::models::{GroupCreateRequest, GroupResponse, StudentResponse};
use crate::utils::errors::{UniversityError, Result};
use crate::utils::logging::{log_entity_action, log_bulk_action};
use crate::validation::{validate_group, ensure_group_name_available};

/// Group service for managing group operations
#[derive(Debug, Clone, Default)]
pub struct GroupService;

impl GroupService {
    pub fn new() -> Self {
        Self
    }

    /// Create a new group with a unique name
    pub async fn create(&self, uow: &mut UnitOfWork, request: &GroupCreateRequest) -> Result<GroupResponse> {
        debug!(name = ?request.name, "Creating group");

        let new_group = validate_group(request)?;
        ensure_group_name_available(uow, &new_group.name, None).await?;

        let group = uow.groups().save(&new_group).await?;
        log_entity_action("group", "create", Some(group.id));

        Ok(group.into())
    }

    /// Create several groups; one rejected item rejects the batch
    pub async fn save_all(&self, uow: &mut UnitOfWork, requests: &[GroupCreateRequest]) -> Result<Vec<GroupResponse>> {
        debug!(count = requests.len(), "Saving group batch");

        let mut saved = Vec::with_capacity(requests.len());
        for request in requests {
            saved.push(self.create(uow, request).await?);
        }

        info!(count = saved.len(), "Group batch saved");
        Ok(saved)
    }

    /// Rename a group
    pub async fn update(&self, uow: &mut UnitOfWork, group_id: i32, request: &GroupCreateRequest) -> Result<GroupResponse> {
        debug!(group_id = group_id, name = ?request.name, "Updating group");

        if !uow.groups().exists_by_id(group_id).await? {
            return Err(UniversityError::GroupNotFound { group_id });
        }

        let new_group = validate_group(request)?;
        ensure_group_name_available(uow, &new_group.name, Some(group_id)).await?;

        let group = uow
            .groups()
            .update(group_id, &new_group)
            .await?
            .ok_or(UniversityError::GroupNotFound { group_id })?;
        log_entity_action("group", "update", Some(group_id));

        Ok(group.into())
    }

    /// Get group by ID
    pub async fn find_by_id(&self, uow: &mut UnitOfWork, group_id: i32) -> Result<GroupResponse> {
        debug!(group_id = group_id, "Getting group by ID");
        let group = uow
            .groups()
            .find_by_id(group_id)
            .await?
            .ok_or(UniversityError::GroupNotFound { group_id })?;

        Ok(group.into())
    }

    /// Get all groups ordered by name
    pub async fn find_all(&self, uow: &mut UnitOfWork) -> Result<Vec<GroupResponse>> {
        let groups = uow.groups().find_all().await?;
        Ok(groups.into_iter().map(GroupResponse::from).collect())
    }

    /// Get group by its exact name
    pub async fn find_by_name(&self, uow: &mut UnitOfWork, name: &str) -> Result<GroupResponse> {
        debug!(name = %name, "Getting group by name");
        let group = uow
            .groups()
            .find_by_name(name)
            .await?
            .ok_or_else(|| UniversityError::GroupNameNotFound { name: name.to_string() })?;

        Ok(group.into())
    }

    pub async fn count(&self, uow: &mut UnitOfWork) -> Result<i64> {
        uow.groups().count().await
    }

    /// Delete a group; its students stay without a group
    pub async fn delete_by_id(&self, uow: &mut UnitOfWork, group_id: i32) -> Result<()> {
        debug!(group_id = group_id, "Deleting group");
        if !uow.groups().delete_by_id(group_id).await? {
            return Err(UniversityError::GroupNotFound { group_id });
        }

        log_entity_action("group", "delete", Some(group_id));
        Ok(())
    }

    pub async fn delete_all(&self, uow: &mut UnitOfWork) -> Result<u64> {
        let deleted = uow.groups().delete_all().await?;
        log_bulk_action("group", "delete_all", deleted);
        Ok(deleted)
    }

    /// Get the students of a group
    pub async fn students(&self, uow: &mut UnitOfWork, group_id: i32) -> Result<Vec<StudentResponse>> {
        debug!(group_id = group_id, "Getting students of group");
        if !uow.groups().exists_by_id(group_id).await? {
            return Err(UniversityError::GroupNotFound { group_id });
        }

        let students = uow.students().find_by_group(group_id).await?;
        Ok(students.into_iter().map(StudentResponse::from).collect())
    }
}
