//! Event service implementation
//!
//! Every write checks the request fields first and then confirms the four
//! referenced rows exist, all inside the caller's unit of work.

use chrono::NaiveDateTime;
use tracing::{info, debug};
use crate::database::UnitOfWork;
use crate::models::{EventCreateRequest, EventResponse};
use crate::utils::errors::{UniversityError, Result};
use crate::utils::logging::{log_entity_action, log_bulk_action};
use crate::validation::{validate_event, validate_event_references};

/// Event service for managing scheduled class sessions
#[derive(Debug, Clone, Default)]
pub struct EventService;

impl EventService {
    pub fn new() -> Self {
        Self
    }

    /// Create a new event
    pub async fn create(&self, uow: &mut UnitOfWork, request: &EventCreateRequest) -> Result<EventResponse> {
        debug!(?request, "Creating event");

        let new_event = validate_event(request)?;
        validate_event_references(uow, &new_event.references).await?;

        let event = uow.events().save(&new_event).await?;
        log_entity_action("event", "create", Some(event.id));

        Ok(event.into())
    }

    /// Replace every field of an existing event
    pub async fn update(&self, uow: &mut UnitOfWork, event_id: i32, request: &EventCreateRequest) -> Result<EventResponse> {
        debug!(event_id = event_id, ?request, "Updating event");

        if !uow.events().exists_by_id(event_id).await? {
            return Err(UniversityError::EventNotFound { event_id });
        }

        let new_event = validate_event(request)?;
        validate_event_references(uow, &new_event.references).await?;

        let event = uow
            .events()
            .update(event_id, &new_event)
            .await?
            .ok_or(UniversityError::EventNotFound { event_id })?;
        log_entity_action("event", "update", Some(event_id));

        Ok(event.into())
    }

    pub async fn find_by_id(&self, uow: &mut UnitOfWork, event_id: i32) -> Result<EventResponse> {
        let event = uow
            .events()
            .find_by_id(event_id)
            .await?
            .ok_or(UniversityError::EventNotFound { event_id })?;

        Ok(event.into())
    }

    pub async fn find_all(&self, uow: &mut UnitOfWork) -> Result<Vec<EventResponse>> {
        let events = uow.events().find_all().await?;
        Ok(events.into_iter().map(EventResponse::from).collect())
    }

    /// Get events starting within `[start, end]`; an inverted range is empty
    pub async fn find_in_range(
        &self,
        uow: &mut UnitOfWork,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<EventResponse>> {
        debug!(%start, %end, "Getting events in range");
        if start > end {
            return Ok(Vec::new());
        }

        let events = uow.events().find_in_range(start, end).await?;
        info!(count = events.len(), "Events found in range");
        Ok(events.into_iter().map(EventResponse::from).collect())
    }

    pub async fn count(&self, uow: &mut UnitOfWork) -> Result<i64> {
        uow.events().count().await
    }

    pub async fn delete_by_id(&self, uow: &mut UnitOfWork, event_id: i32) -> Result<()> {
        if !uow.events().delete_by_id(event_id).await? {
            return Err(UniversityError::EventNotFound { event_id });
        }

        log_entity_action("event", "delete", Some(event_id));
        Ok(())
    }

    pub async fn delete_all(&self, uow: &mut UnitOfWork) -> Result<u64> {
        let deleted = uow.events().delete_all().await?;
        log_bulk_action("event", "delete_all", deleted);
        Ok(deleted)
    }
}
