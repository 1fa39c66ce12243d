//! Event repository implementation
//!
//! Events are always read back joined with the subject, classroom, group
//! and teacher they reference.

use chrono::NaiveDateTime;
use sqlx::PgConnection;
use crate::models::event::{EventDetails, EventReferences, NewEvent};
use crate::utils::errors::UniversityError;
use super::violated_constraint;

const SELECT_EVENT: &str = r#"
    SELECT e.event_id AS id, e.date_time,
           s.subject_id, s.subject_name,
           c.classroom_id, c.classroom_number,
           g.group_id, g.group_name,
           t.teacher_id, t.first_name AS teacher_first_name, t.last_name AS teacher_last_name
    FROM events e
    JOIN subjects s ON s.subject_id = e.subject_id
    JOIN classrooms c ON c.classroom_id = e.classroom_id
    JOIN groups g ON g.group_id = e.group_id
    JOIN teachers t ON t.teacher_id = e.teacher_id
"#;

pub struct EventRepository<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> EventRepository<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// Create a new event
    pub async fn save(&mut self, event: &NewEvent) -> Result<EventDetails, UniversityError> {
        let refs = event.references;
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO events (date_time, subject_id, classroom_id, group_id, teacher_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING event_id
            "#
        )
        .bind(event.date_time)
        .bind(refs.subject_id)
        .bind(refs.classroom_id)
        .bind(refs.group_id)
        .bind(refs.teacher_id)
        .fetch_one(&mut *self.conn)
        .await
        .map_err(|e| missing_reference(e, &refs))?;

        self.find_by_id(id)
            .await?
            .ok_or(UniversityError::EventNotFound { event_id: id })
    }

    /// Find event by ID
    pub async fn find_by_id(&mut self, id: i32) -> Result<Option<EventDetails>, UniversityError> {
        let event = sqlx::query_as::<_, EventDetails>(&format!("{} WHERE e.event_id = $1", SELECT_EVENT))
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(event)
    }

    /// Check if an event exists
    pub async fn exists_by_id(&mut self, id: i32) -> Result<bool, UniversityError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM events WHERE event_id = $1)")
            .bind(id)
            .fetch_one(&mut *self.conn)
            .await?;

        Ok(exists)
    }

    /// List all events
    pub async fn find_all(&mut self) -> Result<Vec<EventDetails>, UniversityError> {
        let events = sqlx::query_as::<_, EventDetails>(&format!("{} ORDER BY e.event_id ASC", SELECT_EVENT))
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(events)
    }

    /// Get events whose start lies in `[start, end]`, both bounds inclusive
    pub async fn find_in_range(
        &mut self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<EventDetails>, UniversityError> {
        let events = sqlx::query_as::<_, EventDetails>(
            &format!("{} WHERE e.date_time BETWEEN $1 AND $2 ORDER BY e.event_id ASC", SELECT_EVENT)
        )
        .bind(start)
        .bind(end)
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(events)
    }

    /// Count total events
    pub async fn count(&mut self) -> Result<i64, UniversityError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events")
            .fetch_one(&mut *self.conn)
            .await?;

        Ok(count)
    }

    /// Update event, `None` when the id does not exist
    pub async fn update(&mut self, id: i32, event: &NewEvent) -> Result<Option<EventDetails>, UniversityError> {
        let refs = event.references;
        let result = sqlx::query(
            r#"
            UPDATE events
            SET date_time = $2, subject_id = $3, classroom_id = $4, group_id = $5, teacher_id = $6
            WHERE event_id = $1
            "#
        )
        .bind(id)
        .bind(event.date_time)
        .bind(refs.subject_id)
        .bind(refs.classroom_id)
        .bind(refs.group_id)
        .bind(refs.teacher_id)
        .execute(&mut *self.conn)
        .await
        .map_err(|e| missing_reference(e, &refs))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Delete event, returns whether a row was removed
    pub async fn delete_by_id(&mut self, id: i32) -> Result<bool, UniversityError> {
        let result = sqlx::query("DELETE FROM events WHERE event_id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete every event
    pub async fn delete_all(&mut self) -> Result<u64, UniversityError> {
        let result = sqlx::query("DELETE FROM events")
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected())
    }
}

/// Map a foreign key violation to the not-found error of the missing row
fn missing_reference(err: sqlx::Error, refs: &EventReferences) -> UniversityError {
    let missing = match violated_constraint(&err) {
        Some("events_subject_id_fkey") => Some(UniversityError::SubjectNotFound { subject_id: refs.subject_id }),
        Some("events_classroom_id_fkey") => Some(UniversityError::ClassroomNotFound { classroom_id: refs.classroom_id }),
        Some("events_group_id_fkey") => Some(UniversityError::GroupNotFound { group_id: refs.group_id }),
        Some("events_teacher_id_fkey") => Some(UniversityError::TeacherNotFound { teacher_id: refs.teacher_id }),
        _ => None,
    };

    missing.unwrap_or_else(|| err.into())
}
