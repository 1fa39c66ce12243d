//! Event model

use serde::{Deserialize, Serialize};
use chrono::NaiveDateTime;
use sqlx::FromRow;
use super::classroom::ClassroomResponse;
use super::group::GroupResponse;
use super::subject::SubjectResponse;
use super::teacher::TeacherResponse;

/// Event row joined with every entity it references
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct EventDetails {
    pub id: i32,
    pub date_time: NaiveDateTime,
    pub subject_id: i32,
    pub subject_name: String,
    pub classroom_id: i32,
    pub classroom_number: i32,
    pub group_id: i32,
    pub group_name: String,
    pub teacher_id: i32,
    pub teacher_first_name: String,
    pub teacher_last_name: String,
}

/// The four rows an event points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventReferences {
    pub subject_id: i32,
    pub classroom_id: i32,
    pub group_id: i32,
    pub teacher_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub date_time: NaiveDateTime,
    pub references: EventReferences,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCreateRequest {
    pub date_time: Option<NaiveDateTime>,
    pub subject_id: Option<i32>,
    pub classroom_id: Option<i32>,
    pub group_id: Option<i32>,
    pub teacher_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: i32,
    pub date_time: NaiveDateTime,
    pub subject: SubjectResponse,
    pub classroom: ClassroomResponse,
    pub group: GroupResponse,
    pub teacher: TeacherResponse,
}

impl From<EventDetails> for EventResponse {
    fn from(event: EventDetails) -> Self {
        Self {
            id: event.id,
            date_time: event.date_time,
            subject: SubjectResponse {
                id: event.subject_id,
                name: event.subject_name,
            },
            classroom: ClassroomResponse {
                id: event.classroom_id,
                number: event.classroom_number,
            },
            group: GroupResponse {
                id: event.group_id,
                name: event.group_name,
            },
            teacher: TeacherResponse {
                id: event.teacher_id,
                first_name: event.teacher_first_name,
                last_name: event.teacher_last_name,
            },
        }
    }
}
