//! Classroom model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Classroom {
    pub id: i32,
    pub number: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClassroom {
    pub number: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassroomCreateRequest {
    pub number: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassroomResponse {
    pub id: i32,
    pub number: i32,
}

impl From<Classroom> for ClassroomResponse {
    fn from(classroom: Classroom) -> Self {
        Self {
            id: classroom.id,
            number: classroom.number,
        }
    }
}
