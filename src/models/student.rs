//! Student model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use super::group::GroupResponse;

/// Student row joined with the name of its group, if any
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Student {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub course_number: i32,
    pub group_id: Option<i32>,
    pub group_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub course_number: i32,
    pub group_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentCreateRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub course_number: Option<i32>,
    pub group_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub course_number: i32,
    pub group: Option<GroupResponse>,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        let group = match (student.group_id, student.group_name) {
            (Some(id), Some(name)) => Some(GroupResponse { id, name }),
            _ => None,
        };

        Self {
            id: student.id,
            first_name: student.first_name,
            last_name: student.last_name,
            course_number: student.course_number,
            group,
        }
    }
}
