//! Classroom repository implementation

use sqlx::PgConnection;
use crate::models::classroom::{Classroom, NewClassroom};
use crate::utils::errors::UniversityError;
use super::violated_constraint;

const SELECT_CLASSROOM: &str = "SELECT classroom_id AS id, classroom_number AS number FROM classrooms";

pub struct ClassroomRepository<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> ClassroomRepository<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// Create a new classroom
    pub async fn save(&mut self, classroom: &NewClassroom) -> Result<Classroom, UniversityError> {
        let classroom = sqlx::query_as::<_, Classroom>(
            "INSERT INTO classrooms (classroom_number) VALUES ($1) RETURNING classroom_id AS id, classroom_number AS number"
        )
        .bind(classroom.number)
        .fetch_one(&mut *self.conn)
        .await
        .map_err(|e| number_taken(e, classroom.number))?;

        Ok(classroom)
    }

    /// Find classroom by ID
    pub async fn find_by_id(&mut self, id: i32) -> Result<Option<Classroom>, UniversityError> {
        let classroom = sqlx::query_as::<_, Classroom>(&format!("{} WHERE classroom_id = $1", SELECT_CLASSROOM))
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(classroom)
    }

    /// Find classroom by its number
    pub async fn find_by_number(&mut self, number: i32) -> Result<Option<Classroom>, UniversityError> {
        let classroom = sqlx::query_as::<_, Classroom>(&format!("{} WHERE classroom_number = $1", SELECT_CLASSROOM))
            .bind(number)
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(classroom)
    }

    /// Check if a classroom exists
    pub async fn exists_by_id(&mut self, id: i32) -> Result<bool, UniversityError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM classrooms WHERE classroom_id = $1)")
            .bind(id)
            .fetch_one(&mut *self.conn)
            .await?;

        Ok(exists)
    }

    /// Check if another classroom already uses this number
    pub async fn exists_by_number(&mut self, number: i32, excluding_id: Option<i32>) -> Result<bool, UniversityError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM classrooms WHERE classroom_number = $1 AND ($2::INTEGER IS NULL OR classroom_id <> $2))"
        )
        .bind(number)
        .bind(excluding_id)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(exists)
    }

    /// List all classrooms ordered by number
    pub async fn find_all(&mut self) -> Result<Vec<Classroom>, UniversityError> {
        let classrooms = sqlx::query_as::<_, Classroom>(&format!("{} ORDER BY classroom_number ASC", SELECT_CLASSROOM))
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(classrooms)
    }

    /// Count total classrooms
    pub async fn count(&mut self) -> Result<i64, UniversityError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM classrooms")
            .fetch_one(&mut *self.conn)
            .await?;

        Ok(count)
    }

    /// Update classroom, `None` when the id does not exist
    pub async fn update(&mut self, id: i32, classroom: &NewClassroom) -> Result<Option<Classroom>, UniversityError> {
        let classroom = sqlx::query_as::<_, Classroom>(
            r#"
            UPDATE classrooms
            SET classroom_number = $2
            WHERE classroom_id = $1
            RETURNING classroom_id AS id, classroom_number AS number
            "#
        )
        .bind(id)
        .bind(classroom.number)
        .fetch_optional(&mut *self.conn)
        .await
        .map_err(|e| number_taken(e, classroom.number))?;

        Ok(classroom)
    }

    /// Delete classroom, returns whether a row was removed
    pub async fn delete_by_id(&mut self, id: i32) -> Result<bool, UniversityError> {
        let result = sqlx::query("DELETE FROM classrooms WHERE classroom_id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete every classroom
    pub async fn delete_all(&mut self) -> Result<u64, UniversityError> {
        let result = sqlx::query("DELETE FROM classrooms")
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected())
    }
}

fn number_taken(err: sqlx::Error, number: i32) -> UniversityError {
    if violated_constraint(&err) == Some("classrooms_classroom_number_key") {
        UniversityError::ClassroomNumberTaken { number }
    } else {
        err.into()
    }
}
