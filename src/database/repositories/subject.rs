//! Subject repository implementation

use sqlx::PgConnection;
use crate::models::subject::{Subject, NewSubject};
use crate::utils::errors::UniversityError;

const SELECT_SUBJECT: &str = "SELECT subject_id AS id, subject_name AS name FROM subjects";

pub struct SubjectRepository<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> SubjectRepository<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// Create a new subject
    pub async fn save(&mut self, subject: &NewSubject) -> Result<Subject, UniversityError> {
        let subject = sqlx::query_as::<_, Subject>(
            "INSERT INTO subjects (subject_name) VALUES ($1) RETURNING subject_id AS id, subject_name AS name"
        )
        .bind(&subject.name)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(subject)
    }

    /// Find subject by ID
    pub async fn find_by_id(&mut self, id: i32) -> Result<Option<Subject>, UniversityError> {
        let subject = sqlx::query_as::<_, Subject>(&format!("{} WHERE subject_id = $1", SELECT_SUBJECT))
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(subject)
    }

    /// Find the first subject with this name
    pub async fn find_by_name(&mut self, name: &str) -> Result<Option<Subject>, UniversityError> {
        let subject = sqlx::query_as::<_, Subject>(
            &format!("{} WHERE subject_name = $1 ORDER BY subject_id LIMIT 1", SELECT_SUBJECT)
        )
        .bind(name)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(subject)
    }

    /// Check if a subject exists
    pub async fn exists_by_id(&mut self, id: i32) -> Result<bool, UniversityError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM subjects WHERE subject_id = $1)")
            .bind(id)
            .fetch_one(&mut *self.conn)
            .await?;

        Ok(exists)
    }

    /// List all subjects
    pub async fn find_all(&mut self) -> Result<Vec<Subject>, UniversityError> {
        let subjects = sqlx::query_as::<_, Subject>(&format!("{} ORDER BY subject_id ASC", SELECT_SUBJECT))
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(subjects)
    }

    /// Count total subjects
    pub async fn count(&mut self) -> Result<i64, UniversityError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM subjects")
            .fetch_one(&mut *self.conn)
            .await?;

        Ok(count)
    }

    /// Update subject, `None` when the id does not exist
    pub async fn update(&mut self, id: i32, subject: &NewSubject) -> Result<Option<Subject>, UniversityError> {
        let subject = sqlx::query_as::<_, Subject>(
            "UPDATE subjects SET subject_name = $2 WHERE subject_id = $1 RETURNING subject_id AS id, subject_name AS name"
        )
        .bind(id)
        .bind(&subject.name)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(subject)
    }

    /// Delete subject, returns whether a row was removed
    pub async fn delete_by_id(&mut self, id: i32) -> Result<bool, UniversityError> {
        let result = sqlx::query("DELETE FROM subjects WHERE subject_id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete every subject
    pub async fn delete_all(&mut self) -> Result<u64, UniversityError> {
        let result = sqlx::query("DELETE FROM subjects")
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected())
    }
}
