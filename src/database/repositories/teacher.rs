//! Teacher repository implementation

use sqlx::PgConnection;
use crate::models::subject::Subject;
use crate::models::teacher::{Teacher, NewTeacher};
use crate::utils::errors::UniversityError;
use super::violated_constraint;

const SELECT_TEACHER: &str = "SELECT teacher_id AS id, first_name, last_name FROM teachers";

pub struct TeacherRepository<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> TeacherRepository<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// Create a new teacher
    pub async fn save(&mut self, teacher: &NewTeacher) -> Result<Teacher, UniversityError> {
        let teacher = sqlx::query_as::<_, Teacher>(
            r#"
            INSERT INTO teachers (first_name, last_name)
            VALUES ($1, $2)
            RETURNING teacher_id AS id, first_name, last_name
            "#
        )
        .bind(&teacher.first_name)
        .bind(&teacher.last_name)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(teacher)
    }

    /// Find teacher by ID
    pub async fn find_by_id(&mut self, id: i32) -> Result<Option<Teacher>, UniversityError> {
        let teacher = sqlx::query_as::<_, Teacher>(&format!("{} WHERE teacher_id = $1", SELECT_TEACHER))
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(teacher)
    }

    /// Check if a teacher exists
    pub async fn exists_by_id(&mut self, id: i32) -> Result<bool, UniversityError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM teachers WHERE teacher_id = $1)")
            .bind(id)
            .fetch_one(&mut *self.conn)
            .await?;

        Ok(exists)
    }

    /// List all teachers
    pub async fn find_all(&mut self) -> Result<Vec<Teacher>, UniversityError> {
        let teachers = sqlx::query_as::<_, Teacher>(&format!("{} ORDER BY teacher_id ASC", SELECT_TEACHER))
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(teachers)
    }

    /// Count total teachers
    pub async fn count(&mut self) -> Result<i64, UniversityError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM teachers")
            .fetch_one(&mut *self.conn)
            .await?;

        Ok(count)
    }

    /// Update teacher, `None` when the id does not exist
    pub async fn update(&mut self, id: i32, teacher: &NewTeacher) -> Result<Option<Teacher>, UniversityError> {
        let teacher = sqlx::query_as::<_, Teacher>(
            r#"
            UPDATE teachers
            SET first_name = $2, last_name = $3
            WHERE teacher_id = $1
            RETURNING teacher_id AS id, first_name, last_name
            "#
        )
        .bind(id)
        .bind(&teacher.first_name)
        .bind(&teacher.last_name)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(teacher)
    }

    /// Delete teacher, returns whether a row was removed
    pub async fn delete_by_id(&mut self, id: i32) -> Result<bool, UniversityError> {
        let result = sqlx::query("DELETE FROM teachers WHERE teacher_id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete every teacher with this full name
    pub async fn delete_by_name(&mut self, first_name: &str, last_name: &str) -> Result<u64, UniversityError> {
        let result = sqlx::query("DELETE FROM teachers WHERE first_name = $1 AND last_name = $2")
            .bind(first_name)
            .bind(last_name)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected())
    }

    /// Delete every teacher
    pub async fn delete_all(&mut self) -> Result<u64, UniversityError> {
        let result = sqlx::query("DELETE FROM teachers")
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected())
    }

    /// Link a subject to a teacher, returns false when already linked
    pub async fn add_subject(&mut self, teacher_id: i32, subject_id: i32) -> Result<bool, UniversityError> {
        let result = sqlx::query(
            r#"
            INSERT INTO teachers_subjects (teacher_id, subject_id)
            VALUES ($1, $2)
            ON CONFLICT (teacher_id, subject_id) DO NOTHING
            "#
        )
        .bind(teacher_id)
        .bind(subject_id)
        .execute(&mut *self.conn)
        .await
        .map_err(|e| missing_link_target(e, teacher_id, subject_id))?;

        Ok(result.rows_affected() > 0)
    }

    /// Get subjects taught by a teacher
    pub async fn find_subjects(&mut self, teacher_id: i32) -> Result<Vec<Subject>, UniversityError> {
        let subjects = sqlx::query_as::<_, Subject>(
            r#"
            SELECT s.subject_id AS id, s.subject_name AS name
            FROM subjects s
            JOIN teachers_subjects ts ON ts.subject_id = s.subject_id
            WHERE ts.teacher_id = $1
            ORDER BY s.subject_id ASC
            "#
        )
        .bind(teacher_id)
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(subjects)
    }
}

fn missing_link_target(err: sqlx::Error, teacher_id: i32, subject_id: i32) -> UniversityError {
    let missing = match violated_constraint(&err) {
        Some("teachers_subjects_teacher_id_fkey") => Some(UniversityError::TeacherNotFound { teacher_id }),
        Some("teachers_subjects_subject_id_fkey") => Some(UniversityError::SubjectNotFound { subject_id }),
        _ => None,
    };

    missing.unwrap_or_else(|| err.into())
}
