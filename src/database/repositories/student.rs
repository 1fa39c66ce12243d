//! Student repository implementation

use sqlx::PgConnection;
use crate::models::student::{Student, NewStudent};
use crate::utils::errors::UniversityError;
use super::violated_constraint;

const SELECT_STUDENT: &str = r#"
    SELECT s.student_id AS id, s.first_name, s.last_name, s.course_number,
           s.group_id, g.group_name
    FROM students s
    LEFT JOIN groups g ON g.group_id = s.group_id
"#;

pub struct StudentRepository<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> StudentRepository<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// Create a new student
    pub async fn save(&mut self, student: &NewStudent) -> Result<Student, UniversityError> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO students (first_name, last_name, course_number, group_id)
            VALUES ($1, $2, $3, $4)
            RETURNING student_id
            "#
        )
        .bind(&student.first_name)
        .bind(&student.last_name)
        .bind(student.course_number)
        .bind(student.group_id)
        .fetch_one(&mut *self.conn)
        .await
        .map_err(|e| missing_group(e, student.group_id))?;

        self.fetch_existing(id).await
    }

    async fn fetch_existing(&mut self, id: i32) -> Result<Student, UniversityError> {
        self.find_by_id(id)
            .await?
            .ok_or(UniversityError::StudentNotFound { student_id: id })
    }

    /// Find student by ID
    pub async fn find_by_id(&mut self, id: i32) -> Result<Option<Student>, UniversityError> {
        let student = sqlx::query_as::<_, Student>(&format!("{} WHERE s.student_id = $1", SELECT_STUDENT))
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(student)
    }

    /// Check if a student exists
    pub async fn exists_by_id(&mut self, id: i32) -> Result<bool, UniversityError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM students WHERE student_id = $1)")
            .bind(id)
            .fetch_one(&mut *self.conn)
            .await?;

        Ok(exists)
    }

    /// List all students
    pub async fn find_all(&mut self) -> Result<Vec<Student>, UniversityError> {
        let students = sqlx::query_as::<_, Student>(&format!("{} ORDER BY s.student_id ASC", SELECT_STUDENT))
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(students)
    }

    /// Get students of a course
    pub async fn find_by_course_number(&mut self, course_number: i32) -> Result<Vec<Student>, UniversityError> {
        let students = sqlx::query_as::<_, Student>(
            &format!("{} WHERE s.course_number = $1 ORDER BY s.student_id ASC", SELECT_STUDENT)
        )
        .bind(course_number)
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(students)
    }

    /// Get students of a group
    pub async fn find_by_group(&mut self, group_id: i32) -> Result<Vec<Student>, UniversityError> {
        let students = sqlx::query_as::<_, Student>(
            &format!("{} WHERE s.group_id = $1 ORDER BY s.student_id ASC", SELECT_STUDENT)
        )
        .bind(group_id)
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(students)
    }

    /// Find the first student with this full name
    pub async fn find_by_name(&mut self, first_name: &str, last_name: &str) -> Result<Option<Student>, UniversityError> {
        let student = sqlx::query_as::<_, Student>(
            &format!(
                "{} WHERE s.first_name = $1 AND s.last_name = $2 ORDER BY s.student_id LIMIT 1",
                SELECT_STUDENT
            )
        )
        .bind(first_name)
        .bind(last_name)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(student)
    }

    /// Count total students
    pub async fn count(&mut self) -> Result<i64, UniversityError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM students")
            .fetch_one(&mut *self.conn)
            .await?;

        Ok(count)
    }

    /// Update student, `None` when the id does not exist
    pub async fn update(&mut self, id: i32, student: &NewStudent) -> Result<Option<Student>, UniversityError> {
        let result = sqlx::query(
            r#"
            UPDATE students
            SET first_name = $2, last_name = $3, course_number = $4, group_id = $5
            WHERE student_id = $1
            "#
        )
        .bind(id)
        .bind(&student.first_name)
        .bind(&student.last_name)
        .bind(student.course_number)
        .bind(student.group_id)
        .execute(&mut *self.conn)
        .await
        .map_err(|e| missing_group(e, student.group_id))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Move a student into a group, or out of any group with `None`
    pub async fn set_group(&mut self, id: i32, group_id: Option<i32>) -> Result<Option<Student>, UniversityError> {
        let result = sqlx::query("UPDATE students SET group_id = $2 WHERE student_id = $1")
            .bind(id)
            .bind(group_id)
            .execute(&mut *self.conn)
            .await
            .map_err(|e| missing_group(e, group_id))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Delete student, returns whether a row was removed
    pub async fn delete_by_id(&mut self, id: i32) -> Result<bool, UniversityError> {
        let result = sqlx::query("DELETE FROM students WHERE student_id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete every student of a course
    pub async fn delete_by_course_number(&mut self, course_number: i32) -> Result<u64, UniversityError> {
        let result = sqlx::query("DELETE FROM students WHERE course_number = $1")
            .bind(course_number)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected())
    }

    /// Delete every student of a group
    pub async fn delete_by_group(&mut self, group_id: i32) -> Result<u64, UniversityError> {
        let result = sqlx::query("DELETE FROM students WHERE group_id = $1")
            .bind(group_id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected())
    }

    /// Delete every student
    pub async fn delete_all(&mut self) -> Result<u64, UniversityError> {
        let result = sqlx::query("DELETE FROM students")
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected())
    }
}

fn missing_group(err: sqlx::Error, group_id: Option<i32>) -> UniversityError {
    match group_id {
        Some(group_id) if violated_constraint(&err) == Some("students_group_id_fkey") => {
            UniversityError::GroupNotFound { group_id }
        }
        _ => err.into(),
    }
}
