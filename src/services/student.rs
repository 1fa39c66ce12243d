//! Student service implementation
//!
//! This service handles student records, course and group lookups, and
//! moving students between groups.

use tracing::{info, warn, debug};
use crate::database::UnitOfWork;
use crate::models::{NewStudent, StudentCreateRequest, StudentResponse};
use crate::utils::errors::{UniversityError, Result};
use crate::utils::logging::{log_entity_action, log_bulk_action};
use crate::validation::validate_student;

/// Student service for managing student operations
#[derive(Debug, Clone, Default)]
pub struct StudentService;

impl StudentService {
    pub fn new() -> Self {
        Self
    }

    async fn ensure_group_exists(&self, uow: &mut UnitOfWork, group_id: i32) -> Result<()> {
        if !uow.groups().exists_by_id(group_id).await? {
            warn!(group_id = group_id, "Student references a missing group");
            return Err(UniversityError::GroupNotFound { group_id });
        }
        Ok(())
    }

    async fn validated(&self, uow: &mut UnitOfWork, request: &StudentCreateRequest) -> Result<NewStudent> {
        let new_student = validate_student(request)?;
        if let Some(group_id) = new_student.group_id {
            self.ensure_group_exists(uow, group_id).await?;
        }
        Ok(new_student)
    }

    /// Create a new student
    pub async fn create(&self, uow: &mut UnitOfWork, request: &StudentCreateRequest) -> Result<StudentResponse> {
        debug!(first_name = ?request.first_name, last_name = ?request.last_name, "Creating student");

        let new_student = self.validated(uow, request).await?;
        let student = uow.students().save(&new_student).await?;
        log_entity_action("student", "create", Some(student.id));

        Ok(student.into())
    }

    /// Create several students; one rejected item rejects the batch
    pub async fn save_all(&self, uow: &mut UnitOfWork, requests: &[StudentCreateRequest]) -> Result<Vec<StudentResponse>> {
        let mut saved = Vec::with_capacity(requests.len());
        for request in requests {
            saved.push(self.create(uow, request).await?);
        }

        info!(count = saved.len(), "Student batch saved");
        Ok(saved)
    }

    pub async fn update(&self, uow: &mut UnitOfWork, student_id: i32, request: &StudentCreateRequest) -> Result<StudentResponse> {
        debug!(student_id = student_id, "Updating student");

        if !uow.students().exists_by_id(student_id).await? {
            return Err(UniversityError::StudentNotFound { student_id });
        }

        let new_student = self.validated(uow, request).await?;
        let student = uow
            .students()
            .update(student_id, &new_student)
            .await?
            .ok_or(UniversityError::StudentNotFound { student_id })?;
        log_entity_action("student", "update", Some(student_id));

        Ok(student.into())
    }

    pub async fn find_by_id(&self, uow: &mut UnitOfWork, student_id: i32) -> Result<StudentResponse> {
        let student = uow
            .students()
            .find_by_id(student_id)
            .await?
            .ok_or(UniversityError::StudentNotFound { student_id })?;

        Ok(student.into())
    }

    pub async fn find_all(&self, uow: &mut UnitOfWork) -> Result<Vec<StudentResponse>> {
        let students = uow.students().find_all().await?;
        Ok(students.into_iter().map(StudentResponse::from).collect())
    }

    pub async fn find_by_course_number(&self, uow: &mut UnitOfWork, course_number: i32) -> Result<Vec<StudentResponse>> {
        debug!(course_number = course_number, "Getting students by course");
        let students = uow.students().find_by_course_number(course_number).await?;
        Ok(students.into_iter().map(StudentResponse::from).collect())
    }

    pub async fn find_by_group(&self, uow: &mut UnitOfWork, group_id: i32) -> Result<Vec<StudentResponse>> {
        debug!(group_id = group_id, "Getting students by group");
        let students = uow.students().find_by_group(group_id).await?;
        Ok(students.into_iter().map(StudentResponse::from).collect())
    }

    /// Get the first student with this full name
    pub async fn find_by_name(&self, uow: &mut UnitOfWork, first_name: &str, last_name: &str) -> Result<StudentResponse> {
        let student = uow
            .students()
            .find_by_name(first_name, last_name)
            .await?
            .ok_or_else(|| UniversityError::StudentNameNotFound {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
            })?;

        Ok(student.into())
    }

    pub async fn count(&self, uow: &mut UnitOfWork) -> Result<i64> {
        uow.students().count().await
    }

    pub async fn delete_by_id(&self, uow: &mut UnitOfWork, student_id: i32) -> Result<()> {
        if !uow.students().delete_by_id(student_id).await? {
            return Err(UniversityError::StudentNotFound { student_id });
        }

        log_entity_action("student", "delete", Some(student_id));
        Ok(())
    }

    pub async fn delete_all(&self, uow: &mut UnitOfWork) -> Result<u64> {
        let deleted = uow.students().delete_all().await?;
        log_bulk_action("student", "delete_all", deleted);
        Ok(deleted)
    }

    pub async fn delete_by_course_number(&self, uow: &mut UnitOfWork, course_number: i32) -> Result<u64> {
        let deleted = uow.students().delete_by_course_number(course_number).await?;
        log_bulk_action("student", "delete_by_course_number", deleted);
        Ok(deleted)
    }

    pub async fn delete_by_group(&self, uow: &mut UnitOfWork, group_id: i32) -> Result<u64> {
        let deleted = uow.students().delete_by_group(group_id).await?;
        log_bulk_action("student", "delete_by_group", deleted);
        Ok(deleted)
    }

    /// Move a student into an existing group
    pub async fn assign_group(&self, uow: &mut UnitOfWork, student_id: i32, group_id: i32) -> Result<StudentResponse> {
        debug!(student_id = student_id, group_id = group_id, "Assigning student to group");

        self.ensure_group_exists(uow, group_id).await?;
        let student = uow
            .students()
            .set_group(student_id, Some(group_id))
            .await?
            .ok_or(UniversityError::StudentNotFound { student_id })?;
        log_entity_action("student", "assign_group", Some(student_id));

        Ok(student.into())
    }

    /// Take a student out of their group
    pub async fn remove_group(&self, uow: &mut UnitOfWork, student_id: i32) -> Result<StudentResponse> {
        let student = uow
            .students()
            .set_group(student_id, None)
            .await?
            .ok_or(UniversityError::StudentNotFound { student_id })?;
        log_entity_action("student", "remove_group", Some(student_id));

        Ok(student.into())
    }
}
