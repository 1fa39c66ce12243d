//! Field validation for incoming requests
//!
//! Each function checks one request shape and, when every field is
//! acceptable, returns the validated insert shape for the repository.

use crate::models::{
    ClassroomCreateRequest, EventCreateRequest, EventReferences, GroupCreateRequest, NewClassroom,
    NewEvent, NewGroup, NewStudent, NewSubject, NewTeacher, StudentCreateRequest,
    SubjectCreateRequest, TeacherCreateRequest,
};
use crate::utils::errors::{UniversityError, Result};
use crate::utils::helpers::is_blank;
use super::ValidationErrors;

const BLANK: &str = "must not be blank";
const MISSING: &str = "must not be null";
const NOT_POSITIVE: &str = "must be greater than 0";

fn require_text(errors: &mut ValidationErrors, field: &str, value: Option<&str>) -> String {
    match value {
        Some(v) if !is_blank(v) => v.to_string(),
        Some(_) => {
            errors.push(field, BLANK);
            String::new()
        }
        None => {
            errors.push(field, MISSING);
            String::new()
        }
    }
}

fn require_positive(errors: &mut ValidationErrors, field: &str, value: Option<i32>) -> i32 {
    match value {
        Some(v) if v > 0 => v,
        Some(_) => {
            errors.push(field, NOT_POSITIVE);
            0
        }
        None => {
            errors.push(field, MISSING);
            0
        }
    }
}

pub fn validate_group(request: &GroupCreateRequest) -> Result<NewGroup> {
    let mut errors = ValidationErrors::new();
    let name = require_text(&mut errors, "name", request.name.as_deref());
    errors.into_result()?;

    Ok(NewGroup { name })
}

pub fn validate_subject(request: &SubjectCreateRequest) -> Result<NewSubject> {
    let mut errors = ValidationErrors::new();
    let name = require_text(&mut errors, "name", request.name.as_deref());
    errors.into_result()?;

    Ok(NewSubject { name })
}

pub fn validate_teacher(request: &TeacherCreateRequest) -> Result<NewTeacher> {
    let mut errors = ValidationErrors::new();
    let first_name = require_text(&mut errors, "firstName", request.first_name.as_deref());
    let last_name = require_text(&mut errors, "lastName", request.last_name.as_deref());
    errors.into_result()?;

    Ok(NewTeacher { first_name, last_name })
}

pub fn validate_classroom(request: &ClassroomCreateRequest) -> Result<NewClassroom> {
    let mut errors = ValidationErrors::new();
    let number = require_positive(&mut errors, "number", request.number);
    errors.into_result()?;

    Ok(NewClassroom { number })
}

/// The group id is optional; whether it exists is checked by the service
pub fn validate_student(request: &StudentCreateRequest) -> Result<NewStudent> {
    let mut errors = ValidationErrors::new();
    let first_name = require_text(&mut errors, "firstName", request.first_name.as_deref());
    let last_name = require_text(&mut errors, "lastName", request.last_name.as_deref());
    let course_number = require_positive(&mut errors, "courseNumber", request.course_number);
    if let Some(group_id) = request.group_id {
        if group_id <= 0 {
            errors.push("groupId", NOT_POSITIVE);
        }
    }
    errors.into_result()?;

    Ok(NewStudent {
        first_name,
        last_name,
        course_number,
        group_id: request.group_id,
    })
}

/// Shape check only; whether the four ids exist is the reference validator's job
pub fn validate_event(request: &EventCreateRequest) -> Result<NewEvent> {
    let mut errors = ValidationErrors::new();
    let fields = (
        require_present(&mut errors, "dateTime", request.date_time),
        require_present(&mut errors, "subjectId", request.subject_id),
        require_present(&mut errors, "classroomId", request.classroom_id),
        require_present(&mut errors, "groupId", request.group_id),
        require_present(&mut errors, "teacherId", request.teacher_id),
    );

    let (Some(date_time), Some(subject_id), Some(classroom_id), Some(group_id), Some(teacher_id)) = fields else {
        return Err(UniversityError::Validation(errors));
    };

    Ok(NewEvent {
        date_time,
        references: EventReferences {
            subject_id,
            classroom_id,
            group_id,
            teacher_id,
        },
    })
}

fn require_present<T>(errors: &mut ValidationErrors, field: &str, value: Option<T>) -> Option<T> {
    if value.is_none() {
        errors.push(field, MISSING);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::NaiveDate;

    #[test]
    fn test_blank_group_name_rejected() {
        let request = GroupCreateRequest { name: Some("   ".to_string()) };
        assert_matches!(
            validate_group(&request),
            Err(UniversityError::Validation(e)) if e.contains_field("name")
        );
    }

    #[test]
    fn test_null_and_blank_names_have_distinct_messages() {
        match validate_subject(&SubjectCreateRequest { name: None }) {
            Err(UniversityError::Validation(errors)) => {
                assert_eq!(errors.iter().next().map(|e| e.message.as_str()), Some(MISSING));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        match validate_subject(&SubjectCreateRequest { name: Some(String::new()) }) {
            Err(UniversityError::Validation(errors)) => {
                assert_eq!(errors.iter().next().map(|e| e.message.as_str()), Some(BLANK));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_group_name_kept_verbatim() {
        let request = GroupCreateRequest { name: Some("H-10".to_string()) };
        assert_eq!(validate_group(&request).unwrap().name, "H-10");
    }

    #[test]
    fn test_teacher_reports_both_names() {
        let request = TeacherCreateRequest::default();
        match validate_teacher(&request) {
            Err(UniversityError::Validation(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(errors.contains_field("firstName"));
                assert!(errors.contains_field("lastName"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_classroom_number_must_be_positive() {
        assert_matches!(
            validate_classroom(&ClassroomCreateRequest { number: None }),
            Err(UniversityError::Validation(e)) if e.contains_field("number")
        );
        assert_matches!(
            validate_classroom(&ClassroomCreateRequest { number: Some(0) }),
            Err(UniversityError::Validation(_))
        );
        assert_eq!(validate_classroom(&ClassroomCreateRequest { number: Some(785) }).unwrap().number, 785);
    }

    #[test]
    fn test_student_validation() {
        let request = StudentCreateRequest {
            first_name: Some("Olena".to_string()),
            last_name: Some("".to_string()),
            course_number: Some(-1),
            group_id: Some(0),
        };
        match validate_student(&request) {
            Err(UniversityError::Validation(errors)) => {
                assert!(errors.contains_field("lastName"));
                assert!(errors.contains_field("courseNumber"));
                assert!(errors.contains_field("groupId"));
                assert!(!errors.contains_field("firstName"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }

        let valid = StudentCreateRequest {
            first_name: Some("Olena".to_string()),
            last_name: Some("Koval".to_string()),
            course_number: Some(3),
            group_id: None,
        };
        let student = validate_student(&valid).unwrap();
        assert_eq!(student.course_number, 3);
        assert_eq!(student.group_id, None);
    }

    #[test]
    fn test_event_requires_every_field() {
        match validate_event(&EventCreateRequest::default()) {
            Err(UniversityError::Validation(errors)) => {
                assert_eq!(errors.len(), 5);
                for field in ["dateTime", "subjectId", "classroomId", "groupId", "teacherId"] {
                    assert!(errors.contains_field(field), "missing {}", field);
                }
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_event_passes_references_through() {
        let date_time = NaiveDate::from_ymd_opt(2024, 9, 2)
            .and_then(|d| d.and_hms_opt(9, 0, 0))
            .unwrap();
        let request = EventCreateRequest {
            date_time: Some(date_time),
            subject_id: Some(1),
            classroom_id: Some(2),
            group_id: Some(3),
            teacher_id: Some(4),
        };

        let event = validate_event(&request).unwrap();
        assert_eq!(event.date_time, date_time);
        assert_eq!(
            event.references,
            EventReferences { subject_id: 1, classroom_id: 2, group_id: 3, teacher_id: 4 }
        );
    }
}
