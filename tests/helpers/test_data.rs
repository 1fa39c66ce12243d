//! Test data helpers for building requests and seeding rows

use chrono::{NaiveDate, NaiveDateTime};
use university_schedule::database::UnitOfWork;
use university_schedule::models::{
    ClassroomCreateRequest, ClassroomResponse, EventCreateRequest, GroupCreateRequest,
    GroupResponse, StudentCreateRequest, SubjectCreateRequest, SubjectResponse,
    TeacherCreateRequest, TeacherResponse,
};
use university_schedule::services::ServiceFactory;

pub fn date_time(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .expect("valid test date")
}

pub fn group_request(name: &str) -> GroupCreateRequest {
    GroupCreateRequest { name: Some(name.to_string()) }
}

pub fn subject_request(name: &str) -> SubjectCreateRequest {
    SubjectCreateRequest { name: Some(name.to_string()) }
}

pub fn classroom_request(number: i32) -> ClassroomCreateRequest {
    ClassroomCreateRequest { number: Some(number) }
}

pub fn teacher_request(first_name: &str, last_name: &str) -> TeacherCreateRequest {
    TeacherCreateRequest {
        first_name: Some(first_name.to_string()),
        last_name: Some(last_name.to_string()),
    }
}

pub fn student_request(
    first_name: &str,
    last_name: &str,
    course_number: i32,
    group_id: Option<i32>,
) -> StudentCreateRequest {
    StudentCreateRequest {
        first_name: Some(first_name.to_string()),
        last_name: Some(last_name.to_string()),
        course_number: Some(course_number),
        group_id,
    }
}

/// The four rows one event needs
pub struct ScheduleFixture {
    pub subject: SubjectResponse,
    pub classroom: ClassroomResponse,
    pub group: GroupResponse,
    pub teacher: TeacherResponse,
}

impl ScheduleFixture {
    /// Subject "MATH", classroom 785, group "H-10", teacher Jirkin Marlush
    pub async fn create(services: &ServiceFactory, uow: &mut UnitOfWork) -> Self {
        Self::create_with(services, uow, "MATH", 785, "H-10", ("Jirkin", "Marlush")).await
    }

    pub async fn create_with(
        services: &ServiceFactory,
        uow: &mut UnitOfWork,
        subject: &str,
        classroom: i32,
        group: &str,
        teacher: (&str, &str),
    ) -> Self {
        Self {
            subject: services.subjects.create(uow, &subject_request(subject)).await.unwrap(),
            classroom: services.classrooms.create(uow, &classroom_request(classroom)).await.unwrap(),
            group: services.groups.create(uow, &group_request(group)).await.unwrap(),
            teacher: services.teachers.create(uow, &teacher_request(teacher.0, teacher.1)).await.unwrap(),
        }
    }

    pub fn event_request(&self, at: NaiveDateTime) -> EventCreateRequest {
        EventCreateRequest {
            date_time: Some(at),
            subject_id: Some(self.subject.id),
            classroom_id: Some(self.classroom.id),
            group_id: Some(self.group.id),
            teacher_id: Some(self.teacher.id),
        }
    }
}
