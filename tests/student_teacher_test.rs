//! Student, teacher and subject service integration tests

#[macro_use]
mod helpers;

use assert_matches::assert_matches;
use helpers::*;
use serial_test::serial;
use university_schedule::models::{NewStudent, NewSubject, NewTeacher};
use university_schedule::UniversityError;

#[tokio::test]
#[serial]
async fn test_student_with_group_round_trip() {
    let db = require_database!();
    let services = &db.services;
    let mut uow = db.uow().await;

    let group = services.groups.create(&mut uow, &group_request("H-10")).await.unwrap();
    let student = services
        .students
        .create(&mut uow, &student_request("Olena", "Koval", 2, Some(group.id)))
        .await
        .unwrap();

    assert_eq!(student.first_name, "Olena");
    assert_eq!(student.course_number, 2);
    assert_eq!(student.group, Some(group.clone()));

    let found = services.students.find_by_name(&mut uow, "Olena", "Koval").await.unwrap();
    assert_eq!(found, student);

    let in_group = services.groups.students(&mut uow, group.id).await.unwrap();
    assert_eq!(in_group, vec![student]);
}

#[tokio::test]
#[serial]
async fn test_student_group_must_exist() {
    let db = require_database!();
    let mut uow = db.uow().await;

    assert_matches!(
        db.services.students.create(&mut uow, &student_request("Olena", "Koval", 2, Some(404))).await,
        Err(UniversityError::GroupNotFound { group_id: 404 })
    );
    assert_matches!(
        db.services.students.find_by_name(&mut uow, "Olena", "Koval").await,
        Err(UniversityError::StudentNameNotFound { .. })
    );
}

#[tokio::test]
#[serial]
async fn test_deleting_group_keeps_students_without_group() {
    let db = require_database!();
    let services = &db.services;
    let mut uow = db.uow().await;

    let group = services.groups.create(&mut uow, &group_request("H-10")).await.unwrap();
    let student = services
        .students
        .create(&mut uow, &student_request("Ivan", "Petrenko", 1, Some(group.id)))
        .await
        .unwrap();

    services.groups.delete_by_id(&mut uow, group.id).await.unwrap();

    let orphan = services.students.find_by_id(&mut uow, student.id).await.unwrap();
    assert_eq!(orphan.group, None);
    assert_eq!(services.students.count(&mut uow).await.unwrap(), 1);
}

#[tokio::test]
#[serial]
async fn test_assign_and_remove_group() {
    let db = require_database!();
    let services = &db.services;
    let mut uow = db.uow().await;

    let group = services.groups.create(&mut uow, &group_request("H-10")).await.unwrap();
    let student = services
        .students
        .create(&mut uow, &student_request("Ivan", "Petrenko", 1, None))
        .await
        .unwrap();
    assert_eq!(student.group, None);

    let assigned = services.students.assign_group(&mut uow, student.id, group.id).await.unwrap();
    assert_eq!(assigned.group.map(|g| g.id), Some(group.id));

    assert_matches!(
        services.students.assign_group(&mut uow, student.id, 555).await,
        Err(UniversityError::GroupNotFound { group_id: 555 })
    );
    assert_matches!(
        services.students.assign_group(&mut uow, 555, group.id).await,
        Err(UniversityError::StudentNotFound { student_id: 555 })
    );

    let removed = services.students.remove_group(&mut uow, student.id).await.unwrap();
    assert_eq!(removed.group, None);
}

#[tokio::test]
#[serial]
async fn test_students_by_course_and_group() {
    let db = require_database!();
    let services = &db.services;
    let mut uow = db.uow().await;

    let group = services.groups.create(&mut uow, &group_request("H-10")).await.unwrap();
    let requests = vec![
        student_request("Ivan", "Petrenko", 1, Some(group.id)),
        student_request("Olena", "Koval", 2, Some(group.id)),
        student_request("Taras", "Bondar", 1, None),
    ];
    services.students.save_all(&mut uow, &requests).await.unwrap();

    assert_eq!(services.students.find_by_course_number(&mut uow, 1).await.unwrap().len(), 2);
    assert_eq!(services.students.find_by_group(&mut uow, group.id).await.unwrap().len(), 2);

    assert_eq!(services.students.delete_by_course_number(&mut uow, 1).await.unwrap(), 2);
    assert_eq!(services.students.delete_by_group(&mut uow, group.id).await.unwrap(), 1);
    assert_eq!(services.students.count(&mut uow).await.unwrap(), 0);
}

#[tokio::test]
#[serial]
async fn test_save_all_is_all_or_nothing() {
    let db = require_database!();
    let services = &db.services;

    let mut uow = db.uow().await;
    let requests = vec![
        student_request("Ivan", "Petrenko", 1, None),
        student_request("", "Koval", 2, None),
    ];
    assert_matches!(
        services.students.save_all(&mut uow, &requests).await,
        Err(UniversityError::Validation(e)) if e.contains_field("firstName")
    );
    drop(uow);

    assert_eq!(db.count_records("students").await, 0);

    let mut uow = db.uow().await;
    let groups = vec![group_request("A-01"), group_request("A-01")];
    assert_matches!(
        services.groups.save_all(&mut uow, &groups).await,
        Err(UniversityError::GroupNameTaken { .. })
    );
    drop(uow);

    assert_eq!(db.count_records("groups").await, 0);
}

#[tokio::test]
#[serial]
async fn test_teacher_subjects() {
    let db = require_database!();
    let services = &db.services;
    let mut uow = db.uow().await;

    let teacher = services.teachers.create(&mut uow, &teacher_request("Jirkin", "Marlush")).await.unwrap();
    let math = services.subjects.create(&mut uow, &subject_request("MATH")).await.unwrap();
    let physics = services.subjects.create(&mut uow, &subject_request("PHYSICS")).await.unwrap();

    services.teachers.add_subject(&mut uow, teacher.id, math.id).await.unwrap();
    let subjects = services.teachers.add_subject(&mut uow, teacher.id, physics.id).await.unwrap();
    assert_eq!(subjects, vec![math.clone(), physics.clone()]);

    let again = services.teachers.add_subject(&mut uow, teacher.id, math.id).await.unwrap();
    assert_eq!(again.len(), 2);

    assert_matches!(
        services.teachers.add_subject(&mut uow, teacher.id, 999).await,
        Err(UniversityError::SubjectNotFound { subject_id: 999 })
    );
    assert_matches!(
        services.teachers.subjects(&mut uow, 999).await,
        Err(UniversityError::TeacherNotFound { teacher_id: 999 })
    );
}

#[tokio::test]
#[serial]
async fn test_teacher_update_and_delete_by_name() {
    let db = require_database!();
    let services = &db.services;
    let mut uow = db.uow().await;

    let teachers = services
        .teachers
        .save_all(
            &mut uow,
            &[teacher_request("Jirkin", "Marlush"), teacher_request("Jirkin", "Marlush"), teacher_request("Olena", "Koval")],
        )
        .await
        .unwrap();

    let updated = services
        .teachers
        .update(&mut uow, teachers[2].id, &teacher_request("Olena", "Bondar"))
        .await
        .unwrap();
    assert_eq!(updated.last_name, "Bondar");

    assert_eq!(services.teachers.delete_by_name(&mut uow, "Jirkin", "Marlush").await.unwrap(), 2);
    assert_eq!(services.teachers.count(&mut uow).await.unwrap(), 1);
    assert_matches!(
        services.teachers.delete_by_id(&mut uow, teachers[0].id).await,
        Err(UniversityError::TeacherNotFound { .. })
    );
}

#[tokio::test]
#[serial]
async fn test_subject_crud() {
    let db = require_database!();
    let services = &db.services;
    let mut uow = db.uow().await;

    let subject = services.subjects.create(&mut uow, &subject_request("MATH")).await.unwrap();
    let renamed = services.subjects.update(&mut uow, subject.id, &subject_request("ALGEBRA")).await.unwrap();
    assert_eq!(renamed.name, "ALGEBRA");
    assert_eq!(services.subjects.find_by_name(&mut uow, "ALGEBRA").await.unwrap().id, subject.id);

    assert_matches!(
        services.subjects.create(&mut uow, &subject_request("  ")).await,
        Err(UniversityError::Validation(e)) if e.contains_field("name")
    );
    assert_matches!(
        services.subjects.find_by_name(&mut uow, "MATH").await,
        Err(UniversityError::SubjectNameNotFound { .. })
    );

    services.subjects.delete_by_id(&mut uow, subject.id).await.unwrap();
    assert_matches!(
        services.subjects.find_by_id(&mut uow, subject.id).await,
        Err(UniversityError::SubjectNotFound { .. })
    );
}

#[tokio::test]
#[serial]
async fn test_foreign_key_violations_on_links() {
    let db = require_database!();

    let mut uow = db.uow().await;
    let student = NewStudent {
        first_name: "Olena".to_string(),
        last_name: "Koval".to_string(),
        course_number: 2,
        group_id: Some(404),
    };
    assert_matches!(
        uow.students().save(&student).await,
        Err(UniversityError::GroupNotFound { group_id: 404 })
    );

    let mut uow = db.uow().await;
    let saved = uow.students().save(&NewStudent { group_id: None, ..student }).await.unwrap();
    assert_matches!(
        uow.students().set_group(saved.id, Some(404)).await,
        Err(UniversityError::GroupNotFound { group_id: 404 })
    );

    let mut uow = db.uow().await;
    let teacher = uow
        .teachers()
        .save(&NewTeacher { first_name: "Jirkin".to_string(), last_name: "Marlush".to_string() })
        .await
        .unwrap();
    assert_matches!(
        uow.teachers().add_subject(teacher.id, 9999).await,
        Err(UniversityError::SubjectNotFound { subject_id: 9999 })
    );

    let mut uow = db.uow().await;
    let subject = uow.subjects().save(&NewSubject { name: "MATH".to_string() }).await.unwrap();
    assert_matches!(
        uow.teachers().add_subject(9999, subject.id).await,
        Err(UniversityError::TeacherNotFound { teacher_id: 9999 })
    );
}
