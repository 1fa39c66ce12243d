//! Event service integration tests
//!
//! Events are the only rows that point at four other tables, so these tests
//! cover reference checks, updates and the date range lookup.

#[macro_use]
mod helpers;

use assert_matches::assert_matches;
use helpers::*;
use serial_test::serial;
use university_schedule::models::{EventCreateRequest, EventReferences, NewEvent};
use university_schedule::UniversityError;

#[tokio::test]
#[serial]
async fn test_create_event_resolves_every_reference() {
    let db = require_database!();
    let services = &db.services;
    let mut uow = db.uow().await;

    let fixture = ScheduleFixture::create(services, &mut uow).await;
    let at = date_time(2024, 9, 2, 9, 0);

    let event = services.events.create(&mut uow, &fixture.event_request(at)).await.unwrap();
    uow.commit().await.unwrap();

    assert!(event.id > 0);
    assert_eq!(event.date_time, at);
    assert_eq!(event.subject.name, "MATH");
    assert_eq!(event.classroom.number, 785);
    assert_eq!(event.group.name, "H-10");
    assert_eq!(event.teacher.first_name, "Jirkin");
    assert_eq!(event.teacher.last_name, "Marlush");

    let mut uow = db.uow().await;
    let stored = services.events.find_by_id(&mut uow, event.id).await.unwrap();
    assert_eq!(stored, event);
}

#[tokio::test]
#[serial]
async fn test_update_event_keeps_id_and_replaces_references() {
    let db = require_database!();
    let services = &db.services;
    let mut uow = db.uow().await;

    let first = ScheduleFixture::create(services, &mut uow).await;
    let second = ScheduleFixture::create_with(
        services, &mut uow, "PHYSICS", 101, "K-20", ("Olena", "Koval"),
    )
    .await;

    let event = services
        .events
        .create(&mut uow, &first.event_request(date_time(2024, 9, 2, 9, 0)))
        .await
        .unwrap();

    let later = date_time(2024, 9, 3, 11, 30);
    let updated = services
        .events
        .update(&mut uow, event.id, &second.event_request(later))
        .await
        .unwrap();

    assert_eq!(updated.id, event.id);
    assert_eq!(updated.date_time, later);
    assert_eq!(updated.subject, second.subject);
    assert_eq!(updated.classroom, second.classroom);
    assert_eq!(updated.group, second.group);
    assert_eq!(updated.teacher, second.teacher);
    assert_eq!(services.events.count(&mut uow).await.unwrap(), 1);
}

#[tokio::test]
#[serial]
async fn test_missing_references_are_reported_one_by_one() {
    let db = require_database!();
    let services = &db.services;
    let mut uow = db.uow().await;

    let fixture = ScheduleFixture::create(services, &mut uow).await;
    let valid = fixture.event_request(date_time(2024, 9, 2, 9, 0));
    let missing = 9999;

    let request = EventCreateRequest { subject_id: Some(missing), ..valid.clone() };
    assert_matches!(
        services.events.create(&mut uow, &request).await,
        Err(UniversityError::SubjectNotFound { subject_id }) if subject_id == missing
    );

    let request = EventCreateRequest { classroom_id: Some(missing), ..valid.clone() };
    assert_matches!(
        services.events.create(&mut uow, &request).await,
        Err(UniversityError::ClassroomNotFound { classroom_id }) if classroom_id == missing
    );

    let request = EventCreateRequest { group_id: Some(missing), ..valid.clone() };
    assert_matches!(
        services.events.create(&mut uow, &request).await,
        Err(UniversityError::GroupNotFound { group_id }) if group_id == missing
    );

    let request = EventCreateRequest { teacher_id: Some(missing), ..valid.clone() };
    assert_matches!(
        services.events.create(&mut uow, &request).await,
        Err(UniversityError::TeacherNotFound { teacher_id }) if teacher_id == missing
    );

    assert_eq!(services.events.count(&mut uow).await.unwrap(), 0);
}

#[tokio::test]
#[serial]
async fn test_subject_is_checked_before_other_references() {
    let db = require_database!();
    let mut uow = db.uow().await;

    let request = EventCreateRequest {
        date_time: Some(date_time(2024, 9, 2, 9, 0)),
        subject_id: Some(1),
        classroom_id: Some(2),
        group_id: Some(3),
        teacher_id: Some(4),
    };

    assert_matches!(
        db.services.events.create(&mut uow, &request).await,
        Err(UniversityError::SubjectNotFound { subject_id: 1 })
    );
}

#[tokio::test]
#[serial]
async fn test_update_missing_event_is_not_found() {
    let db = require_database!();
    let services = &db.services;
    let mut uow = db.uow().await;

    let fixture = ScheduleFixture::create(services, &mut uow).await;
    let request = fixture.event_request(date_time(2024, 9, 2, 9, 0));

    assert_matches!(
        services.events.update(&mut uow, 4242, &request).await,
        Err(UniversityError::EventNotFound { event_id: 4242 })
    );

    // the event lookup comes before field validation
    assert_matches!(
        services.events.update(&mut uow, 4242, &EventCreateRequest::default()).await,
        Err(UniversityError::EventNotFound { .. })
    );
}

#[tokio::test]
#[serial]
async fn test_rejected_event_leaves_nothing_behind() {
    let db = require_database!();
    let services = &db.services;

    let mut uow = db.uow().await;
    let fixture = ScheduleFixture::create(services, &mut uow).await;
    uow.commit().await.unwrap();

    let mut uow = db.uow().await;
    let request = EventCreateRequest {
        teacher_id: Some(777),
        ..fixture.event_request(date_time(2024, 9, 2, 9, 0))
    };
    assert!(services.events.create(&mut uow, &request).await.is_err());
    drop(uow);

    assert_eq!(db.count_records("events").await, 0);
}

#[tokio::test]
#[serial]
async fn test_find_in_range_is_inclusive() {
    let db = require_database!();
    let services = &db.services;
    let mut uow = db.uow().await;

    let fixture = ScheduleFixture::create(services, &mut uow).await;
    let times = [
        date_time(2024, 9, 1, 8, 0),
        date_time(2024, 9, 2, 9, 0),
        date_time(2024, 9, 3, 10, 0),
        date_time(2024, 9, 4, 11, 0),
    ];
    for at in times {
        services.events.create(&mut uow, &fixture.event_request(at)).await.unwrap();
    }

    let found = services
        .events
        .find_in_range(&mut uow, times[1], times[2])
        .await
        .unwrap();
    let found_times: Vec<_> = found.iter().map(|e| e.date_time).collect();
    assert_eq!(found_times, vec![times[1], times[2]]);

    let inverted = services
        .events
        .find_in_range(&mut uow, times[3], times[0])
        .await
        .unwrap();
    assert!(inverted.is_empty());
}

#[tokio::test]
#[serial]
async fn test_delete_event() {
    let db = require_database!();
    let services = &db.services;
    let mut uow = db.uow().await;

    let fixture = ScheduleFixture::create(services, &mut uow).await;
    let event = services
        .events
        .create(&mut uow, &fixture.event_request(date_time(2024, 9, 2, 9, 0)))
        .await
        .unwrap();

    services.events.delete_by_id(&mut uow, event.id).await.unwrap();
    assert_matches!(
        services.events.delete_by_id(&mut uow, event.id).await,
        Err(UniversityError::EventNotFound { .. })
    );
    assert_matches!(
        services.events.find_by_id(&mut uow, event.id).await,
        Err(UniversityError::EventNotFound { .. })
    );

    assert_eq!(services.events.delete_all(&mut uow).await.unwrap(), 0);
    assert_eq!(services.events.count(&mut uow).await.unwrap(), 0);
}

#[tokio::test]
#[serial]
async fn test_deleting_a_reference_removes_its_events() {
    let db = require_database!();
    let services = &db.services;
    let mut uow = db.uow().await;

    let fixture = ScheduleFixture::create(services, &mut uow).await;
    services
        .events
        .create(&mut uow, &fixture.event_request(date_time(2024, 9, 2, 9, 0)))
        .await
        .unwrap();

    services.classrooms.delete_by_id(&mut uow, fixture.classroom.id).await.unwrap();

    assert_eq!(services.events.count(&mut uow).await.unwrap(), 0);
    assert_eq!(services.subjects.count(&mut uow).await.unwrap(), 1);
}

#[tokio::test]
#[serial]
async fn test_update_with_missing_teacher_leaves_event_unchanged() {
    let db = require_database!();
    let services = &db.services;
    let mut uow = db.uow().await;

    let fixture = ScheduleFixture::create(services, &mut uow).await;
    let at = date_time(2024, 9, 2, 9, 0);
    let event = services.events.create(&mut uow, &fixture.event_request(at)).await.unwrap();
    uow.commit().await.unwrap();

    let mut uow = db.uow().await;
    let request = EventCreateRequest {
        date_time: Some(date_time(2024, 9, 5, 14, 0)),
        teacher_id: Some(9999),
        ..fixture.event_request(at)
    };
    assert_matches!(
        services.events.update(&mut uow, event.id, &request).await,
        Err(UniversityError::TeacherNotFound { teacher_id: 9999 })
    );
    drop(uow);

    let mut uow = db.uow().await;
    let stored = services.events.find_by_id(&mut uow, event.id).await.unwrap();
    assert_eq!(stored, event);
    assert_eq!(stored.date_time, at);
    assert_eq!(stored.teacher, fixture.teacher);
}

#[tokio::test]
#[serial]
async fn test_foreign_key_violation_names_the_missing_reference() {
    let db = require_database!();
    let services = &db.services;

    let mut uow = db.uow().await;
    let fixture = ScheduleFixture::create(services, &mut uow).await;
    uow.commit().await.unwrap();

    let references = EventReferences {
        subject_id: fixture.subject.id,
        classroom_id: fixture.classroom.id,
        group_id: fixture.group.id,
        teacher_id: fixture.teacher.id,
    };
    let at = date_time(2024, 9, 2, 9, 0);

    // straight to the repository, as if the row vanished after the checks
    let mut uow = db.uow().await;
    let event = NewEvent { date_time: at, references: EventReferences { subject_id: 9999, ..references } };
    assert_matches!(
        uow.events().save(&event).await,
        Err(UniversityError::SubjectNotFound { subject_id: 9999 })
    );

    let mut uow = db.uow().await;
    let event = NewEvent { date_time: at, references: EventReferences { group_id: 9999, ..references } };
    assert_matches!(
        uow.events().save(&event).await,
        Err(UniversityError::GroupNotFound { group_id: 9999 })
    );

    let mut uow = db.uow().await;
    let saved = uow.events().save(&NewEvent { date_time: at, references }).await.unwrap();
    let event = NewEvent { date_time: at, references: EventReferences { teacher_id: 9999, ..references } };
    assert_matches!(
        uow.events().update(saved.id, &event).await,
        Err(UniversityError::TeacherNotFound { teacher_id: 9999 })
    );
}
