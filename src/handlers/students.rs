//! Student endpoints

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, patch, post},
    Json, Router,
};
use serde_json::{json, Value};
use crate::models::{StudentCreateRequest, StudentResponse};
use crate::utils::errors::Result;
use super::{JsonBody, header_i32, header_text, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(find_all))
        .route("/count", get(count))
        .route("/find/by_course", get(find_by_course_number))
        .route("/find/by_group/:group_id", get(find_by_group))
        .route("/find/by_name", get(find_by_name))
        .route("/save", post(create))
        .route("/save/all", post(save_all))
        .route("/update/:id", patch(update))
        .route("/delete/all", delete(delete_all))
        .route("/delete/by_course", delete(delete_by_course_number))
        .route("/delete/by_group/:group_id", delete(delete_by_group))
        .route("/:id", get(find_by_id))
        .route("/:id/delete", delete(delete_by_id))
        .route("/:id/group", delete(remove_group))
        .route("/:id/group/:group_id", patch(assign_group))
}

async fn find_all(State(state): State<AppState>) -> Result<Json<Value>> {
    let mut uow = state.database.begin().await?;
    let students = state.services.students.find_all(&mut uow).await?;
    uow.commit().await?;

    Ok(Json(json!({ "students": students })))
}

async fn find_by_id(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<StudentResponse>> {
    let mut uow = state.database.begin().await?;
    let student = state.services.students.find_by_id(&mut uow, id).await?;
    uow.commit().await?;

    Ok(Json(student))
}

async fn find_by_course_number(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<Value>> {
    let course_number = header_i32(&headers, "courseNumber")?;

    let mut uow = state.database.begin().await?;
    let students = state.services.students.find_by_course_number(&mut uow, course_number).await?;
    uow.commit().await?;

    Ok(Json(json!({ "students": students })))
}

async fn find_by_group(State(state): State<AppState>, Path(group_id): Path<i32>) -> Result<Json<Value>> {
    let mut uow = state.database.begin().await?;
    let students = state.services.students.find_by_group(&mut uow, group_id).await?;
    uow.commit().await?;

    Ok(Json(json!({ "students": students })))
}

async fn find_by_name(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<StudentResponse>> {
    let first_name = header_text(&headers, "firstName")?;
    let last_name = header_text(&headers, "lastName")?;

    let mut uow = state.database.begin().await?;
    let student = state.services.students.find_by_name(&mut uow, first_name, last_name).await?;
    uow.commit().await?;

    Ok(Json(student))
}

async fn count(State(state): State<AppState>) -> Result<Json<Value>> {
    let mut uow = state.database.begin().await?;
    let count = state.services.students.count(&mut uow).await?;
    uow.commit().await?;

    Ok(Json(json!({ "count": count })))
}

async fn create(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<StudentCreateRequest>,
) -> Result<(StatusCode, Json<StudentResponse>)> {
    let mut uow = state.database.begin().await?;
    let student = state.services.students.create(&mut uow, &request).await?;
    uow.commit().await?;

    Ok((StatusCode::CREATED, Json(student)))
}

async fn save_all(
    State(state): State<AppState>,
    JsonBody(requests): JsonBody<Vec<StudentCreateRequest>>,
) -> Result<(StatusCode, Json<Value>)> {
    let mut uow = state.database.begin().await?;
    let students = state.services.students.save_all(&mut uow, &requests).await?;
    uow.commit().await?;

    Ok((StatusCode::CREATED, Json(json!({ "students": students }))))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(request): JsonBody<StudentCreateRequest>,
) -> Result<Json<StudentResponse>> {
    let mut uow = state.database.begin().await?;
    let student = state.services.students.update(&mut uow, id, &request).await?;
    uow.commit().await?;

    Ok(Json(student))
}

async fn assign_group(
    State(state): State<AppState>,
    Path((id, group_id)): Path<(i32, i32)>,
) -> Result<Json<StudentResponse>> {
    let mut uow = state.database.begin().await?;
    let student = state.services.students.assign_group(&mut uow, id, group_id).await?;
    uow.commit().await?;

    Ok(Json(student))
}

async fn remove_group(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<StudentResponse>> {
    let mut uow = state.database.begin().await?;
    let student = state.services.students.remove_group(&mut uow, id).await?;
    uow.commit().await?;

    Ok(Json(student))
}

async fn delete_by_id(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Value>> {
    let mut uow = state.database.begin().await?;
    state.services.students.delete_by_id(&mut uow, id).await?;
    uow.commit().await?;

    Ok(Json(json!({ "deleted": id })))
}

async fn delete_by_course_number(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<Value>> {
    let course_number = header_i32(&headers, "courseNumber")?;

    let mut uow = state.database.begin().await?;
    let deleted = state.services.students.delete_by_course_number(&mut uow, course_number).await?;
    uow.commit().await?;

    Ok(Json(json!({ "deleted": deleted })))
}

async fn delete_by_group(State(state): State<AppState>, Path(group_id): Path<i32>) -> Result<Json<Value>> {
    let mut uow = state.database.begin().await?;
    let deleted = state.services.students.delete_by_group(&mut uow, group_id).await?;
    uow.commit().await?;

    Ok(Json(json!({ "deleted": deleted })))
}

async fn delete_all(State(state): State<AppState>) -> Result<Json<Value>> {
    let mut uow = state.database.begin().await?;
    let deleted = state.services.students.delete_all(&mut uow).await?;
    uow.commit().await?;

    Ok(Json(json!({ "deleted": deleted })))
}
