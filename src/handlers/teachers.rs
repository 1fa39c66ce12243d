//! Teacher endpoints

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, patch, post},
    Json, Router,
};
use serde_json::{json, Value};
use crate::models::{TeacherCreateRequest, TeacherResponse};
use crate::utils::errors::Result;
use super::{JsonBody, header_text, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(find_all))
        .route("/count", get(count))
        .route("/save", post(create))
        .route("/save/all", post(save_all))
        .route("/update/:id", patch(update))
        .route("/delete/all", delete(delete_all))
        .route("/delete/by_name", delete(delete_by_name))
        .route("/:id", get(find_by_id))
        .route("/:id/delete", delete(delete_by_id))
        .route("/:id/subjects", get(subjects))
        .route("/:id/subjects/:subject_id", post(add_subject))
}

async fn find_all(State(state): State<AppState>) -> Result<Json<Value>> {
    let mut uow = state.database.begin().await?;
    let teachers = state.services.teachers.find_all(&mut uow).await?;
    uow.commit().await?;

    Ok(Json(json!({ "teachers": teachers })))
}

async fn find_by_id(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<TeacherResponse>> {
    let mut uow = state.database.begin().await?;
    let teacher = state.services.teachers.find_by_id(&mut uow, id).await?;
    uow.commit().await?;

    Ok(Json(teacher))
}

async fn count(State(state): State<AppState>) -> Result<Json<Value>> {
    let mut uow = state.database.begin().await?;
    let count = state.services.teachers.count(&mut uow).await?;
    uow.commit().await?;

    Ok(Json(json!({ "count": count })))
}

async fn create(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<TeacherCreateRequest>,
) -> Result<(StatusCode, Json<TeacherResponse>)> {
    let mut uow = state.database.begin().await?;
    let teacher = state.services.teachers.create(&mut uow, &request).await?;
    uow.commit().await?;

    Ok((StatusCode::CREATED, Json(teacher)))
}

async fn save_all(
    State(state): State<AppState>,
    JsonBody(requests): JsonBody<Vec<TeacherCreateRequest>>,
) -> Result<(StatusCode, Json<Value>)> {
    let mut uow = state.database.begin().await?;
    let teachers = state.services.teachers.save_all(&mut uow, &requests).await?;
    uow.commit().await?;

    Ok((StatusCode::CREATED, Json(json!({ "teachers": teachers }))))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(request): JsonBody<TeacherCreateRequest>,
) -> Result<Json<TeacherResponse>> {
    let mut uow = state.database.begin().await?;
    let teacher = state.services.teachers.update(&mut uow, id, &request).await?;
    uow.commit().await?;

    Ok(Json(teacher))
}

async fn delete_by_id(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Value>> {
    let mut uow = state.database.begin().await?;
    state.services.teachers.delete_by_id(&mut uow, id).await?;
    uow.commit().await?;

    Ok(Json(json!({ "deleted": id })))
}

async fn delete_by_name(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<Value>> {
    let first_name = header_text(&headers, "firstName")?;
    let last_name = header_text(&headers, "lastName")?;

    let mut uow = state.database.begin().await?;
    let deleted = state.services.teachers.delete_by_name(&mut uow, first_name, last_name).await?;
    uow.commit().await?;

    Ok(Json(json!({ "deleted": deleted })))
}

async fn delete_all(State(state): State<AppState>) -> Result<Json<Value>> {
    let mut uow = state.database.begin().await?;
    let deleted = state.services.teachers.delete_all(&mut uow).await?;
    uow.commit().await?;

    Ok(Json(json!({ "deleted": deleted })))
}

async fn subjects(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Value>> {
    let mut uow = state.database.begin().await?;
    let subjects = state.services.teachers.subjects(&mut uow, id).await?;
    uow.commit().await?;

    Ok(Json(json!({ "subjects": subjects })))
}

async fn add_subject(
    State(state): State<AppState>,
    Path((id, subject_id)): Path<(i32, i32)>,
) -> Result<Json<Value>> {
    let mut uow = state.database.begin().await?;
    let subjects = state.services.teachers.add_subject(&mut uow, id, subject_id).await?;
    uow.commit().await?;

    Ok(Json(json!({ "subjects": subjects })))
}
