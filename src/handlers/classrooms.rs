//! Classroom endpoints

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, patch, post},
    Json, Router,
};
use serde_json::{json, Value};
use crate::models::{ClassroomCreateRequest, ClassroomResponse};
use crate::utils::errors::Result;
use super::{JsonBody, header_i32, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(find_all))
        .route("/count", get(count))
        .route("/find/by_number", get(find_by_number))
        .route("/save", post(create))
        .route("/save/all", post(save_all))
        .route("/update/:id", patch(update))
        .route("/delete/all", delete(delete_all))
        .route("/:id", get(find_by_id))
        .route("/:id/delete", delete(delete_by_id))
}

async fn find_all(State(state): State<AppState>) -> Result<Json<Value>> {
    let mut uow = state.database.begin().await?;
    let classrooms = state.services.classrooms.find_all(&mut uow).await?;
    uow.commit().await?;

    Ok(Json(json!({ "classrooms": classrooms })))
}

async fn find_by_id(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<ClassroomResponse>> {
    let mut uow = state.database.begin().await?;
    let classroom = state.services.classrooms.find_by_id(&mut uow, id).await?;
    uow.commit().await?;

    Ok(Json(classroom))
}

async fn find_by_number(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<ClassroomResponse>> {
    let number = header_i32(&headers, "number")?;

    let mut uow = state.database.begin().await?;
    let classroom = state.services.classrooms.find_by_number(&mut uow, number).await?;
    uow.commit().await?;

    Ok(Json(classroom))
}

async fn count(State(state): State<AppState>) -> Result<Json<Value>> {
    let mut uow = state.database.begin().await?;
    let count = state.services.classrooms.count(&mut uow).await?;
    uow.commit().await?;

    Ok(Json(json!({ "count": count })))
}

async fn create(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ClassroomCreateRequest>,
) -> Result<(StatusCode, Json<ClassroomResponse>)> {
    let mut uow = state.database.begin().await?;
    let classroom = state.services.classrooms.create(&mut uow, &request).await?;
    uow.commit().await?;

    Ok((StatusCode::CREATED, Json(classroom)))
}

async fn save_all(
    State(state): State<AppState>,
    JsonBody(requests): JsonBody<Vec<ClassroomCreateRequest>>,
) -> Result<(StatusCode, Json<Value>)> {
    let mut uow = state.database.begin().await?;
    let classrooms = state.services.classrooms.save_all(&mut uow, &requests).await?;
    uow.commit().await?;

    Ok((StatusCode::CREATED, Json(json!({ "classrooms": classrooms }))))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(request): JsonBody<ClassroomCreateRequest>,
) -> Result<Json<ClassroomResponse>> {
    let mut uow = state.database.begin().await?;
    let classroom = state.services.classrooms.update(&mut uow, id, &request).await?;
    uow.commit().await?;

    Ok(Json(classroom))
}

async fn delete_by_id(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Value>> {
    let mut uow = state.database.begin().await?;
    state.services.classrooms.delete_by_id(&mut uow, id).await?;
    uow.commit().await?;

    Ok(Json(json!({ "deleted": id })))
}

async fn delete_all(State(state): State<AppState>) -> Result<Json<Value>> {
    let mut uow = state.database.begin().await?;
    let deleted = state.services.classrooms.delete_all(&mut uow).await?;
    uow.commit().await?;

    Ok(Json(json!({ "deleted": deleted })))
}
