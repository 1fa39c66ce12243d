//! Group endpoints

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, patch, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::info;
use crate::models::{GroupCreateRequest, GroupResponse, StudentResponse};
use crate::utils::errors::Result;
use super::{JsonBody, header_text, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(find_all))
        .route("/count", get(count))
        .route("/find/by_name", get(find_by_name))
        .route("/save", post(create))
        .route("/save/all", post(save_all))
        .route("/update/:id", patch(update))
        .route("/delete/all", delete(delete_all))
        .route("/:id", get(find_by_id))
        .route("/:id/students", get(students))
        .route("/:id/delete", delete(delete_by_id))
}

async fn find_all(State(state): State<AppState>) -> Result<Json<Value>> {
    let mut uow = state.database.begin().await?;
    let groups = state.services.groups.find_all(&mut uow).await?;
    uow.commit().await?;

    Ok(Json(json!({ "groups": groups })))
}

async fn find_by_id(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<GroupResponse>> {
    let mut uow = state.database.begin().await?;
    let group = state.services.groups.find_by_id(&mut uow, id).await?;
    uow.commit().await?;

    Ok(Json(group))
}

async fn find_by_name(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<GroupResponse>> {
    let name = header_text(&headers, "name")?;

    let mut uow = state.database.begin().await?;
    let group = state.services.groups.find_by_name(&mut uow, name).await?;
    uow.commit().await?;

    Ok(Json(group))
}

async fn students(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Value>> {
    let mut uow = state.database.begin().await?;
    let students: Vec<StudentResponse> = state.services.groups.students(&mut uow, id).await?;
    uow.commit().await?;

    Ok(Json(json!({ "students": students })))
}

async fn count(State(state): State<AppState>) -> Result<Json<Value>> {
    let mut uow = state.database.begin().await?;
    let count = state.services.groups.count(&mut uow).await?;
    uow.commit().await?;

    Ok(Json(json!({ "count": count })))
}

async fn create(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<GroupCreateRequest>,
) -> Result<(StatusCode, Json<GroupResponse>)> {
    let mut uow = state.database.begin().await?;
    let group = state.services.groups.create(&mut uow, &request).await?;
    uow.commit().await?;

    info!(group_id = group.id, "Group created via API");
    Ok((StatusCode::CREATED, Json(group)))
}

async fn save_all(
    State(state): State<AppState>,
    JsonBody(requests): JsonBody<Vec<GroupCreateRequest>>,
) -> Result<(StatusCode, Json<Value>)> {
    let mut uow = state.database.begin().await?;
    let groups = state.services.groups.save_all(&mut uow, &requests).await?;
    uow.commit().await?;

    Ok((StatusCode::CREATED, Json(json!({ "groups": groups }))))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(request): JsonBody<GroupCreateRequest>,
) -> Result<Json<GroupResponse>> {
    let mut uow = state.database.begin().await?;
    let group = state.services.groups.update(&mut uow, id, &request).await?;
    uow.commit().await?;

    Ok(Json(group))
}

async fn delete_by_id(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Value>> {
    let mut uow = state.database.begin().await?;
    state.services.groups.delete_by_id(&mut uow, id).await?;
    uow.commit().await?;

    Ok(Json(json!({ "deleted": id })))
}

async fn delete_all(State(state): State<AppState>) -> Result<Json<Value>> {
    let mut uow = state.database.begin().await?;
    let deleted = state.services.groups.delete_all(&mut uow).await?;
    uow.commit().await?;

    Ok(Json(json!({ "deleted": deleted })))
}
