//! Subject endpoints

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, patch, post},
    Json, Router,
};
use serde_json::{json, Value};
use crate::models::{SubjectCreateRequest, SubjectResponse};
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
        .route("/:id/delete", delete(delete_by_id))
}

async fn find_all(State(state): State<AppState>) -> Result<Json<Value>> {
    let mut uow = state.database.begin().await?;
    let subjects = state.services.subjects.find_all(&mut uow).await?;
    uow.commit().await?;

    Ok(Json(json!({ "subjects": subjects })))
}

async fn find_by_id(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<SubjectResponse>> {
    let mut uow = state.database.begin().await?;
    let subject = state.services.subjects.find_by_id(&mut uow, id).await?;
    uow.commit().await?;

    Ok(Json(subject))
}

async fn find_by_name(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<SubjectResponse>> {
    let name = header_text(&headers, "name")?;

    let mut uow = state.database.begin().await?;
    let subject = state.services.subjects.find_by_name(&mut uow, name).await?;
    uow.commit().await?;

    Ok(Json(subject))
}

async fn count(State(state): State<AppState>) -> Result<Json<Value>> {
    let mut uow = state.database.begin().await?;
    let count = state.services.subjects.count(&mut uow).await?;
    uow.commit().await?;

    Ok(Json(json!({ "count": count })))
}

async fn create(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<SubjectCreateRequest>,
) -> Result<(StatusCode, Json<SubjectResponse>)> {
    let mut uow = state.database.begin().await?;
    let subject = state.services.subjects.create(&mut uow, &request).await?;
    uow.commit().await?;

    Ok((StatusCode::CREATED, Json(subject)))
}

async fn save_all(
    State(state): State<AppState>,
    JsonBody(requests): JsonBody<Vec<SubjectCreateRequest>>,
) -> Result<(StatusCode, Json<Value>)> {
    let mut uow = state.database.begin().await?;
    let subjects = state.services.subjects.save_all(&mut uow, &requests).await?;
    uow.commit().await?;

    Ok((StatusCode::CREATED, Json(json!({ "subjects": subjects }))))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(request): JsonBody<SubjectCreateRequest>,
) -> Result<Json<SubjectResponse>> {
    let mut uow = state.database.begin().await?;
    let subject = state.services.subjects.update(&mut uow, id, &request).await?;
    uow.commit().await?;

    Ok(Json(subject))
}

async fn delete_by_id(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Value>> {
    let mut uow = state.database.begin().await?;
    state.services.subjects.delete_by_id(&mut uow, id).await?;
    uow.commit().await?;

    Ok(Json(json!({ "deleted": id })))
}

async fn delete_all(State(state): State<AppState>) -> Result<Json<Value>> {
    let mut uow = state.database.begin().await?;
    let deleted = state.services.subjects.delete_all(&mut uow).await?;
    uow.commit().await?;

    Ok(Json(json!({ "deleted": deleted })))
}
