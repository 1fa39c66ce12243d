//! Event endpoints

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, patch, post},
    Json, Router,
};
use serde_json::{json, Value};
use crate::models::{EventCreateRequest, EventResponse};
use crate::utils::errors::Result;
use super::{JsonBody, header_date_time, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(find_all))
        .route("/count", get(count))
        .route("/find", get(find_in_range))
        .route("/save", post(create))
        .route("/update/:id", patch(update))
        .route("/delete/all", delete(delete_all))
        .route("/:id", get(find_by_id))
        .route("/:id/delete", delete(delete_by_id))
}

async fn find_all(State(state): State<AppState>) -> Result<Json<Value>> {
    let mut uow = state.database.begin().await?;
    let events = state.services.events.find_all(&mut uow).await?;
    uow.commit().await?;

    Ok(Json(json!({ "events": events })))
}

async fn find_by_id(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<EventResponse>> {
    let mut uow = state.database.begin().await?;
    let event = state.services.events.find_by_id(&mut uow, id).await?;
    uow.commit().await?;

    Ok(Json(event))
}

/// Events starting between the `startDateTime` and `endDateTime` headers
async fn find_in_range(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<Value>> {
    let start = header_date_time(&headers, "startDateTime")?;
    let end = header_date_time(&headers, "endDateTime")?;

    let mut uow = state.database.begin().await?;
    let events = state.services.events.find_in_range(&mut uow, start, end).await?;
    uow.commit().await?;

    Ok(Json(json!({ "events": events })))
}

async fn count(State(state): State<AppState>) -> Result<Json<Value>> {
    let mut uow = state.database.begin().await?;
    let count = state.services.events.count(&mut uow).await?;
    uow.commit().await?;

    Ok(Json(json!({ "count": count })))
}

async fn create(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<EventCreateRequest>,
) -> Result<(StatusCode, Json<EventResponse>)> {
    let mut uow = state.database.begin().await?;
    let event = state.services.events.create(&mut uow, &request).await?;
    uow.commit().await?;

    Ok((StatusCode::CREATED, Json(event)))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(request): JsonBody<EventCreateRequest>,
) -> Result<Json<EventResponse>> {
    let mut uow = state.database.begin().await?;
    let event = state.services.events.update(&mut uow, id, &request).await?;
    uow.commit().await?;

    Ok(Json(event))
}

async fn delete_by_id(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Value>> {
    let mut uow = state.database.begin().await?;
    state.services.events.delete_by_id(&mut uow, id).await?;
    uow.commit().await?;

    Ok(Json(json!({ "deleted": id })))
}

async fn delete_all(State(state): State<AppState>) -> Result<Json<Value>> {
    let mut uow = state.database.begin().await?;
    let deleted = state.services.events.delete_all(&mut uow).await?;
    uow.commit().await?;

    Ok(Json(json!({ "deleted": deleted })))
}
