//! HTTP handlers module
//!
//! This module contains the JSON API, one submodule per collection. Every
//! handler runs one unit of work and commits it only when the service call
//! succeeded; an early return drops the unit of work and rolls it back.

pub mod error;
pub mod groups;
pub mod students;
pub mod teachers;
pub mod subjects;
pub mod classrooms;
pub mod events;

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request, State},
    http::HeaderMap,
    routing::get,
    Json, Router,
};
use chrono::NaiveDateTime;
use crate::database::Database;
use crate::services::ServiceFactory;
use crate::utils::errors::{UniversityError, Result};
use crate::utils::helpers::parse_date_time;

pub use error::{ErrorResponse, FieldErrorResponse, ValidationErrorResponse};

/// Shared state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub database: Database,
    pub services: ServiceFactory,
}

impl AppState {
    pub fn new(database: Database) -> Self {
        Self {
            database,
            services: ServiceFactory::new(),
        }
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/groups", groups::routes())
        .nest("/api/students", students::routes())
        .nest("/api/teachers", teachers::routes())
        .nest("/api/subjects", subjects::routes())
        .nest("/api/classrooms", classrooms::routes())
        .nest("/api/events", events::routes())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<&'static str> {
    state.database.health_check().await?;
    Ok("OK")
}

/// JSON request body whose rejections are reported as `InvalidInput`
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = UniversityError;

    async fn from_request(req: Request, state: &S) -> Result<Self> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(UniversityError::InvalidInput(rejection.body_text())),
        }
    }
}

/// Read a required header as text
pub(crate) fn header_text<'a>(headers: &'a HeaderMap, name: &str) -> Result<&'a str> {
    let value = headers
        .get(name)
        .ok_or_else(|| UniversityError::InvalidInput(format!("Missing header: {}", name)))?;

    value
        .to_str()
        .map_err(|_| UniversityError::InvalidInput(format!("Header {} is not valid text", name)))
}

/// Read a required header as an integer
pub(crate) fn header_i32(headers: &HeaderMap, name: &str) -> Result<i32> {
    let value = header_text(headers, name)?;
    value
        .trim()
        .parse()
        .map_err(|_| UniversityError::InvalidInput(format!("Header {} must be an integer, got '{}'", name, value)))
}

/// Read a required header as a local date-time
pub(crate) fn header_date_time(headers: &HeaderMap, name: &str) -> Result<NaiveDateTime> {
    let value = header_text(headers, name)?;
    parse_date_time(value).ok_or_else(|| {
        UniversityError::InvalidInput(format!(
            "Header {} must look like YYYY-MM-DDTHH:MM[:SS], got '{}'",
            name, value
        ))
    })
}
