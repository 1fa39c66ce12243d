//! HTTP mapping for service errors
//!
//! Validation failures and conflicts carry a list of field errors, missing
//! rows and malformed input carry a message, and everything else is logged
//! and reported as a generic server error.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use crate::utils::errors::{ErrorSeverity, UniversityError};
use crate::utils::helpers::timestamp_now;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrorResponse {
    pub field_name: String,
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldErrorResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    pub timestamp: String,
}

/// HTTP status for a service error
pub fn status_code(err: &UniversityError) -> StatusCode {
    match err {
        UniversityError::Validation(_) | UniversityError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        e if e.is_not_found() => StatusCode::NOT_FOUND,
        e if e.is_conflict() => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for UniversityError {
    fn into_response(self) -> Response {
        let status = status_code(&self);
        let timestamp = timestamp_now();

        match self.severity() {
            ErrorSeverity::Critical | ErrorSeverity::Error => error!(error = %self, "Request failed"),
            _ => warn!(error = %self, status = status.as_u16(), "Request rejected"),
        }

        let field_errors = self.field_errors();
        if !field_errors.is_empty() {
            let body = ValidationErrorResponse {
                errors: field_errors
                    .into_iter()
                    .map(|e| FieldErrorResponse {
                        field_name: e.field_name,
                        message: e.message,
                        timestamp: timestamp.clone(),
                    })
                    .collect(),
            };
            return (status, Json(body)).into_response();
        }

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(ErrorResponse { message, timestamp })).into_response()
    }
}
