//! JSON error responses of the HTTP API
//!
//! Every non-2xx response carries an `ErrorResponse { code, message }`.
//! Storage failures are mapped here so handlers can use `?`.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use contracts::shared::error_response::ErrorResponse;

use crate::domain::master_data::StorageError;

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self.body)).into_response()
    }
}

pub fn api_not_found(message: &str) -> ApiError {
    ApiError {
        status: StatusCode::NOT_FOUND,
        body: ErrorResponse::new("not_found", message),
    }
}

pub fn api_conflict(message: &str) -> ApiError {
    ApiError {
        status: StatusCode::CONFLICT,
        body: ErrorResponse::new("conflict", message),
    }
}

pub fn api_validation_error(message: &str) -> ApiError {
    ApiError {
        status: StatusCode::BAD_REQUEST,
        body: ErrorResponse::new("validation_error", message),
    }
}

/// Details go to the log, the client gets the generic `message`
pub fn api_internal(message: &str, err: &dyn std::fmt::Display) -> ApiError {
    tracing::error!(error = %err, "{}", message);
    ApiError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: ErrorResponse::new("internal", message),
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match &err {
            StorageError::UnknownTable(_) => api_validation_error(&err.to_string()),
            StorageError::NotFound(m) => api_not_found(m),
            StorageError::Validation(m) => api_validation_error(m),
            StorageError::Conflict(m) => api_conflict(m),
            StorageError::Db(e) => api_internal("Storage error", e),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        api_internal("Internal error", &err)
    }
}
