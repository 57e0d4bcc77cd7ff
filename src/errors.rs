use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::services::booking_form::{FormError, ValidationError};
use crate::services::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("a booking submission is already in progress")]
    Busy,

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("forbidden: {0}")]
    Forbidden(String),
}

impl From<FormError> for AppError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::Busy => AppError::Busy,
            FormError::Validation(e) => AppError::Validation(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Store(StoreError::InvalidTransition { .. }) => StatusCode::CONFLICT,
            AppError::Store(StoreError::DuplicateReference(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Busy => StatusCode::CONFLICT,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
        };

        let body = match &self {
            AppError::Validation(e) => serde_json::json!({
                "error": self.to_string(),
                "missing": e.missing,
                "invalid": e.invalid.iter().map(|f| f.field).collect::<Vec<_>>(),
            }),
            _ => serde_json::json!({ "error": self.to_string() }),
        };
        (status, axum::Json(body)).into_response()
    }
}
