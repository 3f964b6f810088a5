use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use maestro_core::{BookingError, FieldError};
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    AuthenticationError,
    Validation(Vec<FieldError>),
    NotFound(String),
    Forbidden(String),
    Conflict(String),
    FullyBooked,
    MalformedBody(String),
    Anyhow(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::AuthenticationError => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Authentication required" })),
            )
                .into_response(),
            AppError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": msg }))).into_response()
            }
            AppError::Forbidden(msg) => {
                (StatusCode::FORBIDDEN, Json(json!({ "error": msg }))).into_response()
            }
            AppError::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(json!({ "error": msg }))).into_response()
            }
            AppError::FullyBooked => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Class is fully booked" })),
            )
                .into_response(),
            AppError::MalformedBody(msg) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": { "message": msg, "status": 400 }
                })),
            )
                .into_response(),
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": { "message": "Internal Server Error", "status": 500 }
                    })),
                )
                    .into_response()
            }
        }
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::InvalidRequest(errors) => AppError::Validation(errors),
            BookingError::ClassNotFound(_) => AppError::NotFound("Class not found".to_string()),
            BookingError::NoCapacity(_) => AppError::FullyBooked,
            BookingError::NotFound(_) => AppError::NotFound("Booking not found".to_string()),
            BookingError::NotOwner => {
                AppError::Forbidden("Booking belongs to another user".to_string())
            }
            BookingError::AlreadyCancelled => {
                AppError::Conflict("Booking already cancelled".to_string())
            }
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Anyhow(err)
    }
}
