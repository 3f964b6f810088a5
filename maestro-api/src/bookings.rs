use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{delete, post},
    Extension, Json, Router,
};
use maestro_core::{BookingRequest, FieldError};
use serde_json::{json, Value};
use tracing::info;

use crate::error::AppError;
use crate::middleware::auth::{require_auth, AuthUser};
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/bookings", post(create_booking).get(list_bookings))
        .route("/bookings/{id}", delete(cancel_booking))
        .route_layer(axum::middleware::from_fn_with_state(state, require_auth))
}

async fn create_booking(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    // Unparseable bodies still get the JSON error envelope
    let Json(body) = body.map_err(|rejection| AppError::MalformedBody(rejection.body_text()))?;

    // 1. Validate the body shape (the mobile client sends integer ids)
    let mut errors = Vec::new();

    let user_id = body.get("userId").and_then(Value::as_i64);
    if user_id.is_none() {
        errors.push(FieldError::new("userId", "User ID must be an integer"));
    }

    let class_id = body.get("classId").and_then(Value::as_i64);
    if class_id.is_none() {
        errors.push(FieldError::new("classId", "Class ID must be an integer"));
    }

    let idempotency_key = match body.get("idempotencyKey") {
        None | Some(Value::Null) => None,
        Some(Value::String(key)) => Some(key.clone()),
        Some(_) => {
            errors.push(FieldError::new(
                "idempotencyKey",
                "Idempotency key must be a string",
            ));
            None
        }
    };

    let (user_id, class_id) = match (user_id, class_id) {
        (Some(user_id), Some(class_id)) if errors.is_empty() => (user_id, class_id),
        _ => return Err(AppError::Validation(errors)),
    };

    // 2. Book through the reservation engine
    let booking = state
        .engine
        .create_booking(BookingRequest {
            user_id,
            class_id,
            idempotency_key,
        })
        .await?;

    info!(booking_id = booking.id, caller = caller.0, "booking created");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "data": booking })),
    ))
}

async fn list_bookings(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
) -> Json<Value> {
    let bookings = state.engine.list_bookings_for_user(caller.0).await;

    Json(json!({ "success": true, "data": bookings }))
}

async fn cancel_booking(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Path(booking_id): Path<u64>,
) -> Result<Json<Value>, AppError> {
    let booking = state.engine.cancel_booking(booking_id, caller.0).await?;

    info!(booking_id = booking.id, caller = caller.0, "booking cancelled");

    Ok(Json(json!({ "success": true, "data": booking })))
}
