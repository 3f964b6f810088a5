use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::UserId;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

/// A reservation of one seat in a class session.
///
/// Created only by the reservation engine; transitions to `Cancelled` only
/// through an explicit cancellation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: u64,
    pub user_id: UserId,
    pub class_id: i64,
    pub created_at: DateTime<Utc>,
    pub status: BookingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
}

/// A request to book one seat.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub user_id: UserId,
    pub class_id: i64,
    pub idempotency_key: Option<String>,
}

impl BookingRequest {
    /// Well-formedness checks before any state is touched.
    pub fn validate(&self) -> Result<(), BookingError> {
        let mut errors = Vec::new();

        if self.user_id <= 0 {
            errors.push(FieldError::new("userId", "User ID must be a positive integer"));
        }
        if self.class_id <= 0 {
            errors.push(FieldError::new("classId", "Class ID must be a positive integer"));
        }
        if let Some(key) = &self.idempotency_key {
            if key.trim().is_empty() {
                errors.push(FieldError::new("idempotencyKey", "Idempotency key must not be empty"));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(BookingError::InvalidRequest(errors))
        }
    }
}

/// One field-level validation failure, in the shape the API reports.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Reservation failure taxonomy. All variants are reported synchronously to
/// the caller; none leave partial state behind.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Invalid booking request")]
    InvalidRequest(Vec<FieldError>),

    #[error("Class not found: {0}")]
    ClassNotFound(i64),

    #[error("Class {0} is fully booked")]
    NoCapacity(i64),

    #[error("Booking not found: {0}")]
    NotFound(u64),

    #[error("Booking belongs to another user")]
    NotOwner,

    #[error("Booking already cancelled")]
    AlreadyCancelled,
}
