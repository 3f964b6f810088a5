use async_trait::async_trait;
use maestro_catalog::{CatalogError, ClassFilter, ClassSession};

use crate::booking::{Booking, BookingStatus};
use crate::UserId;

/// Read/mutate access to the authoritative class catalog.
///
/// `decrement_availability` is an indivisible check-then-decrement: two
/// concurrent callers never both succeed past the last open spot.
#[async_trait]
pub trait ClassCatalog: Send + Sync {
    /// Filtered listing in insertion order. Never errors; an empty result is
    /// an empty vec.
    async fn list_classes(&self, filter: &ClassFilter) -> Vec<ClassSession>;

    async fn get_class(&self, id: i64) -> Result<ClassSession, CatalogError>;

    /// Atomically check `spots_available > 0` and decrement.
    async fn decrement_availability(&self, id: i64) -> Result<(), CatalogError>;

    /// Return one spot, capped at `capacity_total`.
    async fn increment_availability(&self, id: i64) -> Result<(), CatalogError>;
}

/// Append-oriented booking ledger. The reservation engine is its only writer.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Append a confirmed booking with a freshly assigned monotonic id.
    async fn append_booking(
        &self,
        user_id: UserId,
        class_id: i64,
        idempotency_key: Option<String>,
    ) -> Booking;

    async fn get_booking(&self, id: u64) -> Option<Booking>;

    async fn find_by_idempotency_key(&self, key: &str) -> Option<Booking>;

    /// All bookings for a user, insertion order, every status.
    async fn list_for_user(&self, user_id: UserId) -> Vec<Booking>;

    /// Overwrite a booking's status, returning the updated record.
    async fn update_status(&self, id: u64, status: BookingStatus) -> Option<Booking>;
}
