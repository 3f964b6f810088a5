use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use maestro_catalog::CatalogError;
use tracing::{debug, info};

use crate::booking::{Booking, BookingError, BookingRequest, BookingStatus};
use crate::repository::{BookingStore, ClassCatalog};
use crate::UserId;

/// The sole writer of booking records.
///
/// The capacity decrement and the ledger append for one class happen under
/// that class's mutex, so no caller can observe one without the other. The
/// lock is per class: bookings against different classes never contend.
pub struct ReservationEngine {
    catalog: Arc<dyn ClassCatalog>,
    bookings: Arc<dyn BookingStore>,
    class_locks: Mutex<HashMap<i64, Arc<tokio::sync::Mutex<()>>>>,
}

impl ReservationEngine {
    pub fn new(catalog: Arc<dyn ClassCatalog>, bookings: Arc<dyn BookingStore>) -> Self {
        Self {
            catalog,
            bookings,
            class_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Book one seat. On an idempotent replay the prior booking is returned
    /// unchanged; that is a success, not an error.
    pub async fn create_booking(&self, request: BookingRequest) -> Result<Booking, BookingError> {
        // 1. Validate before touching any state
        request.validate()?;

        // 2. Idempotency fast path
        if let Some(key) = &request.idempotency_key {
            if let Some(existing) = self.bookings.find_by_idempotency_key(key).await {
                debug!(booking_id = existing.id, "replayed booking request, returning prior result");
                return Ok(existing);
            }
        }

        // 3. Resolve the class first: unknown ids must not grow the lock
        //    table. Catalog entries are never removed, so the class cannot
        //    vanish between this check and the critical section.
        self.catalog
            .get_class(request.class_id)
            .await
            .map_err(|e| Self::map_catalog_error(e, request.class_id))?;

        // 4. Serialize against other bookings for this class
        let lock = self.class_lock(request.class_id);
        let _guard = lock.lock().await;

        // Re-check the key under the lock: two concurrent retries of the
        // same request must still produce exactly one booking.
        if let Some(key) = &request.idempotency_key {
            if let Some(existing) = self.bookings.find_by_idempotency_key(key).await {
                debug!(booking_id = existing.id, "replayed booking request, returning prior result");
                return Ok(existing);
            }
        }

        // 5. Take the spot, then append the booking. Both happen under the
        //    class lock, so they are observable only as a unit.
        self.catalog
            .decrement_availability(request.class_id)
            .await
            .map_err(|e| Self::map_catalog_error(e, request.class_id))?;

        let booking = self
            .bookings
            .append_booking(request.user_id, request.class_id, request.idempotency_key.clone())
            .await;

        info!(
            booking_id = booking.id,
            user_id = booking.user_id,
            class_id = booking.class_id,
            "booking confirmed"
        );

        Ok(booking)
    }

    /// All bookings for a user, insertion order, all statuses.
    pub async fn list_bookings_for_user(&self, user_id: UserId) -> Vec<Booking> {
        self.bookings.list_for_user(user_id).await
    }

    /// Cancel a confirmed booking and return its seat to the class. The
    /// status transition and the increment share the class's critical
    /// section; repeat cancellations never increment twice.
    pub async fn cancel_booking(
        &self,
        booking_id: u64,
        requesting_user_id: UserId,
    ) -> Result<Booking, BookingError> {
        let booking = self
            .bookings
            .get_booking(booking_id)
            .await
            .ok_or(BookingError::NotFound(booking_id))?;

        if booking.user_id != requesting_user_id {
            return Err(BookingError::NotOwner);
        }

        let lock = self.class_lock(booking.class_id);
        let _guard = lock.lock().await;

        // Status may have changed while we waited on the lock
        let booking = self
            .bookings
            .get_booking(booking_id)
            .await
            .ok_or(BookingError::NotFound(booking_id))?;

        if booking.status == BookingStatus::Cancelled {
            return Err(BookingError::AlreadyCancelled);
        }

        let cancelled = self
            .bookings
            .update_status(booking_id, BookingStatus::Cancelled)
            .await
            .ok_or(BookingError::NotFound(booking_id))?;

        self.catalog
            .increment_availability(cancelled.class_id)
            .await
            .map_err(|e| Self::map_catalog_error(e, cancelled.class_id))?;

        info!(
            booking_id = cancelled.id,
            class_id = cancelled.class_id,
            "booking cancelled"
        );

        Ok(cancelled)
    }

    /// One mutex per class, created on first touch. Callers resolve the
    /// class before asking for its lock, so the table is bounded by the
    /// catalog size. The table lock is held only for the lookup, never
    /// across the booking critical section.
    fn class_lock(&self, class_id: i64) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.class_locks.lock().expect("class lock table poisoned");
        locks
            .entry(class_id)
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
            .clone()
    }

    fn map_catalog_error(error: CatalogError, class_id: i64) -> BookingError {
        match error {
            CatalogError::NoCapacity(_) => BookingError::NoCapacity(class_id),
            _ => BookingError::ClassNotFound(class_id),
        }
    }
}
