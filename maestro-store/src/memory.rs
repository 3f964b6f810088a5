use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use maestro_catalog::{CatalogError, ClassFilter, ClassSession, NewClassSession};
use maestro_core::{Booking, BookingStatus, BookingStore, ClassCatalog, UserId};

/// One catalog entry. Descriptive fields are fixed at creation; the live
/// availability counter sits behind its own mutex so that classes never
/// contend with each other.
struct ClassRow {
    session: ClassSession,
    available: Mutex<u32>,
}

impl ClassRow {
    fn snapshot(&self) -> ClassSession {
        let mut session = self.session.clone();
        session.spots_available = *self.available.lock().expect("availability lock poisoned");
        session
    }
}

#[derive(Default)]
struct ClassTable {
    order: Vec<Arc<ClassRow>>,
    by_id: HashMap<i64, Arc<ClassRow>>,
}

struct BookingLedger {
    bookings: Vec<Booking>,
    by_key: HashMap<String, u64>,
    next_id: u64,
}

impl Default for BookingLedger {
    fn default() -> Self {
        Self {
            bookings: Vec::new(),
            by_key: HashMap::new(),
            next_id: 1,
        }
    }
}

/// The process-owned store: initialized at startup, injected into the
/// reservation engine, torn down at shutdown. No ambient globals.
///
/// Internal locks are held only within a single operation, never across an
/// await point.
#[derive(Default)]
pub struct MemoryStore {
    classes: RwLock<ClassTable>,
    ledger: RwLock<BookingLedger>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class. Startup/seed path; bookings never create classes.
    pub fn add_class(&self, new: NewClassSession) -> Result<ClassSession, CatalogError> {
        if new.capacity_total == 0 {
            return Err(CatalogError::InvalidCapacity);
        }

        let mut table = self.classes.write().expect("class table lock poisoned");
        if table.by_id.contains_key(&new.id) {
            return Err(CatalogError::Duplicate(new.id));
        }

        let session = new.into_session();
        let row = Arc::new(ClassRow {
            available: Mutex::new(session.spots_available),
            session: session.clone(),
        });
        table.order.push(row.clone());
        table.by_id.insert(session.id, row);

        Ok(session)
    }

    fn row(&self, id: i64) -> Option<Arc<ClassRow>> {
        let table = self.classes.read().expect("class table lock poisoned");
        table.by_id.get(&id).cloned()
    }
}

#[async_trait]
impl ClassCatalog for MemoryStore {
    async fn list_classes(&self, filter: &ClassFilter) -> Vec<ClassSession> {
        let table = self.classes.read().expect("class table lock poisoned");
        table
            .order
            .iter()
            .map(|row| row.snapshot())
            .filter(|session| filter.matches(session))
            .collect()
    }

    async fn get_class(&self, id: i64) -> Result<ClassSession, CatalogError> {
        self.row(id)
            .map(|row| row.snapshot())
            .ok_or(CatalogError::NotFound(id))
    }

    async fn decrement_availability(&self, id: i64) -> Result<(), CatalogError> {
        let row = self.row(id).ok_or(CatalogError::NotFound(id))?;

        let mut available = row.available.lock().expect("availability lock poisoned");
        if *available == 0 {
            return Err(CatalogError::NoCapacity(id));
        }
        *available -= 1;

        Ok(())
    }

    async fn increment_availability(&self, id: i64) -> Result<(), CatalogError> {
        let row = self.row(id).ok_or(CatalogError::NotFound(id))?;

        let mut available = row.available.lock().expect("availability lock poisoned");
        *available = (*available + 1).min(row.session.capacity_total);

        Ok(())
    }
}

#[async_trait]
impl BookingStore for MemoryStore {
    async fn append_booking(
        &self,
        user_id: UserId,
        class_id: i64,
        idempotency_key: Option<String>,
    ) -> Booking {
        let mut ledger = self.ledger.write().expect("ledger lock poisoned");

        let booking = Booking {
            id: ledger.next_id,
            user_id,
            class_id,
            created_at: Utc::now(),
            status: BookingStatus::Confirmed,
            idempotency_key: idempotency_key.clone(),
        };
        ledger.next_id += 1;

        if let Some(key) = idempotency_key {
            ledger.by_key.insert(key, booking.id);
        }
        ledger.bookings.push(booking.clone());

        booking
    }

    async fn get_booking(&self, id: u64) -> Option<Booking> {
        let ledger = self.ledger.read().expect("ledger lock poisoned");
        ledger.bookings.iter().find(|b| b.id == id).cloned()
    }

    async fn find_by_idempotency_key(&self, key: &str) -> Option<Booking> {
        let ledger = self.ledger.read().expect("ledger lock poisoned");
        let id = *ledger.by_key.get(key)?;
        ledger.bookings.iter().find(|b| b.id == id).cloned()
    }

    async fn list_for_user(&self, user_id: UserId) -> Vec<Booking> {
        let ledger = self.ledger.read().expect("ledger lock poisoned");
        ledger
            .bookings
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect()
    }

    async fn update_status(&self, id: u64, status: BookingStatus) -> Option<Booking> {
        let mut ledger = self.ledger.write().expect("ledger lock poisoned");
        let booking = ledger.bookings.iter_mut().find(|b| b.id == id)?;
        booking.status = status;
        Some(booking.clone())
    }
}
