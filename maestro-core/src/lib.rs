pub mod booking;
pub mod identity;
pub mod repository;
pub mod reservation;

pub use booking::{Booking, BookingError, BookingRequest, BookingStatus, FieldError};
pub use identity::{IdentityError, IdentityVerifier, PlaceholderVerifier};
pub use repository::{BookingStore, ClassCatalog};
pub use reservation::ReservationEngine;

/// Caller identity, as produced by an [`IdentityVerifier`].
pub type UserId = i64;
