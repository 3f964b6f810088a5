pub mod filter;
pub mod session;

pub use filter::ClassFilter;
pub use session::{ClassLevel, ClassSession, NewClassSession};

/// Catalog-related errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Class not found: {0}")]
    NotFound(i64),

    #[error("Class {0} is fully booked")]
    NoCapacity(i64),

    #[error("Class {0} already exists")]
    Duplicate(i64),

    #[error("Class capacity must be positive")]
    InvalidCapacity,
}
