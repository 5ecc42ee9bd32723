//! Core module containing the error taxonomy, repository traits and validation

pub mod clock;
pub mod error;
pub mod repository;
pub mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{
    ConflictKind, EntityKind, SeatbookError, SeatbookResult, StorageError, ValidationError,
};
pub use repository::{BookingRepository, EmployeeRepository, SeatRepository};
