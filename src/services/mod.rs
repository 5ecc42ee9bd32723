//! Domain services: validation, existence checks and repository calls
//!
//! Each service owns one repository. `BookingService` additionally holds the
//! employee and seat services, which it asks for existence and availability
//! before touching the booking repository.

pub mod booking;
pub mod employee;
pub mod seat;

pub use booking::BookingService;
pub use employee::EmployeeService;
pub use seat::SeatService;

use crate::core::error::{ConflictKind, SeatbookError, StorageError, ValidationError};
use crate::core::validation::validators::positive;

/// Reject non-positive ids before any lookup
pub(crate) fn require_positive(field: &str, id: i32) -> Result<(), ValidationError> {
    positive()(field, id)
}

/// Report a unique violation on `constraint` as `conflict`, anything else as-is
pub(crate) fn conflict_on(
    err: StorageError,
    constraint: &str,
    conflict: ConflictKind,
) -> SeatbookError {
    let violated = matches!(err, StorageError::UniqueViolation { .. })
        && err.constraint() == Some(constraint);
    if violated {
        conflict.into()
    } else {
        err.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_on_matching_constraint() {
        let err = StorageError::UniqueViolation {
            constraint: "seats_seat_number_key".to_string(),
        };
        let mapped = conflict_on(
            err,
            "seats_seat_number_key",
            ConflictKind::DuplicateSeatNumber { seat_number: 4 },
        );
        assert!(matches!(
            mapped,
            SeatbookError::Conflict(ConflictKind::DuplicateSeatNumber { seat_number: 4 })
        ));
    }

    #[test]
    fn test_conflict_on_other_constraint_stays_storage() {
        let err = StorageError::UniqueViolation {
            constraint: "employees_email_key".to_string(),
        };
        let mapped = conflict_on(
            err,
            "seats_seat_number_key",
            ConflictKind::DuplicateSeatNumber { seat_number: 4 },
        );
        assert!(matches!(mapped, SeatbookError::Storage(_)));
    }
}
