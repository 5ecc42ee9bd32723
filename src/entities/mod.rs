//! Domain entities
//!
//! Entities are only built through their validating `create` constructors,
//! and `update` re-runs the same rules against the new values.

pub mod booking;
pub mod employee;
pub mod seat;

pub use booking::Booking;
pub use employee::{Employee, Role, RoleInput};
pub use seat::Seat;
