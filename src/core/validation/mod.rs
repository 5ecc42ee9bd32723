//! Field validation shared by the entity constructors

pub mod validators;

/// Last bookable day, counted from today (inclusive)
pub const BOOKING_WINDOW_DAYS: u64 = 29;

/// Highest seat number a seat may carry
pub const MAX_SEAT_NUMBER: i32 = 150;

pub const MAX_NAME_LENGTH: usize = 50;
pub const MAX_EMAIL_LENGTH: usize = 100;
