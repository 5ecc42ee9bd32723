//! Shared test harness for storage backend testing
//!
//! Provides entity builders and the `repository_tests!` macro, which runs the
//! same repository contract against any store implementing
//! `EmployeeRepository + SeatRepository + BookingRepository`.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

pub mod repository_tests;

use chrono::NaiveDate;
use seatbook::dto::{AddBookingRequest, AddEmployeeRequest, AddSeatRequest};
use seatbook::entities::{Booking, Employee, RoleInput, Seat};

/// Reference "today" shared by every booking built here
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

pub fn in_days(n: i64) -> NaiveDate {
    today() + chrono::Duration::days(n)
}

pub fn employee(name: &str, email: &str) -> Employee {
    Employee::create(&AddEmployeeRequest {
        name: name.to_string(),
        email: email.to_string(),
        role: RoleInput::Code(0),
    })
    .unwrap()
}

pub fn seat(seat_number: i32) -> Seat {
    Seat::create(&AddSeatRequest { seat_number }).unwrap()
}

pub fn booking(employee_id: i32, seat_id: i32, date: NaiveDate) -> Booking {
    Booking::create(
        &AddBookingRequest {
            employee_id,
            seat_id,
            booking_date: date,
        },
        today(),
    )
    .unwrap()
}
