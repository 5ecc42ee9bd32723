//! Booking entity

use crate::core::error::ValidationError;
use crate::core::validation::BOOKING_WINDOW_DAYS;
use crate::core::validation::validators::{date_window, positive};
use crate::dto::{AddBookingRequest, UpdateBookingRequest};
use chrono::NaiveDate;

/// A seat reserved by an employee for one calendar day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    booking_id: i32,
    employee_id: i32,
    seat_id: i32,
    booking_date: NaiveDate,
}

impl Booking {
    /// Build a booking, checking the date against `today`
    pub fn create(request: &AddBookingRequest, today: NaiveDate) -> Result<Self, ValidationError> {
        validate(request.employee_id, request.seat_id, request.booking_date, today)?;
        Ok(Self {
            booking_id: 0,
            employee_id: request.employee_id,
            seat_id: request.seat_id,
            booking_date: request.booking_date,
        })
    }

    /// Re-point the booking at a new employee, seat and date
    pub fn update(
        &mut self,
        request: &UpdateBookingRequest,
        today: NaiveDate,
    ) -> Result<(), ValidationError> {
        let date = request.target_date();
        validate(request.employee_id, request.seat_id, date, today)?;
        self.employee_id = request.employee_id;
        self.seat_id = request.seat_id;
        self.booking_date = date;
        Ok(())
    }

    pub(crate) fn from_row(
        booking_id: i32,
        employee_id: i32,
        seat_id: i32,
        booking_date: NaiveDate,
    ) -> Self {
        Self {
            booking_id,
            employee_id,
            seat_id,
            booking_date,
        }
    }

    pub(crate) fn with_id(mut self, booking_id: i32) -> Self {
        self.booking_id = booking_id;
        self
    }

    pub fn booking_id(&self) -> i32 {
        self.booking_id
    }

    pub fn employee_id(&self) -> i32 {
        self.employee_id
    }

    pub fn seat_id(&self) -> i32 {
        self.seat_id
    }

    pub fn booking_date(&self) -> NaiveDate {
        self.booking_date
    }
}

/// `date` must lie in `[today, today + 29]`
pub fn validate_date(date: NaiveDate, today: NaiveDate) -> Result<(), ValidationError> {
    date_window(today, BOOKING_WINDOW_DAYS)("bookingDate", date)
}

// employeeId -> seatId -> date
pub fn validate(
    employee_id: i32,
    seat_id: i32,
    date: NaiveDate,
    today: NaiveDate,
) -> Result<(), ValidationError> {
    positive()("employeeId", employee_id)?;
    positive()("seatId", seat_id)?;
    validate_date(date, today)
}
