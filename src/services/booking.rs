//! Booking management
//!
//! Every write runs the same guard sequence: field validation, employee
//! existence, seat existence, then seat availability for the day. The store's
//! `(seat_id, booking_date)` constraint backs the availability check, so a
//! booking that loses a race is still reported as `SeatUnavailable`.

use super::{EmployeeService, SeatService, require_positive};
use crate::core::clock::Clock;
use crate::core::error::{ConflictKind, EntityKind, SeatbookError, SeatbookResult, StorageError};
use crate::core::repository::{
    BOOKING_EMPLOYEE_FK, BOOKING_SEAT_DATE_UNIQUE, BOOKING_SEAT_FK, BookingRepository,
};
use crate::core::validation::BOOKING_WINDOW_DAYS;
use crate::dto::{AddBookingRequest, BookingDto, RemoveBookingRequest, UpdateBookingRequest};
use crate::entities::Booking;
use crate::entities::booking::validate_date;
use chrono::{Days, NaiveDate};
use std::sync::Arc;

pub struct BookingService {
    repository: Arc<dyn BookingRepository>,
    employees: Arc<EmployeeService>,
    seats: Arc<SeatService>,
    clock: Arc<dyn Clock>,
}

impl BookingService {
    pub fn new(
        repository: Arc<dyn BookingRepository>,
        employees: Arc<EmployeeService>,
        seats: Arc<SeatService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            employees,
            seats,
            clock,
        }
    }

    /// Book a seat for an employee on one day
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` when an id is not positive or the date is outside
    ///   `[today, today + 29]`
    /// - `NotFound` when the employee or the seat does not exist
    /// - `Conflict(SeatUnavailable)` when the seat is already booked that day
    pub async fn add(&self, request: &AddBookingRequest) -> SeatbookResult<BookingDto> {
        let booking = Booking::create(request, self.clock.today())?;
        self.employees.find(booking.employee_id()).await?;
        self.seats.find(booking.seat_id()).await?;
        self.ensure_available(booking.seat_id(), booking.booking_date())
            .await?;

        let (employee_id, seat_id, date) = (
            booking.employee_id(),
            booking.seat_id(),
            booking.booking_date(),
        );
        let created = self
            .repository
            .add(booking)
            .await
            .map_err(|e| translate(e, employee_id, seat_id, date))?;

        tracing::info!(
            booking_id = created.booking_id(),
            employee_id,
            seat_id,
            date = %date,
            "Booking added"
        );
        Ok(BookingDto::from(&created))
    }

    pub async fn get_by_id(&self, booking_id: i32) -> SeatbookResult<BookingDto> {
        require_positive("bookingId", booking_id)?;
        let booking = self
            .repository
            .get_by_id(booking_id)
            .await?
            .ok_or_else(|| SeatbookError::not_found_by_id(EntityKind::Booking, booking_id))?;
        Ok(BookingDto::from(&booking))
    }

    /// Bookings on one day inside the booking window
    pub async fn get_by_date(&self, date: NaiveDate) -> SeatbookResult<Vec<BookingDto>> {
        validate_date(date, self.clock.today())?;
        let bookings = self.repository.get_by_date(date).await?;
        Ok(bookings.iter().map(BookingDto::from).collect())
    }

    /// All bookings of an existing employee, earliest first
    pub async fn get_by_user_id(&self, employee_id: i32) -> SeatbookResult<Vec<BookingDto>> {
        self.employees.find(employee_id).await?;
        let bookings = self.repository.get_by_employee(employee_id).await?;
        Ok(bookings.iter().map(BookingDto::from).collect())
    }

    /// Bookings from today through the end of the booking window
    pub async fn get_monthly(&self) -> SeatbookResult<Vec<BookingDto>> {
        let today = self.clock.today();
        let last = today
            .checked_add_days(Days::new(BOOKING_WINDOW_DAYS))
            .unwrap_or(NaiveDate::MAX);
        let bookings = self.repository.get_between(today, last).await?;
        Ok(bookings.iter().map(BookingDto::from).collect())
    }

    /// Move an existing booking to another employee, seat or day
    ///
    /// The booking is located by id together with `bookingDate`. It does not
    /// count against its own seat when neither seat nor day changes.
    pub async fn update(&self, request: &UpdateBookingRequest) -> SeatbookResult<bool> {
        let mut booking = self
            .find_on_date(request.booking_id, request.booking_date)
            .await?;
        let same_slot =
            booking.seat_id() == request.seat_id && booking.booking_date() == request.target_date();

        booking.update(request, self.clock.today())?;
        self.employees.find(booking.employee_id()).await?;
        self.seats.find(booking.seat_id()).await?;
        if !same_slot {
            self.ensure_available(booking.seat_id(), booking.booking_date())
                .await?;
        }

        let (employee_id, seat_id, date) = (
            booking.employee_id(),
            booking.seat_id(),
            booking.booking_date(),
        );
        let updated = self
            .repository
            .update(&booking)
            .await
            .map_err(|e| translate(e, employee_id, seat_id, date))?;

        tracing::info!(booking_id = booking.booking_id(), updated, "Booking updated");
        Ok(updated)
    }

    pub async fn remove(&self, request: &RemoveBookingRequest) -> SeatbookResult<bool> {
        require_positive("bookingId", request.booking_id)?;
        let booking = self
            .find_on_date(request.booking_id, request.booking_date)
            .await?;

        let removed = self.repository.remove(booking.booking_id()).await?;
        tracing::info!(booking_id = booking.booking_id(), removed, "Booking removed");
        Ok(removed)
    }

    async fn find_on_date(&self, booking_id: i32, date: NaiveDate) -> SeatbookResult<Booking> {
        self.repository
            .get_by_id_and_date(booking_id, date)
            .await?
            .ok_or_else(|| {
                tracing::debug!(booking_id, date = %date, "No booking with this id on this date");
                SeatbookError::NotFound {
                    entity: EntityKind::Booking,
                    key: format!("id {} on {}", booking_id, date),
                }
            })
    }

    async fn ensure_available(&self, seat_id: i32, date: NaiveDate) -> SeatbookResult<()> {
        let available = self.seats.get_available_on_date(date).await?;
        if available.iter().any(|seat| seat.seat_id == seat_id) {
            Ok(())
        } else {
            tracing::debug!(seat_id, date = %date, "Seat already booked");
            Err(ConflictKind::SeatUnavailable { seat_id, date }.into())
        }
    }
}

/// Constraint violations raised by the store for a booking write
fn translate(err: StorageError, employee_id: i32, seat_id: i32, date: NaiveDate) -> SeatbookError {
    match err.constraint() {
        Some(BOOKING_SEAT_DATE_UNIQUE) => ConflictKind::SeatUnavailable { seat_id, date }.into(),
        Some(BOOKING_SEAT_FK) => SeatbookError::not_found_by_id(EntityKind::Seat, seat_id),
        Some(BOOKING_EMPLOYEE_FK) => {
            SeatbookError::not_found_by_id(EntityKind::Employee, employee_id)
        }
        _ => err.into(),
    }
}
