//! Repository traits for employees, seats and bookings
//!
//! Repositories translate entities to and from stored rows. They hold no
//! business rules apart from the storage-level constraints listed below,
//! which every backend must enforce atomically:
//!
//! - [`EMPLOYEE_EMAIL_UNIQUE`]: one employee per email
//! - [`SEAT_NUMBER_UNIQUE`]: one seat per seat number
//! - [`BOOKING_SEAT_DATE_UNIQUE`]: one booking per seat per day
//! - [`BOOKING_EMPLOYEE_FK`] / [`BOOKING_SEAT_FK`]: bookings reference
//!   existing rows, and are removed with them

use crate::core::error::StorageError;
use crate::entities::{Booking, Employee, Seat};
use async_trait::async_trait;
use chrono::NaiveDate;

pub const EMPLOYEE_EMAIL_UNIQUE: &str = "employees_email_key";
pub const SEAT_NUMBER_UNIQUE: &str = "seats_seat_number_key";
pub const BOOKING_SEAT_DATE_UNIQUE: &str = "bookings_seat_date_key";
pub const BOOKING_EMPLOYEE_FK: &str = "bookings_employee_fk";
pub const BOOKING_SEAT_FK: &str = "bookings_seat_fk";

pub type StorageResult<T> = Result<T, StorageError>;

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert a new employee and return it with its assigned id
    async fn add(&self, employee: Employee) -> StorageResult<Employee>;

    /// All employees ordered by id
    async fn get_all(&self) -> StorageResult<Vec<Employee>>;

    async fn get_by_id(&self, employee_id: i32) -> StorageResult<Option<Employee>>;

    /// Exact, case-sensitive email match
    async fn get_by_email(&self, email: &str) -> StorageResult<Option<Employee>>;

    /// Returns `false` when no row matched
    async fn update(&self, employee: &Employee) -> StorageResult<bool>;

    /// Hard delete; the employee's bookings go with it
    async fn remove(&self, employee_id: i32) -> StorageResult<bool>;
}

#[async_trait]
pub trait SeatRepository: Send + Sync {
    async fn add(&self, seat: Seat) -> StorageResult<Seat>;

    /// All seats ordered by seat number
    async fn get_all(&self) -> StorageResult<Vec<Seat>>;

    async fn get_by_id(&self, seat_id: i32) -> StorageResult<Option<Seat>>;

    /// Seats with no booking on `date`, ordered by seat number
    async fn get_available_on_date(&self, date: NaiveDate) -> StorageResult<Vec<Seat>>;

    async fn update(&self, seat: &Seat) -> StorageResult<bool>;

    /// Hard delete; bookings of the seat go with it
    async fn remove(&self, seat_id: i32) -> StorageResult<bool>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn add(&self, booking: Booking) -> StorageResult<Booking>;

    async fn get_by_id(&self, booking_id: i32) -> StorageResult<Option<Booking>>;

    /// Composite lookup: the booking must carry both this id and this date
    async fn get_by_id_and_date(
        &self,
        booking_id: i32,
        date: NaiveDate,
    ) -> StorageResult<Option<Booking>>;

    /// Bookings on `date`, ordered by id
    async fn get_by_date(&self, date: NaiveDate) -> StorageResult<Vec<Booking>>;

    /// Bookings of one employee, ordered by date then id
    async fn get_by_employee(&self, employee_id: i32) -> StorageResult<Vec<Booking>>;

    /// Bookings with `from <= date <= to`, ordered by date then id
    async fn get_between(&self, from: NaiveDate, to: NaiveDate) -> StorageResult<Vec<Booking>>;

    async fn update(&self, booking: &Booking) -> StorageResult<bool>;

    async fn remove(&self, booking_id: i32) -> StorageResult<bool>;
}
