//! In-memory store for testing and development
//!
//! All three tables live behind one `RwLock`, so each write checks its
//! constraints and applies its change under a single lock acquisition.

use crate::core::error::StorageError;
use crate::core::repository::{
    BOOKING_EMPLOYEE_FK, BOOKING_SEAT_DATE_UNIQUE, BOOKING_SEAT_FK, BookingRepository,
    EMPLOYEE_EMAIL_UNIQUE, EmployeeRepository, SEAT_NUMBER_UNIQUE, SeatRepository, StorageResult,
};
use crate::entities::{Booking, Employee, Seat};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Tables {
    employees: BTreeMap<i32, Employee>,
    seats: BTreeMap<i32, Seat>,
    bookings: BTreeMap<i32, Booking>,
    next_employee_id: i32,
    next_seat_id: i32,
    next_booking_id: i32,
}

impl Tables {
    fn check_email_free(&self, email: &str, except: i32) -> StorageResult<()> {
        let taken = self
            .employees
            .values()
            .any(|e| e.email() == email && e.employee_id() != except);
        if taken {
            return Err(unique(EMPLOYEE_EMAIL_UNIQUE));
        }
        Ok(())
    }

    fn check_seat_number_free(&self, seat_number: i32, except: i32) -> StorageResult<()> {
        let taken = self
            .seats
            .values()
            .any(|s| s.seat_number() == seat_number && s.seat_id() != except);
        if taken {
            return Err(unique(SEAT_NUMBER_UNIQUE));
        }
        Ok(())
    }

    fn check_booking(&self, booking: &Booking) -> StorageResult<()> {
        if !self.employees.contains_key(&booking.employee_id()) {
            return Err(StorageError::ForeignKeyViolation {
                constraint: BOOKING_EMPLOYEE_FK.to_string(),
            });
        }
        if !self.seats.contains_key(&booking.seat_id()) {
            return Err(StorageError::ForeignKeyViolation {
                constraint: BOOKING_SEAT_FK.to_string(),
            });
        }
        let taken = self.bookings.values().any(|b| {
            b.seat_id() == booking.seat_id()
                && b.booking_date() == booking.booking_date()
                && b.booking_id() != booking.booking_id()
        });
        if taken {
            return Err(unique(BOOKING_SEAT_DATE_UNIQUE));
        }
        Ok(())
    }
}

fn unique(constraint: &str) -> StorageError {
    StorageError::UniqueViolation {
        constraint: constraint.to_string(),
    }
}

fn next_id(counter: &mut i32) -> i32 {
    *counter += 1;
    *counter
}

/// In-memory store implementing every repository trait
///
/// Cloning shares the underlying tables.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StorageResult<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|e| StorageError::Lock {
            message: e.to_string(),
        })
    }

    fn write(&self) -> StorageResult<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|e| StorageError::Lock {
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryStore {
    async fn add(&self, employee: Employee) -> StorageResult<Employee> {
        let mut tables = self.write()?;
        tables.check_email_free(employee.email(), 0)?;
        let id = next_id(&mut tables.next_employee_id);
        let employee = employee.with_id(id);
        tables.employees.insert(id, employee.clone());
        Ok(employee)
    }

    async fn get_all(&self) -> StorageResult<Vec<Employee>> {
        Ok(self.read()?.employees.values().cloned().collect())
    }

    async fn get_by_id(&self, employee_id: i32) -> StorageResult<Option<Employee>> {
        Ok(self.read()?.employees.get(&employee_id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> StorageResult<Option<Employee>> {
        Ok(self
            .read()?
            .employees
            .values()
            .find(|e| e.email() == email)
            .cloned())
    }

    async fn update(&self, employee: &Employee) -> StorageResult<bool> {
        let mut tables = self.write()?;
        if !tables.employees.contains_key(&employee.employee_id()) {
            return Ok(false);
        }
        tables.check_email_free(employee.email(), employee.employee_id())?;
        tables
            .employees
            .insert(employee.employee_id(), employee.clone());
        Ok(true)
    }

    async fn remove(&self, employee_id: i32) -> StorageResult<bool> {
        let mut tables = self.write()?;
        if tables.employees.remove(&employee_id).is_none() {
            return Ok(false);
        }
        tables
            .bookings
            .retain(|_, booking| booking.employee_id() != employee_id);
        Ok(true)
    }
}

#[async_trait]
impl SeatRepository for InMemoryStore {
    async fn add(&self, seat: Seat) -> StorageResult<Seat> {
        let mut tables = self.write()?;
        tables.check_seat_number_free(seat.seat_number(), 0)?;
        let id = next_id(&mut tables.next_seat_id);
        let seat = seat.with_id(id);
        tables.seats.insert(id, seat.clone());
        Ok(seat)
    }

    async fn get_all(&self) -> StorageResult<Vec<Seat>> {
        let mut seats: Vec<Seat> = self.read()?.seats.values().cloned().collect();
        seats.sort_by_key(Seat::seat_number);
        Ok(seats)
    }

    async fn get_by_id(&self, seat_id: i32) -> StorageResult<Option<Seat>> {
        Ok(self.read()?.seats.get(&seat_id).cloned())
    }

    async fn get_available_on_date(&self, date: NaiveDate) -> StorageResult<Vec<Seat>> {
        let tables = self.read()?;
        let mut seats: Vec<Seat> = tables
            .seats
            .values()
            .filter(|seat| {
                !tables
                    .bookings
                    .values()
                    .any(|b| b.seat_id() == seat.seat_id() && b.booking_date() == date)
            })
            .cloned()
            .collect();
        seats.sort_by_key(Seat::seat_number);
        Ok(seats)
    }

    async fn update(&self, seat: &Seat) -> StorageResult<bool> {
        let mut tables = self.write()?;
        if !tables.seats.contains_key(&seat.seat_id()) {
            return Ok(false);
        }
        tables.check_seat_number_free(seat.seat_number(), seat.seat_id())?;
        tables.seats.insert(seat.seat_id(), seat.clone());
        Ok(true)
    }

    async fn remove(&self, seat_id: i32) -> StorageResult<bool> {
        let mut tables = self.write()?;
        if tables.seats.remove(&seat_id).is_none() {
            return Ok(false);
        }
        tables.bookings.retain(|_, booking| booking.seat_id() != seat_id);
        Ok(true)
    }
}

#[async_trait]
impl BookingRepository for InMemoryStore {
    async fn add(&self, booking: Booking) -> StorageResult<Booking> {
        let mut tables = self.write()?;
        tables.check_booking(&booking)?;
        let id = next_id(&mut tables.next_booking_id);
        let booking = booking.with_id(id);
        tables.bookings.insert(id, booking.clone());
        Ok(booking)
    }

    async fn get_by_id(&self, booking_id: i32) -> StorageResult<Option<Booking>> {
        Ok(self.read()?.bookings.get(&booking_id).cloned())
    }

    async fn get_by_id_and_date(
        &self,
        booking_id: i32,
        date: NaiveDate,
    ) -> StorageResult<Option<Booking>> {
        Ok(self
            .read()?
            .bookings
            .get(&booking_id)
            .filter(|b| b.booking_date() == date)
            .cloned())
    }

    async fn get_by_date(&self, date: NaiveDate) -> StorageResult<Vec<Booking>> {
        Ok(self
            .read()?
            .bookings
            .values()
            .filter(|b| b.booking_date() == date)
            .cloned()
            .collect())
    }

    async fn get_by_employee(&self, employee_id: i32) -> StorageResult<Vec<Booking>> {
        let mut bookings: Vec<Booking> = self
            .read()?
            .bookings
            .values()
            .filter(|b| b.employee_id() == employee_id)
            .cloned()
            .collect();
        bookings.sort_by_key(|b| (b.booking_date(), b.booking_id()));
        Ok(bookings)
    }

    async fn get_between(&self, from: NaiveDate, to: NaiveDate) -> StorageResult<Vec<Booking>> {
        let mut bookings: Vec<Booking> = self
            .read()?
            .bookings
            .values()
            .filter(|b| b.booking_date() >= from && b.booking_date() <= to)
            .cloned()
            .collect();
        bookings.sort_by_key(|b| (b.booking_date(), b.booking_id()));
        Ok(bookings)
    }

    async fn update(&self, booking: &Booking) -> StorageResult<bool> {
        let mut tables = self.write()?;
        if !tables.bookings.contains_key(&booking.booking_id()) {
            return Ok(false);
        }
        tables.check_booking(booking)?;
        tables.bookings.insert(booking.booking_id(), booking.clone());
        Ok(true)
    }

    async fn remove(&self, booking_id: i32) -> StorageResult<bool> {
        Ok(self.write()?.bookings.remove(&booking_id).is_some())
    }
}
