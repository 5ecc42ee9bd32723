//! Shared application state handed to every handler

use crate::core::clock::Clock;
use crate::core::repository::{BookingRepository, EmployeeRepository, SeatRepository};
use crate::services::{BookingService, EmployeeService, SeatService};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub employees: Arc<EmployeeService>,
    pub seats: Arc<SeatService>,
    pub bookings: Arc<BookingService>,
}

impl AppState {
    /// Wire the three services over one store
    pub fn new<S>(store: Arc<S>, clock: Arc<dyn Clock>) -> Self
    where
        S: EmployeeRepository + SeatRepository + BookingRepository + 'static,
    {
        let employees = Arc::new(EmployeeService::new(store.clone()));
        let seats = Arc::new(SeatService::new(store.clone(), clock.clone()));
        let bookings = Arc::new(BookingService::new(
            store,
            employees.clone(),
            seats.clone(),
            clock,
        ));
        Self {
            employees,
            seats,
            bookings,
        }
    }
}
