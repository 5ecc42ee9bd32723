//! # Seatbook
//!
//! Seat-booking administration API: employees, seats and date-scoped
//! bookings exposed over REST.
//!
//! ## Features
//!
//! - **Validated entities**: employees, seats and bookings are only built
//!   through constructors that check every field
//! - **Booking window**: bookings are accepted from today through today + 29
//! - **Availability checks**: a seat holds at most one booking per day,
//!   enforced by the service and by the store
//! - **Pluggable storage**: in-memory by default, PostgreSQL behind the
//!   `postgres` feature
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use seatbook::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     ServerBuilder::new()
//!         .with_in_memory_store()
//!         .serve("127.0.0.1:8080")
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod dto;
pub mod entities;
pub mod server;
pub mod services;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        BookingRepository, Clock, ConflictKind, EmployeeRepository, EntityKind, FixedClock,
        SeatRepository, SeatbookError, SeatbookResult, StorageError, SystemClock,
        ValidationError,
    };

    // === Entities & DTOs ===
    pub use crate::dto::{
        AddBookingRequest, AddEmployeeRequest, AddSeatRequest, BookingDto, EmployeeDto,
        RemoveBookingRequest, RemoveEmployeeRequest, RemoveSeatRequest, SeatDto,
        UpdateBookingRequest, UpdateEmployeeRequest, UpdateSeatRequest,
    };
    pub use crate::entities::{Booking, Employee, Role, RoleInput, Seat};

    // === Services ===
    pub use crate::services::{BookingService, EmployeeService, SeatService};

    // === Server ===
    pub use crate::config::{AppConfig, StorageBackend};
    pub use crate::server::{AppState, ServerBuilder};

    // === Storage ===
    pub use crate::storage::InMemoryStore;
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresStore;
}
