//! PostgreSQL storage backend using sqlx.
//!
//! Provides [`PostgresStore`], implementing every repository trait on top of
//! a `sqlx::PgPool`.
//!
//! # Feature flag
//!
//! This module is gated behind the `postgres` feature flag:
//! ```toml
//! [dependencies]
//! seatbook = { version = "0.1", features = ["postgres"] }
//! ```
//!
//! # Schema
//!
//! `employees`, `seats` and `bookings`, created by the migrations in
//! `./migrations`. Uniqueness of emails, seat numbers and
//! `(seat_id, booking_date)` is enforced by named constraints, and bookings
//! cascade when their employee or seat is deleted.

use crate::core::error::StorageError;
use crate::core::repository::{
    BookingRepository, EmployeeRepository, SeatRepository, StorageResult,
};
use crate::entities::{Booking, Employee, Role, Seat};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

const BACKEND: &str = "PostgreSQL";

// ---------------------------------------------------------------------------
// Schema management
// ---------------------------------------------------------------------------

/// Apply pending migrations (idempotent, safe on every startup)
pub async fn ensure_schema(pool: &PgPool) -> StorageResult<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| StorageError::Query {
            backend: BACKEND.to_string(),
            message: format!("migration failed: {}", e),
        })
}

// ---------------------------------------------------------------------------
// Error mapping
// ---------------------------------------------------------------------------

fn map_err(err: sqlx::Error) -> StorageError {
    match &err {
        sqlx::Error::Database(db) => {
            let constraint = db.constraint().unwrap_or_default().to_string();
            if db.is_unique_violation() {
                StorageError::UniqueViolation { constraint }
            } else if db.is_foreign_key_violation() {
                StorageError::ForeignKeyViolation { constraint }
            } else {
                StorageError::Query {
                    backend: BACKEND.to_string(),
                    message: db.message().to_string(),
                }
            }
        }
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            StorageError::Connection {
                backend: BACKEND.to_string(),
                message: err.to_string(),
            }
        }
        _ => StorageError::Query {
            backend: BACKEND.to_string(),
            message: err.to_string(),
        },
    }
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

#[derive(sqlx::FromRow)]
struct EmployeeRow {
    employee_id: i32,
    name: String,
    email: String,
    role: String,
}

impl TryFrom<EmployeeRow> for Employee {
    type Error = StorageError;

    fn try_from(row: EmployeeRow) -> Result<Self, Self::Error> {
        let role: Role = row.role.parse().map_err(|_| StorageError::Decode {
            message: format!("employee {} has unknown role '{}'", row.employee_id, row.role),
        })?;
        Ok(Employee::from_row(row.employee_id, row.name, row.email, role))
    }
}

#[derive(sqlx::FromRow)]
struct SeatRow {
    seat_id: i32,
    seat_number: i32,
}

impl From<SeatRow> for Seat {
    fn from(row: SeatRow) -> Self {
        Seat::from_row(row.seat_id, row.seat_number)
    }
}

#[derive(sqlx::FromRow)]
struct BookingRow {
    booking_id: i32,
    employee_id: i32,
    seat_id: i32,
    booking_date: NaiveDate,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Booking::from_row(row.booking_id, row.employee_id, row.seat_id, row.booking_date)
    }
}

const EMPLOYEE_COLUMNS: &str = "employee_id, name, email, role";
const BOOKING_COLUMNS: &str = "booking_id, employee_id, seat_id, booking_date";

// ---------------------------------------------------------------------------
// PostgresStore
// ---------------------------------------------------------------------------

/// Store backed by PostgreSQL
///
/// # Example
///
/// ```rust,ignore
/// let store = PostgresStore::connect("postgres://localhost/seatbook", 5).await?;
/// ensure_schema(store.pool()).await?;
/// ```
#[derive(Clone, Debug)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool against `url`
    pub async fn connect(url: &str, max_connections: u32) -> StorageResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
            .map_err(|e| StorageError::Connection {
                backend: BACKEND.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl EmployeeRepository for PostgresStore {
    async fn add(&self, employee: Employee) -> StorageResult<Employee> {
        let row = sqlx::query_as::<_, EmployeeRow>(&format!(
            "INSERT INTO employees (name, email, role) VALUES ($1, $2, $3) RETURNING {}",
            EMPLOYEE_COLUMNS
        ))
        .bind(employee.name())
        .bind(employee.email())
        .bind(employee.role().as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_err)?;
        row.try_into()
    }

    async fn get_all(&self) -> StorageResult<Vec<Employee>> {
        sqlx::query_as::<_, EmployeeRow>(&format!(
            "SELECT {} FROM employees ORDER BY employee_id",
            EMPLOYEE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_err)?
        .into_iter()
        .map(Employee::try_from)
        .collect()
    }

    async fn get_by_id(&self, employee_id: i32) -> StorageResult<Option<Employee>> {
        sqlx::query_as::<_, EmployeeRow>(&format!(
            "SELECT {} FROM employees WHERE employee_id = $1",
            EMPLOYEE_COLUMNS
        ))
        .bind(employee_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_err)?
        .map(Employee::try_from)
        .transpose()
    }

    async fn get_by_email(&self, email: &str) -> StorageResult<Option<Employee>> {
        sqlx::query_as::<_, EmployeeRow>(&format!(
            "SELECT {} FROM employees WHERE email = $1",
            EMPLOYEE_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_err)?
        .map(Employee::try_from)
        .transpose()
    }

    async fn update(&self, employee: &Employee) -> StorageResult<bool> {
        let result = sqlx::query(
            "UPDATE employees SET name = $2, email = $3, role = $4 WHERE employee_id = $1",
        )
        .bind(employee.employee_id())
        .bind(employee.name())
        .bind(employee.email())
        .bind(employee.role().as_str())
        .execute(&self.pool)
        .await
        .map_err(map_err)?;
        Ok(result.rows_affected() > 0)
    }

    async fn remove(&self, employee_id: i32) -> StorageResult<bool> {
        let result = sqlx::query("DELETE FROM employees WHERE employee_id = $1")
            .bind(employee_id)
            .execute(&self.pool)
            .await
            .map_err(map_err)?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl SeatRepository for PostgresStore {
    async fn add(&self, seat: Seat) -> StorageResult<Seat> {
        let row = sqlx::query_as::<_, SeatRow>(
            "INSERT INTO seats (seat_number) VALUES ($1) RETURNING seat_id, seat_number",
        )
        .bind(seat.seat_number())
        .fetch_one(&self.pool)
        .await
        .map_err(map_err)?;
        Ok(row.into())
    }

    async fn get_all(&self) -> StorageResult<Vec<Seat>> {
        let rows = sqlx::query_as::<_, SeatRow>(
            "SELECT seat_id, seat_number FROM seats ORDER BY seat_number",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_err)?;
        Ok(rows.into_iter().map(Seat::from).collect())
    }

    async fn get_by_id(&self, seat_id: i32) -> StorageResult<Option<Seat>> {
        let row = sqlx::query_as::<_, SeatRow>(
            "SELECT seat_id, seat_number FROM seats WHERE seat_id = $1",
        )
        .bind(seat_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_err)?;
        Ok(row.map(Seat::from))
    }

    async fn get_available_on_date(&self, date: NaiveDate) -> StorageResult<Vec<Seat>> {
        let rows = sqlx::query_as::<_, SeatRow>(
            "SELECT s.seat_id, s.seat_number FROM seats s
             WHERE NOT EXISTS (
                 SELECT 1 FROM bookings b
                 WHERE b.seat_id = s.seat_id AND b.booking_date = $1
             )
             ORDER BY s.seat_number",
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(map_err)?;
        Ok(rows.into_iter().map(Seat::from).collect())
    }

    async fn update(&self, seat: &Seat) -> StorageResult<bool> {
        let result = sqlx::query("UPDATE seats SET seat_number = $2 WHERE seat_id = $1")
            .bind(seat.seat_id())
            .bind(seat.seat_number())
            .execute(&self.pool)
            .await
            .map_err(map_err)?;
        Ok(result.rows_affected() > 0)
    }

    async fn remove(&self, seat_id: i32) -> StorageResult<bool> {
        let result = sqlx::query("DELETE FROM seats WHERE seat_id = $1")
            .bind(seat_id)
            .execute(&self.pool)
            .await
            .map_err(map_err)?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl BookingRepository for PostgresStore {
    async fn add(&self, booking: Booking) -> StorageResult<Booking> {
        let row = sqlx::query_as::<_, BookingRow>(&format!(
            "INSERT INTO bookings (employee_id, seat_id, booking_date) VALUES ($1, $2, $3) RETURNING {}",
            BOOKING_COLUMNS
        ))
        .bind(booking.employee_id())
        .bind(booking.seat_id())
        .bind(booking.booking_date())
        .fetch_one(&self.pool)
        .await
        .map_err(map_err)?;
        Ok(row.into())
    }

    async fn get_by_id(&self, booking_id: i32) -> StorageResult<Option<Booking>> {
        let row = sqlx::query_as::<_, BookingRow>(&format!(
            "SELECT {} FROM bookings WHERE booking_id = $1",
            BOOKING_COLUMNS
        ))
        .bind(booking_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_err)?;
        Ok(row.map(Booking::from))
    }

    async fn get_by_id_and_date(
        &self,
        booking_id: i32,
        date: NaiveDate,
    ) -> StorageResult<Option<Booking>> {
        let row = sqlx::query_as::<_, BookingRow>(&format!(
            "SELECT {} FROM bookings WHERE booking_id = $1 AND booking_date = $2",
            BOOKING_COLUMNS
        ))
        .bind(booking_id)
        .bind(date)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_err)?;
        Ok(row.map(Booking::from))
    }

    async fn get_by_date(&self, date: NaiveDate) -> StorageResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, BookingRow>(&format!(
            "SELECT {} FROM bookings WHERE booking_date = $1 ORDER BY booking_id",
            BOOKING_COLUMNS
        ))
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(map_err)?;
        Ok(rows.into_iter().map(Booking::from).collect())
    }

    async fn get_by_employee(&self, employee_id: i32) -> StorageResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, BookingRow>(&format!(
            "SELECT {} FROM bookings WHERE employee_id = $1 ORDER BY booking_date, booking_id",
            BOOKING_COLUMNS
        ))
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_err)?;
        Ok(rows.into_iter().map(Booking::from).collect())
    }

    async fn get_between(&self, from: NaiveDate, to: NaiveDate) -> StorageResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, BookingRow>(&format!(
            "SELECT {} FROM bookings WHERE booking_date BETWEEN $1 AND $2 ORDER BY booking_date, booking_id",
            BOOKING_COLUMNS
        ))
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await
        .map_err(map_err)?;
        Ok(rows.into_iter().map(Booking::from).collect())
    }

    async fn update(&self, booking: &Booking) -> StorageResult<bool> {
        let result = sqlx::query(
            "UPDATE bookings SET employee_id = $2, seat_id = $3, booking_date = $4 WHERE booking_id = $1",
        )
        .bind(booking.booking_id())
        .bind(booking.employee_id())
        .bind(booking.seat_id())
        .bind(booking.booking_date())
        .execute(&self.pool)
        .await
        .map_err(map_err)?;
        Ok(result.rows_affected() > 0)
    }

    async fn remove(&self, booking_id: i32) -> StorageResult<bool> {
        let result = sqlx::query("DELETE FROM bookings WHERE booking_id = $1")
            .bind(booking_id)
            .execute(&self.pool)
            .await
            .map_err(map_err)?;
        Ok(result.rows_affected() > 0)
    }
}
