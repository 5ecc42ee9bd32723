//! Typed error handling for the seat-booking API
//!
//! Every service operation returns a [`SeatbookResult`]. The API layer turns
//! the error into an HTTP response via [`IntoResponse`], so handlers never
//! pick status codes themselves.
//!
//! # Error Categories
//!
//! - [`SeatbookError::NullRequest`]: the request payload was absent
//! - [`ValidationError`]: a field violated its invariant (400)
//! - [`SeatbookError::NotFound`]: a referenced entity does not exist (404)
//! - [`ConflictKind`]: uniqueness or availability violation (409)
//! - [`StorageError`]: the backing store failed (500, or 409 for unique
//!   violations once a service has translated them)
//!
//! # Example
//!
//! ```rust,ignore
//! match bookings.add(request).await {
//!     Ok(booking) => println!("booked {}", booking.booking_id),
//!     Err(SeatbookError::Conflict(ConflictKind::SeatUnavailable { .. })) => {
//!         println!("seat already taken");
//!     }
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The main error type for the seat-booking service
#[derive(Debug, Error)]
pub enum SeatbookError {
    /// Request payload was missing or `null`
    #[error("{request} cannot be null")]
    NullRequest { request: &'static str },

    /// A field-level constraint was violated
    #[error(transparent)]
    InvalidArgument(#[from] ValidationError),

    /// The referenced entity does not exist
    #[error("{entity} with {key} not found")]
    NotFound { entity: EntityKind, key: String },

    /// Uniqueness or availability violation
    #[error(transparent)]
    Conflict(#[from] ConflictKind),

    /// Backing store failure
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl SeatbookError {
    /// Shorthand for a not-found error keyed by numeric id
    pub fn not_found_by_id(entity: EntityKind, id: i32) -> Self {
        SeatbookError::NotFound {
            entity,
            key: format!("id {}", id),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            SeatbookError::NullRequest { .. } => StatusCode::BAD_REQUEST,
            SeatbookError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            SeatbookError::NotFound { .. } => StatusCode::NOT_FOUND,
            SeatbookError::Conflict(_) => StatusCode::CONFLICT,
            SeatbookError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            SeatbookError::NullRequest { .. } => "NULL_REQUEST",
            SeatbookError::InvalidArgument(_) => "INVALID_ARGUMENT",
            SeatbookError::NotFound { .. } => "NOT_FOUND",
            SeatbookError::Conflict(e) => e.error_code(),
            SeatbookError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            SeatbookError::NotFound { entity, key } => Some(serde_json::json!({
                "entity": entity.as_str(),
                "key": key,
            })),
            SeatbookError::InvalidArgument(ValidationError::Field { field, .. }) => {
                Some(serde_json::json!({ "field": field }))
            }
            SeatbookError::Conflict(ConflictKind::SeatUnavailable { seat_id, date }) => {
                Some(serde_json::json!({
                    "seat_id": seat_id,
                    "date": date.to_string(),
                }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for SeatbookError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), "{}", self);
        } else {
            tracing::warn!(code = self.error_code(), status = status.as_u16(), "{}", self);
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Entity kinds
// =============================================================================

/// The three entity types managed by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Employee,
    Seat,
    Booking,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Employee => "employee",
            EntityKind::Seat => "seat",
            EntityKind::Booking => "booking",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Employee => write!(f, "Employee"),
            EntityKind::Seat => write!(f, "Seat"),
            EntityKind::Booking => write!(f, "Booking"),
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A single field failed its rule
    #[error("{message}")]
    Field { field: String, message: String },

    /// Request body could not be parsed
    #[error("Invalid JSON: {message}")]
    InvalidJson { message: String },

    /// Path segment could not be parsed
    #[error("Invalid {parameter} in path: '{value}'")]
    InvalidPath { parameter: String, value: String },
}

impl ValidationError {
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        ValidationError::Field {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Name of the offending field, if this error is tied to one
    pub fn field_name(&self) -> Option<&str> {
        match self {
            ValidationError::Field { field, .. } => Some(field),
            _ => None,
        }
    }
}

// =============================================================================
// Conflicts
// =============================================================================

/// Uniqueness and availability violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConflictKind {
    /// The seat already has a booking on that date
    #[error("Seat ID {seat_id} is not available on {date}")]
    SeatUnavailable { seat_id: i32, date: NaiveDate },

    /// Another employee already uses this email
    #[error("The email '{email}' is already in use")]
    DuplicateEmail { email: String },

    /// Another seat already carries this number
    #[error("Seat with seat number {seat_number} already exists")]
    DuplicateSeatNumber { seat_number: i32 },
}

impl ConflictKind {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConflictKind::SeatUnavailable { .. } => "SEAT_UNAVAILABLE",
            ConflictKind::DuplicateEmail { .. } => "DUPLICATE_EMAIL",
            ConflictKind::DuplicateSeatNumber { .. } => "DUPLICATE_SEAT_NUMBER",
        }
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to storage backends
#[derive(Debug, Error)]
pub enum StorageError {
    /// A unique constraint rejected the write
    #[error("Unique constraint '{constraint}' violated")]
    UniqueViolation { constraint: String },

    /// A foreign key constraint rejected the write
    #[error("Foreign key constraint '{constraint}' violated")]
    ForeignKeyViolation { constraint: String },

    /// Connection error
    #[error("Failed to connect to {backend}: {message}")]
    Connection { backend: String, message: String },

    /// Query execution error
    #[error("{backend} query error: {message}")]
    Query { backend: String, message: String },

    /// A persisted row could not be turned back into an entity
    #[error("Corrupt row: {message}")]
    Decode { message: String },

    /// In-process lock was poisoned
    #[error("Failed to acquire store lock: {message}")]
    Lock { message: String },
}

impl StorageError {
    /// Name of the violated constraint, when the error is a constraint violation
    pub fn constraint(&self) -> Option<&str> {
        match self {
            StorageError::UniqueViolation { constraint }
            | StorageError::ForeignKeyViolation { constraint } => Some(constraint),
            _ => None,
        }
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for seat-booking operations
pub type SeatbookResult<T> = Result<T, SeatbookError>;

// =============================================================================
// Tests
// =============================================================================
