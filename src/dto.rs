//! Request and response shapes used at the HTTP boundary
//!
//! Field names are camelCase on the wire (`employeeId`, `bookingDate`).
//! Booking dates accept either a plain date or an ISO date-time; the time of
//! day is discarded.

use crate::entities::{Booking, Employee, Role, RoleInput, Seat};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Employee
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddEmployeeRequest {
    pub name: String,
    pub email: String,
    pub role: RoleInput,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    pub employee_id: i32,
    pub name: String,
    pub email: String,
    pub role: RoleInput,
}

/// Removal is keyed by id and email together
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveEmployeeRequest {
    pub employee_id: i32,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub employee_id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<&Employee> for EmployeeDto {
    fn from(employee: &Employee) -> Self {
        Self {
            employee_id: employee.employee_id(),
            name: employee.name().to_string(),
            email: employee.email().to_string(),
            role: employee.role(),
        }
    }
}

// ---------------------------------------------------------------------------
// Seat
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSeatRequest {
    pub seat_number: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSeatRequest {
    pub seat_id: i32,
    pub seat_number: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveSeatRequest {
    pub seat_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatDto {
    pub seat_id: i32,
    pub seat_number: i32,
}

impl From<&Seat> for SeatDto {
    fn from(seat: &Seat) -> Self {
        Self {
            seat_id: seat.seat_id(),
            seat_number: seat.seat_number(),
        }
    }
}

// ---------------------------------------------------------------------------
// Booking
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddBookingRequest {
    pub employee_id: i32,
    pub seat_id: i32,
    #[serde(deserialize_with = "calendar_date::deserialize")]
    pub booking_date: NaiveDate,
}

/// Update of an existing booking
///
/// The booking is located by `bookingId` together with `bookingDate`.
/// `newBookingDate`, when given, moves the booking to that day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    pub booking_id: i32,
    pub employee_id: i32,
    pub seat_id: i32,
    #[serde(deserialize_with = "calendar_date::deserialize")]
    pub booking_date: NaiveDate,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "calendar_date::deserialize_option"
    )]
    pub new_booking_date: Option<NaiveDate>,
}

impl UpdateBookingRequest {
    /// Date the booking should end up on
    pub fn target_date(&self) -> NaiveDate {
        self.new_booking_date.unwrap_or(self.booking_date)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveBookingRequest {
    pub booking_id: i32,
    #[serde(deserialize_with = "calendar_date::deserialize")]
    pub booking_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub booking_id: i32,
    pub employee_id: i32,
    pub seat_id: i32,
    pub booking_date: NaiveDate,
}

impl From<&Booking> for BookingDto {
    fn from(booking: &Booking) -> Self {
        Self {
            booking_id: booking.booking_id(),
            employee_id: booking.employee_id(),
            seat_id: booking.seat_id(),
            booking_date: booking.booking_date(),
        }
    }
}

// ---------------------------------------------------------------------------
// Calendar dates
// ---------------------------------------------------------------------------

/// Parse a calendar date, dropping any time-of-day component
///
/// Accepts `2026-10-16`, `2026-10-16T09:30:00`, `2026-10-16 09:30:00`
/// and RFC 3339 timestamps such as `2026-10-16T09:30:00Z`.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|dt| dt.date())
}

/// Serde adapters for [`parse_calendar_date`]
pub mod calendar_date {
    use super::parse_calendar_date;
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, de::Error};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_calendar_date(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid date '{}'", raw)))
    }

    pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) => parse_calendar_date(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid date '{}'", raw))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_calendar_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(parse_calendar_date("2026-10-16"), Some(expected));
        assert_eq!(parse_calendar_date("2026-10-16T23:59:59"), Some(expected));
        assert_eq!(parse_calendar_date("2026-10-16T08:00:00.123"), Some(expected));
        assert_eq!(parse_calendar_date("2026-10-16 12:00:00"), Some(expected));
        assert_eq!(parse_calendar_date("2026-10-16T10:00:00Z"), Some(expected));
        assert_eq!(parse_calendar_date("2026-10-16T10:00:00+05:30"), Some(expected));
        assert_eq!(parse_calendar_date("16/10/2026"), None);
        assert_eq!(parse_calendar_date("2026-02-30"), None);
    }

    #[test]
    fn test_add_booking_request_uses_camel_case_and_drops_time() {
        let request: AddBookingRequest = serde_json::from_value(json!({
            "employeeId": 1,
            "seatId": 10,
            "bookingDate": "2026-10-20T14:30:00"
        }))
        .unwrap();
        assert_eq!(request.employee_id, 1);
        assert_eq!(request.seat_id, 10);
        assert_eq!(
            request.booking_date,
            NaiveDate::from_ymd_opt(2026, 10, 20).unwrap()
        );
    }

    #[test]
    fn test_update_booking_request_target_date() {
        let request: UpdateBookingRequest = serde_json::from_value(json!({
            "bookingId": 3,
            "employeeId": 1,
            "seatId": 10,
            "bookingDate": "2026-10-20"
        }))
        .unwrap();
        assert_eq!(request.new_booking_date, None);
        assert_eq!(request.target_date(), request.booking_date);

        let request: UpdateBookingRequest = serde_json::from_value(json!({
            "bookingId": 3,
            "employeeId": 1,
            "seatId": 10,
            "bookingDate": "2026-10-20",
            "newBookingDate": "2026-10-22"
        }))
        .unwrap();
        assert_eq!(
            request.target_date(),
            NaiveDate::from_ymd_opt(2026, 10, 22).unwrap()
        );
    }

    #[test]
    fn test_invalid_booking_date_is_rejected() {
        let result = serde_json::from_value::<RemoveBookingRequest>(json!({
            "bookingId": 3,
            "bookingDate": "tomorrow"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_booking_dto_serializes_plain_date() {
        let dto = BookingDto {
            booking_id: 1,
            employee_id: 2,
            seat_id: 3,
            booking_date: NaiveDate::from_ymd_opt(2026, 10, 20).unwrap(),
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["bookingDate"], "2026-10-20");
        assert_eq!(value["bookingId"], 1);
    }
}
