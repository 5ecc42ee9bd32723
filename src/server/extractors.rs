//! Request extractors that report failures as `SeatbookError`

use crate::core::error::{SeatbookError, ValidationError};
use crate::dto::parse_calendar_date;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;

/// JSON request body
///
/// An empty body or a literal `null` is rejected with `NullRequest`; a body
/// that does not deserialize into `T` is an `InvalidArgument`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = SeatbookError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let request = request_name::<T>();
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            ValidationError::InvalidJson {
                message: e.body_text(),
            }
        })?;

        let trimmed = bytes.trim_ascii();
        if trimmed.is_empty() || trimmed == b"null" {
            return Err(SeatbookError::NullRequest { request });
        }

        serde_json::from_slice(trimmed)
            .map(JsonBody)
            .map_err(|e| {
                ValidationError::InvalidJson {
                    message: e.to_string(),
                }
                .into()
            })
    }
}

fn request_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Parse a numeric path segment
pub fn parse_id(parameter: &str, raw: &str) -> Result<i32, ValidationError> {
    raw.trim()
        .parse()
        .map_err(|_| ValidationError::InvalidPath {
            parameter: parameter.to_string(),
            value: raw.to_string(),
        })
}

/// Parse a date path segment (`YYYY-MM-DD` or an ISO date-time)
pub fn parse_date(parameter: &str, raw: &str) -> Result<NaiveDate, ValidationError> {
    parse_calendar_date(raw).ok_or_else(|| ValidationError::InvalidPath {
        parameter: parameter.to_string(),
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::AddSeatRequest;

    #[test]
    fn test_request_name_strips_module_path() {
        assert_eq!(request_name::<AddSeatRequest>(), "AddSeatRequest");
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("id", "42"), Ok(42));
        assert_eq!(parse_id("id", "-3"), Ok(-3));
        assert!(matches!(
            parse_id("id", "abc"),
            Err(ValidationError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_parse_date() {
        let expected = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
        assert_eq!(parse_date("date", "2026-10-20"), Ok(expected));
        assert_eq!(parse_date("date", "2026-10-20T08:15:00"), Ok(expected));
        assert!(parse_date("date", "20-10-2026").is_err());
    }
}
