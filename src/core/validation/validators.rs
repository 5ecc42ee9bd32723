//! Reusable field validators
//!
//! Each function returns a validator closure taking the field name and the
//! value. Entities chain them in a fixed order so the first failing rule
//! decides the error message.

use crate::core::error::ValidationError;
use chrono::{Days, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Validator: string must contain a non-whitespace character
pub fn not_blank() -> impl Fn(&str, &str) -> Result<(), ValidationError> + Send + Sync + Clone {
    |field: &str, value: &str| {
        if value.trim().is_empty() {
            Err(ValidationError::field(
                field,
                format!("'{}' cannot be blank", field),
            ))
        } else {
            Ok(())
        }
    }
}

/// Validator: string length (in characters) must be within range
pub fn string_length(
    min: usize,
    max: usize,
) -> impl Fn(&str, &str) -> Result<(), ValidationError> + Send + Sync + Clone {
    move |field: &str, value: &str| {
        let len = value.chars().count();
        if len < min || len > max {
            Err(ValidationError::field(
                field,
                format!(
                    "'{}' must be between {} and {} characters (currently: {})",
                    field, min, max, len
                ),
            ))
        } else {
            Ok(())
        }
    }
}

/// Validator: string must look like `local@domain.tld`
pub fn email_format() -> impl Fn(&str, &str) -> Result<(), ValidationError> + Send + Sync + Clone
{
    |field: &str, value: &str| {
        if EMAIL_PATTERN.is_match(value) {
            Ok(())
        } else {
            Err(ValidationError::field(
                field,
                format!("'{}' is not a valid email address: {}", field, value),
            ))
        }
    }
}

/// Validator: number must be strictly positive
pub fn positive() -> impl Fn(&str, i32) -> Result<(), ValidationError> + Send + Sync + Clone {
    |field: &str, value: i32| {
        if value <= 0 {
            Err(ValidationError::field(
                field,
                format!("'{}' must be a positive number (value: {})", field, value),
            ))
        } else {
            Ok(())
        }
    }
}

/// Validator: number must not exceed maximum
pub fn max_value(max: i32) -> impl Fn(&str, i32) -> Result<(), ValidationError> + Send + Sync + Clone {
    move |field: &str, value: i32| {
        if value > max {
            Err(ValidationError::field(
                field,
                format!("'{}' must not exceed {} (value: {})", field, max, value),
            ))
        } else {
            Ok(())
        }
    }
}

/// Validator: date must fall in `[today, today + days]`, both ends inclusive
pub fn date_window(
    today: NaiveDate,
    days: u64,
) -> impl Fn(&str, NaiveDate) -> Result<(), ValidationError> + Send + Sync + Clone {
    move |field: &str, value: NaiveDate| {
        let last = today.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX);
        if value < today || value > last {
            Err(ValidationError::field(
                field,
                format!(
                    "'{}' must be between {} and {} (value: {})",
                    field, today, last, value
                ),
            ))
        } else {
            Ok(())
        }
    }
}
