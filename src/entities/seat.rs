//! Seat entity

use crate::core::error::ValidationError;
use crate::core::validation::MAX_SEAT_NUMBER;
use crate::core::validation::validators::{max_value, positive};
use crate::dto::{AddSeatRequest, UpdateSeatRequest};

/// A validated seat; `seat_id` is 0 until persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    seat_id: i32,
    seat_number: i32,
}

impl Seat {
    pub fn create(request: &AddSeatRequest) -> Result<Self, ValidationError> {
        validate(request.seat_number)?;
        Ok(Self {
            seat_id: 0,
            seat_number: request.seat_number,
        })
    }

    pub fn update(&mut self, request: &UpdateSeatRequest) -> Result<(), ValidationError> {
        validate(request.seat_number)?;
        self.seat_number = request.seat_number;
        Ok(())
    }

    pub(crate) fn from_row(seat_id: i32, seat_number: i32) -> Self {
        Self {
            seat_id,
            seat_number,
        }
    }

    pub(crate) fn with_id(mut self, seat_id: i32) -> Self {
        self.seat_id = seat_id;
        self
    }

    pub fn seat_id(&self) -> i32 {
        self.seat_id
    }

    pub fn seat_number(&self) -> i32 {
        self.seat_number
    }
}

/// Seat numbers run from 1 to 150 inclusive
pub fn validate(seat_number: i32) -> Result<(), ValidationError> {
    positive()("seatNumber", seat_number)?;
    max_value(MAX_SEAT_NUMBER)("seatNumber", seat_number)
}
