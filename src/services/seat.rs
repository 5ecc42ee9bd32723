//! Seat management and availability

use super::{conflict_on, require_positive};
use crate::core::clock::Clock;
use crate::core::error::{ConflictKind, EntityKind, SeatbookError, SeatbookResult};
use crate::core::repository::{SEAT_NUMBER_UNIQUE, SeatRepository};
use crate::dto::{AddSeatRequest, RemoveSeatRequest, SeatDto, UpdateSeatRequest};
use crate::entities::Seat;
use crate::entities::booking::validate_date;
use chrono::NaiveDate;
use std::sync::Arc;

pub struct SeatService {
    repository: Arc<dyn SeatRepository>,
    clock: Arc<dyn Clock>,
}

impl SeatService {
    pub fn new(repository: Arc<dyn SeatRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn add(&self, request: &AddSeatRequest) -> SeatbookResult<SeatDto> {
        let seat = Seat::create(request)?;
        self.ensure_number_free(seat.seat_number(), None).await?;

        let seat_number = seat.seat_number();
        let created = self.repository.add(seat).await.map_err(|e| {
            conflict_on(e, SEAT_NUMBER_UNIQUE, ConflictKind::DuplicateSeatNumber { seat_number })
        })?;

        tracing::info!(seat_id = created.seat_id(), seat_number, "Seat added");
        Ok(SeatDto::from(&created))
    }

    /// All seats, ordered by seat number
    pub async fn get_all(&self) -> SeatbookResult<Vec<SeatDto>> {
        let seats = self.repository.get_all().await?;
        Ok(seats.iter().map(SeatDto::from).collect())
    }

    pub async fn get_by_id(&self, seat_id: i32) -> SeatbookResult<SeatDto> {
        let seat = self.find(seat_id).await?;
        Ok(SeatDto::from(&seat))
    }

    /// Seats without a booking on `date`
    ///
    /// `date` must fall inside the booking window.
    pub async fn get_available_on_date(&self, date: NaiveDate) -> SeatbookResult<Vec<SeatDto>> {
        validate_date(date, self.clock.today())?;
        let seats = self.repository.get_available_on_date(date).await?;
        Ok(seats.iter().map(SeatDto::from).collect())
    }

    pub async fn update(&self, request: &UpdateSeatRequest) -> SeatbookResult<bool> {
        let mut seat = self.find(request.seat_id).await?;
        seat.update(request)?;
        self.ensure_number_free(seat.seat_number(), Some(seat.seat_id()))
            .await?;

        let seat_number = seat.seat_number();
        let updated = self.repository.update(&seat).await.map_err(|e| {
            conflict_on(e, SEAT_NUMBER_UNIQUE, ConflictKind::DuplicateSeatNumber { seat_number })
        })?;

        tracing::info!(seat_id = seat.seat_id(), seat_number, updated, "Seat updated");
        Ok(updated)
    }

    /// Delete a seat together with its bookings
    pub async fn remove(&self, request: &RemoveSeatRequest) -> SeatbookResult<bool> {
        let seat = self.find(request.seat_id).await?;
        let removed = self.repository.remove(seat.seat_id()).await?;
        tracing::info!(seat_id = seat.seat_id(), removed, "Seat removed");
        Ok(removed)
    }

    pub(crate) async fn find(&self, seat_id: i32) -> SeatbookResult<Seat> {
        require_positive("seatId", seat_id)?;
        self.repository
            .get_by_id(seat_id)
            .await?
            .ok_or_else(|| SeatbookError::not_found_by_id(EntityKind::Seat, seat_id))
    }

    async fn ensure_number_free(&self, seat_number: i32, owner: Option<i32>) -> SeatbookResult<()> {
        let taken = self
            .repository
            .get_all()
            .await?
            .iter()
            .any(|s| s.seat_number() == seat_number && Some(s.seat_id()) != owner);
        if taken {
            tracing::debug!(seat_number, "Seat number already in use");
            return Err(ConflictKind::DuplicateSeatNumber { seat_number }.into());
        }
        Ok(())
    }
}
