//! `/api/booking` handlers

use crate::core::error::SeatbookResult;
use crate::dto::{AddBookingRequest, BookingDto, RemoveBookingRequest, UpdateBookingRequest};
use crate::server::extractors::{JsonBody, parse_date, parse_id};
use crate::server::state::AppState;
use axum::Json;
use axum::extract::{Path, State};

pub async fn add_booking(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<AddBookingRequest>,
) -> SeatbookResult<Json<BookingDto>> {
    Ok(Json(state.bookings.add(&request).await?))
}

pub async fn get_booking_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> SeatbookResult<Json<BookingDto>> {
    let id = parse_id("id", &id)?;
    Ok(Json(state.bookings.get_by_id(id).await?))
}

pub async fn get_bookings_by_date(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> SeatbookResult<Json<Vec<BookingDto>>> {
    let date = parse_date("date", &date)?;
    Ok(Json(state.bookings.get_by_date(date).await?))
}

pub async fn get_bookings_by_user_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> SeatbookResult<Json<Vec<BookingDto>>> {
    let id = parse_id("id", &id)?;
    Ok(Json(state.bookings.get_by_user_id(id).await?))
}

pub async fn get_monthly_bookings(
    State(state): State<AppState>,
) -> SeatbookResult<Json<Vec<BookingDto>>> {
    Ok(Json(state.bookings.get_monthly().await?))
}

pub async fn update_booking(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<UpdateBookingRequest>,
) -> SeatbookResult<Json<bool>> {
    Ok(Json(state.bookings.update(&request).await?))
}

pub async fn delete_booking(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RemoveBookingRequest>,
) -> SeatbookResult<Json<bool>> {
    Ok(Json(state.bookings.remove(&request).await?))
}
