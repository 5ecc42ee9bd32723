//! `/api/seat` handlers

use crate::core::error::SeatbookResult;
use crate::dto::{AddSeatRequest, RemoveSeatRequest, SeatDto, UpdateSeatRequest};
use crate::server::extractors::{JsonBody, parse_date, parse_id};
use crate::server::state::AppState;
use axum::Json;
use axum::extract::{Path, State};

pub async fn add_seat(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<AddSeatRequest>,
) -> SeatbookResult<Json<SeatDto>> {
    Ok(Json(state.seats.add(&request).await?))
}

pub async fn get_seat_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> SeatbookResult<Json<SeatDto>> {
    let id = parse_id("id", &id)?;
    Ok(Json(state.seats.get_by_id(id).await?))
}

pub async fn get_all_seats(State(state): State<AppState>) -> SeatbookResult<Json<Vec<SeatDto>>> {
    Ok(Json(state.seats.get_all().await?))
}

pub async fn get_available_seats_by_date(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> SeatbookResult<Json<Vec<SeatDto>>> {
    let date = parse_date("date", &date)?;
    Ok(Json(state.seats.get_available_on_date(date).await?))
}

pub async fn update_seat(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<UpdateSeatRequest>,
) -> SeatbookResult<Json<bool>> {
    Ok(Json(state.seats.update(&request).await?))
}

pub async fn delete_seat(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RemoveSeatRequest>,
) -> SeatbookResult<Json<bool>> {
    Ok(Json(state.seats.remove(&request).await?))
}
