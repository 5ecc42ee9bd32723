//! `/api/employee` handlers

use crate::core::error::SeatbookResult;
use crate::dto::{AddEmployeeRequest, EmployeeDto, RemoveEmployeeRequest, UpdateEmployeeRequest};
use crate::server::extractors::{JsonBody, parse_id};
use crate::server::state::AppState;
use axum::Json;
use axum::extract::{Path, State};

pub async fn add_employee(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<AddEmployeeRequest>,
) -> SeatbookResult<Json<EmployeeDto>> {
    Ok(Json(state.employees.add(&request).await?))
}

pub async fn get_employee_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> SeatbookResult<Json<EmployeeDto>> {
    let id = parse_id("id", &id)?;
    Ok(Json(state.employees.get_by_id(id).await?))
}

pub async fn get_employee_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> SeatbookResult<Json<EmployeeDto>> {
    Ok(Json(state.employees.get_by_email(&email).await?))
}

pub async fn get_all_employees(
    State(state): State<AppState>,
) -> SeatbookResult<Json<Vec<EmployeeDto>>> {
    Ok(Json(state.employees.get_all().await?))
}

pub async fn update_employee(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<UpdateEmployeeRequest>,
) -> SeatbookResult<Json<bool>> {
    Ok(Json(state.employees.update(&request).await?))
}

pub async fn delete_employee(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RemoveEmployeeRequest>,
) -> SeatbookResult<Json<bool>> {
    Ok(Json(state.employees.remove(&request).await?))
}
