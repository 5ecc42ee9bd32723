//! Route table for the seat-booking API

use super::handlers::{booking, employee, health, seat};
use super::state::AppState;
use axum::Router;
use axum::routing::{delete, get, post, put};

/// Build every API route plus `/health`
///
/// Booking:
/// - POST   /api/booking/add
/// - GET    /api/booking/getById/{id}
/// - GET    /api/booking/getByDate/{date}
/// - GET    /api/booking/getByUserId/{id}
/// - GET    /api/booking/getMonthly
/// - PUT    /api/booking/update
/// - DELETE /api/booking/delete
///
/// Employee and seat routes follow the same shape.
pub fn build_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .nest("/api/booking", booking_routes())
        .nest("/api/employee", employee_routes())
        .nest("/api/seat", seat_routes())
        .with_state(state)
}

fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(booking::add_booking))
        .route("/getById/{id}", get(booking::get_booking_by_id))
        .route("/getByDate/{date}", get(booking::get_bookings_by_date))
        .route("/getByUserId/{id}", get(booking::get_bookings_by_user_id))
        .route("/getMonthly", get(booking::get_monthly_bookings))
        .route("/update", put(booking::update_booking))
        .route("/delete", delete(booking::delete_booking))
}

fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(employee::add_employee))
        .route("/getById/{id}", get(employee::get_employee_by_id))
        .route("/getByEmail/{email}", get(employee::get_employee_by_email))
        .route("/getAll", get(employee::get_all_employees))
        .route("/update", put(employee::update_employee))
        .route("/delete", delete(employee::delete_employee))
}

fn seat_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(seat::add_seat))
        .route("/getById/{id}", get(seat::get_seat_by_id))
        .route("/getAll", get(seat::get_all_seats))
        .route(
            "/getAvailableByDate/{date}",
            get(seat::get_available_seats_by_date),
        )
        .route("/update", put(seat::update_seat))
        .route("/delete", delete(seat::delete_seat))
}
