//! Shared setup for the HTTP-level tests
//!
//! Every server gets a fresh in-memory store and a clock pinned to
//! [`today`], so booking-window assertions are stable.

#![allow(dead_code)]

use axum_test::TestServer;
use chrono::NaiveDate;
use seatbook::core::FixedClock;
use seatbook::server::ServerBuilder;
use serde_json::{Value, json};

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

/// `today + n` formatted as `YYYY-MM-DD`
pub fn day(n: i64) -> String {
    (today() + chrono::Duration::days(n)).to_string()
}

pub fn test_server() -> TestServer {
    let app = ServerBuilder::new()
        .with_in_memory_store()
        .with_clock(FixedClock(today()))
        .build()
        .unwrap();
    TestServer::new(app)
}

pub async fn add_employee(server: &TestServer, name: &str, email: &str) -> i64 {
    let response = server
        .post("/api/employee/add")
        .json(&json!({ "name": name, "email": email, "role": "User" }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    body["employeeId"].as_i64().unwrap()
}

pub async fn add_seat(server: &TestServer, seat_number: i32) -> i64 {
    let response = server
        .post("/api/seat/add")
        .json(&json!({ "seatNumber": seat_number }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    body["seatId"].as_i64().unwrap()
}

pub async fn add_booking(server: &TestServer, employee_id: i64, seat_id: i64, date: &str) -> i64 {
    let response = server
        .post("/api/booking/add")
        .json(&json!({ "employeeId": employee_id, "seatId": seat_id, "bookingDate": date }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    body["bookingId"].as_i64().unwrap()
}
