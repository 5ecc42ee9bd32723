//! HTTP handlers, one module per resource

pub mod booking;
pub mod employee;
pub mod health;
pub mod seat;
