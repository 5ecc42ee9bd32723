//! HTTP server: state, extractors, handlers and routes
//!
//! `ServerBuilder` wires a store and a clock into the three services and
//! exposes them under `/api/booking`, `/api/employee` and `/api/seat`.

pub mod builder;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use builder::ServerBuilder;
pub use router::build_routes;
pub use state::AppState;
