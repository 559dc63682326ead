//! # Tempo API
//!
//! The HTTP surface of Tempo: application context wiring, route handlers,
//! and the JSON response envelope.
//!
//! Every endpoint replies `200 OK` with `{"status": "success", ...}` or
//! `{"status": "error", "message": ...}`; validation problems are payload
//! errors the frontend shows as-is, not transport failures.

pub mod context;
pub mod response;
pub mod routes;

pub use context::AppContext;
pub use routes::router;
