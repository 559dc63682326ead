//! Goals: period-windowed progress calculation against the ledger.

pub mod ports;
pub mod progress;
pub mod service;

pub use service::GoalService;
