//! Reminder engine: recurrence resolution, dispatch gating, and the
//! per-tick processing logic driven by the background scheduler.

pub mod gate;
pub mod ports;
pub mod recurrence;
pub mod service;

pub use service::ReminderService;
