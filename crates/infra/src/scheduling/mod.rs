//! Background scheduling for the reminder engine
//!
//! One interval-based scheduler with explicit lifecycle management:
//! - start/stop with a cancellation token
//! - join handle tracked and awaited with a timeout on stop
//! - a tick can never kill the loop; failures are logged and skipped

pub mod error;
pub mod reminder_scheduler;

pub use error::{SchedulerError, SchedulerResult};
pub use reminder_scheduler::{ReminderScheduler, ReminderSchedulerConfig};
