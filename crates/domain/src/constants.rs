//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

/// Fixed day-month-year format used by the activity ledger.
pub const LEDGER_DATE_FORMAT: &str = "%d-%m-%Y";

/// Wall-clock format for reminder times.
pub const REMINDER_TIME_FORMAT: &str = "%H:%M";

/// Upper bound for a single activity entry (24 hours).
pub const MAX_ENTRY_MINUTES: u32 = 1440;

// Reminder engine configuration
pub const SCHEDULER_TICK_SECS: u64 = 30;
pub const FIRE_WINDOW_SECS: i64 = 60;
pub const RESEND_DEBOUNCE_SECS: i64 = 60;

// External process ceilings
pub const NOTIFY_TIMEOUT_SECS: u64 = 8;
pub const REPORT_TIMEOUT_SECS: u64 = 30;

// Persisted file names under the data directory
pub const LEDGER_FILE: &str = "activities.csv";
pub const REMINDERS_FILE: &str = "reminders.json";
pub const GOALS_FILE: &str = "goals.json";
pub const TODOS_FILE: &str = "todos.json";
pub const MOTIVATION_FILE: &str = "motivation.json";
pub const NOTIFICATION_SETTINGS_FILE: &str = "notification_settings.json";
