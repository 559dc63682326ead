//! Common data types used throughout the application

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Serde adapter for the ledger's fixed day-month-year date format.
pub mod ledger_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::constants::LEDGER_DATE_FORMAT;

    /// Serialize a date as `DD-MM-YYYY`.
    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(LEDGER_DATE_FORMAT).to_string())
    }

    /// Deserialize a date from `DD-MM-YYYY`.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, LEDGER_DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}

/// One row of the activity ledger.
///
/// The `id` is an opaque token assigned at creation time; edits and deletes
/// address entries by id, never by file position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: String,
    #[serde(with = "ledger_date")]
    pub date: NaiveDate,
    pub activity: String,
    pub minutes: u32,
    pub category: String,
}

/// Raw add-entry submission, exactly as the form posts it.
///
/// Fields stay as strings so validation can produce descriptive messages
/// instead of a framework-level deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct NewEntry {
    pub date: String,
    pub activity: String,
    pub minutes: String,
    pub category: String,
}

/// Raw update-entry submission addressed by entry id.
#[derive(Debug, Clone, Deserialize)]
pub struct EntryUpdate {
    pub id: String,
    pub date: String,
    pub activity: String,
    pub minutes: String,
    pub category: String,
}

/// Repetition rule governing when a reminder is next due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    Once,
    Daily,
    Weekly,
}

/// A scheduled reminder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub title: String,
    pub message: String,
    /// Calendar date, required for `once` reminders.
    pub date: Option<NaiveDate>,
    /// Wall-clock time in `HH:MM` form. Kept as submitted; the recurrence
    /// resolver treats an unparsable value as "never due".
    pub time: String,
    pub recurrence: Recurrence,
    /// Target weekday for `weekly` reminders, 0 = Monday .. 6 = Sunday.
    pub weekday: Option<u8>,
    pub created_at: Option<NaiveDateTime>,
    pub last_sent: Option<NaiveDateTime>,
    #[serde(default)]
    pub sent: bool,
}

/// Client-submitted reminder payload; `id` is absent for a new reminder.
#[derive(Debug, Clone, Deserialize)]
pub struct ReminderDraft {
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub message: String,
    pub date: Option<NaiveDate>,
    pub time: String,
    pub recurrence: Recurrence,
    pub weekday: Option<u8>,
}

/// Singleton configuration for rotating motivation messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotivationConfig {
    pub enabled: bool,
    pub interval_minutes: u32,
    pub messages: Vec<String>,
    pub last_sent: Option<NaiveDateTime>,
    #[serde(default)]
    pub last_index: usize,
}

impl Default for MotivationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            interval_minutes: 240,
            messages: Vec::new(),
            last_sent: None,
            last_index: 0,
        }
    }
}

/// Client-submitted motivation settings; rotation state is server-owned.
#[derive(Debug, Clone, Deserialize)]
pub struct MotivationDraft {
    pub enabled: bool,
    pub interval_minutes: u32,
    #[serde(default)]
    pub messages: Vec<String>,
}

/// Singleton on/off switch for reminder and motivation delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub enabled: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// What a goal measures against the activity ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalKind {
    /// Minutes spent in one category.
    Category,
    /// Minutes spent across all categories.
    TotalMinutes,
    /// Distinct days with at least one entry.
    Consistency,
}

/// Aggregation window used for goal progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// A progress goal measured against the activity ledger.
///
/// `current_progress` and `progress_percentage` are recomputed on demand and
/// never trusted as durable truth between recomputations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: GoalKind,
    pub category: Option<String>,
    pub period: Period,
    pub target: f64,
    #[serde(default)]
    pub current_progress: f64,
    #[serde(default)]
    pub progress_percentage: f64,
    pub created_at: Option<NaiveDateTime>,
}

/// Client-submitted goal payload; `id` is absent for a new goal.
#[derive(Debug, Clone, Deserialize)]
pub struct GoalDraft {
    pub id: Option<String>,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: GoalKind,
    pub category: Option<String>,
    pub period: Period,
    pub target: f64,
}

/// A to-do list item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub done: bool,
    pub created_at: Option<NaiveDateTime>,
}

/// Client-submitted to-do payload; `id` is absent for a new item.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoDraft {
    pub id: Option<String>,
    pub text: String,
    #[serde(default)]
    pub done: bool,
}
