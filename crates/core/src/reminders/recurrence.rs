//! Recurrence resolution for reminders.

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime};
use tempo_domain::constants::REMINDER_TIME_FORMAT;
use tempo_domain::{Recurrence, Reminder};

/// Compute the next scheduled occurrence of a reminder relative to `now`.
///
/// - `once`: the configured date and time, even when already elapsed; the
///   dispatch gate carries the burden of not re-firing it.
/// - `daily`: today at the configured time, advanced one day when that slot
///   is not after `now`.
/// - `weekly`: the next matching weekday at the configured time, advanced a
///   full week when today's slot is not after `now`.
///
/// Returns `None` when the reminder cannot be resolved: malformed `time`,
/// a `once` reminder without a date, or a `weekly` reminder without a valid
/// weekday.
pub fn next_occurrence(reminder: &Reminder, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let time = NaiveTime::parse_from_str(reminder.time.trim(), REMINDER_TIME_FORMAT).ok()?;

    match reminder.recurrence {
        Recurrence::Once => reminder.date.map(|date| date.and_time(time)),
        Recurrence::Daily => {
            let candidate = now.date().and_time(time);
            if candidate > now {
                Some(candidate)
            } else {
                Some(candidate + Duration::days(1))
            }
        }
        Recurrence::Weekly => {
            let target = reminder.weekday.filter(|w| *w <= 6)?;
            let today = now.weekday().num_days_from_monday();
            let days_ahead = i64::from((u32::from(target) + 7 - today) % 7);
            let candidate = (now.date() + Duration::days(days_ahead)).and_time(time);
            if days_ahead == 0 && candidate <= now {
                Some(candidate + Duration::days(7))
            } else {
                Some(candidate)
            }
        }
    }
}
