//! Dispatch gating: is a reminder or motivation message due right now,
//! and not a duplicate of a recent send?

use chrono::{Duration, NaiveDateTime};
use tempo_domain::constants::{FIRE_WINDOW_SECS, RESEND_DEBOUNCE_SECS};
use tempo_domain::{MotivationConfig, Recurrence, Reminder};

use super::recurrence::next_occurrence;

/// Decide whether a reminder should fire at `now`.
///
/// A reminder fires when `now` falls inside the 60-second window that opens
/// at its scheduled slot: `slot <= now <= slot + 60s`. The resolver is
/// evaluated just behind that window (one second past its closing instant)
/// so a slot that elapsed within the last 60 seconds still resolves to
/// itself rather than rolling over to the following day or week. Firing is
/// suppressed while a previous send is less than the debounce interval old,
/// and a one-shot reminder already marked sent never fires again.
pub fn should_fire(reminder: &Reminder, now: NaiveDateTime) -> bool {
    if reminder.recurrence == Recurrence::Once && reminder.sent {
        return false;
    }

    let window = Duration::seconds(FIRE_WINDOW_SECS);
    let Some(slot) = next_occurrence(reminder, now - window - Duration::seconds(1)) else {
        return false;
    };
    if now < slot || now > slot + window {
        return false;
    }

    if let Some(last_sent) = reminder.last_sent {
        if now - last_sent < Duration::seconds(RESEND_DEBOUNCE_SECS) {
            return false;
        }
    }

    true
}

/// Decide whether a motivation message is due at `now`.
///
/// Returns the rotation index to deliver, or `None` when dispatch is
/// disabled, the message list is empty, or the configured interval has not
/// elapsed since the previous send.
pub fn motivation_due(config: &MotivationConfig, now: NaiveDateTime) -> Option<usize> {
    if !config.enabled || config.messages.is_empty() {
        return None;
    }

    let due = match config.last_sent {
        None => true,
        Some(last_sent) => {
            now - last_sent >= Duration::minutes(i64::from(config.interval_minutes))
        }
    };

    due.then(|| config.last_index % config.messages.len())
}
