//! Reminder engine service - core business logic

use std::sync::Arc;

use chrono::{Local, NaiveDateTime, NaiveTime};
use tempo_domain::constants::REMINDER_TIME_FORMAT;
use tempo_domain::{
    MotivationConfig, MotivationDraft, NotificationSettings, Recurrence, Reminder, ReminderDraft,
    Result, TempoError,
};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::gate::{motivation_due, should_fire};
use super::ports::{MotivationStore, NotificationSettingsStore, NotificationSink, ReminderStore};

/// Title used for rotating motivation messages.
const MOTIVATION_TITLE: &str = "Motivation";

/// Reminder engine service.
///
/// Owns reminder CRUD, the motivation and notification settings, and the
/// per-tick processing the background scheduler drives. Mutations of each
/// logical file are serialized on a dedicated mutex so an HTTP save racing
/// the polling tick cannot lose an update.
pub struct ReminderService {
    reminders: Arc<dyn ReminderStore>,
    motivation: Arc<dyn MotivationStore>,
    settings: Arc<dyn NotificationSettingsStore>,
    sink: Arc<dyn NotificationSink>,
    reminder_lock: Mutex<()>,
    motivation_lock: Mutex<()>,
}

impl ReminderService {
    /// Create a new reminder service.
    pub fn new(
        reminders: Arc<dyn ReminderStore>,
        motivation: Arc<dyn MotivationStore>,
        settings: Arc<dyn NotificationSettingsStore>,
        sink: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            reminders,
            motivation,
            settings,
            sink,
            reminder_lock: Mutex::new(()),
            motivation_lock: Mutex::new(()),
        }
    }

    /// List every stored reminder.
    pub async fn list(&self) -> Vec<Reminder> {
        self.load_reminders_or_default().await
    }

    /// Save a reminder, assigning `id` and `created_at` when absent.
    ///
    /// Updating an existing reminder resets its `sent` flag and carries the
    /// stored `last_sent` over so the debounce window survives the edit.
    pub async fn save(&self, draft: ReminderDraft) -> Result<Reminder> {
        validate_reminder(&draft)?;

        let _guard = self.reminder_lock.lock().await;
        let mut reminders = self.load_reminders_or_default().await;

        let existing = draft
            .id
            .as_deref()
            .and_then(|id| reminders.iter().position(|r| r.id == id));

        let reminder = match existing {
            Some(index) => {
                let stored = &reminders[index];
                let updated = Reminder {
                    id: stored.id.clone(),
                    title: draft.title,
                    message: draft.message,
                    date: draft.date,
                    time: draft.time,
                    recurrence: draft.recurrence,
                    weekday: draft.weekday,
                    created_at: stored.created_at,
                    last_sent: stored.last_sent,
                    sent: false,
                };
                reminders[index] = updated.clone();
                updated
            }
            None => {
                let created = Reminder {
                    id: draft.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
                    title: draft.title,
                    message: draft.message,
                    date: draft.date,
                    time: draft.time,
                    recurrence: draft.recurrence,
                    weekday: draft.weekday,
                    created_at: Some(Local::now().naive_local()),
                    last_sent: None,
                    sent: false,
                };
                reminders.push(created.clone());
                created
            }
        };

        self.reminders.save(&reminders).await?;
        Ok(reminder)
    }

    /// Delete a reminder by id. Succeeds whether or not the id exists.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let _guard = self.reminder_lock.lock().await;
        let mut reminders = self.load_reminders_or_default().await;
        let before = reminders.len();
        reminders.retain(|r| r.id != id);
        if reminders.len() != before {
            self.reminders.save(&reminders).await?;
        }
        Ok(())
    }

    /// Current motivation configuration.
    pub async fn motivation_settings(&self) -> MotivationConfig {
        self.load_motivation_or_default().await
    }

    /// Save motivation settings, preserving the server-owned rotation state
    /// (`last_sent`, `last_index`).
    pub async fn save_motivation_settings(&self, draft: MotivationDraft) -> Result<MotivationConfig> {
        if draft.interval_minutes == 0 {
            return Err(TempoError::InvalidInput(
                "Interval must be greater than zero".to_string(),
            ));
        }

        let _guard = self.motivation_lock.lock().await;
        let stored = self.load_motivation_or_default().await;
        let config = MotivationConfig {
            enabled: draft.enabled,
            interval_minutes: draft.interval_minutes,
            messages: draft.messages,
            last_sent: stored.last_sent,
            last_index: stored.last_index,
        };
        self.motivation.save(&config).await?;
        Ok(config)
    }

    /// Current notification settings.
    pub async fn notification_settings(&self) -> NotificationSettings {
        match self.settings.load().await {
            Ok(settings) => settings,
            Err(err) => {
                log_unreadable("notification settings", &err);
                NotificationSettings::default()
            }
        }
    }

    /// Save the notification settings.
    pub async fn save_notification_settings(
        &self,
        settings: NotificationSettings,
    ) -> Result<NotificationSettings> {
        self.settings.save(&settings).await?;
        Ok(settings)
    }

    /// Deliver a one-off notification immediately, bypassing the gate.
    pub async fn test_notification(&self, title: &str, message: &str) -> Result<()> {
        if title.trim().is_empty() {
            return Err(TempoError::InvalidInput("Title cannot be empty".to_string()));
        }
        self.sink.deliver(title, message).await
    }

    /// Process one scheduler tick at `now`.
    ///
    /// Never returns an error: a bad record or a failed delivery is logged
    /// and skipped so the polling loop outlives any single failure.
    pub async fn run_tick(&self, now: NaiveDateTime) {
        let settings = self.notification_settings().await;
        if !settings.enabled {
            debug!("notifications disabled; skipping tick");
            return;
        }

        self.process_reminders(now).await;
        self.process_motivation(now).await;
    }

    async fn process_reminders(&self, now: NaiveDateTime) {
        let _guard = self.reminder_lock.lock().await;
        let mut reminders = self.load_reminders_or_default().await;
        let mut dirty = false;

        for reminder in &mut reminders {
            if !should_fire(reminder, now) {
                continue;
            }

            match self.sink.deliver(&reminder.title, &reminder.message).await {
                Ok(()) => {
                    info!(id = %reminder.id, title = %reminder.title, "reminder delivered");
                    reminder.last_sent = Some(now);
                    if reminder.recurrence == Recurrence::Once {
                        reminder.sent = true;
                    }
                    dirty = true;
                }
                Err(err) => {
                    warn!(id = %reminder.id, error = %err, "reminder delivery failed; skipping");
                }
            }
        }

        if dirty {
            if let Err(err) = self.reminders.save(&reminders).await {
                error!(error = %err, "failed to persist reminder state after dispatch");
            }
        }
    }

    async fn process_motivation(&self, now: NaiveDateTime) {
        let _guard = self.motivation_lock.lock().await;
        let mut config = self.load_motivation_or_default().await;

        let Some(index) = motivation_due(&config, now) else {
            return;
        };
        let Some(message) = config.messages.get(index).cloned() else {
            return;
        };

        match self.sink.deliver(MOTIVATION_TITLE, &message).await {
            Ok(()) => {
                info!(index, "motivation message delivered");
                config.last_sent = Some(now);
                config.last_index = index + 1;
                if let Err(err) = self.motivation.save(&config).await {
                    error!(error = %err, "failed to persist motivation state after dispatch");
                }
            }
            Err(err) => {
                warn!(error = %err, "motivation delivery failed; skipping");
            }
        }
    }

    async fn load_reminders_or_default(&self) -> Vec<Reminder> {
        match self.reminders.load().await {
            Ok(reminders) => reminders,
            Err(err) => {
                log_unreadable("reminders", &err);
                Vec::new()
            }
        }
    }

    async fn load_motivation_or_default(&self) -> MotivationConfig {
        match self.motivation.load().await {
            Ok(config) => config,
            Err(err) => {
                log_unreadable("motivation config", &err);
                MotivationConfig::default()
            }
        }
    }
}

/// Log an unreadable document, distinguishing corruption from plain I/O
/// failure, before the caller proceeds with the safe default.
fn log_unreadable(what: &str, err: &TempoError) {
    match err {
        TempoError::Corrupt(detail) => {
            error!(%detail, "{what} file is corrupt; continuing with the default")
        }
        other => warn!(error = %other, "failed to load {what}; continuing with the default"),
    }
}

fn validate_reminder(draft: &ReminderDraft) -> Result<()> {
    if draft.title.trim().is_empty() {
        return Err(TempoError::InvalidInput("Title cannot be empty".to_string()));
    }
    if NaiveTime::parse_from_str(draft.time.trim(), REMINDER_TIME_FORMAT).is_err() {
        return Err(TempoError::InvalidInput("Invalid time format. Use HH:MM".to_string()));
    }
    match draft.recurrence {
        Recurrence::Once if draft.date.is_none() => Err(TempoError::InvalidInput(
            "A one-time reminder needs a date".to_string(),
        )),
        Recurrence::Weekly if !draft.weekday.is_some_and(|w| w <= 6) => {
            Err(TempoError::InvalidInput(
                "A weekly reminder needs a weekday between 0 (Monday) and 6 (Sunday)".to_string(),
            ))
        }
        _ => Ok(()),
    }
}
