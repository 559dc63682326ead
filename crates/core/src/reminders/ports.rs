//! Port interfaces for the reminder engine
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use tempo_domain::{MotivationConfig, NotificationSettings, Reminder, Result};

/// Trait for persisting the reminder list.
///
/// `load` returns the empty default when no state has been persisted yet
/// and `TempoError::Corrupt` when persisted state exists but cannot be
/// parsed.
#[async_trait]
pub trait ReminderStore: Send + Sync {
    /// Load every stored reminder.
    async fn load(&self) -> Result<Vec<Reminder>>;

    /// Replace the stored reminder list.
    async fn save(&self, reminders: &[Reminder]) -> Result<()>;
}

/// Trait for persisting the singleton motivation configuration.
#[async_trait]
pub trait MotivationStore: Send + Sync {
    /// Load the motivation configuration.
    async fn load(&self) -> Result<MotivationConfig>;

    /// Replace the motivation configuration.
    async fn save(&self, config: &MotivationConfig) -> Result<()>;
}

/// Trait for persisting the singleton notification settings.
#[async_trait]
pub trait NotificationSettingsStore: Send + Sync {
    /// Load the notification settings.
    async fn load(&self) -> Result<NotificationSettings>;

    /// Replace the notification settings.
    async fn save(&self, settings: &NotificationSettings) -> Result<()>;
}

/// Trait for delivering a notification to the user.
///
/// Implementations shell out to a platform command or fall back to the
/// console; the engine only sees success or failure.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Deliver a titled message.
    async fn deliver(&self, title: &str, message: &str) -> Result<()>;
}
