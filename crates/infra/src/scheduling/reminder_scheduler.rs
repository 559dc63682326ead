//! Interval scheduler driving the reminder engine.
//!
//! Spawns one background task that ticks at a fixed interval and hands the
//! current wall-clock time to [`ReminderService::run_tick`]. The first tick
//! fires immediately so a due reminder is not delayed by a full interval at
//! startup.

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use tempo_core::ReminderService;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

use super::error::{SchedulerError, SchedulerResult};

/// Type alias for task handle to avoid complexity warnings
type TaskHandle = Arc<Mutex<Option<JoinHandle<()>>>>;

/// Configuration for the reminder scheduler
#[derive(Debug, Clone)]
pub struct ReminderSchedulerConfig {
    /// Polling interval between ticks
    pub tick: Duration,
    /// Timeout for awaiting the task join handle on stop
    pub join_timeout: Duration,
}

impl Default for ReminderSchedulerConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_secs(tempo_domain::constants::SCHEDULER_TICK_SECS),
            join_timeout: Duration::from_secs(5),
        }
    }
}

/// Reminder scheduler with explicit lifecycle management.
pub struct ReminderScheduler {
    service: Arc<ReminderService>,
    config: ReminderSchedulerConfig,
    cancellation_token: CancellationToken,
    task_handle: TaskHandle,
}

impl ReminderScheduler {
    /// Create a new reminder scheduler
    pub fn new(service: Arc<ReminderService>, config: ReminderSchedulerConfig) -> Self {
        Self {
            service,
            config,
            cancellation_token: CancellationToken::new(),
            task_handle: Arc::new(Mutex::new(None)),
        }
    }

    /// Start the scheduler
    ///
    /// Spawns the background polling task.
    ///
    /// # Errors
    ///
    /// Returns an error if the scheduler is already running.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> SchedulerResult<()> {
        if self.is_running() {
            return Err(SchedulerError::AlreadyRunning);
        }

        info!(tick_secs = self.config.tick.as_secs(), "Starting reminder scheduler");

        // Create a new cancellation token (supports restart after stop)
        self.cancellation_token = CancellationToken::new();

        let service = Arc::clone(&self.service);
        let tick = self.config.tick;
        let cancel = self.cancellation_token.clone();

        let handle = tokio::spawn(async move {
            Self::poll_loop(service, tick, cancel).await;
        });

        *self.task_handle.lock().await = Some(handle);

        info!("Reminder scheduler started");
        Ok(())
    }

    /// Stop the scheduler gracefully
    ///
    /// Cancels the background task and awaits completion.
    ///
    /// # Errors
    ///
    /// Returns an error if the scheduler is not running or the task does
    /// not finish within the join timeout.
    #[instrument(skip(self))]
    pub async fn stop(&mut self) -> SchedulerResult<()> {
        if !self.is_running() {
            return Err(SchedulerError::NotRunning);
        }

        info!("Stopping reminder scheduler");

        self.cancellation_token.cancel();

        if let Some(handle) = self.task_handle.lock().await.take() {
            let join_timeout = self.config.join_timeout;
            tokio::time::timeout(join_timeout, handle)
                .await
                .map_err(|_| SchedulerError::Timeout { seconds: join_timeout.as_secs() })?
                .map_err(|err| SchedulerError::TaskJoinFailed(err.to_string()))?;
        }

        info!("Reminder scheduler stopped");
        Ok(())
    }

    /// Check if the scheduler is running
    ///
    /// A scheduler is considered running if it has an active task handle
    /// that hasn't finished.
    pub fn is_running(&self) -> bool {
        self.task_handle
            .try_lock()
            .ok()
            .and_then(|guard| guard.as_ref().map(|h| !h.is_finished()))
            .unwrap_or(false)
    }

    /// Background polling loop
    async fn poll_loop(service: Arc<ReminderService>, tick: Duration, cancel: CancellationToken) {
        let mut interval = tokio::time::interval(tick);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("Reminder poll loop cancelled");
                    break;
                }
                _ = interval.tick() => {
                    let now = Local::now().naive_local();
                    debug!(%now, "Reminder poll tick");
                    service.run_tick(now).await;
                }
            }
        }
    }
}

/// Ensure scheduler is stopped when dropped
impl Drop for ReminderScheduler {
    fn drop(&mut self) {
        if !self.cancellation_token.is_cancelled() {
            warn!("ReminderScheduler dropped while running; cancelling");
            self.cancellation_token.cancel();
        }
    }
}
