//! Application context - dependency injection container

use std::path::Path;
use std::sync::Arc;

use tempo_core::{
    GoalService, GoalStore, LedgerService, LedgerStore, MotivationStore,
    NotificationSettingsStore, NotificationSink, ReminderService, ReminderStore, ReportRunner,
    ReportService, TodoService, TodoStore,
};
use tempo_domain::constants::{
    GOALS_FILE, LEDGER_FILE, MOTIVATION_FILE, NOTIFICATION_SETTINGS_FILE, REMINDERS_FILE,
    TODOS_FILE,
};
use tempo_domain::Config;
use tempo_infra::{
    CommandNotifier, CsvLedgerStore, JsonGoalStore, JsonMotivationStore,
    JsonNotificationSettingsStore, JsonReminderStore, JsonTodoStore, ScriptReportRunner,
};

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub ledger: Arc<LedgerService>,
    pub reminders: Arc<ReminderService>,
    pub goals: Arc<GoalService>,
    pub todos: Arc<TodoService>,
    pub reports: Arc<ReportService>,
}

impl AppContext {
    /// Wire every service against the flat files under the configured data
    /// directory.
    pub fn new(config: Config) -> Self {
        let data_dir = Path::new(&config.storage.data_dir);

        let ledger_store: Arc<dyn LedgerStore> =
            Arc::new(CsvLedgerStore::new(data_dir.join(LEDGER_FILE)));
        let reminder_store: Arc<dyn ReminderStore> =
            Arc::new(JsonReminderStore::new(data_dir.join(REMINDERS_FILE)));
        let motivation_store: Arc<dyn MotivationStore> =
            Arc::new(JsonMotivationStore::new(data_dir.join(MOTIVATION_FILE)));
        let settings_store: Arc<dyn NotificationSettingsStore> =
            Arc::new(JsonNotificationSettingsStore::new(
                data_dir.join(NOTIFICATION_SETTINGS_FILE),
            ));
        let goal_store: Arc<dyn GoalStore> =
            Arc::new(JsonGoalStore::new(data_dir.join(GOALS_FILE)));
        let todo_store: Arc<dyn TodoStore> =
            Arc::new(JsonTodoStore::new(data_dir.join(TODOS_FILE)));

        let sink: Arc<dyn NotificationSink> =
            Arc::new(CommandNotifier::new(&config.notifications));
        let runner: Arc<dyn ReportRunner> = Arc::new(ScriptReportRunner::new(&config.reports));

        Self {
            ledger: Arc::new(LedgerService::new(ledger_store.clone())),
            reminders: Arc::new(ReminderService::new(
                reminder_store,
                motivation_store,
                settings_store,
                sink,
            )),
            goals: Arc::new(GoalService::new(goal_store, ledger_store)),
            todos: Arc::new(TodoService::new(todo_store)),
            reports: Arc::new(ReportService::new(runner)),
            config,
        }
    }
}
