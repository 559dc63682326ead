//! Flat-file persistence
//!
//! One CSV file for the activity ledger and one JSON document per auxiliary
//! record type. Every writer replaces the target atomically (write to a
//! sibling temp file, then rename) so a crash mid-write cannot truncate
//! state. A missing file reads as the empty default; an unparsable file is
//! reported as `TempoError::Corrupt`, never silently swallowed here.

use std::path::Path;

use tempo_domain::{Result, TempoError};
use tokio::fs;

pub mod document;
pub mod goals;
pub mod ledger;
pub mod motivation;
pub mod reminders;
pub mod settings;
pub mod todos;

pub use document::JsonDocument;
pub use goals::JsonGoalStore;
pub use ledger::CsvLedgerStore;
pub use motivation::JsonMotivationStore;
pub use reminders::JsonReminderStore;
pub use settings::JsonNotificationSettingsStore;
pub use todos::JsonTodoStore;

/// Replace `path` with `contents` via a temp-file-and-rename.
pub(crate) async fn atomic_write(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .await
                .map_err(|err| storage_error(path, "create data directory", &err))?;
        }
    }

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, contents)
        .await
        .map_err(|err| storage_error(&tmp, "write", &err))?;
    fs::rename(&tmp, path)
        .await
        .map_err(|err| storage_error(path, "replace", &err))
}

pub(crate) fn storage_error(path: &Path, action: &str, err: &std::io::Error) -> TempoError {
    TempoError::Storage(format!("failed to {action} {}: {err}", path.display()))
}
