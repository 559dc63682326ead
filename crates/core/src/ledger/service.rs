//! Activity ledger service - core business logic

use std::sync::Arc;

use tempo_domain::{ActivityEntry, EntryUpdate, NewEntry, Result, TempoError};
use tokio::sync::Mutex;
use tracing::{error, warn};
use uuid::Uuid;

use super::ports::LedgerStore;
use super::stats::{summarize, LedgerSummary};
use super::validate::validate_entry;

/// Activity ledger service.
///
/// Validation happens at the boundary before any mutation; every mutation
/// runs as a read-modify-write under one mutex so concurrent requests
/// cannot lose an update.
pub struct LedgerService {
    store: Arc<dyn LedgerStore>,
    write_lock: Mutex<()>,
}

impl LedgerService {
    /// Create a new ledger service.
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store, write_lock: Mutex::new(()) }
    }

    /// All ledger entries in insertion order.
    pub async fn entries(&self) -> Vec<ActivityEntry> {
        match self.store.load().await {
            Ok(entries) => entries,
            Err(TempoError::Corrupt(detail)) => {
                error!(%detail, "ledger file is corrupt; continuing with the empty default");
                Vec::new()
            }
            Err(err) => {
                warn!(error = %err, "failed to load ledger; continuing with the empty default");
                Vec::new()
            }
        }
    }

    /// Validate and append a new entry, assigning its id.
    pub async fn add_entry(&self, input: &NewEntry) -> Result<ActivityEntry> {
        let validated =
            validate_entry(&input.date, &input.activity, &input.minutes, &input.category)?;

        let entry = ActivityEntry {
            id: Uuid::new_v4().to_string(),
            date: validated.date,
            activity: validated.activity,
            minutes: validated.minutes,
            category: validated.category,
        };

        let _guard = self.write_lock.lock().await;
        self.store.append(&entry).await?;
        Ok(entry)
    }

    /// Validate and apply an update to the entry with the given id.
    pub async fn update_entry(&self, input: &EntryUpdate) -> Result<ActivityEntry> {
        let validated =
            validate_entry(&input.date, &input.activity, &input.minutes, &input.category)?;

        let _guard = self.write_lock.lock().await;
        let mut entries = self.entries().await;
        let Some(slot) = entries.iter_mut().find(|e| e.id == input.id) else {
            return Err(TempoError::NotFound(format!("No entry with id {}", input.id)));
        };

        slot.date = validated.date;
        slot.activity = validated.activity;
        slot.minutes = validated.minutes;
        slot.category = validated.category;
        let updated = slot.clone();

        self.store.save(&entries).await?;
        Ok(updated)
    }

    /// Delete the entry with the given id.
    pub async fn delete_entry(&self, id: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.entries().await;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return Err(TempoError::NotFound(format!("No entry with id {id}")));
        }
        self.store.save(&entries).await?;
        Ok(())
    }

    /// Recompute the ledger summary from the current entries.
    pub async fn summary(&self) -> LedgerSummary {
        summarize(&self.entries().await)
    }
}
