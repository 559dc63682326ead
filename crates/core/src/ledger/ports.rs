//! Port interface for activity ledger persistence

use async_trait::async_trait;
use tempo_domain::{ActivityEntry, Result};

/// Trait for persisting the activity ledger.
///
/// `load` returns the empty default when no ledger exists yet and
/// `TempoError::Corrupt` when the file exists but cannot be parsed.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Load every ledger entry in insertion order.
    async fn load(&self) -> Result<Vec<ActivityEntry>>;

    /// Append a single entry to the ledger.
    async fn append(&self, entry: &ActivityEntry) -> Result<()>;

    /// Replace the whole ledger.
    async fn save(&self, entries: &[ActivityEntry]) -> Result<()>;
}
