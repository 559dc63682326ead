//! Port interface for goal persistence

use async_trait::async_trait;
use tempo_domain::{Goal, Result};

/// Trait for persisting the goal list.
#[async_trait]
pub trait GoalStore: Send + Sync {
    /// Load every stored goal.
    async fn load(&self) -> Result<Vec<Goal>>;

    /// Replace the stored goal list.
    async fn save(&self, goals: &[Goal]) -> Result<()>;
}
