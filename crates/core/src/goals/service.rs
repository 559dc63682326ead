//! Goal service - core business logic

use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use tempo_domain::{Goal, GoalDraft, GoalKind, Result, TempoError};
use tokio::sync::Mutex;
use tracing::{error, warn};
use uuid::Uuid;

use super::ports::GoalStore;
use super::progress::{compute_progress, progress_percentage};
use crate::ledger::ports::LedgerStore;

/// Goal service.
///
/// Progress fields are recomputed from the ledger on demand; the stored
/// values are only a cache of the last recomputation.
pub struct GoalService {
    goals: Arc<dyn GoalStore>,
    ledger: Arc<dyn LedgerStore>,
    write_lock: Mutex<()>,
}

impl GoalService {
    /// Create a new goal service.
    pub fn new(goals: Arc<dyn GoalStore>, ledger: Arc<dyn LedgerStore>) -> Self {
        Self { goals, ledger, write_lock: Mutex::new(()) }
    }

    /// List every stored goal.
    pub async fn list(&self) -> Vec<Goal> {
        self.load_or_default().await
    }

    /// Save a goal, assigning `id` and `created_at` when absent.
    pub async fn save(&self, draft: GoalDraft) -> Result<Goal> {
        validate_goal(&draft)?;

        let _guard = self.write_lock.lock().await;
        let mut goals = self.load_or_default().await;

        let existing =
            draft.id.as_deref().and_then(|id| goals.iter().position(|g| g.id == id));

        let goal = match existing {
            Some(index) => {
                let stored = &goals[index];
                let updated = Goal {
                    id: stored.id.clone(),
                    title: draft.title,
                    kind: draft.kind,
                    category: draft.category,
                    period: draft.period,
                    target: draft.target,
                    current_progress: stored.current_progress,
                    progress_percentage: stored.progress_percentage,
                    created_at: stored.created_at,
                };
                goals[index] = updated.clone();
                updated
            }
            None => {
                let created = Goal {
                    id: draft.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
                    title: draft.title,
                    kind: draft.kind,
                    category: draft.category,
                    period: draft.period,
                    target: draft.target,
                    current_progress: 0.0,
                    progress_percentage: 0.0,
                    created_at: Some(Local::now().naive_local()),
                };
                goals.push(created.clone());
                created
            }
        };

        self.goals.save(&goals).await?;
        Ok(goal)
    }

    /// Delete a goal by id. Succeeds whether or not the id exists.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut goals = self.load_or_default().await;
        let before = goals.len();
        goals.retain(|g| g.id != id);
        if goals.len() != before {
            self.goals.save(&goals).await?;
        }
        Ok(())
    }

    /// Recompute and persist progress for every stored goal at `now`.
    ///
    /// A goal whose computation fails is logged and left unchanged; the
    /// rest still update.
    pub async fn update_progress(&self, now: NaiveDateTime) -> Result<Vec<Goal>> {
        let _guard = self.write_lock.lock().await;
        let mut goals = self.load_or_default().await;

        let entries = match self.ledger.load().await {
            Ok(entries) => entries,
            Err(err) => {
                warn!(error = %err, "failed to load ledger for goal progress; using empty");
                Vec::new()
            }
        };

        for goal in &mut goals {
            match compute_progress(goal, &entries, now) {
                Ok(progress) => {
                    goal.current_progress = progress;
                    goal.progress_percentage = progress_percentage(progress, goal.target);
                }
                Err(err) => {
                    error!(id = %goal.id, error = %err, "failed to compute goal progress; leaving unchanged");
                }
            }
        }

        self.goals.save(&goals).await?;
        Ok(goals)
    }

    async fn load_or_default(&self) -> Vec<Goal> {
        match self.goals.load().await {
            Ok(goals) => goals,
            Err(TempoError::Corrupt(detail)) => {
                error!(%detail, "goals file is corrupt; continuing with the empty default");
                Vec::new()
            }
            Err(err) => {
                warn!(error = %err, "failed to load goals; continuing with the empty default");
                Vec::new()
            }
        }
    }
}

fn validate_goal(draft: &GoalDraft) -> Result<()> {
    if draft.title.trim().is_empty() {
        return Err(TempoError::InvalidInput("Title cannot be empty".to_string()));
    }
    if draft.target.is_nan() || draft.target <= 0.0 {
        return Err(TempoError::InvalidInput(
            "Target must be greater than zero".to_string(),
        ));
    }
    if draft.kind == GoalKind::Category
        && !draft.category.as_deref().is_some_and(|c| !c.trim().is_empty())
    {
        return Err(TempoError::InvalidInput(
            "A category goal needs a category".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex as StdMutex;

    use async_trait::async_trait;
    use chrono::NaiveDate;
    use tempo_domain::{ActivityEntry, Period};

    use super::*;

    #[derive(Default)]
    struct MemGoalStore {
        goals: StdMutex<Vec<Goal>>,
    }

    #[async_trait]
    impl GoalStore for MemGoalStore {
        async fn load(&self) -> Result<Vec<Goal>> {
            Ok(self.goals.lock().unwrap().clone())
        }

        async fn save(&self, goals: &[Goal]) -> Result<()> {
            *self.goals.lock().unwrap() = goals.to_vec();
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemLedgerStore {
        entries: StdMutex<Vec<ActivityEntry>>,
    }

    #[async_trait]
    impl LedgerStore for MemLedgerStore {
        async fn load(&self) -> Result<Vec<ActivityEntry>> {
            Ok(self.entries.lock().unwrap().clone())
        }

        async fn append(&self, entry: &ActivityEntry) -> Result<()> {
            self.entries.lock().unwrap().push(entry.clone());
            Ok(())
        }

        async fn save(&self, entries: &[ActivityEntry]) -> Result<()> {
            *self.entries.lock().unwrap() = entries.to_vec();
            Ok(())
        }
    }

    fn fixture() -> (Arc<MemGoalStore>, Arc<MemLedgerStore>, GoalService) {
        let goals = Arc::new(MemGoalStore::default());
        let ledger = Arc::new(MemLedgerStore::default());
        let service = GoalService::new(goals.clone(), ledger.clone());
        (goals, ledger, service)
    }

    fn draft(kind: GoalKind, target: f64, category: Option<&str>) -> GoalDraft {
        GoalDraft {
            id: None,
            title: "Read more".into(),
            kind,
            category: category.map(Into::into),
            period: Period::Weekly,
            target,
        }
    }

    fn entry(date: (i32, u32, u32), minutes: u32, category: &str) -> ActivityEntry {
        ActivityEntry {
            id: format!("{minutes}-{category}"),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            activity: "a".into(),
            minutes,
            category: category.into(),
        }
    }

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).and_then(|d| d.and_hms_opt(12, 0, 0)).unwrap()
    }

    #[tokio::test]
    async fn save_assigns_id_and_zero_progress() {
        let (_, _, service) = fixture();
        let goal = service.save(draft(GoalKind::TotalMinutes, 300.0, None)).await.unwrap();
        assert!(!goal.id.is_empty());
        assert_eq!(goal.current_progress, 0.0);
        assert!(goal.created_at.is_some());
    }

    #[tokio::test]
    async fn save_rejects_bad_drafts() {
        let (_, _, service) = fixture();
        assert!(service.save(draft(GoalKind::TotalMinutes, 0.0, None)).await.is_err());
        assert!(service.save(draft(GoalKind::Category, 100.0, None)).await.is_err());
        let mut untitled = draft(GoalKind::TotalMinutes, 100.0, None);
        untitled.title = " ".into();
        assert!(service.save(untitled).await.is_err());
    }

    #[tokio::test]
    async fn update_progress_recomputes_and_persists() {
        let (goals, ledger, service) = fixture();
        service.save(draft(GoalKind::Category, 300.0, Some("Reading"))).await.unwrap();

        // Week of Monday 2024-01-15.
        *ledger.entries.lock().unwrap() = vec![
            entry((2024, 1, 15), 60, "Reading"),
            entry((2024, 1, 16), 60, "Reading"),
            entry((2024, 1, 17), 60, "Reading"),
        ];

        let updated = service.update_progress(at(2024, 1, 18)).await.unwrap();
        assert_eq!(updated[0].current_progress, 180.0);
        assert_eq!(updated[0].progress_percentage, 60.0);

        let stored = goals.goals.lock().unwrap().clone();
        assert_eq!(stored[0].current_progress, 180.0);
    }

    #[tokio::test]
    async fn one_bad_goal_does_not_block_the_rest() {
        let (goals, ledger, service) = fixture();
        service.save(draft(GoalKind::TotalMinutes, 100.0, None)).await.unwrap();

        // Sneak in a goal that fails computation (category goal whose
        // category was wiped after saving).
        {
            let mut stored = goals.goals.lock().unwrap();
            let mut broken = stored[0].clone();
            broken.id = "broken".into();
            broken.kind = GoalKind::Category;
            broken.category = None;
            broken.current_progress = 42.0;
            stored.push(broken);
        }

        *ledger.entries.lock().unwrap() = vec![entry((2024, 1, 18), 50, "Any")];

        let updated = service.update_progress(at(2024, 1, 18)).await.unwrap();
        assert_eq!(updated[0].current_progress, 50.0);
        assert_eq!(updated[1].current_progress, 42.0, "failed goal left unchanged");
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let (_, _, service) = fixture();
        let goal = service.save(draft(GoalKind::TotalMinutes, 100.0, None)).await.unwrap();
        service.delete(&goal.id).await.unwrap();
        service.delete(&goal.id).await.unwrap();
        assert!(service.list().await.is_empty());
    }
}
