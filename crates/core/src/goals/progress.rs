//! Goal progress calculation over a period window of the ledger.

use std::collections::BTreeSet;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use tempo_domain::{ActivityEntry, Goal, GoalKind, Period, Result, TempoError};

/// First day of the period window containing `now`.
///
/// Boundaries sit at midnight: today, the most recent Monday, the first of
/// the month, or January 1st.
pub fn period_start(period: Period, now: NaiveDateTime) -> NaiveDate {
    let today = now.date();
    match period {
        Period::Daily => today,
        Period::Weekly => {
            today - Duration::days(i64::from(today.weekday().num_days_from_monday()))
        }
        Period::Monthly => today.with_day(1).unwrap_or(today),
        Period::Yearly => NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today),
    }
}

/// Compute a goal's raw progress value from the ledger at `now`.
///
/// Entries dated before the period boundary are ignored. A `category` goal
/// without a category is an error; the caller isolates it so the remaining
/// goals still update.
pub fn compute_progress(goal: &Goal, entries: &[ActivityEntry], now: NaiveDateTime) -> Result<f64> {
    let start = period_start(goal.period, now);
    let window = entries.iter().filter(|e| e.date >= start);

    let progress = match goal.kind {
        GoalKind::Category => {
            let category = goal.category.as_deref().filter(|c| !c.trim().is_empty()).ok_or_else(
                || TempoError::InvalidInput("A category goal needs a category".to_string()),
            )?;
            window
                .filter(|e| e.category == category)
                .map(|e| u64::from(e.minutes))
                .sum::<u64>() as f64
        }
        GoalKind::TotalMinutes => window.map(|e| u64::from(e.minutes)).sum::<u64>() as f64,
        GoalKind::Consistency => {
            let days: BTreeSet<NaiveDate> = window.map(|e| e.date).collect();
            days.len() as f64
        }
    };

    Ok(progress)
}

/// Percentage of target reached, clamped to `0..=100`.
pub fn progress_percentage(progress: f64, target: f64) -> f64 {
    if target > 0.0 {
        (progress / target * 100.0).min(100.0)
    } else {
        0.0
    }
}
