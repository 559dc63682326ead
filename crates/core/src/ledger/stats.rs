//! Summary statistics recomputed from the ledger on every request.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use tempo_domain::types::ledger_date;
use tempo_domain::ActivityEntry;

/// Minutes accumulated in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub minutes: u64,
}

/// Minutes accumulated on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyTotal {
    #[serde(with = "ledger_date")]
    pub date: NaiveDate,
    pub minutes: u64,
}

/// Ledger-wide totals, category breakdown, and day-by-day trend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerSummary {
    pub entry_count: usize,
    pub total_minutes: u64,
    pub categories: Vec<CategoryTotal>,
    pub daily: Vec<DailyTotal>,
}

/// Recompute the full summary from the given entries.
///
/// Categories come back largest first (name as tie-break); the daily trend
/// is in calendar order.
pub fn summarize(entries: &[ActivityEntry]) -> LedgerSummary {
    let mut total_minutes = 0u64;
    let mut by_category: BTreeMap<&str, u64> = BTreeMap::new();
    let mut by_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();

    for entry in entries {
        let minutes = u64::from(entry.minutes);
        total_minutes += minutes;
        *by_category.entry(entry.category.as_str()).or_default() += minutes;
        *by_day.entry(entry.date).or_default() += minutes;
    }

    let mut categories: Vec<CategoryTotal> = by_category
        .into_iter()
        .map(|(category, minutes)| CategoryTotal { category: category.to_string(), minutes })
        .collect();
    categories.sort_by(|a, b| b.minutes.cmp(&a.minutes).then_with(|| a.category.cmp(&b.category)));

    let daily = by_day
        .into_iter()
        .map(|(date, minutes)| DailyTotal { date, minutes })
        .collect();

    LedgerSummary { entry_count: entries.len(), total_minutes, categories, daily }
}
