//! CSV-backed activity ledger store.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::NaiveDate;
use tempo_core::LedgerStore;
use tempo_domain::constants::LEDGER_DATE_FORMAT;
use tempo_domain::{ActivityEntry, Result, TempoError};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use super::{atomic_write, storage_error};

/// Activity ledger persisted as one comma-separated row per entry:
/// `id,date,activity,minutes,category`.
///
/// Rows written before ids existed (`date,activity,minutes,category`) still
/// load; they receive a fresh id and are rewritten in the five-field form on
/// the next full save.
pub struct CsvLedgerStore {
    path: PathBuf,
}

impl CsvLedgerStore {
    /// Create a store for the ledger file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parse_line(&self, line_no: usize, line: &str) -> Result<ActivityEntry> {
        let corrupt = |detail: &str| {
            TempoError::Corrupt(format!(
                "{} line {line_no}: {detail}",
                self.path.display()
            ))
        };

        let fields: Vec<&str> = line.split(',').collect();
        let (id, date, activity, minutes, category) = match fields.as_slice() {
            [id, date, activity, minutes, category] => {
                ((*id).to_string(), *date, *activity, *minutes, *category)
            }
            [date, activity, minutes, category] => {
                (Uuid::new_v4().to_string(), *date, *activity, *minutes, *category)
            }
            _ => return Err(corrupt("expected 4 or 5 comma-separated fields")),
        };

        let date = NaiveDate::parse_from_str(date.trim(), LEDGER_DATE_FORMAT)
            .map_err(|_| corrupt("unparsable date"))?;
        let minutes: u32 =
            minutes.trim().parse().map_err(|_| corrupt("unparsable minutes"))?;

        Ok(ActivityEntry {
            id,
            date,
            activity: activity.trim().to_string(),
            minutes,
            category: category.trim().to_string(),
        })
    }
}

fn format_line(entry: &ActivityEntry) -> String {
    format!(
        "{},{},{},{},{}",
        entry.id,
        entry.date.format(LEDGER_DATE_FORMAT),
        entry.activity,
        entry.minutes,
        entry.category
    )
}

#[async_trait]
impl LedgerStore for CsvLedgerStore {
    async fn load(&self) -> Result<Vec<ActivityEntry>> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(storage_error(&self.path, "read", &err)),
        };

        raw.lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| self.parse_line(index + 1, line))
            .collect()
    }

    async fn append(&self, entry: &ActivityEntry) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|err| storage_error(&self.path, "create data directory", &err))?;
            }
        }

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|err| storage_error(&self.path, "open", &err))?;

        let line = format!("{}\n", format_line(entry));
        file.write_all(line.as_bytes())
            .await
            .map_err(|err| storage_error(&self.path, "append to", &err))?;
        file.flush()
            .await
            .map_err(|err| storage_error(&self.path, "flush", &err))
    }

    async fn save(&self, entries: &[ActivityEntry]) -> Result<()> {
        let mut contents = String::new();
        for entry in entries {
            contents.push_str(&format_line(entry));
            contents.push('\n');
        }
        atomic_write(&self.path, &contents).await
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    fn entry(id: &str, minutes: u32) -> ActivityEntry {
        ActivityEntry {
            id: id.into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            activity: "Reading".into(),
            minutes,
            category: "Learning".into(),
        }
    }

    #[tokio::test]
    async fn missing_file_loads_as_empty() {
        let dir = tempdir().unwrap();
        let store = CsvLedgerStore::new(dir.path().join("activities.csv"));
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn append_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = CsvLedgerStore::new(dir.path().join("activities.csv"));

        store.append(&entry("a1", 30)).await.unwrap();
        store.append(&entry("a2", 45)).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, vec![entry("a1", 30), entry("a2", 45)]);
    }

    #[tokio::test]
    async fn save_replaces_the_whole_file() {
        let dir = tempdir().unwrap();
        let store = CsvLedgerStore::new(dir.path().join("activities.csv"));

        store.append(&entry("a1", 30)).await.unwrap();
        store.save(&[entry("a2", 45)]).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, vec![entry("a2", 45)]);
    }

    #[tokio::test]
    async fn legacy_four_field_rows_get_fresh_ids() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("activities.csv");
        std::fs::write(&path, "02-01-2024,Reading,30,Learning\n").unwrap();

        let store = CsvLedgerStore::new(&path);
        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(!loaded[0].id.is_empty());
        assert_eq!(loaded[0].minutes, 30);
    }

    #[tokio::test]
    async fn malformed_rows_read_as_corrupt() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("activities.csv");
        std::fs::write(&path, "a1,02-01-2024,Reading,ten,Learning\n").unwrap();

        let store = CsvLedgerStore::new(&path);
        let err = store.load().await.unwrap_err();
        assert!(matches!(err, TempoError::Corrupt(_)), "got: {err}");

        std::fs::write(&path, "just,two\n").unwrap();
        assert!(store.load().await.is_err());
    }

    #[tokio::test]
    async fn blank_lines_are_ignored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("activities.csv");
        std::fs::write(&path, "\na1,02-01-2024,Reading,30,Learning\n\n").unwrap();

        let store = CsvLedgerStore::new(&path);
        assert_eq!(store.load().await.unwrap().len(), 1);
    }
}
