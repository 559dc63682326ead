//! Generic JSON document storage.

use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tempo_domain::{Result, TempoError};
use tokio::fs;

use super::{atomic_write, storage_error};

/// One JSON document on disk holding a single value.
///
/// Missing file and unparsable file are distinct outcomes: the former
/// yields the caller-provided default, the latter `TempoError::Corrupt`.
pub struct JsonDocument<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonDocument<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Create a handle for the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), _marker: PhantomData }
    }

    /// Load the document, producing `default()` when the file is absent.
    pub async fn load_or<F>(&self, default: F) -> Result<T>
    where
        F: FnOnce() -> T,
    {
        match fs::read_to_string(&self.path).await {
            Ok(raw) => serde_json::from_str(&raw).map_err(|err| {
                TempoError::Corrupt(format!("{}: {err}", self.path.display()))
            }),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(default()),
            Err(err) => Err(storage_error(&self.path, "read", &err)),
        }
    }

    /// Replace the document atomically.
    pub async fn store(&self, value: &T) -> Result<()> {
        let raw = serde_json::to_string_pretty(value)
            .map_err(|err| TempoError::Internal(format!("failed to encode document: {err}")))?;
        atomic_write(&self.path, &raw).await
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use tempfile::tempdir;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[tokio::test]
    async fn missing_file_yields_the_default() {
        let dir = tempdir().unwrap();
        let doc: JsonDocument<Vec<Sample>> = JsonDocument::new(dir.path().join("absent.json"));
        let loaded = doc.load_or(Vec::new).await.unwrap();
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn round_trip_preserves_the_value() {
        let dir = tempdir().unwrap();
        let doc: JsonDocument<Sample> = JsonDocument::new(dir.path().join("sample.json"));

        let value = Sample { name: "tempo".into(), count: 3 };
        doc.store(&value).await.unwrap();

        let loaded = doc.load_or(|| Sample { name: String::new(), count: 0 }).await.unwrap();
        assert_eq!(loaded, value);
    }

    #[tokio::test]
    async fn garbage_reads_as_corrupt_not_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let doc: JsonDocument<Sample> = JsonDocument::new(&path);
        let err = doc
            .load_or(|| Sample { name: String::new(), count: 0 })
            .await
            .unwrap_err();
        assert!(matches!(err, TempoError::Corrupt(_)), "got: {err}");
    }

    #[tokio::test]
    async fn store_creates_missing_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/deeper/sample.json");
        let doc: JsonDocument<Sample> = JsonDocument::new(&path);

        doc.store(&Sample { name: "x".into(), count: 1 }).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn store_replaces_rather_than_appends() {
        let dir = tempdir().unwrap();
        let doc: JsonDocument<Sample> = JsonDocument::new(dir.path().join("sample.json"));

        doc.store(&Sample { name: "first".into(), count: 1 }).await.unwrap();
        doc.store(&Sample { name: "second".into(), count: 2 }).await.unwrap();

        let loaded = doc.load_or(|| Sample { name: String::new(), count: 0 }).await.unwrap();
        assert_eq!(loaded.name, "second");
    }
}
