//! Report generation via an injected external-script capability.

use std::sync::Arc;

use async_trait::async_trait;
use tempo_domain::{Result, TempoError};

/// Trait for running an external report script.
///
/// Implementations resolve `name` to a script on disk and bound the run
/// with a timeout; the engine only sees the captured output or an error.
#[async_trait]
pub trait ReportRunner: Send + Sync {
    /// Run the named report and return its captured output.
    async fn run(&self, name: &str) -> Result<String>;
}

/// Report service: validates the requested name before handing it to the
/// runner.
pub struct ReportService {
    runner: Arc<dyn ReportRunner>,
}

impl ReportService {
    /// Create a new report service.
    pub fn new(runner: Arc<dyn ReportRunner>) -> Self {
        Self { runner }
    }

    /// Generate the named report.
    ///
    /// Names are restricted to a single path segment of word characters,
    /// dots, and dashes; anything else never reaches the filesystem.
    pub async fn generate(&self, name: &str) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TempoError::InvalidInput("Report name cannot be empty".to_string()));
        }
        let well_formed = name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
            && !name.starts_with('.');
        if !well_formed {
            return Err(TempoError::InvalidInput(format!("Unknown report: {name}")));
        }
        self.runner.run(name).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex as StdMutex;

    use super::*;

    #[derive(Default)]
    struct RecordingRunner {
        runs: StdMutex<Vec<String>>,
    }

    #[async_trait]
    impl ReportRunner for RecordingRunner {
        async fn run(&self, name: &str) -> Result<String> {
            self.runs.lock().unwrap().push(name.to_string());
            Ok(format!("report {name}"))
        }
    }

    #[tokio::test]
    async fn well_formed_names_reach_the_runner() {
        let runner = Arc::new(RecordingRunner::default());
        let service = ReportService::new(runner.clone());

        let output = service.generate("daily").await.unwrap();
        assert_eq!(output, "report daily");
        assert_eq!(*runner.runs.lock().unwrap(), vec!["daily".to_string()]);
    }

    #[tokio::test]
    async fn path_escapes_are_rejected_before_the_runner() {
        let runner = Arc::new(RecordingRunner::default());
        let service = ReportService::new(runner.clone());

        assert!(service.generate("../etc/passwd").await.is_err());
        assert!(service.generate("a/b").await.is_err());
        assert!(service.generate(".hidden").await.is_err());
        assert!(service.generate("").await.is_err());
        assert!(runner.runs.lock().unwrap().is_empty());
    }
}
