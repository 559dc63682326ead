//! External report script execution.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use tempo_core::ReportRunner;
use tempo_domain::{ReportConfig, Result, TempoError};
use tokio::fs;
use tracing::{info, warn};

/// Report runner that executes scripts out of a configured directory.
///
/// The requested name is resolved inside the script directory (the service
/// has already rejected anything that is not a single path segment); the
/// run is bounded by the configured timeout, after which it is treated as
/// failed, not retried.
pub struct ScriptReportRunner {
    script_dir: PathBuf,
    timeout: Duration,
}

impl ScriptReportRunner {
    /// Create a runner from the report settings.
    pub fn new(config: &ReportConfig) -> Self {
        Self {
            script_dir: PathBuf::from(&config.script_dir),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }
}

#[async_trait]
impl ReportRunner for ScriptReportRunner {
    async fn run(&self, name: &str) -> Result<String> {
        let script = self.script_dir.join(name);
        if fs::metadata(&script).await.is_err() {
            return Err(TempoError::NotFound(format!("No such report: {name}")));
        }

        let mut command = tokio::process::Command::new(&script);
        command.current_dir(&self.script_dir);

        let output = match tokio::time::timeout(self.timeout, command.output()).await {
            Err(_) => {
                warn!(report = name, timeout_secs = self.timeout.as_secs(), "report timed out");
                return Err(TempoError::Report(format!(
                    "report {name} timed out after {}s",
                    self.timeout.as_secs()
                )));
            }
            Ok(Err(err)) => {
                return Err(TempoError::Report(format!("failed to run report {name}: {err}")));
            }
            Ok(Ok(output)) => output,
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(report = name, %stderr, "report script failed");
            return Err(TempoError::Report(format!(
                "report {name} exited with {}",
                output.status
            )));
        }

        info!(report = name, "report generated");
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    fn runner(dir: &std::path::Path, timeout_seconds: u64) -> ScriptReportRunner {
        ScriptReportRunner::new(&ReportConfig {
            script_dir: dir.display().to_string(),
            timeout_seconds,
        })
    }

    #[tokio::test]
    async fn missing_script_is_not_found() {
        let dir = tempdir().unwrap();
        let err = runner(dir.path(), 5).run("daily").await.unwrap_err();
        assert!(matches!(err, TempoError::NotFound(_)), "got: {err}");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn captures_script_output() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let script = dir.path().join("daily");
        std::fs::write(&script, "#!/bin/sh\necho total 135 minutes\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let output = runner(dir.path(), 5).run("daily").await.unwrap();
        assert_eq!(output.trim(), "total 135 minutes");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failing_script_is_an_error() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let script = dir.path().join("broken");
        std::fs::write(&script, "#!/bin/sh\necho oops >&2\nexit 3\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let err = runner(dir.path(), 5).run("broken").await.unwrap_err();
        assert!(matches!(err, TempoError::Report(_)), "got: {err}");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn slow_script_hits_the_ceiling() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let script = dir.path().join("slow");
        std::fs::write(&script, "#!/bin/sh\nsleep 5\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let err = runner(dir.path(), 1).run("slow").await.unwrap_err();
        assert!(matches!(err, TempoError::Report(_)), "got: {err}");
    }
}
