//! Desktop notification delivery via a platform command.

use std::io::ErrorKind;
use std::time::Duration;

use async_trait::async_trait;
use tempo_core::NotificationSink;
use tempo_domain::{NotifyConfig, Result, TempoError};
use tracing::{info, warn};

/// Notification sink that shells out to a platform command such as
/// `notify-send`, passing the title and message as arguments.
///
/// An absent command is a soft failure: the message is echoed to the log as
/// a console fallback and the caller gets an error it can report. Every
/// invocation is bounded by the configured timeout.
pub struct CommandNotifier {
    command: String,
    timeout: Duration,
}

impl CommandNotifier {
    /// Create a notifier from the notification settings.
    pub fn new(config: &NotifyConfig) -> Self {
        Self {
            command: config.command.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }
}

#[async_trait]
impl NotificationSink for CommandNotifier {
    async fn deliver(&self, title: &str, message: &str) -> Result<()> {
        let mut command = tokio::process::Command::new(&self.command);
        command.arg(title).arg(message);

        let output = match tokio::time::timeout(self.timeout, command.output()).await {
            Err(_) => {
                return Err(TempoError::Notification(format!(
                    "{} timed out after {}s",
                    self.command,
                    self.timeout.as_secs()
                )));
            }
            Ok(Err(err)) if err.kind() == ErrorKind::NotFound => {
                // Console fallback so the message is not lost entirely.
                info!(title, message, "notification (no delivery command available)");
                return Err(TempoError::Notification(format!(
                    "notification command not available: {}",
                    self.command
                )));
            }
            Ok(Err(err)) => {
                return Err(TempoError::Notification(format!(
                    "failed to run {}: {err}",
                    self.command
                )));
            }
            Ok(Ok(output)) => output,
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(command = %self.command, %stderr, "notification command failed");
            return Err(TempoError::Notification(format!(
                "{} exited with {}",
                self.command, output.status
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notifier(command: &str) -> CommandNotifier {
        CommandNotifier::new(&NotifyConfig {
            command: command.to_string(),
            timeout_seconds: 5,
        })
    }

    #[tokio::test]
    async fn missing_command_is_a_soft_failure() {
        let sink = notifier("tempo-test-no-such-command");
        let err = sink.deliver("Title", "Body").await.unwrap_err();
        assert!(matches!(err, TempoError::Notification(_)), "got: {err}");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn successful_command_delivers() {
        // `true` ignores its arguments and exits zero.
        let sink = notifier("true");
        assert!(sink.deliver("Title", "Body").await.is_ok());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn nonzero_exit_is_an_error() {
        let sink = notifier("false");
        assert!(sink.deliver("Title", "Body").await.is_err());
    }
}
