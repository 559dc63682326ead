//! Application configuration structures
//!
//! Loading lives in `tempo-infra`; these are the plain data shapes. Every
//! section has a default so a partial config file is enough.

use serde::{Deserialize, Serialize};

use crate::constants::{NOTIFY_TIMEOUT_SECS, REPORT_TIMEOUT_SECS, SCHEDULER_TICK_SECS};

/// Top-level configuration for the application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub scheduler: SchedulerConfig,
    #[serde(default)]
    pub notifications: NotifyConfig,
    #[serde(default)]
    pub reports: ReportConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: 8321 }
    }
}

/// Where the flat-file state lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: "data".to_string() }
    }
}

/// Background reminder scheduler settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    pub tick_seconds: u64,
    pub enabled: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self { tick_seconds: SCHEDULER_TICK_SECS, enabled: true }
    }
}

/// Desktop notification delivery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// Platform notification command, e.g. `notify-send`.
    pub command: String,
    pub timeout_seconds: u64,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self { command: "notify-send".to_string(), timeout_seconds: NOTIFY_TIMEOUT_SECS }
    }
}

/// External report script settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Directory holding the report scripts.
    pub script_dir: String,
    pub timeout_seconds: u64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { script_dir: "reports".to_string(), timeout_seconds: REPORT_TIMEOUT_SECS }
    }
}
