//! Configuration loader
//!
//! Loads application configuration from a config file, then applies
//! environment variable overrides on top. Every setting has a default, so
//! running with no config at all is fine.
//!
//! ## Environment Variables
//! - `TEMPO_HOST`: HTTP listener host
//! - `TEMPO_PORT`: HTTP listener port
//! - `TEMPO_DATA_DIR`: directory holding the flat-file state
//! - `TEMPO_TICK_SECONDS`: reminder scheduler polling interval
//! - `TEMPO_SCHEDULER_ENABLED`: whether the background scheduler runs
//! - `TEMPO_NOTIFY_COMMAND`: platform notification command
//! - `TEMPO_REPORT_DIR`: directory holding report scripts
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.toml` or `./config.json`
//! 2. `./tempo.toml` or `./tempo.json`

use std::path::{Path, PathBuf};

use tempo_domain::{Config, Result, TempoError};
use tracing::{debug, info};

/// Load configuration: defaults, then file (if any), then env overrides.
///
/// # Errors
/// Returns `TempoError::Config` when a config file exists but cannot be
/// parsed, or an override has an invalid value. A missing file is not an
/// error.
pub fn load() -> Result<Config> {
    let mut config = match probe_config_paths() {
        Some(path) => load_from_file(&path)?,
        None => {
            debug!("no config file found; using defaults");
            Config::default()
        }
    };
    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Load configuration from a specific file.
///
/// Format is detected by file extension (`.toml` or `.json`).
///
/// # Errors
/// Returns `TempoError::Config` if the file cannot be read or parsed.
pub fn load_from_file(path: &Path) -> Result<Config> {
    info!(path = %path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(path)
        .map_err(|e| TempoError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, path)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| TempoError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| TempoError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(TempoError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the working directory for a configuration file.
pub fn probe_config_paths() -> Option<PathBuf> {
    let names = ["config.toml", "config.json", "tempo.toml", "tempo.json"];
    let cwd = std::env::current_dir().ok()?;
    names.iter().map(|name| cwd.join(name)).find(|path| path.exists())
}

fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Ok(host) = std::env::var("TEMPO_HOST") {
        config.server.host = host;
    }
    if let Some(port) = env_parse::<u16>("TEMPO_PORT")? {
        config.server.port = port;
    }
    if let Ok(data_dir) = std::env::var("TEMPO_DATA_DIR") {
        config.storage.data_dir = data_dir;
    }
    if let Some(tick) = env_parse::<u64>("TEMPO_TICK_SECONDS")? {
        config.scheduler.tick_seconds = tick;
    }
    if let Some(enabled) = env_bool("TEMPO_SCHEDULER_ENABLED") {
        config.scheduler.enabled = enabled;
    }
    if let Ok(command) = std::env::var("TEMPO_NOTIFY_COMMAND") {
        config.notifications.command = command;
    }
    if let Ok(dir) = std::env::var("TEMPO_REPORT_DIR") {
        config.reports.script_dir = dir;
    }
    Ok(())
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Result<Option<T>> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| TempoError::Config(format!("Invalid value for {key}: {raw}"))),
        Err(_) => Ok(None),
    }
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const OVERRIDE_KEYS: &[&str] = &[
        "TEMPO_HOST",
        "TEMPO_PORT",
        "TEMPO_DATA_DIR",
        "TEMPO_TICK_SECONDS",
        "TEMPO_SCHEDULER_ENABLED",
        "TEMPO_NOTIFY_COMMAND",
        "TEMPO_REPORT_DIR",
    ];

    fn clear_env() {
        for key in OVERRIDE_KEYS {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn defaults_apply_without_any_sources() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let mut config = Config::default();
        apply_env_overrides(&mut config).unwrap();
        assert_eq!(config.server.port, 8321);
        assert_eq!(config.storage.data_dir, "data");
        assert_eq!(config.scheduler.tick_seconds, 30);
        assert!(config.scheduler.enabled);
    }

    #[test]
    fn env_overrides_win() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("TEMPO_PORT", "9999");
        std::env::set_var("TEMPO_DATA_DIR", "/tmp/tempo-data");
        std::env::set_var("TEMPO_SCHEDULER_ENABLED", "off");

        let mut config = Config::default();
        apply_env_overrides(&mut config).unwrap();
        assert_eq!(config.server.port, 9999);
        assert_eq!(config.storage.data_dir, "/tmp/tempo-data");
        assert!(!config.scheduler.enabled);

        clear_env();
    }

    #[test]
    fn invalid_numeric_override_is_a_config_error() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("TEMPO_PORT", "not-a-port");
        let mut config = Config::default();
        let result = apply_env_overrides(&mut config);
        assert!(matches!(result, Err(TempoError::Config(_))));

        clear_env();
    }

    #[test]
    fn loads_partial_toml_files() {
        let toml_content = r#"
[server]
host = "0.0.0.0"
port = 9000
"#;
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("toml");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let config = load_from_file(&path).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        // Untouched sections keep their defaults.
        assert_eq!(config.storage.data_dir, "data");

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn loads_json_files() {
        let json_content = r#"{ "scheduler": { "tick_seconds": 10, "enabled": false } }"#;
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(json_content.as_bytes()).unwrap();
        let path = temp_file.path().with_extension("json");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let config = load_from_file(&path).unwrap();
        assert_eq!(config.scheduler.tick_seconds, 10);
        assert!(!config.scheduler.enabled);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[server\nhost=").unwrap();
        let path = temp_file.path().with_extension("toml");
        std::fs::copy(temp_file.path(), &path).unwrap();

        let result = load_from_file(&path);
        assert!(matches!(result, Err(TempoError::Config(_))));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn unsupported_extension_is_a_config_error() {
        let result = parse_config("anything", Path::new("config.yaml"));
        assert!(matches!(result, Err(TempoError::Config(_))));
    }
}
