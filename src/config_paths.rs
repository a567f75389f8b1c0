//! Where the scanner keeps its config file and rolling logs
//!
//! Resolution honours `XDG_CONFIG_HOME`, falling back to `~/.config`; on
//! Windows the base is `%APPDATA%`. Everything lives in a `modeline`
//! subdirectory of that base.

use std::path::PathBuf;

const APP_DIR: &str = "modeline";
const CONFIG_FILE: &str = "config.yaml";
const LOGS_DIR: &str = "logs";

#[cfg(target_os = "windows")]
fn base_dir() -> Option<PathBuf> {
    std::env::var_os("APPDATA").map(PathBuf::from)
}

#[cfg(not(target_os = "windows"))]
fn base_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
}

/// The `modeline` directory under the platform config base
pub fn config_dir() -> Option<PathBuf> {
    base_dir().map(|base| base.join(APP_DIR))
}

/// YAML file read by [`crate::config::ModelineConfig::load`]
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Directory the daily log files rotate in
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(LOGS_DIR))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    std::fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create {}: {}", logs.display(), e))?;
    Ok(logs)
}
