//! Modeline scanner configuration persistence
//!
//! Stores preferences in `~/.config/modeline/config.yaml`

use serde::{Deserialize, Serialize};

/// Number of leading lines inspected for a modeline
pub const DEFAULT_SCAN_LINES: usize = 50;

/// Substrings that mark a line as a modeline
pub const DEFAULT_MARKERS: &[&str] = &[" geany:", " vi:", " vim:", " ex:"];

/// Scanner configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelineConfig {
    /// How many leading lines to inspect
    #[serde(default = "default_scan_lines")]
    pub scan_lines: usize,
    /// Marker substrings, matched anywhere in the trimmed line
    #[serde(default = "default_markers")]
    pub markers: Vec<String>,
}

fn default_scan_lines() -> usize {
    DEFAULT_SCAN_LINES
}

fn default_markers() -> Vec<String> {
    DEFAULT_MARKERS.iter().map(|m| m.to_string()).collect()
}

impl Default for ModelineConfig {
    fn default() -> Self {
        Self {
            scan_lines: default_scan_lines(),
            markers: default_markers(),
        }
    }
}

impl ModelineConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse config from a YAML string; missing fields take their defaults
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Override the scan window
    pub fn with_scan_lines(mut self, scan_lines: usize) -> Self {
        self.scan_lines = scan_lines;
        self
    }
}
