//! Command-line argument parsing
//!
//! Supports:
//! - Scanning one or more files as if they were opened or saved
//! - Overriding the scan window
//! - YAML or JSON output
//! - Listing the supported directives

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::ModelineConfig;
use crate::lifecycle::DocumentEvent;

/// Apply editor modelines to files and show the resulting formatting
#[derive(Parser, Debug)]
#[command(name = "modeline", version, about = "Detect and apply editor modelines")]
pub struct CliArgs {
    /// Files to scan
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// Lifecycle event to simulate for each file
    #[arg(short, long, value_enum, default_value_t = EventArg::Open)]
    pub event: EventArg,

    /// Print results as JSON instead of YAML
    #[arg(long)]
    pub json: bool,

    /// Number of leading lines to inspect (overrides config)
    #[arg(long, value_name = "N")]
    pub scan_lines: Option<usize>,

    /// List the supported directives and exit
    #[arg(long)]
    pub list_options: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EventArg {
    Open,
    Save,
}

impl From<EventArg> for DocumentEvent {
    fn from(arg: EventArg) -> Self {
        match arg {
            EventArg::Open => DocumentEvent::Opened,
            EventArg::Save => DocumentEvent::Saved,
        }
    }
}

/// Output format for scan results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Yaml,
    Json,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub paths: Vec<PathBuf>,
    pub event: DocumentEvent,
    pub format: OutputFormat,
    pub list_options: bool,
    pub modeline: ModelineConfig,
}

impl CliArgs {
    /// Merge parsed CLI args over the loaded config
    pub fn into_config(self, base: ModelineConfig) -> Result<RunConfig, String> {
        if self.paths.is_empty() && !self.list_options {
            return Err("No files given".to_string());
        }

        let modeline = match self.scan_lines {
            Some(n) => base.with_scan_lines(n),
            None => base,
        };

        Ok(RunConfig {
            paths: self.paths,
            event: self.event.into(),
            format: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Yaml
            },
            list_options: self.list_options,
            modeline,
        })
    }
}
