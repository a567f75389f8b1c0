//! Command-line host for the modeline interpreter
//!
//! Each path is loaded into a [`Document`], the selected lifecycle event is
//! fired against it, and the resulting formatting state is printed.

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::Path;

use modeline::cli::{CliArgs, OutputFormat, RunConfig};
use modeline::modeline::ArgShape;
use modeline::{
    handle_event, Document, FormattingState, ModelineConfig, ModelineRegistry, ScanReport,
};

/// Per-file output record
#[derive(Debug, Serialize)]
struct FileResult<'a> {
    file: String,
    #[serde(flatten)]
    report: &'a ScanReport,
    formatting: &'a FormattingState,
}

fn main() {
    modeline::tracing::init();

    let args = CliArgs::parse();
    let config = match args.into_config(ModelineConfig::load()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&config) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(config: &RunConfig) -> Result<()> {
    let registry = ModelineRegistry::default();

    if config.list_options {
        print_options(&registry);
        if config.paths.is_empty() {
            return Ok(());
        }
    }

    let mut failures = 0usize;
    for path in &config.paths {
        if let Err(e) = process_file(path, config, &registry) {
            tracing::warn!("{}: {:#}", path.display(), e);
            eprintln!("{}: {:#}", path.display(), e);
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{} of {} files failed", failures, config.paths.len());
    }
    Ok(())
}

fn process_file(path: &Path, config: &RunConfig, registry: &ModelineRegistry) -> Result<()> {
    let mut doc = Document::from_file(path.to_path_buf())
        .with_context(|| format!("Cannot scan {}", path.display()))?;

    let report = handle_event(config.event, &mut doc, registry, &config.modeline)?;
    tracing::info!(
        file = %path.display(),
        directives = report.directives.len(),
        "Scanned document"
    );

    let result = FileResult {
        file: path.display().to_string(),
        report: &report,
        formatting: doc.formatting(),
    };

    match config.format {
        OutputFormat::Yaml => {
            print!("---\n{}", serde_yaml::to_string(&result)?);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }
    Ok(())
}

fn print_options(registry: &ModelineRegistry) {
    for spec in registry.entries() {
        let shape = match spec.shape {
            ArgShape::FlagTrue | ArgShape::FlagFalse => "flag",
            ArgShape::Integer => "integer",
            ArgShape::String => "string",
        };
        println!(
            "{:<14} {:<10} {}",
            spec.name,
            spec.alias.unwrap_or("-"),
            shape
        );
    }
}
