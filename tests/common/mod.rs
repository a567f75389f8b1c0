//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::Cell;

use modeline::modeline::EncodingError;
use modeline::{DocumentTarget, IndentMode, LineSource, ModelineConfig, ModelineRegistry};

/// A setter invocation observed on [`RecordingDocument`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    IndentMode(IndentMode),
    IndentWidth(u32),
    LineWrapping(bool),
    Encoding(String),
    Reload(String),
}

/// Document target that records every mutation and counts line reads
#[derive(Debug)]
pub struct RecordingDocument {
    pub lines: Vec<String>,
    pub valid: bool,
    pub mode: IndentMode,
    pub width: u32,
    pub wrapping: bool,
    pub encoding: String,
    pub calls: Vec<Call>,
    pub line_reads: Cell<usize>,
    pub fail_reload: bool,
}

impl RecordingDocument {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            valid: true,
            mode: IndentMode::Spaces,
            width: 8,
            wrapping: false,
            encoding: "UTF-8".to_string(),
            calls: Vec::new(),
            line_reads: Cell::new(0),
            fail_reload: false,
        }
    }

    /// Setter calls excluding the indent-mode re-assertion done by width changes
    pub fn setter_calls(&self) -> Vec<Call> {
        let mut out = Vec::new();
        let mut iter = self.calls.iter().peekable();
        while let Some(call) = iter.next() {
            out.push(call.clone());
            if matches!(call, Call::IndentWidth(_)) {
                iter.next_if(|next| matches!(next, Call::IndentMode(_)));
            }
        }
        out
    }
}

impl LineSource for RecordingDocument {
    fn is_valid(&self) -> bool {
        self.valid
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> Option<String> {
        self.line_reads.set(self.line_reads.get() + 1);
        self.lines.get(index).cloned()
    }
}

impl DocumentTarget for RecordingDocument {
    fn indent_mode(&self) -> IndentMode {
        self.mode
    }

    fn set_indent_mode(&mut self, mode: IndentMode) {
        self.mode = mode;
        self.calls.push(Call::IndentMode(mode));
    }

    fn set_indent_width(&mut self, width: u32) {
        self.width = width;
        // Mimic a host that resets the mode when the width changes
        self.mode = IndentMode::Spaces;
        self.calls.push(Call::IndentWidth(width));
    }

    fn set_line_wrapping(&mut self, enabled: bool) {
        self.wrapping = enabled;
        self.calls.push(Call::LineWrapping(enabled));
    }

    fn encoding(&self) -> String {
        self.encoding.clone()
    }

    fn set_encoding(&mut self, name: &str) {
        self.encoding = name.to_string();
        self.calls.push(Call::Encoding(name.to_string()));
    }

    fn reload_with_encoding(&mut self, name: &str) -> Result<(), EncodingError> {
        self.calls.push(Call::Reload(name.to_string()));
        if self.fail_reload {
            return Err(EncodingError::UnknownLabel(name.to_string()));
        }
        Ok(())
    }
}

/// Scan a recording document with the default registry and config
pub fn scan(doc: &mut RecordingDocument) -> modeline::ScanReport {
    modeline::modeline::scan_document(
        doc,
        &ModelineRegistry::default(),
        &ModelineConfig::default(),
    )
}

/// `count` plain lines with `modeline` substituted at each index in `at`
pub fn lines_with_modeline(count: usize, at: &[(usize, &str)]) -> Vec<String> {
    (0..count)
        .map(|i| {
            at.iter()
                .find(|(idx, _)| *idx == i)
                .map(|(_, text)| text.to_string())
                .unwrap_or_else(|| format!("line {}", i))
        })
        .collect()
}
