//! Modeline scanner
//!
//! Looks at the first `scan_lines` lines of a document for a line containing
//! any prefix marker. The first such line is tokenized and interpreted, and
//! the scan stops there; later modelines are never merged in.

use serde::Serialize;

use super::directive::{Directive, DocumentTarget, LineSource};
use super::interpreter::{resolve, SkipReason};
use super::registry::ModelineRegistry;
use super::tokenizer::tokenize;
use crate::config::ModelineConfig;

/// A token that produced no directive
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedToken {
    pub token: String,
    #[serde(serialize_with = "serialize_reason")]
    pub reason: SkipReason,
}

fn serialize_reason<S: serde::Serializer>(reason: &SkipReason, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(reason)
}

/// Outcome of scanning one document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// 0-based index of the modeline, if one was found
    pub line: Option<usize>,
    /// The trimmed modeline text
    pub modeline: Option<String>,
    /// Resolved directives in token order
    pub directives: Vec<Directive>,
    /// Tokens that were ignored (empty fields are not listed)
    pub skipped: Vec<SkippedToken>,
}

impl ScanReport {
    pub fn found(&self) -> bool {
        self.line.is_some()
    }

    /// Apply every directive in order; later directives win
    pub fn apply<T: DocumentTarget + ?Sized>(&self, target: &mut T) {
        for directive in &self.directives {
            tracing::debug!(%directive, "Applying modeline directive");
            directive.apply(target);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Scanning { next_line: usize },
    Done,
}

/// Single-use scanner over one document
#[derive(Debug)]
pub struct Scanner<'a> {
    registry: &'a ModelineRegistry,
    config: &'a ModelineConfig,
    state: ScanState,
}

impl<'a> Scanner<'a> {
    pub fn new(registry: &'a ModelineRegistry, config: &'a ModelineConfig) -> Self {
        Self {
            registry,
            config,
            state: ScanState::Scanning { next_line: 0 },
        }
    }

    /// Scan `document` without mutating it
    pub fn scan<D: LineSource + ?Sized>(mut self, document: &D) -> ScanReport {
        let mut report = ScanReport::default();

        if !document.is_valid() {
            tracing::debug!("Document not ready, skipping modeline scan");
            return report;
        }

        let window = document.line_count().min(self.config.scan_lines);

        while let ScanState::Scanning { next_line } = self.state {
            if next_line >= window {
                self.state = ScanState::Done;
                break;
            }

            // The buffer may have shrunk under us; treat that as end of scan
            let Some(raw) = document.line(next_line) else {
                tracing::debug!(line = next_line, "Line vanished during modeline scan");
                self.state = ScanState::Done;
                break;
            };

            let text = raw.trim();
            if self.has_marker(text) {
                tracing::debug!(line = next_line, modeline = text, "Found modeline");
                self.interpret_line(text, &mut report);
                report.line = Some(next_line);
                report.modeline = Some(text.to_string());
                self.state = ScanState::Done;
            } else {
                self.state = ScanState::Scanning {
                    next_line: next_line + 1,
                };
            }
        }

        report
    }

    fn has_marker(&self, text: &str) -> bool {
        self.config
            .markers
            .iter()
            .any(|marker| text.contains(marker.as_str()))
    }

    fn interpret_line(&self, text: &str, report: &mut ScanReport) {
        // Field 0 is the comment sign
        for token in tokenize(text).into_iter().skip(1) {
            match resolve(self.registry, token) {
                Ok(directive) => report.directives.push(directive),
                Err(SkipReason::Empty) => {}
                Err(reason) => {
                    tracing::debug!(token, %reason, "Skipping modeline token");
                    report.skipped.push(SkippedToken {
                        token: token.to_string(),
                        reason,
                    });
                }
            }
        }
    }
}

/// Scan `target` and apply whatever the modeline declares
pub fn scan_document<T: DocumentTarget + ?Sized>(
    target: &mut T,
    registry: &ModelineRegistry,
    config: &ModelineConfig,
) -> ScanReport {
    let report = Scanner::new(registry, config).scan(&*target);
    report.apply(target);
    report
}
