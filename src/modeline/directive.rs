//! Resolved directives and the document interface they are applied to
//!
//! The scanner never touches a document directly. It reads lines through
//! [`LineSource`] and produces [`Directive`] values; only
//! [`Directive::apply`] mutates, and only through [`DocumentTarget`].

use serde::{Deserialize, Serialize};

/// Whether indentation uses tab characters or spaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentMode {
    #[default]
    Spaces,
    Tabs,
}

/// Physical word-wrap render mode of the view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WrapMode {
    #[default]
    None,
    Word,
}

/// Error returned when a document cannot be reloaded under an encoding
#[derive(Debug, Clone)]
pub enum EncodingError {
    /// The name is not a known encoding label
    UnknownLabel(String),
    /// Re-reading the backing file failed
    IoError(String),
}

impl std::fmt::Display for EncodingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownLabel(label) => write!(f, "unknown encoding: {}", label),
            Self::IoError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for EncodingError {}

/// Read-only view of a document's lines
pub trait LineSource {
    /// Whether the document is in a scannable state
    fn is_valid(&self) -> bool;

    /// Number of lines in the document (0 for an empty buffer)
    fn line_count(&self) -> usize;

    /// Raw text of a 0-based line, or `None` if the index is out of range
    fn line(&self, index: usize) -> Option<String>;
}

/// The settings-mutation interface directives are applied through
pub trait DocumentTarget: LineSource {
    fn indent_mode(&self) -> IndentMode;

    fn set_indent_mode(&mut self, mode: IndentMode);

    /// Set the indent/tab width
    fn set_indent_width(&mut self, width: u32);

    /// Set the logical wrapping flag and the render wrap mode together
    fn set_line_wrapping(&mut self, enabled: bool);

    fn encoding(&self) -> String;

    fn set_encoding(&mut self, name: &str);

    /// Re-read the document's content, decoding it as `name`
    fn reload_with_encoding(&mut self, name: &str) -> Result<(), EncodingError>;
}

/// A single formatting change resolved from a modeline token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Directive {
    IndentMode(IndentMode),
    IndentWidth(u32),
    LineWrapping(bool),
    Encoding(String),
}

impl Directive {
    /// Apply this directive to a document
    pub fn apply<T: DocumentTarget + ?Sized>(&self, target: &mut T) {
        match self {
            Directive::IndentMode(mode) => target.set_indent_mode(*mode),
            Directive::IndentWidth(width) => {
                // Width changes must not drop the mode the document already has
                let mode = target.indent_mode();
                target.set_indent_width(*width);
                target.set_indent_mode(mode);
            }
            Directive::LineWrapping(enabled) => target.set_line_wrapping(*enabled),
            Directive::Encoding(name) => target.set_encoding(name),
        }
    }
}

impl std::fmt::Display for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Directive::IndentMode(IndentMode::Spaces) => write!(f, "indent mode = spaces"),
            Directive::IndentMode(IndentMode::Tabs) => write!(f, "indent mode = tabs"),
            Directive::IndentWidth(width) => write!(f, "indent width = {}", width),
            Directive::LineWrapping(enabled) => write!(f, "line wrapping = {}", enabled),
            Directive::Encoding(name) => write!(f, "encoding = {}", name),
        }
    }
}
