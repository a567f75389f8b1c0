//! Modeline - editor modeline detection and application
//!
//! Finds a `vim:`/`vi:`/`ex:`/`geany:` modeline near the top of a document
//! and applies its indentation, wrapping and encoding directives.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod lifecycle;
pub mod model;
pub mod modeline;
pub mod tracing;

// Re-export commonly used types
pub use config::ModelineConfig;
pub use lifecycle::{handle_event, on_document_open, on_document_save, DocumentEvent};
pub use model::{Document, FormattingState, LoadError};
pub use modeline::{
    Directive, DocumentTarget, IndentMode, LineSource, ModelineRegistry, ScanReport, Scanner,
    WrapMode,
};
