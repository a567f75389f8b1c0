//! Document model

pub mod document;

pub use document::{Document, FormattingState, LoadError, DEFAULT_INDENT_WIDTH, MAX_FILE_SIZE};
