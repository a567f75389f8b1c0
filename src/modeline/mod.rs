//! Modeline detection and interpretation
//!
//! A modeline is a comment near the top of a file declaring formatting
//! directives, e.g. `// vim: et ts=4 sw=4`. The pipeline is:
//!
//! 1. [`Scanner`] finds the first line in the scan window containing a marker
//! 2. [`tokenize`] splits it on `:`, space and `,`
//! 3. [`resolve`] matches each token against the [`ModelineRegistry`]
//! 4. [`Directive::apply`] mutates the document through [`DocumentTarget`]

pub mod directive;
pub mod interpreter;
pub mod registry;
pub mod scanner;
pub mod tokenizer;

pub use directive::{Directive, DocumentTarget, EncodingError, IndentMode, LineSource, WrapMode};
pub use interpreter::{interpret, parse_leading_uint, resolve, SkipReason};
pub use registry::{ArgShape, ModelineRegistry, OptionSpec, OptionValue, Setter, DEFAULT_OPTIONS};
pub use scanner::{scan_document, ScanReport, Scanner, SkippedToken};
pub use tokenizer::{tokenize, DELIMITERS};
