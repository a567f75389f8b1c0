//! Document model - the text buffer, its file state and formatting settings

use encoding_rs::Encoding;
use ropey::Rope;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::PathBuf;

use crate::modeline::{DocumentTarget, EncodingError, IndentMode, LineSource, WrapMode};

/// Default indent width for a fresh document
pub const DEFAULT_INDENT_WIDTH: u32 = 4;

/// Largest file [`Document::from_file`] will load (50 MB)
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// How many leading bytes are sniffed for NULs when loading a file
const BINARY_SNIFF_LEN: usize = 8192;

/// Why a file could not be loaded as a document
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    IsDirectory,
    TooLarge { bytes: u64 },
    /// NUL bytes without a UTF-16 byte order mark to explain them
    Binary,
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "{}", e),
            Self::IsDirectory => write!(f, "is a directory"),
            Self::TooLarge { bytes } => write!(
                f,
                "file too large ({:.1} MB, max {} MB)",
                *bytes as f64 / (1024.0 * 1024.0),
                MAX_FILE_SIZE / (1024 * 1024)
            ),
            Self::Binary => write!(f, "binary file"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// NULs in the head of a file mean binary unless a UTF-16 BOM is present
fn looks_binary(bytes: &[u8]) -> bool {
    if Encoding::for_bom(bytes).is_some() {
        return false;
    }
    bytes[..bytes.len().min(BINARY_SNIFF_LEN)].contains(&0)
}

/// Formatting settings a modeline can change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattingState {
    pub indent_mode: IndentMode,
    pub indent_width: u32,
    /// Logical wrapping flag
    pub line_wrapping: bool,
    /// Render wrap mode, kept in lockstep with `line_wrapping`
    pub wrap_mode: WrapMode,
    /// Name of the encoding the buffer was (or will be) decoded with
    pub encoding: String,
}

impl Default for FormattingState {
    fn default() -> Self {
        Self {
            indent_mode: IndentMode::Spaces,
            indent_width: DEFAULT_INDENT_WIDTH,
            line_wrapping: false,
            wrap_mode: WrapMode::None,
            encoding: encoding_rs::UTF_8.name().to_string(),
        }
    }
}

/// Document state - the text buffer and associated file metadata
#[derive(Debug, Clone)]
pub struct Document {
    /// The decoded text buffer
    pub buffer: Rope,
    /// Path to the file on disk (None for in-memory documents)
    pub file_path: Option<PathBuf>,
    /// Whether the document is ready to be scanned
    pub is_valid: bool,
    /// Current formatting settings
    pub settings: FormattingState,
    /// Undecoded content, used to reload in-memory documents
    raw: Vec<u8>,
    /// `buffer` as it was last decoded from `raw`; edits make them differ
    decoded: Rope,
    /// Encoding `raw` was last decoded with
    source_encoding: &'static Encoding,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::with_text("")
    }

    /// Create a document with initial text
    pub fn with_text(text: &str) -> Self {
        let buffer = Rope::from(text);
        Self {
            decoded: buffer.clone(),
            buffer,
            file_path: None,
            is_valid: true,
            settings: FormattingState::default(),
            raw: text.as_bytes().to_vec(),
            source_encoding: encoding_rs::UTF_8,
        }
    }

    /// Create a document from undecoded bytes
    ///
    /// Decodes as UTF-8 unless a byte order mark says otherwise.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let (buffer, encoding) = {
            let (text, encoding, had_errors) = encoding_rs::UTF_8.decode(&bytes);
            if had_errors {
                tracing::debug!("Replaced malformed {} sequences on load", encoding.name());
            }
            (Rope::from(text.as_ref()), encoding)
        };
        Self {
            decoded: buffer.clone(),
            buffer,
            file_path: None,
            is_valid: true,
            settings: FormattingState {
                encoding: encoding.name().to_string(),
                ..FormattingState::default()
            },
            raw: bytes,
            source_encoding: encoding,
        }
    }

    /// Load a document from a file path
    ///
    /// Refuses directories, files over [`MAX_FILE_SIZE`] and binary content.
    pub fn from_file(path: PathBuf) -> Result<Self, LoadError> {
        let metadata = std::fs::metadata(&path)?;
        if metadata.is_dir() {
            return Err(LoadError::IsDirectory);
        }
        if metadata.len() > MAX_FILE_SIZE {
            return Err(LoadError::TooLarge {
                bytes: metadata.len(),
            });
        }

        let bytes = std::fs::read(&path)?;
        if looks_binary(&bytes) {
            return Err(LoadError::Binary);
        }

        let mut doc = Self::from_bytes(bytes);
        doc.file_path = Some(path);
        Ok(doc)
    }

    /// Bytes to re-decode for a document with no backing file
    ///
    /// An edited buffer is re-encoded so the reload keeps the edits.
    fn take_in_memory_bytes(&mut self) -> Vec<u8> {
        if self.buffer == self.decoded {
            return std::mem::take(&mut self.raw);
        }
        let text = self.buffer.to_string();
        let (bytes, _, _) = self.source_encoding.encode(&text);
        bytes.into_owned()
    }

    /// Get the display name for this document
    pub fn display_name(&self) -> String {
        self.file_path
            .as_ref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    /// Get line content without its trailing newline
    ///
    /// Returns `Cow::Borrowed` when the line is stored contiguously in a
    /// single rope chunk.
    pub fn get_line_cow(&self, line_idx: usize) -> Option<Cow<'_, str>> {
        if line_idx >= self.buffer.len_lines() {
            return None;
        }

        let line = self.buffer.line(line_idx);
        let len = line.len_chars();

        let trim_len = if len > 0 && line.char(len - 1) == '\n' {
            if len > 1 && line.char(len - 2) == '\r' {
                2 // CRLF
            } else {
                1 // LF
            }
        } else {
            0
        };

        let trimmed = line.slice(..len - trim_len);
        match trimmed.as_str() {
            Some(s) => Some(Cow::Borrowed(s)),
            None => Some(Cow::Owned(trimmed.to_string())),
        }
    }

    /// Snapshot of the formatting settings
    pub fn formatting(&self) -> &FormattingState {
        &self.settings
    }
}

impl LineSource for Document {
    fn is_valid(&self) -> bool {
        self.is_valid
    }

    fn line_count(&self) -> usize {
        // Ropey reports one line for an empty buffer
        if self.buffer.len_chars() == 0 {
            0
        } else {
            self.buffer.len_lines()
        }
    }

    fn line(&self, index: usize) -> Option<String> {
        self.get_line_cow(index).map(Cow::into_owned)
    }
}

impl DocumentTarget for Document {
    fn indent_mode(&self) -> IndentMode {
        self.settings.indent_mode
    }

    fn set_indent_mode(&mut self, mode: IndentMode) {
        self.settings.indent_mode = mode;
    }

    fn set_indent_width(&mut self, width: u32) {
        self.settings.indent_width = width;
    }

    fn set_line_wrapping(&mut self, enabled: bool) {
        self.settings.line_wrapping = enabled;
        self.settings.wrap_mode = if enabled {
            WrapMode::Word
        } else {
            WrapMode::None
        };
    }

    fn encoding(&self) -> String {
        self.settings.encoding.clone()
    }

    fn set_encoding(&mut self, name: &str) {
        self.settings.encoding = name.to_string();
    }

    fn reload_with_encoding(&mut self, name: &str) -> Result<(), EncodingError> {
        let encoding = Encoding::for_label(name.trim().as_bytes())
            .ok_or_else(|| EncodingError::UnknownLabel(name.to_string()))?;

        let bytes = match &self.file_path {
            Some(path) => std::fs::read(path).map_err(|e| {
                EncodingError::IoError(format!("Failed to read {}: {}", path.display(), e))
            })?,
            None => self.take_in_memory_bytes(),
        };

        let actual = {
            let (text, actual, had_errors) = encoding.decode(&bytes);
            if had_errors {
                tracing::warn!(
                    "{}: malformed {} sequences replaced during reload",
                    self.display_name(),
                    actual.name()
                );
            }
            self.buffer = Rope::from(text.as_ref());
            actual
        };

        self.settings.encoding = actual.name().to_string();
        self.decoded = self.buffer.clone();
        self.source_encoding = actual;
        self.raw = bytes;
        tracing::debug!(
            "Reloaded {} as {}",
            self.display_name(),
            self.settings.encoding
        );
        Ok(())
    }
}
