//! Modeline tokenizer

/// Characters that separate directives on a modeline
pub const DELIMITERS: &[char] = &[':', ' ', ','];

/// Split a modeline on any of [`DELIMITERS`]
///
/// Empty fields are kept so that field 0 always corresponds to whatever
/// precedes the first delimiter (normally the comment sign).
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split(DELIMITERS).collect()
}
