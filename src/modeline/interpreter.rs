//! Key resolution and directive interpretation
//!
//! Resolution is best-effort: a token that is empty, malformed, unknown or
//! missing a required value is skipped and never reported as an error.

use super::directive::{Directive, DocumentTarget};
use super::registry::{ArgShape, ModelineRegistry, OptionValue};

/// Why a token did not produce a directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Token was empty
    Empty,
    /// `=` with nothing before or after it
    Malformed,
    /// Key matches no registry entry
    UnknownKey,
    /// Integer or string option given without `=value`
    MissingValue,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty token"),
            Self::Malformed => write!(f, "empty key or value around '='"),
            Self::UnknownKey => write!(f, "unknown option"),
            Self::MissingValue => write!(f, "missing value"),
        }
    }
}

/// Split a token on its first `=`
fn split_key_value(token: &str) -> Result<(&str, Option<&str>), SkipReason> {
    match token.split_once('=') {
        Some((key, value)) if key.is_empty() || value.is_empty() => Err(SkipReason::Malformed),
        Some((key, value)) => Ok((key, Some(value))),
        None => Ok((token, None)),
    }
}

/// Permissive base-10 parse: leading digits only, zero if there are none
///
/// `"8"` → 8, `"8px"` → 8, `"abc"` → 0. Overflow saturates.
pub fn parse_leading_uint(text: &str) -> u32 {
    let text = text.trim();
    let digits = text.strip_prefix('+').unwrap_or(text);
    digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u32, |acc, b| {
            acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
        })
}

/// Resolve a single token against the registry
pub fn resolve(registry: &ModelineRegistry, token: &str) -> Result<Directive, SkipReason> {
    if token.is_empty() {
        return Err(SkipReason::Empty);
    }

    let (key, value) = split_key_value(token)?;
    let spec = registry.lookup(key).ok_or(SkipReason::UnknownKey)?;

    let value = match spec.shape {
        ArgShape::FlagTrue => OptionValue::Bool(true),
        ArgShape::FlagFalse => OptionValue::Bool(false),
        ArgShape::Integer => {
            OptionValue::Integer(parse_leading_uint(value.ok_or(SkipReason::MissingValue)?))
        }
        ArgShape::String => {
            OptionValue::Str(value.ok_or(SkipReason::MissingValue)?.trim().to_string())
        }
    };

    Ok(spec.setter.directive(value))
}

/// Resolve a token and apply it to `target`, ignoring anything unusable
pub fn interpret<T: DocumentTarget + ?Sized>(
    target: &mut T,
    registry: &ModelineRegistry,
    token: &str,
) {
    match resolve(registry, token) {
        Ok(directive) => {
            tracing::debug!(token, %directive, "Applying modeline directive");
            directive.apply(target);
        }
        Err(SkipReason::Empty) => {}
        Err(reason) => tracing::debug!(token, %reason, "Skipping modeline token"),
    }
}
