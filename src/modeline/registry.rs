//! Option registry - the fixed table of supported modeline directives
//!
//! Entries are matched in declaration order; the first entry whose name or
//! alias equals the key (ASCII case-insensitive) wins.

use super::directive::{Directive, IndentMode};

/// How a directive's value token is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgShape {
    /// No value needed; the setter receives `true`
    FlagTrue,
    /// No value needed; the setter receives `false`
    FlagFalse,
    /// Base-10 whole number
    Integer,
    /// Verbatim string (trimmed)
    String,
}

/// Value handed to a setter after coercion by [`ArgShape`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Bool(bool),
    Integer(u32),
    Str(String),
}

/// The document setting an option drives
///
/// Flag pairs such as `expandtab`/`noexpandtab` share one setter and differ
/// only in the constant their [`ArgShape`] bakes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setter {
    ExpandTab,
    TabStop,
    Wrap,
    Encoding,
}

impl Setter {
    /// Whether this setter can consume values of `shape`
    pub const fn accepts(self, shape: ArgShape) -> bool {
        matches!(
            (self, shape),
            (
                Setter::ExpandTab | Setter::Wrap,
                ArgShape::FlagTrue | ArgShape::FlagFalse
            ) | (Setter::TabStop, ArgShape::Integer)
                | (Setter::Encoding, ArgShape::String)
        )
    }

    /// Build the directive this setter produces for `value`
    ///
    /// # Panics
    ///
    /// If the value kind does not fit the setter. [`OptionSpec::new`] rejects
    /// such pairings when the table is built, so resolution never hits this.
    pub fn directive(self, value: OptionValue) -> Directive {
        match (self, value) {
            (Setter::ExpandTab, OptionValue::Bool(spaces)) => Directive::IndentMode(if spaces {
                IndentMode::Spaces
            } else {
                IndentMode::Tabs
            }),
            (Setter::TabStop, OptionValue::Integer(width)) => Directive::IndentWidth(width),
            (Setter::Wrap, OptionValue::Bool(enabled)) => Directive::LineWrapping(enabled),
            (Setter::Encoding, OptionValue::Str(name)) => Directive::Encoding(name),
            (setter, value) => unreachable!("{:?} cannot take {:?}", setter, value),
        }
    }
}

/// One supported directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    /// Canonical name
    pub name: &'static str,
    /// Optional short alias
    pub alias: Option<&'static str>,
    pub shape: ArgShape,
    pub setter: Setter,
}

impl OptionSpec {
    pub const fn new(
        name: &'static str,
        alias: Option<&'static str>,
        shape: ArgShape,
        setter: Setter,
    ) -> Self {
        assert!(
            setter.accepts(shape),
            "option setter does not accept its argument shape"
        );
        Self {
            name,
            alias,
            shape,
            setter,
        }
    }

    /// Whether `key` names this option, by name or alias
    pub fn matches(&self, key: &str) -> bool {
        self.name.eq_ignore_ascii_case(key)
            || self
                .alias
                .map(|alias| alias.eq_ignore_ascii_case(key))
                .unwrap_or(false)
    }
}

/// Supported directives, in match order
pub const DEFAULT_OPTIONS: &[OptionSpec] = &[
    OptionSpec::new("expandtab", Some("et"), ArgShape::FlagTrue, Setter::ExpandTab),
    OptionSpec::new("noexpandtab", None, ArgShape::FlagFalse, Setter::ExpandTab),
    OptionSpec::new("tabstop", Some("ts"), ArgShape::Integer, Setter::TabStop),
    OptionSpec::new("softtabstop", Some("sts"), ArgShape::Integer, Setter::TabStop),
    OptionSpec::new("shiftwidth", Some("sw"), ArgShape::Integer, Setter::TabStop),
    OptionSpec::new("wrap", None, ArgShape::FlagTrue, Setter::Wrap),
    OptionSpec::new("nowrap", None, ArgShape::FlagFalse, Setter::Wrap),
    OptionSpec::new("fileencoding", Some("encoding"), ArgShape::String, Setter::Encoding),
];

/// Ordered, read-only table of supported options
#[derive(Debug, Clone, Copy)]
pub struct ModelineRegistry {
    entries: &'static [OptionSpec],
}

impl Default for ModelineRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_OPTIONS)
    }
}

impl ModelineRegistry {
    pub const fn new(entries: &'static [OptionSpec]) -> Self {
        Self { entries }
    }

    /// Find the first entry whose name or alias equals `key`
    pub fn lookup(&self, key: &str) -> Option<&'static OptionSpec> {
        self.entries.iter().find(|spec| spec.matches(key))
    }

    /// All entries in declaration order
    pub fn entries(&self) -> &'static [OptionSpec] {
        self.entries
    }
}
