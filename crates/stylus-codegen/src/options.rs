//! Conversion options and output dialects.

use serde::Deserialize;

/// Brace-and-semicolon dialect to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Scss,
    Less,
}

impl Dialect {
    /// Variable sigil: `$` or `@`.
    pub fn sigil(self) -> char {
        match self {
            Dialect::Scss => '$',
            Dialect::Less => '@',
        }
    }

    /// `name` as a variable reference. A leading `$` written in the source is
    /// replaced rather than doubled.
    pub fn variable(self, name: &str) -> String {
        let bare = name.strip_prefix('$').unwrap_or(name);
        format!("{}{bare}", self.sigil())
    }

    /// File suffix that replaces `.styl` in imports.
    pub fn suffix(self) -> &'static str {
        match self {
            Dialect::Scss => ".scss",
            Dialect::Less => ".less",
        }
    }

    /// Head of a mixin definition.
    pub fn mixin_head(self, name: &str, params: &str) -> String {
        match self {
            Dialect::Scss => format!("@mixin {name}({params})"),
            Dialect::Less => format!(".{name}({params})"),
        }
    }

    /// Prefix of a mixin call in statement position.
    pub fn include(self) -> &'static str {
        match self {
            Dialect::Scss => "@include ",
            Dialect::Less => ".",
        }
    }

    /// Explicit return of a function body. Less has no functions of its own,
    /// so both dialects share the Sass spelling.
    pub fn return_keyword(self) -> &'static str {
        "@return "
    }

    /// Placeholder for the block passed to a mixin.
    pub fn content(self) -> &'static str {
        "@content"
    }

    /// `name` interpolated into surrounding text.
    pub fn interpolate(self, name: &str) -> String {
        let bare = name.strip_prefix('$').unwrap_or(name);
        match self {
            Dialect::Scss => format!("#{{${bare}}}"),
            Dialect::Less => format!("@{{{bare}}}"),
        }
    }
}

/// Options for one conversion.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Quote used for synthesized strings (map keys). Source strings keep
    /// their own quotes.
    pub quote: char,

    pub dialect: Dialect,

    /// Emit vendor-prefixed copies of every `@keyframes`.
    pub autoprefix: bool,

    /// Spaces prepended to every non-blank output line, for embedding the
    /// result inside a host document (a `<style>` region, for instance).
    pub host_indent: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            quote: '\'',
            dialect: Dialect::Scss,
            autoprefix: true,
            host_indent: 0,
        }
    }
}

impl Options {
    pub fn with_quote(self, quote: char) -> Self {
        Self { quote, ..self }
    }

    pub fn with_dialect(self, dialect: Dialect) -> Self {
        Self { dialect, ..self }
    }

    pub fn with_autoprefix(self, autoprefix: bool) -> Self {
        Self { autoprefix, ..self }
    }

    pub fn with_host_indent(self, host_indent: usize) -> Self {
        Self {
            host_indent,
            ..self
        }
    }
}
