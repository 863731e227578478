//! Traversal state threaded through one conversion.
//!
//! A [`Context`] is created per [`convert`](crate::convert) call and handed by
//! reference to every emitter. It owns the indentation depth, the source-line
//! tracker that reproduces vertical whitespace, the mode flags describing
//! where in the tree the emitter currently is, and the symbol registries.

use bitflags::bitflags;

use crate::options::Options;
use crate::symbols::Symbols;

/// Spaces per nesting level.
pub const INDENT_WIDTH: usize = 2;

bitflags! {
    /// Semantic position of the emitter. Flags are independent and several
    /// can be set at once.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Mode: u16 {
        const OBJECT = 1 << 0;
        const FUNCTION_BODY = 1 << 1;
        const DECLARATION_VALUE = 1 << 2;
        const NAMESPACE = 1 << 3;
        const KEYFRAMES = 1 << 4;
        const ARGUMENTS = 1 << 5;
        const EXPRESSION = 1 << 6;
        /// Head of a conditional or loop.
        const CONDITION = 1 << 7;
        const CALL = 1 << 8;
    }
}

/// Tracks the last source line whose leading blank lines were emitted.
///
/// The number of line breaks owed before a node is the distance between its
/// line and the last emitted one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTracker {
    last: usize,
}

impl Default for LineTracker {
    fn default() -> Self {
        Self { last: 1 }
    }
}

impl LineTracker {
    pub fn last(&self) -> usize {
        self.last
    }

    /// Line breaks pending before `line`.
    pub fn pending(&self, line: usize) -> usize {
        line.saturating_sub(self.last)
    }

    /// Consume the breaks pending before `line` and mark it emitted.
    /// Synthetic nodes (no line) owe nothing and leave the tracker alone.
    pub fn take(&mut self, line: Option<usize>) -> String {
        match line {
            Some(line) => {
                let breaks = "\n".repeat(self.pending(line));
                self.last = line;
                breaks
            }
            None => String::new(),
        }
    }

    pub fn set(&mut self, line: usize) {
        self.last = line;
    }

    /// Move forward to `line`; never moves back.
    pub fn advance_to(&mut self, line: usize) {
        self.last = self.last.max(line);
    }

    pub fn bump(&mut self) {
        self.last += 1;
    }
}

/// Mutable state of one conversion.
pub struct Context<'o> {
    pub options: &'o Options,
    /// Nesting depth.
    pub indent: usize,
    pub lines: LineTracker,
    pub mode: Mode,
    /// Name of the call whose arguments are being rendered.
    pub call_name: Option<String>,
    /// Set while rendering the body of a callable classified as a function.
    pub return_keyword: Option<&'static str>,
    pub symbols: Symbols,
}

impl<'o> Context<'o> {
    pub fn new(options: &'o Options) -> Self {
        Self {
            options,
            indent: 0,
            lines: LineTracker::default(),
            mode: Mode::empty(),
            call_name: None,
            return_keyword: None,
            symbols: Symbols::default(),
        }
    }

    pub fn indentation(&self) -> String {
        " ".repeat(self.indent * INDENT_WIDTH)
    }

    /// Line breaks owed before `line`, marking it emitted.
    pub fn breaks(&mut self, line: Option<usize>) -> String {
        self.lines.take(line)
    }

    /// Line breaks owed before `line` followed by the current indentation.
    pub fn lead(&mut self, line: Option<usize>) -> String {
        let mut lead = self.lines.take(line);
        lead.push_str(&self.indentation());
        lead
    }

    pub fn in_mode(&self, mode: Mode) -> bool {
        self.mode.intersects(mode)
    }

    /// Run `f` with `mode` set, restoring the previous flags afterwards.
    pub fn with_mode<T>(&mut self, mode: Mode, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = self.mode;
        self.mode.insert(mode);
        let out = f(self);
        self.mode = saved;
        out
    }

    /// `name` as a variable reference in the output dialect.
    pub fn variable(&self, name: &str) -> String {
        self.options.dialect.variable(name)
    }
}
