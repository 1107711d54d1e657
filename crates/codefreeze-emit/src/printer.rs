//! Indented text output with brace-delimited blocks.

use std::ops::{Deref, DerefMut};

use crate::error::EmitResult;

const INDENT: &str = "    ";

/// Line-oriented writer that tracks nesting depth.
///
/// Depth only changes inside [`Printer::indented`] and [`Printer::block`]. A
/// guard restores it when the body returns, fails, or unwinds.
#[derive(Debug, Default)]
pub struct Printer {
    out: String,
    level: usize,
}

impl Printer {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn level(&self) -> usize {
        self.level
    }

    pub(crate) fn len(&self) -> usize {
        self.out.len()
    }

    /// Drops everything written after byte offset `len`.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.out.truncate(len);
    }

    /// Writes one line at the current depth. Empty lines get no indentation.
    pub fn line(&mut self, text: &str) {
        if !text.is_empty() {
            for _ in 0..self.level {
                self.out.push_str(INDENT);
            }
            self.out.push_str(text);
        }
        self.out.push('\n');
    }

    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Runs `body` one level deeper.
    pub fn indented<F>(&mut self, body: F) -> EmitResult<()>
    where
        F: FnOnce(&mut Self) -> EmitResult<()>,
    {
        let mut guard = Indent::enter(self);
        body(&mut *guard)
    }

    /// Writes `prefix {`, the indented body, then `}suffix`.
    ///
    /// The closing line is skipped when the body fails.
    pub fn block<F>(&mut self, prefix: &str, suffix: &str, body: F) -> EmitResult<()>
    where
        F: FnOnce(&mut Self) -> EmitResult<()>,
    {
        self.line(&format!("{prefix} {{"));
        self.indented(body)?;
        self.line(&format!("}}{suffix}"));
        Ok(())
    }

    /// Returns the text with exactly one trailing newline (or none if empty).
    pub fn finish(mut self) -> String {
        self.out.truncate(self.out.trim_end().len());
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        self.out
    }
}

/// One level of extra depth, undone on drop.
struct Indent<'p> {
    printer: &'p mut Printer,
    saved: usize,
}

impl<'p> Indent<'p> {
    fn enter(printer: &'p mut Printer) -> Self {
        let saved = printer.level;
        printer.level += 1;
        Self { printer, saved }
    }
}

impl Deref for Indent<'_> {
    type Target = Printer;

    fn deref(&self) -> &Printer {
        &*self.printer
    }
}

impl DerefMut for Indent<'_> {
    fn deref_mut(&mut self) -> &mut Printer {
        &mut *self.printer
    }
}

impl Drop for Indent<'_> {
    fn drop(&mut self) {
        self.printer.level = self.saved;
    }
}
