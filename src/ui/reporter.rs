//! Nested progress reporting.
//!
//! The [`Reporter`] mirrors the engine's call stack as indented blocks:
//!
//! ```text
//! default {
//!   branch {
//!     git (cached) ✓
//!     current branch: dev
//!     meet {
//!       Switched to branch 'main'
//!     } ✓
//!   } branch ✓
//! } default ✓
//! ```
//!
//! Sections and action output go to the output channel; warnings and
//! errors go to the error channel. Both carry the current indentation.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use console::Term;

use super::output::OutputMode;
use super::theme::BabuTheme;

/// Indentation added per nesting level.
pub const INDENT_UNIT: &str = "  ";

/// Writes the nested transcript of a run.
pub struct Reporter {
    out: Box<dyn Write>,
    err: Box<dyn Write>,
    theme: BabuTheme,
    mode: OutputMode,
    depth: usize,
}

impl Reporter {
    /// Report to the terminal's stdout and stderr.
    pub fn new(mode: OutputMode, theme: BabuTheme) -> Self {
        Self::with_writers(
            Box::new(Term::stdout()),
            Box::new(Term::stderr()),
            theme,
            mode,
        )
    }

    /// Report to arbitrary writers.
    pub fn with_writers(
        out: Box<dyn Write>,
        err: Box<dyn Write>,
        theme: BabuTheme,
        mode: OutputMode,
    ) -> Self {
        Self {
            out,
            err,
            theme,
            mode,
            depth: 0,
        }
    }

    /// Report into an in-memory [`Transcript`] with the plain theme.
    pub fn capture(mode: OutputMode) -> (Self, Transcript) {
        let transcript = Transcript::default();
        let reporter = Self::with_writers(
            Box::new(SharedBuffer(Rc::clone(&transcript.out))),
            Box::new(SharedBuffer(Rc::clone(&transcript.err))),
            BabuTheme::plain(),
            mode,
        );
        (reporter, transcript)
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Get the output mode.
    pub fn output_mode(&self) -> OutputMode {
        self.mode
    }

    /// Write `label {` and indent one level.
    pub fn enter_section(&mut self, label: &str) {
        let line = self.theme.format_enter(label);
        self.status_line(&line);
        self.depth += 1;
    }

    /// Outdent one level and write `} label` with the outcome glyph.
    pub fn exit_section(&mut self, label: &str, success: bool) {
        self.depth = self.depth.saturating_sub(1);
        let line = self.theme.format_exit(label, success);
        self.status_line(&line);
    }

    /// Write the short-circuit line for an already satisfied dep.
    pub fn cached(&mut self, label: &str) {
        let line = self.theme.format_cached(label);
        self.status_line(&line);
    }

    /// Write a plain line at the current indent.
    pub fn message(&mut self, msg: &str) {
        self.status_line(msg);
    }

    /// Relay one line printed by an action.
    pub fn action_output(&mut self, line: &str) {
        if self.mode.shows_action_output() {
            let prefix = self.indent();
            writeln!(self.out, "{}{}", prefix, line).ok();
        }
    }

    /// Display a warning on the error channel.
    pub fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            let prefix = self.indent();
            let line = self.theme.format_warning(msg);
            writeln!(self.err, "{}{}", prefix, line).ok();
        }
    }

    /// Display an error on the error channel. Shown in every mode.
    pub fn error(&mut self, msg: &str) {
        let prefix = self.indent();
        let line = self.theme.format_error(msg);
        writeln!(self.err, "{}{}", prefix, line).ok();
    }

    /// Flush both channels.
    pub fn flush(&mut self) {
        self.out.flush().ok();
        self.err.flush().ok();
    }

    fn status_line(&mut self, line: &str) {
        if self.mode.shows_status() {
            let prefix = self.indent();
            writeln!(self.out, "{}{}", prefix, line).ok();
        }
    }

    fn indent(&self) -> String {
        INDENT_UNIT.repeat(self.depth)
    }
}

/// In-memory copy of everything a captured [`Reporter`] wrote.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    out: Rc<RefCell<Vec<u8>>>,
    err: Rc<RefCell<Vec<u8>>>,
}

impl Transcript {
    /// Everything written to the output channel.
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.out.borrow()).into_owned()
    }

    /// Everything written to the error channel.
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.err.borrow()).into_owned()
    }

    /// Output channel split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.stdout().lines().map(str::to_string).collect()
    }
}

struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
