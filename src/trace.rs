//! Optional diagnostic trace of the parse.
//!
//! Every line is indented two spaces per open nonterminal.  Depth is tracked
//! by [`Indent`] guards, so a procedure that bails out with `?` still restores
//! the indentation of its caller.

use log::debug;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Records trace lines when enabled and mirrors them to the `log` facade.
#[derive(Debug, Default)]
pub struct Trace {
    enabled: bool,
    depth: Rc<Cell<usize>>,
    lines: Vec<String>,
}

impl Trace {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Self::default()
        }
    }

    #[inline(always)]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth.get()
    }

    /// Lines recorded so far, already indented.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Record one line at the current depth.  No‑op when disabled.
    pub fn line(&mut self, args: fmt::Arguments<'_>) {
        if !self.enabled {
            return;
        }

        let line: String = format!("{:indent$}{}", "", args, indent = self.depth.get() * 2);

        debug!("{}", line);

        self.lines.push(line);
    }

    /// Announce entry into `nonterminal` and open one level of indentation,
    /// closed again when the returned guard is dropped.
    #[must_use = "the indentation is released as soon as the guard is dropped"]
    pub fn enter(&mut self, nonterminal: &str) -> Indent {
        self.line(format_args!("enter {}", nonterminal));

        self.depth.set(self.depth.get() + 1);

        Indent {
            depth: Rc::clone(&self.depth),
        }
    }
}

/// Scope guard returned by [`Trace::enter`].
#[derive(Debug)]
pub struct Indent {
    depth: Rc<Cell<usize>>,
}

impl Drop for Indent {
    fn drop(&mut self) {
        self.depth.set(self.depth.get().saturating_sub(1));
    }
}
