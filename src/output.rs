//! Terminal status output for the hbs CLI.
//!
//! Status lines go to stderr with a right-aligned verb column, as cargo
//! prints them. Stdout carries only command output such as `hbs fmt`.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::validation::Severity;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
// Verb colours are bold.
const GREEN: &str = "\x1b[1;32m";
const RED: &str = "\x1b[1;31m";
const YELLOW: &str = "\x1b[1;33m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Terminal-aware status printer.
///
/// Prints Cargo-style status lines to stderr with optional ANSI colours.
/// Colour is enabled when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// Cargo-style status line with a green verb,
    /// e.g. "    Checked stadiums/classic.hbs (Classic)".
    pub fn status(&self, verb: &str, message: &str) {
        self.line(GREEN, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.line(YELLOW, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.line(RED, verb, message);
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    /// Lint severity label, coloured to match the status verbs.
    pub fn severity(&self, severity: Severity) -> String {
        let style = match severity {
            Severity::Error => RED,
            Severity::Warning => YELLOW,
        };
        self.paint(style, &severity.to_string())
    }

    fn paint(&self, style: &str, text: &str) -> String {
        if self.color {
            format!("{style}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn line(&self, color: &str, verb: &str, message: &str) {
        let verb = self.paint(color, &format!("{verb:>VERB_WIDTH$}"));
        let _ = writeln!(io::stderr().lock(), "{verb} {message}");
    }
}

/// `plural(1, "stadium", "stadiums")` is "1 stadium".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}
