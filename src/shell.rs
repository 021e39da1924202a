//! `resize(1)`-style shell output

use std::fmt;

use crate::size::TerminalSize;

/// Bourne shell assignments exporting a terminal size
///
/// Renders as two lines, meant for `eval "$(find-terminal-size)"`:
///
/// ```text
/// COLUMNS=80; export COLUMNS;
/// LINES=25; export LINES;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellExports(pub TerminalSize);

impl fmt::Display for ShellExports {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "COLUMNS={}; export COLUMNS;", self.0.columns)?;
        writeln!(f, "LINES={}; export LINES;", self.0.rows)
    }
}
