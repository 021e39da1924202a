//! Terminal dimensions as reported by the kernel or the environment

use std::fmt;

use nix::libc;

/// Terminal size in rows and columns
///
/// Both fields are positive. Values built from a `winsize` reply go through
/// [`TerminalSize::from_winsize`], which rejects zero dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TerminalSize {
    /// Number of rows (lines)
    pub rows: u16,
    /// Number of columns (characters per line)
    pub columns: u16,
}

impl TerminalSize {
    /// Create a new terminal size
    pub fn new(rows: u16, columns: u16) -> Self {
        TerminalSize { rows, columns }
    }

    /// Decode a `TIOCGWINSZ` reply, keeping only rows and columns.
    ///
    /// Returns `None` when either dimension is zero, which is what a terminal
    /// reports before anyone has set its size.
    pub fn from_winsize(ws: libc::winsize) -> Option<Self> {
        if ws.ws_row == 0 || ws.ws_col == 0 {
            return None;
        }
        Some(TerminalSize::new(ws.ws_row, ws.ws_col))
    }

    /// Convert to libc winsize structure, with the pixel fields zeroed
    pub fn to_winsize(&self) -> libc::winsize {
        libc::winsize {
            ws_row: self.rows,
            ws_col: self.columns,
            ws_xpixel: 0,
            ws_ypixel: 0,
        }
    }
}

impl fmt::Display for TerminalSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}
