//! Device geometry queries
//!
//! Each slot of the fallback chain is a [`Candidate`]. Asking a candidate for
//! its size goes through the [`Geometry`] capability; [`Tty`] answers with a
//! real `TIOCGWINSZ` ioctl.

use std::fmt;
use std::fs::OpenOptions;
use std::io;
use std::os::fd::{AsFd, AsRawFd, BorrowedFd};
use std::os::unix::fs::OpenOptionsExt;

use nix::libc;

use crate::error::ProbeError;
use crate::size::TerminalSize;

/// Path of the controlling terminal, as `ctermid(3)` reports it.
pub const CONTROLLING_TERMINAL: &str = "/dev/tty";

/// A device slot in the fallback chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Candidate {
    Stdin,
    Stdout,
    Stderr,
    /// The session's terminal, opened by path
    ControllingTerminal,
}

impl Candidate {
    /// Device slots in priority order.
    pub const SEARCH_ORDER: [Candidate; 4] = [
        Candidate::Stdin,
        Candidate::Stdout,
        Candidate::Stderr,
        Candidate::ControllingTerminal,
    ];
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Candidate::Stdin => f.write_str("stdin"),
            Candidate::Stdout => f.write_str("stdout"),
            Candidate::Stderr => f.write_str("stderr"),
            Candidate::ControllingTerminal => f.write_str(CONTROLLING_TERMINAL),
        }
    }
}

/// Something that can be asked for the size of a candidate device
pub trait Geometry {
    fn query(&self, candidate: Candidate) -> Result<TerminalSize, ProbeError>;
}

/// The process's real terminal devices
#[derive(Debug, Clone, Copy, Default)]
pub struct Tty;

impl Geometry for Tty {
    fn query(&self, candidate: Candidate) -> Result<TerminalSize, ProbeError> {
        match candidate {
            Candidate::Stdin => query_fd(io::stdin().as_fd()),
            Candidate::Stdout => query_fd(io::stdout().as_fd()),
            Candidate::Stderr => query_fd(io::stderr().as_fd()),
            Candidate::ControllingTerminal => query_controlling_terminal(),
        }
    }
}

/// Get the window size from a file descriptor
pub fn query_fd(fd: BorrowedFd<'_>) -> Result<TerminalSize, ProbeError> {
    let mut winsize = libc::winsize {
        ws_row: 0,
        ws_col: 0,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };

    // SAFETY: TIOCGWINSZ writes one winsize through the pointer, and fd stays
    // open for the duration of the borrow
    let result = unsafe { libc::ioctl(fd.as_raw_fd(), libc::TIOCGWINSZ, &mut winsize) };

    if result < 0 {
        return Err(ProbeError::from_io(io::Error::last_os_error()));
    }
    TerminalSize::from_winsize(winsize).ok_or(ProbeError::EmptyGeometry)
}

/// Open the controlling terminal and query it. The handle is closed when this
/// returns, whatever the outcome.
fn query_controlling_terminal() -> Result<TerminalSize, ProbeError> {
    let tty = OpenOptions::new()
        .read(true)
        .custom_flags(libc::O_NOCTTY)
        .open(CONTROLLING_TERMINAL)
        .map_err(ProbeError::Unavailable)?;

    query_fd(tty.as_fd())
}
