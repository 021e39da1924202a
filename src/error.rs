//! Error types for terminal size resolution.

use std::io;

use nix::errno::Errno;
use thiserror::Error;

/// Why a single device slot produced no size.
///
/// These never reach the caller of [`crate::resolve`]; the resolver logs them
/// and moves to the next slot.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("not a terminal")]
    NotATerminal,

    #[error("device unavailable: {0}")]
    Unavailable(#[source] io::Error),

    #[error("terminal reported an empty geometry")]
    EmptyGeometry,
}

impl ProbeError {
    /// Classify an OS error from an open or ioctl call.
    pub fn from_io(err: io::Error) -> Self {
        match err.raw_os_error() {
            Some(code) if code == Errno::ENOTTY as i32 => ProbeError::NotATerminal,
            _ => ProbeError::Unavailable(err),
        }
    }
}

/// Failure to produce any terminal size.
#[derive(Error, Debug)]
pub enum SizeError {
    #[error("{name} is not a positive integer: {value:?}")]
    InvalidEnv { name: &'static str, value: String },
}

/// Result type for size resolution
pub type SizeResult<T> = Result<T, SizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enotty_is_not_a_terminal() {
        let err = io::Error::from_raw_os_error(nix::libc::ENOTTY);
        assert!(matches!(ProbeError::from_io(err), ProbeError::NotATerminal));
    }

    #[test]
    fn test_other_errno_is_unavailable() {
        let err = io::Error::from_raw_os_error(nix::libc::EBADF);
        match ProbeError::from_io(err) {
            ProbeError::Unavailable(inner) => {
                assert_eq!(inner.raw_os_error(), Some(nix::libc::EBADF))
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_invalid_env_message() {
        let err = SizeError::InvalidEnv {
            name: "COLUMNS",
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "COLUMNS is not a positive integer: \"abc\"");
    }
}
