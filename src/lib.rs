//! Find Terminal Size
//!
//! Determines the rows and columns of the terminal a process is attached to,
//! for shell scripts that cannot rely on `LINES`/`COLUMNS` being set.
//!
//! The search order is:
//! - `TIOCGWINSZ` on standard input, standard output, then standard error
//! - `TIOCGWINSZ` on the controlling terminal (`/dev/tty`)
//! - the `LINES` and `COLUMNS` environment variables, defaulting to 25x80
//!
//! The first slot that answers wins.

pub mod env;
pub mod error;
pub mod probe;
pub mod resolver;
pub mod shell;
pub mod size;

pub use error::{ProbeError, SizeError, SizeResult};
pub use probe::{Candidate, Geometry, Tty};
pub use resolver::{resolve, Resolution, Resolver, Source};
pub use shell::ShellExports;
pub use size::TerminalSize;
