//! The fallback chain
//!
//! Device slots are tried in [`Candidate::SEARCH_ORDER`]; the first one that
//! reports a size wins. When all of them miss, `LINES`/`COLUMNS` decide.

use std::fmt;

use tracing::{debug, trace};

use crate::env::{self, Environment, ProcessEnv};
use crate::error::{ProbeError, SizeResult};
use crate::probe::{Candidate, Geometry, Tty};
use crate::size::TerminalSize;

/// Where a resolved size came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Device(Candidate),
    Environment,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Device(candidate) => write!(f, "{}", candidate),
            Source::Environment => f.write_str("environment"),
        }
    }
}

/// A resolved size and the slot that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub size: TerminalSize,
    pub source: Source,
}

/// Walks the fallback chain over a geometry source and an environment
#[derive(Debug, Clone, Default)]
pub struct Resolver<G, E> {
    geometry: G,
    env: E,
}

impl Resolver<Tty, ProcessEnv> {
    /// Resolver over the real terminal devices and process environment
    pub fn system() -> Self {
        Resolver::new(Tty, ProcessEnv)
    }
}

impl<G: Geometry, E: Environment> Resolver<G, E> {
    pub fn new(geometry: G, env: E) -> Self {
        Resolver { geometry, env }
    }

    /// Find the terminal size.
    ///
    /// Device misses are logged and skipped. The only error is an
    /// environment fallback value that is not a positive integer.
    pub fn resolve(&self) -> SizeResult<Resolution> {
        for candidate in Candidate::SEARCH_ORDER {
            match self.geometry.query(candidate) {
                Ok(size) => {
                    debug!(source = %candidate, %size, "resolved terminal size");
                    return Ok(Resolution {
                        size,
                        source: Source::Device(candidate),
                    });
                }
                Err(ProbeError::NotATerminal) => {
                    trace!(source = %candidate, "not a terminal");
                }
                Err(e) => {
                    debug!(source = %candidate, error = %e, "geometry query missed");
                }
            }
        }

        let size = env::fallback_size(&self.env)?;
        debug!(source = %Source::Environment, %size, "resolved terminal size");
        Ok(Resolution {
            size,
            source: Source::Environment,
        })
    }
}

/// Find the size of the controlling terminal of this process.
pub fn resolve() -> SizeResult<TerminalSize> {
    Resolver::system().resolve().map(|resolution| resolution.size)
}
