//! `LINES`/`COLUMNS` fallback
//!
//! Consulted only after every device slot has missed. Absent variables take
//! the classic 25x80 defaults; present ones must hold a positive integer.

use std::collections::HashMap;
use std::ffi::OsString;

use crate::error::{SizeError, SizeResult};
use crate::size::TerminalSize;

pub const LINES_VAR: &str = "LINES";
pub const COLUMNS_VAR: &str = "COLUMNS";

pub const DEFAULT_LINES: u16 = 25;
pub const DEFAULT_COLUMNS: u16 = 80;

/// Source of environment variables
pub trait Environment {
    fn var(&self, name: &str) -> Option<OsString>;
}

/// The environment of the running process
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, name: &str) -> Option<OsString> {
        std::env::var_os(name)
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<OsString> {
        self.get(name).map(OsString::from)
    }
}

/// Size described by `LINES` and `COLUMNS`, with defaults for absent ones.
pub fn fallback_size<E: Environment + ?Sized>(env: &E) -> SizeResult<TerminalSize> {
    let rows = read_dimension(env, LINES_VAR, DEFAULT_LINES)?;
    let columns = read_dimension(env, COLUMNS_VAR, DEFAULT_COLUMNS)?;
    Ok(TerminalSize::new(rows, columns))
}

fn read_dimension<E: Environment + ?Sized>(
    env: &E,
    name: &'static str,
    default: u16,
) -> SizeResult<u16> {
    let Some(raw) = env.var(name) else {
        return Ok(default);
    };

    let value = raw.into_string().map_err(|raw| SizeError::InvalidEnv {
        name,
        value: raw.to_string_lossy().into_owned(),
    })?;

    match parse_dimension(&value) {
        Some(n) => Ok(n),
        None => Err(SizeError::InvalidEnv { name, value }),
    }
}

/// Parse a positive dimension, ignoring surrounding whitespace.
pub fn parse_dimension(s: &str) -> Option<u16> {
    s.trim().parse::<u16>().ok().filter(|&n| n > 0)
}
