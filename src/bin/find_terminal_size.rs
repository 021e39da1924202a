//! find-terminal-size
//!
//! Prints the terminal size as shell assignments, like `resize(1)`:
//!
//! ```sh
//! eval "$(find-terminal-size)"
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use find_terminal_size::{Resolver, ShellExports};
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout is for the shell
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Fatal error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let resolution = Resolver::system().resolve()?;
    debug!(source = %resolution.source, size = %resolution.size, "printing exports");

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", ShellExports(resolution.size))?;
    stdout.flush()?;
    Ok(())
}
