//! Calculator CLI Library
//!
//! Command-line keypad in front of the calculator brain.

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::float_cmp))]

mod commands;
mod config;
mod error;
pub mod input;
pub mod runner;

pub use commands::Cli;
pub use config::{CliConfig, OutputFormat, Verbosity};
pub use error::{CliError, CliResult};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the stderr log subscriber. `RUST_LOG` overrides the verbosity.
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(verbosity: Verbosity) -> CliResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .try_init()?;
    Ok(())
}
