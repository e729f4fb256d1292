//! Calculator CLI
//!
//! ## Usage
//!
//! ```bash
//! calculator 4 ✖️ 5 =          # prints 20
//! calculator 9 sqrt            # prints 3
//! echo "5 / 0 =" | calculator  # prints inf
//! calculator --keypad          # prints the keypad layout
//! ```

use calculator_brain::keypad::Keypad;
use calculator_brain::session::CalculatorSession;
use calculator_cli::{init_tracing, runner, Cli, CliResult};
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_status())
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = cli.config();
    init_tracing(config.verbosity)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.keypad {
        write!(out, "{}", Keypad::new())?;
        return Ok(());
    }

    let mut session = CalculatorSession::new();
    if cli.presses.is_empty() {
        let stdin = io::stdin();
        runner::run_lines(&mut session, stdin.lock(), out, config.format)
    } else {
        runner::press_tokens(&mut session, cli.presses.iter().map(String::as_str))?;
        writeln!(out, "{}", runner::render(&session, config.format)?)?;
        Ok(())
    }
}
