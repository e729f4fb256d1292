//! Feeds presses into a session and renders the result

use crate::config::OutputFormat;
use crate::error::CliResult;
use crate::input::expand_tokens;
use calculator_brain::session::CalculatorSession;
use std::io::{BufRead, Write};
use tracing::debug;

/// Presses every label the tokens expand to, stopping at the first rejection
pub fn press_tokens<'a>(
    session: &mut CalculatorSession,
    tokens: impl IntoIterator<Item = &'a str>,
) -> CliResult<()> {
    for label in expand_tokens(tokens) {
        debug!(%label, "press");
        session.press(&label)?;
    }
    Ok(())
}

/// Renders the session in the requested format
pub fn render(session: &CalculatorSession, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Plain => Ok(session.display().to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(session)?),
    }
}

/// Reads presses line by line, printing the session after each line
pub fn run_lines<R: BufRead, W: Write>(
    session: &mut CalculatorSession,
    input: R,
    mut output: W,
    format: OutputFormat,
) -> CliResult<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        press_tokens(session, line.split_whitespace())?;
        writeln!(output, "{}", render(session, format)?)?;
    }
    Ok(())
}
