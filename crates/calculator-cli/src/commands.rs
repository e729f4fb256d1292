//! CLI argument definitions using clap

use crate::config::{CliConfig, OutputFormat, Verbosity};
use clap::Parser;

/// Calculator: press keypad buttons and print the display
#[derive(Parser, Debug)]
#[command(name = "calculator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Button presses, e.g. `4 ✖️ 5 =` or `4 '*' 5 =`. Reads stdin when empty.
    /// A negative number such as `-3` is typed as `3 ±`.
    #[arg(allow_negative_numbers = true)]
    pub presses: Vec<String>,

    /// Print a JSON snapshot instead of the display text
    #[arg(long)]
    pub json: bool,

    /// Print the keypad layout and exit
    #[arg(long)]
    pub keypad: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Builds the configuration from parsed arguments
    #[must_use]
    pub fn config(&self) -> CliConfig {
        let format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Plain
        };
        CliConfig::new()
            .with_verbosity(Verbosity::from_flags(self.quiet, self.verbose))
            .with_format(format)
    }
}
