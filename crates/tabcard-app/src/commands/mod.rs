//! Command implementations.

mod convert;
mod merge;
mod split;

use tabcard_core::config::Settings;

use crate::cli::{Cli, Command};

/// Dispatches the parsed command line.
///
/// ## Errors
/// Returns the failure of whichever command ran.
pub fn run(cli: Cli, settings: &Settings) -> anyhow::Result<()> {
    match cli.command {
        Command::Convert {
            input,
            output,
            delimiter,
        } => convert::run(&input, &output, delimiter, settings),
        Command::Split { input, out_dir } => split::run(&input, &out_dir),
        Command::Merge { inputs, output } => merge::run(&inputs, &output),
    }
}
