//! Routes a parsed command line to its handler.

use super::args::{Cli, Commands};
use super::handlers::{handle_build, handle_dual, handle_top};
use crate::config::Config;
use crate::exit::BiblioExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the config cannot be loaded or the command handler fails.
pub fn execute(cli: Cli) -> Result<BiblioExit> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Build { source, output, json } => handle_build(config, &source, output, json),
        Commands::Top { source, json } => handle_top(config, &source, json),
        Commands::Dual { source, json } => handle_dual(config, &source, json),
    }
}
