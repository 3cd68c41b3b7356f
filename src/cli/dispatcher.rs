//! Command dispatcher
//!
//! Routes parsed CLI arguments to the command handler.

use crate::cli::args::Cli;
use crate::commands;
use crate::error::Result;

pub fn dispatch(args: &Cli) -> Result<()> {
    commands::install::run(commands::install::InstallOptions { all: args.all })
}
