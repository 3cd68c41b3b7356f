pub mod cli;
pub mod commands;
pub mod constants;
pub mod doctor;
pub mod error;
pub mod error_suggestions;
pub mod packages;
pub mod selector;
pub mod ui;
pub mod utils;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use error_suggestions::ErrorSuggestions;
use std::process::exit;

/// Run fontbrew CLI entrypoint.
pub fn run_cli() {
    // 0. Initialize color settings (must be first)
    ui::init_colors();

    // 1. Signal handling: nothing persists across runs, so an interrupt
    //    just ends the process
    ctrlc::set_handler(move || {
        eprintln!();
        ui::warning("Operation cancelled by user.");
        exit(130);
    })
    .expect("Error setting Ctrl-C handler");

    // 2. Help wins over anything else on the command line, valid or not
    if std::env::args().skip(1).any(|arg| arg == "-h" || arg == "--help") {
        let mut cmd = cli::Cli::command();
        let _ = cmd.print_help();
        exit(0);
    }

    // 3. Parse & run
    let args = match cli::Cli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            exit(code);
        }
    };

    if let Err(e) = cli::dispatcher::dispatch(&args) {
        ui::error(&format!("{}", e));
        if let Some(suggestion) = e.suggestion() {
            eprintln!("{}", suggestion);
        }
        exit(1);
    }
}
