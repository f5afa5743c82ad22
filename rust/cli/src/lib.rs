//! # Pineapple CLI Library
//!
//! Command-line front end for the Pineapple OFC rules engine.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Available Subcommands
//!
//! - `deal`: Seat a table and show the initial deal
//! - `eval`: Evaluate a single 3- or 5-card row
//! - `score`: Score a table of completed hands from a JSON file
//! - `replay`: Re-score a JSONL game history
//! - `cfg`: Display current configuration settings
//! - `rng`: Print a ChaCha20 sample for a seed

use clap::Parser;
use std::io::Write;

#[macro_use]
mod macros;

pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;

use cli::{Commands, PineappleCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_eval_command, handle_replay_command,
    handle_rng_command, handle_score_command,
};

pub use error::{BatchValidationError, CliError};

/// Main entry point for the CLI application.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["pineapple", "deal", "--seed", "42"];
/// let code = pineapple_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["deal", "eval", "score", "replay", "cfg", "rng"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match PineappleCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Pineapple OFC CLI");
            write_or_exit!(err, "Usage: pineapple <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: pineapple --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Deal {
            seed,
            players,
            fantasyland,
        } => handle_deal_command(seed, players, &fantasyland, out),
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Score { input, output } => {
            handle_score_command(&input, output.as_deref(), out, err)
        }
        Commands::Replay { input } => handle_replay_command(&input, out, err),
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Rng { seed } => handle_rng_command(seed, out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
