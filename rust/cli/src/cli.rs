//! Command-line surface: the clap parser and its subcommands.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "pineapple",
    version,
    about = "Open-Face Chinese Poker (Pineapple) rules engine"
)]
pub struct PineappleCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Seat a table and show the initial deal
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        /// Number of players (2-4); defaults to the configured value
        #[arg(long)]
        players: Option<u8>,
        /// Player ids starting in Fantasyland, e.g. p1,p3
        #[arg(long, value_delimiter = ',')]
        fantasyland: Vec<String>,
    },
    /// Evaluate a 3- or 5-card row
    Eval {
        #[arg(long)]
        cards: String,
    },
    /// Score a table of completed hands read from a JSON file
    Score {
        #[arg(long)]
        input: String,
        /// Append the scored game to this JSONL history
        #[arg(long)]
        output: Option<String>,
    },
    /// Re-score a JSONL game history and report disagreements
    Replay {
        #[arg(long)]
        input: String,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
    /// Print a ChaCha20 sample for a seed
    Rng {
        #[arg(long)]
        seed: Option<u64>,
    },
}
