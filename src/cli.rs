//! Command-line interface for strictly_rounds.

use clap::{Parser, Subcommand};

/// Strictly Rounds - two-player tic-tac-toe with round scoring
#[derive(Parser, Debug)]
#[command(name = "strictly_rounds")]
#[command(about = "Two-player tic-tac-toe with round scoring", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to a TOML game configuration
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Name of player 1 (overrides the config file)
        #[arg(long)]
        player1: Option<String>,

        /// Name of player 2 (overrides the config file)
        #[arg(long)]
        player2: Option<String>,
    },

    /// Apply a list of moves and print every resulting state
    Replay {
        /// Path to a TOML game configuration
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Print one JSON object per state instead of text
        #[arg(long)]
        json: bool,

        /// Moves as ROW,COL (zero-based), or `new` for a new round, or `restart`
        #[arg(required = true)]
        moves: Vec<String>,
    },
}
