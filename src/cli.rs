//! Command-line interface for rewind_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind Games - tic-tac-toe with a move history you can travel through
#[derive(Parser, Debug)]
#[command(name = "rewind_games")]
#[command(about = "Tic-tac-toe with a rewindable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML). Defaults to ./rewind_games.toml when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// List moves newest first
        #[arg(long)]
        descending: bool,
    },

    /// Apply a sequence of moves and print the resulting game
    Replay {
        /// Cells to play in order: indices 0-8 or labels such as `center`,
        /// separated by commas
        #[arg(value_delimiter = ',')]
        moves: Vec<String>,

        /// Step to jump to after the moves are applied
        #[arg(long)]
        jump: Option<usize>,

        /// List moves newest first
        #[arg(long)]
        descending: bool,

        /// Print the view as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
