//! Command-line interface for the tic-tac-toe binary.

use clap::Parser;
use std::path::PathBuf;
use tictactoe_board::Symbol;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a friend on one terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Name of the first player
    #[arg(long)]
    pub player1: Option<String>,

    /// Name of the second player
    #[arg(long)]
    pub player2: Option<String>,

    /// Symbol for the first player (X or O)
    #[arg(long)]
    pub first_symbol: Option<Symbol>,
}
