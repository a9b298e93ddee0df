//! Tic-tac-toe - terminal entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tictactoe_console::{Game, GameConfig, GameError, Session, StdConsole};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Game output owns stdout, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting tic-tac-toe");

    let config = GameConfig::load(&cli.config)?.with_overrides(
        cli.player1,
        cli.player2,
        cli.first_symbol,
    );
    let (player1, player2) = config.players()?;

    let mut session = Session::new(player1, player2);
    let mut game = Game::new(StdConsole::stdio());

    match session.play(&mut game) {
        Ok(outcome) => {
            info!(%outcome, "Game finished");
            Ok(())
        }
        Err(GameError::InputClosed { player }) => {
            warn!(player = %player, "Input closed, abandoning game");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
