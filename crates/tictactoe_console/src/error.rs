//! Error types for the console game.

use derive_more::{Display, Error};
use tictactoe_board::CellRef;
use tracing::instrument;

/// A line of player input that cannot be played.
///
/// Both kinds are recovered inside a turn: the message is shown and the
/// player is asked again. The `Display` text is exactly what the player sees.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Input is not one of the nine cell references.
    #[display("Invalid cell.")]
    InvalidCell {
        /// What the player typed, trimmed.
        input: String,
    },

    /// Input names a cell that is already marked on the shared board.
    #[display("Cell already chosen.")]
    CellOccupied {
        /// The occupied cell.
        cell: CellRef,
    },
}

/// A failure that ends the game loop.
#[derive(Debug, Display, Error)]
pub enum GameError {
    /// Reading from or writing to the console failed.
    #[display("Console I/O failed: {source}")]
    Io {
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Input ended while a player was being asked for a cell.
    #[display("Input closed while waiting for {player} to play")]
    InputClosed {
        /// Name of the player whose turn it was.
        player: String,
    },
}

impl From<std::io::Error> for GameError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source }
    }
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
