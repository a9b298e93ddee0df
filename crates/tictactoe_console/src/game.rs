//! Turn coordination for a two-player game.
//!
//! [`Game`] owns the console and drives the turn loop over boards it is
//! lent by the caller. Each player has a private board holding only their
//! own moves, used for the win check; the shared game board holds every
//! move and is used for occupancy and the tie check.

use crate::console::Console;
use crate::error::{GameError, InputError};
use serde::{Deserialize, Serialize};
use tictactoe_board::{BoardView, CellRef, Participant, Symbol};
use tracing::{debug, info, instrument};

/// Banner printed once when a game starts.
pub const WELCOME: &str = "Welcome to Tic-Tac-Toe!\n\
Take turns marking the board. Name a cell by row letter and column number, \
from A1 (top-left) to C3 (bottom-right).\n\
Three in a row, column or diagonal wins.";

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// A player completed a line.
    #[display("{name} won as {symbol}")]
    Win {
        /// Winner's display name.
        name: String,
        /// Winner's symbol.
        symbol: Symbol,
    },
    /// The board filled up with no line.
    #[display("tie")]
    Tie,
}

/// Tic-tac-toe turn coordinator.
#[derive(Debug)]
pub struct Game<C> {
    console: C,
}

impl<C: Console> Game<C> {
    /// Creates a coordinator talking to `console`.
    pub fn new(console: C) -> Self {
        Self { console }
    }

    /// Returns the console.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Consumes the coordinator, returning the console.
    pub fn into_console(self) -> C {
        self.console
    }

    /// Prints the welcome banner.
    pub fn welcome_message(&mut self) -> Result<(), GameError> {
        self.console.write_line(WELCOME)
    }

    /// Plays a full game, alternating turns starting with `player1`.
    ///
    /// After every turn the acting player's board and the shared board are
    /// checked; the loop stops at the first check that ends the game.
    #[instrument(skip_all, fields(player1 = player1.name(), player2 = player2.name()))]
    pub fn play_game<P, B>(
        &mut self,
        player1: &P,
        player2: &P,
        player1_board: &mut B,
        player2_board: &mut B,
        game_board: &mut B,
    ) -> Result<Outcome, GameError>
    where
        P: Participant,
        B: BoardView,
    {
        info!("Starting game");
        self.welcome_message()?;

        let mut seats = [(player1, player1_board), (player2, player2_board)];
        let mut turns = 0usize;
        loop {
            for (player, board) in seats.iter_mut() {
                self.turn(*player, &mut **board, &mut *game_board)?;
                turns += 1;
                if let Some(outcome) = self.end_state(*player, &**board, &*game_board)? {
                    info!(turns, %outcome, "Game over");
                    return Ok(outcome);
                }
            }
        }
    }

    /// Asks `player` for cells until a legal one is given, then plays it.
    ///
    /// The move is applied to both the player's board and the shared board,
    /// and the shared board is displayed. Returns the cell played.
    #[instrument(skip_all, fields(player = player.name()))]
    pub fn turn<P, B>(
        &mut self,
        player: &P,
        player_board: &mut B,
        game_board: &mut B,
    ) -> Result<CellRef, GameError>
    where
        P: Participant,
        B: BoardView,
    {
        let prompt = format!("{}, make your play:", player.name());
        let cell = loop {
            self.console.write_line(&prompt)?;
            let Some(input) = self.console.read_line()? else {
                return Err(GameError::InputClosed {
                    player: player.name().to_string(),
                });
            };
            match validate_cell(&input, &*game_board) {
                Ok(cell) => break cell,
                Err(e) => {
                    debug!(input = input.trim(), error = ?e, "Rejected input");
                    self.console.write_line(&e.to_string())?;
                }
            }
        };

        let symbol = player.symbol();
        player_board.apply_move(cell, symbol);
        game_board.apply_move(cell, symbol);
        debug!(%cell, %symbol, "Move applied");

        self.console.write_line(&game_board.render())?;
        Ok(cell)
    }

    /// Checks whether the game ended after `player`'s turn.
    ///
    /// A win on the player's own board is announced first; otherwise a full
    /// shared board is announced as a tie. Prints at most one message.
    pub fn game_end<P, B>(
        &mut self,
        player: &P,
        player_board: &B,
        game_board: &B,
    ) -> Result<bool, GameError>
    where
        P: Participant,
        B: BoardView,
    {
        Ok(self.end_state(player, player_board, game_board)?.is_some())
    }

    #[instrument(skip_all, fields(player = player.name()))]
    fn end_state<P, B>(
        &mut self,
        player: &P,
        player_board: &B,
        game_board: &B,
    ) -> Result<Option<Outcome>, GameError>
    where
        P: Participant,
        B: BoardView,
    {
        if player_board.is_win() {
            self.console
                .write_line(&format!("{}, you win!", player.name()))?;
            return Ok(Some(Outcome::Win {
                name: player.name().to_string(),
                symbol: player.symbol(),
            }));
        }
        if game_board.is_tie() {
            self.console.write_line("Game tie!")?;
            return Ok(Some(Outcome::Tie));
        }
        Ok(None)
    }
}

/// Checks one line of input against the shared board.
///
/// Surrounding whitespace is ignored; the rest must be one of the nine
/// references exactly and the cell must still be empty.
pub fn validate_cell<B: BoardView>(input: &str, game_board: &B) -> Result<CellRef, InputError> {
    let input = input.trim();
    let cell = CellRef::parse(input).ok_or_else(|| InputError::InvalidCell {
        input: input.to_string(),
    })?;
    if !game_board.is_open(cell) {
        return Err(InputError::CellOccupied { cell });
    }
    Ok(cell)
}
