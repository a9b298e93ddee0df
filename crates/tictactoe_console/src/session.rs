//! A single game run: two players and their boards.

use crate::console::Console;
use crate::error::GameError;
use crate::game::{Game, Outcome};
use derive_getters::Getters;
use tictactoe_board::{Board, BoardView, Participant, Player};
use tracing::{info, instrument};

/// Everything one game needs: the players, a private board for each and
/// the shared game board.
///
/// The session owns the boards and lends them to [`Game`] for the length of
/// a game.
#[derive(Debug, Clone, Getters)]
pub struct Session<P = Player, B = Board> {
    player1: P,
    player2: P,
    player1_board: B,
    player2_board: B,
    game_board: B,
}

impl<P: Participant> Session<P, Board> {
    /// Creates a session with three empty boards.
    #[instrument(skip_all, fields(player1 = player1.name(), player2 = player2.name()))]
    pub fn new(player1: P, player2: P) -> Self {
        info!("Creating game session");
        Self::with_boards(player1, player2, Board::new(), Board::new(), Board::new())
    }
}

impl<P: Participant, B: BoardView> Session<P, B> {
    /// Creates a session over caller-provided boards.
    pub fn with_boards(
        player1: P,
        player2: P,
        player1_board: B,
        player2_board: B,
        game_board: B,
    ) -> Self {
        Self {
            player1,
            player2,
            player1_board,
            player2_board,
            game_board,
        }
    }

    /// Plays the game to the end on `game`'s console.
    pub fn play<C: Console>(&mut self, game: &mut Game<C>) -> Result<Outcome, GameError> {
        let Self {
            player1,
            player2,
            player1_board,
            player2_board,
            game_board,
        } = self;
        game.play_game(&*player1, &*player2, player1_board, player2_board, game_board)
    }
}
