//! Tie detection for tic-tac-toe.

use crate::Board;
use tracing::instrument;

/// Checks if every cell is marked.
///
/// A full board is a tie only when nobody has won, so callers check
/// [`is_win`](super::is_win) first.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().all(|(_, cell)| !cell.is_empty())
}
