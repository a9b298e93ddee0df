//! Win detection logic for tic-tac-toe.

use crate::{Board, CellRef, Symbol};
use tracing::{debug, instrument};

/// Three cells that win the game when uniformly marked.
pub type Line = [CellRef; 3];

/// The three horizontal lines.
pub const ROWS: [Line; 3] = [
    [CellRef::A1, CellRef::A2, CellRef::A3],
    [CellRef::B1, CellRef::B2, CellRef::B3],
    [CellRef::C1, CellRef::C2, CellRef::C3],
];

/// The three vertical lines.
pub const COLUMNS: [Line; 3] = [
    [CellRef::A1, CellRef::B1, CellRef::C1],
    [CellRef::A2, CellRef::B2, CellRef::C2],
    [CellRef::A3, CellRef::B3, CellRef::C3],
];

/// The two diagonals.
pub const DIAGONALS: [Line; 2] = [
    [CellRef::A1, CellRef::B2, CellRef::C3],
    [CellRef::A3, CellRef::B2, CellRef::C1],
];

/// Symbol owning `line`, if all three cells hold it.
fn line_owner(board: &Board, [a, b, c]: Line) -> Option<Symbol> {
    let symbol = board.cell(a).symbol()?;
    (board.cell(b).symbol() == Some(symbol) && board.cell(c).symbol() == Some(symbol))
        .then_some(symbol)
}

/// True if any line in `lines` holds three equal marks.
pub fn win_per_group(board: &Board, lines: &[Line]) -> bool {
    lines.iter().any(|&line| line_owner(board, line).is_some())
}

/// True if any row, column or diagonal is complete.
#[instrument(skip(board))]
pub fn is_win(board: &Board) -> bool {
    let won = win_per_group(board, &ROWS)
        || win_per_group(board, &COLUMNS)
        || win_per_group(board, &DIAGONALS);
    debug!(won, "Win check");
    won
}

/// First complete line found, if any.
pub fn winning_line(board: &Board) -> Option<Line> {
    ROWS.iter()
        .chain(COLUMNS.iter())
        .chain(DIAGONALS.iter())
        .copied()
        .find(|&line| line_owner(board, line).is_some())
}

/// Symbol of the winner, if any line is complete.
pub fn winner(board: &Board) -> Option<Symbol> {
    winning_line(board).and_then(|line| line_owner(board, line))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(CellRef, Symbol)]) -> Board {
        let mut board = Board::new();
        for &(cell, symbol) in marks {
            board.apply_move(cell, symbol);
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!is_win(&board));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_row_group_win() {
        let board = board_with(&[
            (CellRef::B1, Symbol::O),
            (CellRef::B2, Symbol::O),
            (CellRef::B3, Symbol::O),
        ]);
        assert!(win_per_group(&board, &ROWS));
        assert!(!win_per_group(&board, &COLUMNS));
        assert!(!win_per_group(&board, &DIAGONALS));
        assert!(is_win(&board));
    }

    #[test]
    fn test_column_group_win() {
        let board = board_with(&[
            (CellRef::A3, Symbol::X),
            (CellRef::B3, Symbol::X),
            (CellRef::C3, Symbol::X),
        ]);
        assert!(!win_per_group(&board, &ROWS));
        assert!(win_per_group(&board, &COLUMNS));
        assert!(is_win(&board));
        assert_eq!(winning_line(&board), Some(COLUMNS[2]));
    }

    #[test]
    fn test_diagonal_group_win() {
        let board = board_with(&[
            (CellRef::A1, Symbol::X),
            (CellRef::B2, Symbol::X),
            (CellRef::C3, Symbol::X),
        ]);
        assert!(win_per_group(&board, &DIAGONALS));
        assert!(is_win(&board));
        assert_eq!(winner(&board), Some(Symbol::X));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = board_with(&[
            (CellRef::A3, Symbol::O),
            (CellRef::B2, Symbol::O),
            (CellRef::C1, Symbol::O),
        ]);
        assert_eq!(winner(&board), Some(Symbol::O));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (CellRef::A1, Symbol::X),
            (CellRef::A2, Symbol::O),
            (CellRef::A3, Symbol::X),
        ]);
        assert!(!win_per_group(&board, &ROWS));
        assert!(!is_win(&board));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(CellRef::A1, Symbol::X), (CellRef::B1, Symbol::X)]);
        assert!(!is_win(&board));
    }
}
