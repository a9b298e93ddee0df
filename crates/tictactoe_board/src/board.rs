//! The 3x3 grid and the board capability the turn coordinator relies on.

use crate::cell::{Cell, CellRef, Symbol};
use crate::rules;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// What the turn coordinator needs from a board.
///
/// [`Board`] is the real implementation; tests substitute scripted boards
/// to drive the coordinator through specific win/tie sequences.
pub trait BoardView {
    /// Marks `cell` with `symbol`.
    ///
    /// Performs no validation: the caller has already checked that the cell
    /// is empty.
    fn apply_move(&mut self, cell: CellRef, symbol: Symbol);

    /// Returns the contents of `cell`.
    fn cell(&self, cell: CellRef) -> Cell;

    /// True if some row, column or diagonal holds three equal marks.
    fn is_win(&self) -> bool;

    /// True if no cell is empty.
    fn is_tie(&self) -> bool;

    /// Human-readable rendering of the grid.
    fn render(&self) -> String;

    /// Whether `cell` is still free.
    fn is_open(&self, cell: CellRef) -> bool {
        self.cell(cell).is_empty()
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order, indexed by [`CellRef::index`].
    cells: [Cell; 9],
}

impl Board {
    /// Creates a board with all nine cells empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `cell` with `symbol`, overwriting whatever was there.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, cell: CellRef, symbol: Symbol) {
        self.cells[cell.index()] = Cell::Marked(symbol);
        trace!(filled = self.filled(), "Cell marked");
    }

    /// Returns the contents of `cell`.
    pub fn cell(&self, cell: CellRef) -> Cell {
        self.cells[cell.index()]
    }

    /// Iterates every `(reference, value)` pair in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (CellRef, Cell)> + '_ {
        CellRef::ALL.into_iter().map(|r| (r, self.cell(r)))
    }

    /// References of all cells that are still empty.
    pub fn empty_cells(&self) -> Vec<CellRef> {
        self.cells()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(r, _)| r)
            .collect()
    }

    /// Number of marked cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// True if any of the eight lines is complete.
    pub fn is_win(&self) -> bool {
        rules::is_win(self)
    }

    /// True if the board is full.
    pub fn is_tie(&self) -> bool {
        rules::is_full(self)
    }
}

impl BoardView for Board {
    fn apply_move(&mut self, cell: CellRef, symbol: Symbol) {
        Board::apply_move(self, cell, symbol);
    }

    fn cell(&self, cell: CellRef) -> Cell {
        Board::cell(self, cell)
    }

    fn is_win(&self) -> bool {
        Board::is_win(self)
    }

    fn is_tie(&self) -> bool {
        Board::is_tie(self)
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "   1   2   3")?;
        for (row, label) in ['A', 'B', 'C'].into_iter().enumerate() {
            let at = |col: usize| self.cells[row * 3 + col];
            writeln!(f, "{}  {} | {} | {}", label, at(0), at(1), at(2))?;
            if row < 2 {
                writeln!(f, "  ---+---+---")?;
            }
        }
        Ok(())
    }
}
