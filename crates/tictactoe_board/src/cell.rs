//! Cell references, cell values and player symbols.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

/// One of the nine board positions: row letter (A-C) then column digit (1-3).
///
/// Parsing is exact, so `"A1"` is a reference while `"a1"`, `"A11"` and
/// `"D1"` are not.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    strum::Display,
)]
pub enum CellRef {
    /// Top-left.
    A1,
    /// Top-center.
    A2,
    /// Top-right.
    A3,
    /// Middle-left.
    B1,
    /// Center.
    B2,
    /// Middle-right.
    B3,
    /// Bottom-left.
    C1,
    /// Bottom-center.
    C2,
    /// Bottom-right.
    C3,
}

impl CellRef {
    /// All nine references in row-major order.
    pub const ALL: [CellRef; 9] = [
        CellRef::A1,
        CellRef::A2,
        CellRef::A3,
        CellRef::B1,
        CellRef::B2,
        CellRef::B3,
        CellRef::C1,
        CellRef::C2,
        CellRef::C3,
    ];

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Row number (0-2), where 0 is row `A`.
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Column number (0-2), where 0 is column `1`.
    pub fn column(self) -> usize {
        self.index() % 3
    }

    /// Reference at a row-major index, if the index is on the board.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parses user input, returning `None` unless it names one of the nine cells.
    pub fn parse(input: &str) -> Option<Self> {
        input.parse().ok()
    }
}

/// The mark a player places.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    strum::Display,
)]
pub enum Symbol {
    /// Cross.
    X,
    /// Nought.
    O,
}

impl Symbol {
    /// Returns the other symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

/// The contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Marked by a player.
    Marked(Symbol),
}

impl Cell {
    /// Whether the cell is still free.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The symbol in this cell, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Marked(symbol) => Some(symbol),
        }
    }
}

impl From<Symbol> for Cell {
    fn from(symbol: Symbol) -> Self {
        Cell::Marked(symbol)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => write!(f, " "),
            Cell::Marked(symbol) => write!(f, "{}", symbol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_accepts_all_nine_references() {
        for cell in CellRef::iter() {
            assert_eq!(CellRef::parse(&cell.to_string()), Some(cell));
        }
        assert_eq!(CellRef::iter().count(), 9);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for input in ["A11", "D1", "A0", "A4", "1A", "", "a1", " A1"] {
            assert_eq!(CellRef::parse(input), None, "input {:?}", input);
        }
    }

    #[test]
    fn test_row_and_column() {
        assert_eq!((CellRef::A1.row(), CellRef::A1.column()), (0, 0));
        assert_eq!((CellRef::B3.row(), CellRef::B3.column()), (1, 2));
        assert_eq!((CellRef::C2.row(), CellRef::C2.column()), (2, 1));
        assert_eq!(CellRef::from_index(8), Some(CellRef::C3));
        assert_eq!(CellRef::from_index(9), None);
    }

    #[test]
    fn test_symbol_opponent() {
        assert_eq!(Symbol::X.opponent(), Symbol::O);
        assert_eq!(Symbol::O.opponent(), Symbol::X);
        assert_eq!("O".parse::<Symbol>().ok(), Some(Symbol::O));
    }

    #[test]
    fn test_cell_default_is_empty() {
        assert!(Cell::default().is_empty());
        assert_eq!(Cell::from(Symbol::X).symbol(), Some(Symbol::X));
    }
}
