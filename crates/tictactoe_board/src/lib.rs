//! Tic-tac-toe board state and rules.
//!
//! This crate holds the pure game model: the nine cell references, the
//! board grid, the win/tie rules and the player identity. It performs no
//! I/O; the console crate drives turns on top of it.
//!
//! # Example
//!
//! ```
//! use tictactoe_board::{Board, BoardView, CellRef, Symbol};
//!
//! let mut board = Board::new();
//! board.apply_move(CellRef::A1, Symbol::X);
//! board.apply_move(CellRef::B2, Symbol::X);
//! board.apply_move(CellRef::C3, Symbol::X);
//! assert!(board.is_win());
//! assert!(!board.is_tie());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod cell;
mod player;
pub mod rules;

pub use board::{Board, BoardView};
pub use cell::{Cell, CellRef, Symbol};
pub use player::{Participant, Player};
pub use rules::{COLUMNS, DIAGONALS, Line, ROWS};
