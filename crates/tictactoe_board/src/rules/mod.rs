//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Win lines are split
//! into rows, columns and diagonals; a board is a win if any group holds a
//! complete line, and the groups may be checked in any order.

pub mod tie;
pub mod win;

pub use tie::is_full;
pub use win::{COLUMNS, DIAGONALS, Line, ROWS, is_win, win_per_group, winner, winning_line};
