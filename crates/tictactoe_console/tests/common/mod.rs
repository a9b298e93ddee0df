//! Shared test doubles for the console game tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use tictactoe_board::{Board, BoardView, Cell, CellRef, Player, Symbol};

pub fn ada() -> Player {
    Player::new("Ada".to_string(), Symbol::X)
}

pub fn grace() -> Player {
    Player::new("Grace".to_string(), Symbol::O)
}

/// Board whose win/tie answers are fixed, backed by a real grid for occupancy.
#[derive(Debug, Default)]
pub struct StubBoard {
    pub grid: Board,
    pub win: bool,
    pub tie: bool,
}

impl StubBoard {
    pub fn new(win: bool, tie: bool) -> Self {
        Self {
            grid: Board::new(),
            win,
            tie,
        }
    }
}

impl BoardView for StubBoard {
    fn apply_move(&mut self, cell: CellRef, symbol: Symbol) {
        self.grid.apply_move(cell, symbol);
    }

    fn cell(&self, cell: CellRef) -> Cell {
        self.grid.cell(cell)
    }

    fn is_win(&self) -> bool {
        self.win
    }

    fn is_tie(&self) -> bool {
        self.tie
    }

    fn render(&self) -> String {
        self.grid.to_string()
    }
}

/// Board answering `is_win` from a script shared between several boards,
/// so the sequence of checks across both players can be controlled.
#[derive(Debug, Default)]
pub struct ScriptedBoard {
    pub grid: Board,
    pub wins: Rc<RefCell<VecDeque<bool>>>,
    pub win_checks: Rc<RefCell<usize>>,
}

impl ScriptedBoard {
    pub fn sharing(wins: &Rc<RefCell<VecDeque<bool>>>, checks: &Rc<RefCell<usize>>) -> Self {
        Self {
            grid: Board::new(),
            wins: Rc::clone(wins),
            win_checks: Rc::clone(checks),
        }
    }
}

impl BoardView for ScriptedBoard {
    fn apply_move(&mut self, cell: CellRef, symbol: Symbol) {
        self.grid.apply_move(cell, symbol);
    }

    fn cell(&self, cell: CellRef) -> Cell {
        self.grid.cell(cell)
    }

    fn is_win(&self) -> bool {
        *self.win_checks.borrow_mut() += 1;
        self.wins.borrow_mut().pop_front().unwrap_or(false)
    }

    fn is_tie(&self) -> bool {
        false
    }

    fn render(&self) -> String {
        self.grid.to_string()
    }
}
