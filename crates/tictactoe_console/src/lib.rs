//! Two-player tic-tac-toe on the terminal.
//!
//! # Architecture
//!
//! - **Game**: the turn coordinator; prompts, validates and applies moves
//!   and decides when the game is over
//! - **Session**: owns the two players and their three boards
//! - **Console**: line-based I/O, real or scripted
//! - **Config**: player names and symbols from TOML and flags
//!
//! # Example
//!
//! ```
//! use tictactoe_console::{Game, Outcome, ScriptedConsole, Session};
//! use tictactoe_board::{Player, Symbol};
//!
//! let console = ScriptedConsole::new(["A1", "B1", "A2", "B2", "A3"]);
//! let mut game = Game::new(console);
//! let mut session = Session::new(
//!     Player::new("Ada".to_string(), Symbol::X),
//!     Player::new("Grace".to_string(), Symbol::O),
//! );
//!
//! let outcome = session.play(&mut game).unwrap();
//! assert_eq!(outcome, Outcome::Win { name: "Ada".to_string(), symbol: Symbol::X });
//! assert_eq!(game.console().count("Ada, you win!"), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod error;
mod game;
mod session;

pub use config::GameConfig;
pub use console::{Console, ScriptedConsole, StdConsole};
pub use error::{ConfigError, GameError, InputError};
pub use game::{Game, Outcome, WELCOME, validate_cell};
pub use session::Session;
