//! Console tic-tac-toe for two players at one keyboard.
//!
//! # Architecture
//!
//! - **Rules**: board, win/draw detection and the turn controller live in
//!   the [`tictactoe_rules`] crate and are re-exported here.
//! - **Console**: [`Console`] abstracts line input and output;
//!   [`TerminalConsole`] implements it over any reader and writer.
//! - **Session**: [`Session`] plays rounds until the players stop.
//! - **Config**: [`GameConfig`] selects the [`Locale`] and the replies
//!   that start another round.
//!
//! # Example
//!
//! ```no_run
//! use console_tictactoe::{GameConfig, Session, TerminalConsole};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut session = Session::new(TerminalConsole::stdio(), &GameConfig::default())?;
//! let summary = session.run()?;
//! println!("{} rounds", summary.rounds());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod locale;
mod session;

pub use cli::Cli;
pub use config::{Affirmatives, ConfigError, GameConfig};
pub use console::{Console, ConsoleError, TerminalConsole};
pub use locale::Locale;
pub use session::{Session, SessionSummary};

pub use tictactoe_rules::rules;
pub use tictactoe_rules::{
    available_moves, create_board, has_winner, is_draw, is_full, outcome, parse_move, render,
    Board, GameFinished, GameInProgress, GameResult, Move, MoveError, MoveRejected, Outcome,
    Player, Position, Square, TurnState,
};
