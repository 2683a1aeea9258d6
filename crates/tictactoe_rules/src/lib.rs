//! Pure tic-tac-toe game logic.
//!
//! - [`Board`] holds nine [`Square`]s and knows which positions are free.
//! - [`rules`] derives the [`Outcome`] of a board: winner first, then draw.
//! - [`GameInProgress`] and [`GameFinished`] form the turn controller: X
//!   moves first, players alternate, and a round ends on a win or a draw.
//!
//! No I/O happens here; callers obtain moves however they like and feed
//! them through [`parse_move`] and [`GameInProgress::place`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod position;
pub mod rules;
mod typestate;
mod types;

pub use action::{parse_move, Move, MoveError};
pub use position::Position;
pub use rules::{has_winner, is_draw, is_full, outcome, Outcome};
pub use typestate::{GameFinished, GameInProgress, GameResult, MoveRejected, TurnState};
pub use types::{Board, Player, Square};

/// Creates an empty board.
pub fn create_board() -> Board {
    Board::new()
}

/// Free positions of `board` in ascending index order.
pub fn available_moves(board: &Board) -> Vec<Position> {
    board.available_moves()
}

/// Renders `board` as three rows of three cells.
pub fn render(board: &Board) -> String {
    board.render()
}
