//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here stores state: the
//! outcome of a round is always derived from the board in front of it.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{has_winner, LINES};

use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of a board, derived from its squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line completed and empty squares remain.
    InProgress,
    /// Player completed a line.
    Win(Player),
    /// Board is full with no completed line.
    Draw,
}

impl Outcome {
    /// Returns true for a win or a draw.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Evaluates the board. A win takes precedence over a draw.
#[instrument(skip(board))]
pub fn outcome(board: &Board) -> Outcome {
    if let Some(winner) = has_winner(board) {
        Outcome::Win(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
