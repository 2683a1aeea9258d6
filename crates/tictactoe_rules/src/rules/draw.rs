//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::has_winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner is a draw.
///
/// The winner check comes first: a last move that fills the board and
/// completes a line is a win, not a draw.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && has_winner(board).is_none()
}
