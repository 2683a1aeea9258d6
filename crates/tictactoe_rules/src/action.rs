//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and can be validated independently of execution.

use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Input is not the plain decimal number of a cell.
    #[display("{:?} is not a cell number", _0)]
    Malformed(String),

    /// Number outside 1-9.
    #[display("Cell {} is outside 1-9", _0)]
    OutOfRange(u64),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),
}

impl std::error::Error for MoveError {}

/// Parses a player's cell number (1-9) into a position that is free on `board`.
///
/// The trimmed input must be spelled exactly as the cell number, so
/// `"5"` is accepted while `"05"` and `"+5"` are not. The board is only
/// read, never changed.
#[instrument(skip(board))]
pub fn parse_move(input: &str, board: &Board) -> Result<Position, MoveError> {
    let token = input.trim();
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MoveError::Malformed(token.to_string()));
    }

    let Ok(number) = token.parse::<u64>() else {
        return Err(MoveError::OutOfRange(u64::MAX));
    };
    if number.to_string() != token {
        return Err(MoveError::Malformed(token.to_string()));
    }

    let position = usize::try_from(number)
        .ok()
        .and_then(Position::from_number)
        .ok_or(MoveError::OutOfRange(number))?;

    if !board.is_empty(position) {
        return Err(MoveError::Occupied(position));
    }

    Ok(position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_parse_accepts_free_cells() {
        let board = Board::new();
        assert_eq!(parse_move("1", &board), Ok(Position::TopLeft));
        assert_eq!(parse_move(" 5 \n", &board), Ok(Position::Center));
        assert_eq!(parse_move("9", &board), Ok(Position::BottomRight));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        let board = Board::new();
        for input in ["", "abc", "-1", "+5", "05", "4.0", "five"] {
            assert!(
                matches!(parse_move(input, &board), Err(MoveError::Malformed(_))),
                "{input:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        let board = Board::new();
        assert_eq!(parse_move("0", &board), Err(MoveError::OutOfRange(0)));
        assert_eq!(parse_move("10", &board), Err(MoveError::OutOfRange(10)));
        assert_eq!(
            parse_move("99999999999999999999999", &board),
            Err(MoveError::OutOfRange(u64::MAX))
        );
    }

    #[test]
    fn test_parse_rejects_occupied() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        let before = board.clone();

        assert_eq!(
            parse_move("5", &board),
            Err(MoveError::Occupied(Position::Center))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_display() {
        let action = Move::new(Player::O, Position::BottomLeft);
        assert_eq!(action.to_string(), "O -> Bottom-left");
    }

    #[test]
    fn test_move_serializes_with_named_fields() {
        let action = Move::new(Player::X, Position::Center);
        let json = serde_json::to_value(action).unwrap();
        assert_eq!(json, serde_json::json!({"player": "X", "position": "Center"}));
    }
}
