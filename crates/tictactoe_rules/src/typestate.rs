//! Phase-specific typestate structs for a tic-tac-toe round.
//!
//! A round is either in progress (waiting for a move from the player
//! to move) or finished (won or drawn). Each phase is its own type, so a
//! finished round cannot accept moves and always carries its result.

use super::action::{Move, MoveError};
use super::rules::{self, Outcome};
use super::{Board, Player, Position, Square};
use tracing::{debug, instrument};

/// Observable state of the turn controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnState {
    /// Waiting for the given player to move.
    AwaitingMove(Player),
    /// Round ended with a completed line.
    Won(Player),
    /// Round ended with a full board and no line.
    Drawn,
}

impl TurnState {
    /// Returns true for `Won` and `Drawn`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TurnState::AwaitingMove(_))
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Round in progress - can accept moves.
///
/// Starts on an empty board with X to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameInProgress {
    board: Board,
    history: Vec<Move>,
    to_move: Player,
}

impl GameInProgress {
    /// Starts a new round: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
            to_move: Player::X,
        }
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the controller state for this round.
    pub fn state(&self) -> TurnState {
        TurnState::AwaitingMove(self.to_move)
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the free positions in ascending order.
    pub fn valid_moves(&self) -> Vec<Position> {
        self.board.available_moves()
    }

    /// Validates a move without applying it.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn check(&self, action: &Move) -> Result<(), MoveError> {
        if action.player != self.to_move {
            return Err(MoveError::WrongPlayer(action.player));
        }
        if !self.board.is_empty(action.position) {
            return Err(MoveError::Occupied(action.position));
        }
        Ok(())
    }

    /// Places the current player's mark at `position`.
    pub fn place(self, position: Position) -> Result<GameResult, MoveRejected> {
        let action = Move::new(self.to_move, position);
        self.make_move(action)
    }

    /// Makes a move, consuming self and transitioning to the next state.
    ///
    /// An illegal move hands the unchanged round back inside
    /// [`MoveRejected`] so the caller can ask again.
    #[instrument(skip_all, fields(action = %action))]
    pub fn make_move(self, action: Move) -> Result<GameResult, MoveRejected> {
        if let Err(error) = self.check(&action) {
            debug!(%error, "Move rejected");
            return Err(MoveRejected { game: self, error });
        }

        let mut game = self;
        game.board.set(action.position, Square::Occupied(action.player));
        game.history.push(action);

        match rules::outcome(&game.board) {
            Outcome::Win(winner) => {
                debug!(%winner, moves = game.history.len(), "Round won");
                Ok(GameResult::Finished(GameFinished {
                    board: game.board,
                    history: game.history,
                    state: TurnState::Won(winner),
                }))
            }
            Outcome::Draw => {
                debug!(moves = game.history.len(), "Round drawn");
                Ok(GameResult::Finished(GameFinished {
                    board: game.board,
                    history: game.history,
                    state: TurnState::Drawn,
                }))
            }
            Outcome::InProgress => {
                game.to_move = game.to_move.opponent();
                Ok(GameResult::InProgress(game))
            }
        }
    }

    /// Replays moves from a fresh round.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<GameResult, MoveError> {
        let mut game = GameInProgress::new();

        for action in moves {
            match game.make_move(*action).map_err(MoveRejected::into_error)? {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) => return Ok(GameResult::Finished(g)),
            }
        }

        Ok(GameResult::InProgress(game))
    }
}

impl Default for GameInProgress {
    fn default() -> Self {
        Self::new()
    }
}

/// A move that was refused, together with the round it was refused by.
#[derive(Debug, Clone, derive_more::Display)]
#[display("{}", error)]
pub struct MoveRejected {
    game: GameInProgress,
    error: MoveError,
}

impl MoveRejected {
    /// Why the move was refused.
    pub fn error(&self) -> &MoveError {
        &self.error
    }

    /// Takes back the unchanged round.
    pub fn into_game(self) -> GameInProgress {
        self.game
    }

    /// Drops the round and keeps the error.
    pub fn into_error(self) -> MoveError {
        self.error
    }
}

impl std::error::Error for MoveRejected {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Round finished - result determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameFinished {
    board: Board,
    history: Vec<Move>,
    state: TurnState,
}

impl GameFinished {
    /// Returns the terminal state (`Won` or `Drawn`).
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Returns the winner, if the round was won.
    pub fn winner(&self) -> Option<Player> {
        match self.state {
            TurnState::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Returns true if the round was drawn.
    pub fn is_draw(&self) -> bool {
        self.state == TurnState::Drawn
    }

    /// Returns the final board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug)]
pub enum GameResult {
    /// Round continues.
    InProgress(GameInProgress),
    /// Round finished.
    Finished(GameFinished),
}

impl GameResult {
    /// Returns the controller state after the move.
    pub fn state(&self) -> TurnState {
        match self {
            GameResult::InProgress(game) => game.state(),
            GameResult::Finished(game) => game.state(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expect_in_progress(result: Result<GameResult, MoveRejected>) -> GameInProgress {
        match result.expect("legal move") {
            GameResult::InProgress(game) => game,
            GameResult::Finished(game) => panic!("round ended early: {:?}", game.state()),
        }
    }

    #[test]
    fn test_new_round_awaits_x() {
        let game = GameInProgress::new();
        assert_eq!(game.state(), TurnState::AwaitingMove(Player::X));
        assert_eq!(game.valid_moves().len(), 9);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_players_alternate() {
        let game = GameInProgress::new();
        let game = expect_in_progress(game.place(Position::Center));
        assert_eq!(game.to_move(), Player::O);
        let game = expect_in_progress(game.place(Position::TopLeft));
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_occupied_square_returns_unchanged_round() {
        let game = expect_in_progress(GameInProgress::new().place(Position::Center));
        let before = game.clone();

        let rejected = game.place(Position::Center).unwrap_err();
        assert_eq!(
            rejected.error(),
            &MoveError::Occupied(Position::Center)
        );
        let game = rejected.into_game();
        assert_eq!(game, before);
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_wrong_player_rejected() {
        let game = GameInProgress::new();
        let rejected = game
            .make_move(Move::new(Player::O, Position::Center))
            .unwrap_err();
        assert_eq!(rejected.error(), &MoveError::WrongPlayer(Player::O));
        assert!(rejected.into_game().board().is_empty(Position::Center));
    }

    #[test]
    fn test_winning_move_finishes_round() {
        let moves = [
            Move::new(Player::X, Position::TopLeft),
            Move::new(Player::O, Position::MiddleLeft),
            Move::new(Player::X, Position::TopCenter),
            Move::new(Player::O, Position::Center),
            Move::new(Player::X, Position::TopRight),
        ];
        match GameInProgress::replay(&moves).unwrap() {
            GameResult::Finished(game) => {
                assert_eq!(game.state(), TurnState::Won(Player::X));
                assert_eq!(game.winner(), Some(Player::X));
                assert!(game.state().is_terminal());
            }
            GameResult::InProgress(_) => panic!("X completed the top row"),
        }
    }

    #[test]
    fn test_win_on_last_square_beats_draw() {
        // Final board X O X / O X O / O X X; X's ninth mark completes 0-4-8.
        let moves = [
            Move::new(Player::X, Position::TopLeft),
            Move::new(Player::O, Position::TopCenter),
            Move::new(Player::X, Position::TopRight),
            Move::new(Player::O, Position::MiddleLeft),
            Move::new(Player::X, Position::Center),
            Move::new(Player::O, Position::BottomLeft),
            Move::new(Player::X, Position::BottomCenter),
            Move::new(Player::O, Position::MiddleRight),
        ];
        let game = match GameInProgress::replay(&moves).unwrap() {
            GameResult::InProgress(game) => game,
            GameResult::Finished(game) => panic!("ended early: {:?}", game.state()),
        };
        assert_eq!(game.valid_moves(), vec![Position::BottomRight]);
        match game.place(Position::BottomRight).unwrap() {
            GameResult::Finished(game) => {
                assert!(rules::is_full(game.board()));
                assert_eq!(game.state(), TurnState::Won(Player::X));
                assert!(!game.is_draw());
            }
            GameResult::InProgress(_) => panic!("board is full"),
        }
    }

    #[test]
    fn test_full_board_without_line_is_drawn() {
        // X O X / X O O / O X X
        let moves = [
            Move::new(Player::X, Position::TopLeft),
            Move::new(Player::O, Position::TopCenter),
            Move::new(Player::X, Position::TopRight),
            Move::new(Player::O, Position::Center),
            Move::new(Player::X, Position::MiddleLeft),
            Move::new(Player::O, Position::BottomLeft),
            Move::new(Player::X, Position::BottomCenter),
            Move::new(Player::O, Position::MiddleRight),
            Move::new(Player::X, Position::BottomRight),
        ];
        match GameInProgress::replay(&moves).unwrap() {
            GameResult::Finished(game) => {
                assert_eq!(game.state(), TurnState::Drawn);
                assert_eq!(game.winner(), None);
                assert_eq!(game.history().len(), 9);
            }
            GameResult::InProgress(_) => panic!("board is full"),
        }
    }

    #[test]
    fn test_replay_rejects_illegal_history() {
        let moves = [
            Move::new(Player::X, Position::Center),
            Move::new(Player::O, Position::Center),
        ];
        assert_eq!(
            GameInProgress::replay(&moves).unwrap_err(),
            MoveError::Occupied(Position::Center)
        );
    }
}
