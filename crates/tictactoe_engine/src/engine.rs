//! The tic-tac-toe engine: board, turn, and session scores.

use super::action::{Move, MoveError, MoveOutcome};
use super::invariants::{EngineInvariants, InvariantSet};
use super::rules::{self, Line};
use super::{Board, GameStatus, Player, Position, Scores, Square};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Owned game engine for a single play session.
///
/// Board and turn are per game and cleared by [`Engine::reset`]; scores live
/// for the whole session. Status is recomputed from the board on every
/// query, so there is no stored flag to fall out of sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Engine {
    pub(crate) board: Board,
    turn: Player,
    scores: Scores,
}

impl Engine {
    /// The player who moves first after every reset.
    pub const FIRST_PLAYER: Player = Player::X;

    /// Creates a new engine with an empty board and zero scores.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Self::FIRST_PLAYER,
            scores: Scores::default(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move next.
    ///
    /// Frozen at the last mover once the game is over.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns session scores.
    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// Returns the current status, derived from the board.
    pub fn status(&self) -> GameStatus {
        rules::evaluate(&self.board).0
    }

    /// Returns the completed line when the game has been won.
    pub fn winning_line(&self) -> Option<Line> {
        rules::evaluate(&self.board).1
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// Empty positions while the game runs; none once it is over.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Places the current player's mark at board index `index` (0-8).
    ///
    /// A rejected move leaves the engine untouched.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        if self.is_over() {
            debug!(index, "Rejected move: game over");
            return Err(MoveError::GameOver);
        }
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.place(position)
    }

    /// Places the current player's mark at `position`.
    #[instrument(skip(self))]
    pub fn place(&mut self, position: Position) -> Result<MoveOutcome, MoveError> {
        if self.is_over() {
            debug!(%position, "Rejected move: game over");
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(position) {
            debug!(%position, "Rejected move: square occupied");
            return Err(MoveError::SquareOccupied(position));
        }

        let action = Move::new(self.turn, position);
        self.board.set(position, Square::Occupied(action.player));

        let (status, winning_line) = rules::evaluate(&self.board);
        match status {
            GameStatus::Won(player) => {
                self.scores.record_win(player);
                info!(%player, ?winning_line, score = self.scores.get(player), "Game won");
            }
            GameStatus::Draw => info!("Game drawn"),
            GameStatus::InProgress => self.turn = self.turn.opponent(),
        }
        debug!(%action, ?status, "Move applied");

        self.debug_check_invariants();

        Ok(MoveOutcome {
            action,
            status,
            winning_line,
        })
    }

    /// Clears the board and gives the first move back to X.
    ///
    /// Scores are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = Self::FIRST_PLAYER;
        info!(
            score_x = self.scores.get(Player::X),
            score_o = self.scores.get(Player::O),
            "Board reset"
        );
        self.debug_check_invariants();
    }

    fn debug_check_invariants(&self) {
        debug_assert_eq!(EngineInvariants::check_all(self), Ok(()));
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
