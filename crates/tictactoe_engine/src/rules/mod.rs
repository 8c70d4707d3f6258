//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Status is always recomputed from
//! the board through [`evaluate`], so it cannot drift from the cells.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Line, WINNING_LINES, check_winner};

use super::{Board, GameStatus};
use tracing::instrument;

/// Classifies the board and returns the completed line on a win.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> (GameStatus, Option<Line>) {
    if let Some((player, line)) = check_winner(board) {
        (GameStatus::Won(player), Some(line))
    } else if is_full(board) {
        (GameStatus::Draw, None)
    } else {
        (GameStatus::InProgress, None)
    }
}
