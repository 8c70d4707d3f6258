//! Pure tic-tac-toe game logic.
//!
//! The [`Engine`] owns the board, the player to move, and session scores.
//! Game status and the winning line are derived from the board after every
//! move. Everything here is synchronous and UI-agnostic; a presentation
//! layer drives it through [`Engine::apply_move`] and [`Engine::reset`].
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Engine, GameStatus, Player};
//!
//! let mut engine = Engine::new();
//! for index in [0, 3, 1, 4, 2] {
//!     engine.apply_move(index).expect("legal move");
//! }
//! assert_eq!(engine.status(), GameStatus::Won(Player::X));
//! assert_eq!(engine.scores().get(Player::X), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError, MoveOutcome};
pub use engine::Engine;
pub use position::Position;
pub use rules::{Line, WINNING_LINES};
pub use types::{Board, GameStatus, Player, Scores, Square};
