//! Invariants that hold for every engine state reachable through
//! `apply_move` and `reset`.
//!
//! Checked with `debug_assert!` after each mutation and testable on
//! their own.

use super::{Engine, GameStatus, Player, WINNING_LINES};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violation: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: &'static str,
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation { description })
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// X moves first, so X has as many marks as O or exactly one more.
pub struct MarkBalanceInvariant;

impl Invariant<Engine> for MarkBalanceInvariant {
    fn holds(engine: &Engine) -> bool {
        let x = engine.board().count(Player::X);
        let o = engine.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O or exactly one more"
    }
}

/// While the game runs, the turn belongs to X exactly when mark counts are even.
pub struct TurnConsistentInvariant;

impl Invariant<Engine> for TurnConsistentInvariant {
    fn holds(engine: &Engine) -> bool {
        if engine.status() != GameStatus::InProgress {
            return true;
        }
        let even = engine.board().count(Player::X) == engine.board().count(Player::O);
        (engine.turn() == Player::X) == even
    }

    fn description() -> &'static str {
        "Turn matches mark counts while the game is in progress"
    }
}

/// At most one player owns a completed line.
pub struct SingleWinnerInvariant;

impl Invariant<Engine> for SingleWinnerInvariant {
    fn holds(engine: &Engine) -> bool {
        let board = engine.board();
        let owns_line = |player: Player| {
            WINNING_LINES
                .iter()
                .any(|line| line.iter().all(|pos| board.get(*pos).player() == Some(player)))
        };
        !(owns_line(Player::X) && owns_line(Player::O))
    }

    fn description() -> &'static str {
        "At most one player owns a completed line"
    }
}

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    MarkBalanceInvariant,
    TurnConsistentInvariant,
    SingleWinnerInvariant,
);
