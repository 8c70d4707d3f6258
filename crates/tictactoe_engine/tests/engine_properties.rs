//! Property-based tests for the engine.
//!
//! Random sequences of moves (including out-of-range indices) and resets
//! are driven through the public API and each step is checked against the
//! previous state.

use proptest::prelude::*;
use tictactoe_engine::{Board, Engine, GameStatus, Player, Position, Square, WINNING_LINES};

#[derive(Debug, Clone, Copy)]
enum Op {
    Move(usize),
    Reset,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        10 => (0usize..12).prop_map(Op::Move),
        1 => Just(Op::Reset),
    ]
}

fn owns_line(board: &Board, player: Player) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == Square::Occupied(player)))
}

proptest! {
    #[test]
    fn every_step_respects_engine_rules(ops in proptest::collection::vec(arb_op(), 0..60)) {
        let mut engine = Engine::new();

        for op in ops {
            let before = engine.clone();
            match op {
                Op::Reset => {
                    engine.reset();
                    prop_assert_eq!(engine.board(), &Board::new());
                    prop_assert_eq!(engine.turn(), Player::X);
                    prop_assert_eq!(engine.status(), GameStatus::InProgress);
                    prop_assert_eq!(engine.scores(), before.scores());
                }
                Op::Move(index) => match engine.apply_move(index) {
                    Err(_) => {
                        // Rejections are pure no-ops.
                        prop_assert_eq!(&engine, &before);
                    }
                    Ok(outcome) => {
                        let pos = Position::from_index(index).expect("accepted index is on the board");
                        let mover = before.turn();

                        prop_assert_eq!(before.status(), GameStatus::InProgress);
                        prop_assert_eq!(before.board().get(pos), Square::Empty);
                        prop_assert_eq!(engine.board().get(pos), Square::Occupied(mover));
                        for other in Position::ALL.into_iter().filter(|p| *p != pos) {
                            prop_assert_eq!(engine.board().get(other), before.board().get(other));
                        }
                        prop_assert_eq!(outcome.status, engine.status());

                        match outcome.status {
                            GameStatus::InProgress => {
                                prop_assert_eq!(engine.turn(), mover.opponent());
                                prop_assert_eq!(engine.scores(), before.scores());
                            }
                            GameStatus::Won(player) => {
                                prop_assert_eq!(player, mover);
                                prop_assert!(owns_line(engine.board(), player));
                                prop_assert!(!owns_line(before.board(), player));
                                let line = outcome.winning_line.expect("win carries its line");
                                prop_assert!(line.iter().all(|p| engine.board().get(*p) == Square::Occupied(player)));
                                prop_assert_eq!(engine.scores().get(player), before.scores().get(player) + 1);
                                prop_assert_eq!(
                                    engine.scores().get(player.opponent()),
                                    before.scores().get(player.opponent())
                                );
                                prop_assert_eq!(engine.turn(), mover);
                            }
                            GameStatus::Draw => {
                                prop_assert!(outcome.winning_line.is_none());
                                prop_assert!(engine.board().squares().iter().all(|s| *s != Square::Empty));
                                prop_assert!(!owns_line(engine.board(), Player::X));
                                prop_assert!(!owns_line(engine.board(), Player::O));
                                prop_assert_eq!(engine.turn(), mover);
                            }
                        }
                    }
                },
            }
        }
    }

    #[test]
    fn terminal_games_reject_every_index(moves in proptest::collection::vec(0usize..9, 0..30), probe in 0usize..12) {
        let mut engine = Engine::new();
        for index in moves {
            let _ = engine.apply_move(index);
        }
        if engine.is_over() {
            let before = engine.clone();
            prop_assert!(engine.apply_move(probe).is_err());
            prop_assert_eq!(&engine, &before);
        }
    }
}
