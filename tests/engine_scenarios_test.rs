//! End-to-end engine scenarios.

use tictactoe_engine::{Engine, GameStatus, MoveError, Player, Position, Square};

fn play(engine: &mut Engine, moves: &[usize]) {
    for &index in moves {
        engine.apply_move(index).expect("legal move");
    }
}

#[test]
fn test_top_row_win_for_x() {
    let mut engine = Engine::new();
    play(&mut engine, &[0, 3, 1, 4]);

    let outcome = engine.apply_move(2).expect("winning move");

    assert_eq!(outcome.status, GameStatus::Won(Player::X));
    assert_eq!(
        outcome.winning_line.map(|line| line.map(Position::to_index)),
        Some([0, 1, 2])
    );
    assert_eq!(engine.scores().get(Player::X), 1);
    assert_eq!(engine.scores().get(Player::O), 0);
}

#[test]
fn test_left_column_ends_game_before_board_fills() {
    let mut engine = Engine::new();
    play(&mut engine, &[0, 1, 3, 4]);

    // X@6 completes 0,3,6, so the remaining moves of the sequence
    // 0,1,3,4,6,7,5,2,8 are refused.
    let outcome = engine.apply_move(6).expect("winning move");
    assert_eq!(outcome.status, GameStatus::Won(Player::X));
    assert_eq!(
        outcome.winning_line,
        Some([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft])
    );
    for index in [7, 5, 2, 8] {
        assert_eq!(engine.apply_move(index), Err(MoveError::GameOver));
    }
}

#[test]
fn test_draw_sequence() {
    let mut engine = Engine::new();
    // X O X / X O O / O X X
    play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6]);
    let outcome = engine.apply_move(8).expect("last move");

    assert_eq!(outcome.status, GameStatus::Draw);
    assert_eq!(outcome.winning_line, None);
    assert!(engine.board().squares().iter().all(|s| *s != Square::Empty));
    assert_eq!(engine.scores().get(Player::X), 0);
    assert_eq!(engine.scores().get(Player::O), 0);
}

#[test]
fn test_occupied_cell_rejected_without_change() {
    let mut engine = Engine::new();
    engine.apply_move(0).expect("first move");
    let before = engine.clone();

    assert_eq!(
        engine.apply_move(0),
        Err(MoveError::SquareOccupied(Position::TopLeft))
    );
    assert_eq!(engine, before);
    assert_eq!(engine.turn(), Player::O);
}

#[test]
fn test_moves_after_win_rejected() {
    let mut engine = Engine::new();
    play(&mut engine, &[0, 3, 1, 4, 2]);
    let before = engine.clone();

    // Empty and occupied targets alike.
    assert_eq!(engine.apply_move(8), Err(MoveError::GameOver));
    assert_eq!(engine.apply_move(0), Err(MoveError::GameOver));
    assert_eq!(engine, before);
}

#[test]
fn test_scores_accumulate_across_resets() {
    let mut engine = Engine::new();
    play(&mut engine, &[0, 3, 1, 4, 2]);
    engine.reset();
    // O takes the middle row.
    play(&mut engine, &[0, 3, 1, 4, 8, 5]);
    engine.reset();

    assert_eq!(engine.scores().get(Player::X), 1);
    assert_eq!(engine.scores().get(Player::O), 1);
    assert_eq!(engine.turn(), Player::X);
    assert_eq!(engine.status(), GameStatus::InProgress);
}
