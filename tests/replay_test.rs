//! Tests for headless replay.

use tictactoe::replay::{self, ReportFormat};
use tictactoe_engine::{GameStatus, Player};

#[test]
fn test_replay_win_text_report() {
    let steps = replay::parse_moves("0,3,1,4,2").unwrap();
    let report = replay::run(&steps);

    assert_eq!(report.status, GameStatus::Won(Player::X));
    assert_eq!(report.winning_line, Some([0, 1, 2]));
    assert_eq!(report.scores.get(Player::X), 1);

    let text = report.render(ReportFormat::Text).unwrap();
    assert!(text.starts_with("X|X|X\n-+-+-\nO|O|6"));
    assert!(text.contains("Player X wins"));
    assert!(text.contains("Score: X 1 - O 0"));
}

#[test]
fn test_replay_records_rejections_and_continues() {
    // Second 0 is occupied; 8 after the win is refused.
    let steps = replay::parse_moves("0 0 3 1 4 2 8").unwrap();
    let report = replay::run(&steps);

    assert_eq!(report.status, GameStatus::Won(Player::X));
    assert_eq!(report.rejected.len(), 2);
    assert_eq!(report.rejected[0].step, 1);
    assert!(report.rejected[0].reason.contains("occupied"));
    assert_eq!(report.rejected[1].token, "8");
    assert_eq!(report.rejected[1].reason, "Game is already over");
}

#[test]
fn test_replay_reset_keeps_scores() {
    let steps = replay::parse_moves("0,3,1,4,2,r,0,3,1,4,8,5").unwrap();
    let report = replay::run(&steps);

    assert_eq!(report.status, GameStatus::Won(Player::O));
    assert_eq!(report.scores.get(Player::X), 1);
    assert_eq!(report.scores.get(Player::O), 1);
}

#[test]
fn test_replay_json_report() {
    let steps = replay::parse_moves("center").unwrap();
    let report = replay::run(&steps);
    let json: serde_json::Value =
        serde_json::from_str(&report.render(ReportFormat::Json).unwrap()).unwrap();

    assert_eq!(json["cells"][4], "X");
    assert!(json["cells"][0].is_null());
    assert_eq!(json["status"], "InProgress");
    assert_eq!(json["turn"], "O");
    assert!(json["winning_line"].is_null());
    assert_eq!(json["scores"]["x"], 0);
    assert!(json.get("board_text").is_none());
}
