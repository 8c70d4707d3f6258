//! Headless replay of a move list through the engine.
//!
//! Moves are comma- or whitespace-separated tokens: a board index (`0`-`8`),
//! a position label (`center`, `top-left`, ...), or `r`/`reset` to start a
//! new game while keeping scores. Rejected moves are recorded and skipped.

use derive_more::{Display, Error};
use serde::Serialize;
use tictactoe_engine::{Engine, GameStatus, Player, Position, Scores};
use tracing::{debug, info, instrument, warn};

/// One parsed replay token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayStep {
    /// Raw board index, validated by the engine.
    Index(usize),
    /// Position given by label.
    Place(Position),
    /// Start a new game.
    Reset,
}

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Human-readable grid and summary.
    #[default]
    Text,
    /// JSON document.
    Json,
}

/// A move the engine refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// Zero-based step number in the input.
    pub step: usize,
    /// The step as written.
    pub token: String,
    /// Why the engine refused it.
    pub reason: String,
}

/// Final state after a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// Cell contents in index order.
    pub cells: [Option<Player>; 9],
    /// Status of the current game.
    pub status: GameStatus,
    /// Player to move (frozen once the game is over).
    pub turn: Player,
    /// Indices of the winning line, if any.
    pub winning_line: Option<[usize; 3]>,
    /// Session scores.
    pub scores: Scores,
    /// Steps the engine refused.
    pub rejected: Vec<Rejection>,
    #[serde(skip)]
    board_text: String,
}

impl ReplayReport {
    /// Renders the report as text.
    pub fn to_text(&self) -> String {
        let status = match self.status {
            GameStatus::InProgress => format!("Player {}'s turn", self.turn),
            GameStatus::Won(player) => format!("Player {} wins", player),
            GameStatus::Draw => "Draw".to_string(),
        };
        let mut out = format!(
            "{}\n\n{}\nScore: X {} - O {}\n",
            self.board_text,
            status,
            self.scores.get(Player::X),
            self.scores.get(Player::O)
        );
        if let Some(line) = self.winning_line {
            out.push_str(&format!("Winning line: {:?}\n", line));
        }
        for rejection in &self.rejected {
            out.push_str(&format!(
                "Rejected step {} ({}): {}\n",
                rejection.step, rejection.token, rejection.reason
            ));
        }
        out
    }

    /// Renders the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ReplayError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ReplayError::new(format!("Failed to serialize report: {}", e)))
    }

    /// Renders the report in `format`.
    pub fn render(&self, format: ReportFormat) -> Result<String, ReplayError> {
        match format {
            ReportFormat::Text => Ok(self.to_text()),
            ReportFormat::Json => self.to_json(),
        }
    }
}

/// Parses a move list.
#[instrument]
pub fn parse_moves(input: &str) -> Result<Vec<ReplayStep>, ReplayError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            let lower = token.to_lowercase();
            if lower == "r" || lower == "reset" {
                Ok(ReplayStep::Reset)
            } else if token.bytes().all(|b| b.is_ascii_digit()) {
                // Too large for usize is still just off the board.
                Ok(ReplayStep::Index(token.parse::<usize>().unwrap_or(usize::MAX)))
            } else {
                Position::from_label_or_number(token)
                    .map(ReplayStep::Place)
                    .ok_or_else(|| ReplayError::new(format!("Unrecognized move: {:?}", token)))
            }
        })
        .collect()
}

/// Feeds every step to a fresh engine and reports the result.
#[instrument(skip(steps), fields(steps = steps.len()))]
pub fn run(steps: &[ReplayStep]) -> ReplayReport {
    let mut engine = Engine::new();
    let mut rejected = Vec::new();

    for (step, action) in steps.iter().enumerate() {
        let (token, result) = match *action {
            ReplayStep::Reset => {
                engine.reset();
                continue;
            }
            ReplayStep::Index(index) => (index.to_string(), engine.apply_move(index)),
            ReplayStep::Place(pos) => (pos.label().to_string(), engine.place(pos)),
        };
        match result {
            Ok(outcome) => debug!(step, action = %outcome.action, "Replayed move"),
            Err(err) => {
                warn!(step, %token, %err, "Move rejected");
                rejected.push(Rejection {
                    step,
                    token,
                    reason: err.to_string(),
                });
            }
        }
    }

    let report = ReplayReport {
        cells: engine.board().squares().map(|sq| sq.player()),
        status: engine.status(),
        turn: engine.turn(),
        winning_line: engine.winning_line().map(|line| line.map(Position::to_index)),
        scores: *engine.scores(),
        rejected,
        board_text: engine.board().display(),
    };
    info!(status = ?report.status, rejected = report.rejected.len(), "Replay finished");
    report
}

/// Replay input error.
#[derive(Debug, Clone, Display, Error)]
#[display("Replay error: {} at {}:{}", message, file, line)]
pub struct ReplayError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ReplayError {
    /// Creates a new replay error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
