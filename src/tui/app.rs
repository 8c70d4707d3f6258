//! Application state and input handling.

use super::effects::{self, EffectKind, EffectTarget, Effects};
use super::input::move_cursor;
use derive_getters::Getters;
use std::time::{Duration, Instant};
use tictactoe_engine::{Engine, GameStatus, MoveError, Player, Position};
use tracing::{debug, info, instrument, warn};

/// Cursor direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the top row.
    Up,
    /// Towards the bottom row.
    Down,
    /// Towards the left column.
    Left,
    /// Towards the right column.
    Right,
}

/// Something the pointer can rest on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hovered {
    /// A board cell.
    Cell(Position),
    /// The restart button.
    Restart,
}

/// User intent, already translated from raw terminal events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A cell was clicked or picked by number.
    CellActivated(Position),
    /// The restart button was clicked or `r` pressed.
    RestartActivated,
    /// The pointer is over a cell, the restart button, or nothing.
    Hover(Option<Hovered>),
    /// Arrow key.
    MoveCursor(Direction),
    /// Enter or Space on the cursor cell.
    ActivateCursor,
    /// Leave the game.
    Quit,
}

/// How the status line is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// The given player's color.
    Player(Player),
    /// Neutral color.
    Neutral,
}

/// Status line text and tone.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct StatusMessage {
    text: String,
    tone: StatusTone,
}

impl StatusMessage {
    fn turn(player: Player) -> Self {
        Self {
            text: format!("Player {}'s turn", player),
            tone: StatusTone::Player(player),
        }
    }

    fn won(player: Player) -> Self {
        Self {
            text: format!("Player {} wins! 🎉", player),
            tone: StatusTone::Player(player),
        }
    }

    fn draw() -> Self {
        Self {
            text: "Draw! 🤝".to_string(),
            tone: StatusTone::Neutral,
        }
    }
}

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    engine: Engine,
    cursor: Position,
    hover: Option<Hovered>,
    status: StatusMessage,
    effects: Effects,
    should_quit: bool,
}

impl App {
    /// Creates a new application and schedules the opening fade-in.
    #[instrument]
    pub fn new(animations: bool, now: Instant) -> Self {
        let engine = Engine::new();
        let mut app = Self {
            status: StatusMessage::turn(engine.turn()),
            engine,
            cursor: Position::Center,
            hover: None,
            effects: Effects::new(animations),
            should_quit: false,
        };
        for pos in Position::ALL {
            let stagger = effects::FADE_IN_STAGGER * (pos.to_index() as u32 + 1);
            app.effects
                .schedule(EffectKind::FadeIn, EffectTarget::Cell(pos), now, stagger);
        }
        app
    }

    /// Dispatches one input. All game state changes happen here.
    #[instrument(skip(self, now))]
    pub fn handle(&mut self, input: Input, now: Instant) {
        match input {
            Input::CellActivated(pos) => self.activate(pos, now),
            Input::ActivateCursor => self.activate(self.cursor, now),
            Input::MoveCursor(direction) => self.cursor = move_cursor(self.cursor, direction),
            Input::Hover(hover) => self.hover = hover,
            Input::RestartActivated => self.restart(now),
            Input::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    /// Drops expired effects.
    pub fn tick(&mut self, now: Instant) {
        self.effects.prune(now);
    }

    /// Player whose color tints `pos` under the pointer, if any.
    ///
    /// Only empty cells are tinted, and only while the game runs.
    pub fn hover_tint(&self, pos: Position) -> Option<Player> {
        (self.hover == Some(Hovered::Cell(pos)) && self.engine.board().is_empty(pos) && !self.engine.is_over())
            .then(|| self.engine.turn())
    }

    /// Returns true while the pointer rests on the restart button.
    pub fn restart_hovered(&self) -> bool {
        self.hover == Some(Hovered::Restart)
    }

    fn activate(&mut self, pos: Position, now: Instant) {
        let target = EffectTarget::Cell(pos);
        match self.engine.place(pos) {
            Ok(outcome) => {
                debug!(action = %outcome.action, status = ?outcome.status, "Move accepted");
                self.effects
                    .schedule(EffectKind::Pulse, target, now, effects::PULSE);
                match outcome.status {
                    GameStatus::Won(player) => {
                        self.status = StatusMessage::won(player);
                        self.effects.schedule(
                            EffectKind::Celebrate,
                            EffectTarget::Status,
                            now,
                            effects::CELEBRATE,
                        );
                        self.effects.schedule(
                            EffectKind::ScorePulse,
                            EffectTarget::Score(player),
                            now,
                            effects::SCORE_PULSE,
                        );
                    }
                    GameStatus::Draw => {
                        self.status = StatusMessage::draw();
                        for cell in Position::ALL {
                            self.effects.schedule(
                                EffectKind::DrawFlash,
                                EffectTarget::Cell(cell),
                                now,
                                effects::DRAW_FLASH,
                            );
                        }
                    }
                    GameStatus::InProgress => {
                        self.status = StatusMessage::turn(self.engine.turn());
                    }
                }
            }
            Err(MoveError::SquareOccupied(_)) => {
                debug!(%pos, "Occupied cell activated");
                self.effects
                    .schedule(EffectKind::Shake, target, now, effects::SHAKE);
            }
            Err(MoveError::GameOver) => {
                // Occupied cells still shake after the game ends.
                if !self.engine.board().is_empty(pos) {
                    self.effects
                        .schedule(EffectKind::Shake, target, now, effects::SHAKE);
                }
            }
            Err(err @ MoveError::OutOfBounds(_)) => {
                warn!(%err, "Unexpected rejection for a typed position");
            }
        }
    }

    fn restart(&mut self, now: Instant) {
        info!("Restarting game");
        self.engine.reset();
        self.status = StatusMessage::turn(self.engine.turn());
        self.effects.clear_cells();
        self.effects.schedule(
            EffectKind::Press,
            EffectTarget::RestartButton,
            now,
            effects::PRESS,
        );
        for pos in Position::ALL {
            let delay: Duration = effects::FADE_OUT_STAGGER * pos.to_index() as u32;
            self.effects.schedule(
                EffectKind::FadeOut,
                EffectTarget::Cell(pos),
                now + delay,
                effects::FADE_OUT,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_app_shows_x_turn() {
        let app = App::new(true, Instant::now());
        assert_eq!(app.status().text(), "Player X's turn");
        assert_eq!(app.status().tone(), &StatusTone::Player(Player::X));
    }

    #[test]
    fn test_quit_sets_flag() {
        let mut app = App::new(false, Instant::now());
        app.handle(Input::Quit, Instant::now());
        assert!(*app.should_quit());
    }

    #[test]
    fn test_restart_hover_does_not_tint_cells() {
        let now = Instant::now();
        let mut app = App::new(false, now);
        app.handle(Input::Hover(Some(Hovered::Restart)), now);
        assert!(app.restart_hovered());
        assert!(Position::ALL.iter().all(|pos| app.hover_tint(*pos).is_none()));

        app.handle(Input::Hover(Some(Hovered::Cell(Position::Center))), now);
        assert!(!app.restart_hovered());
    }

    #[test]
    fn test_activate_cursor_places_at_cursor() {
        let now = Instant::now();
        let mut app = App::new(false, now);
        app.handle(Input::MoveCursor(Direction::Up), now);
        app.handle(Input::ActivateCursor, now);
        assert!(!app.engine().board().is_empty(Position::TopCenter));
    }
}
