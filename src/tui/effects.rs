//! Timed cosmetic effects.
//!
//! An effect is a window of time during which a target renders differently.
//! Effects never touch game state; the renderer asks whether one is active
//! for a given instant and styles the target accordingly.

use std::time::{Duration, Instant};
use tictactoe_engine::{Player, Position};
use tracing::trace;

/// Pulse on a freshly placed mark.
pub const PULSE: Duration = Duration::from_millis(150);
/// Shake on an occupied cell that was clicked again.
pub const SHAKE: Duration = Duration::from_millis(500);
/// Flash on every cell after a draw.
pub const DRAW_FLASH: Duration = Duration::from_millis(1000);
/// Celebration on the status line after a win.
pub const CELEBRATE: Duration = Duration::from_millis(1000);
/// Pulse on the winner's score.
pub const SCORE_PULSE: Duration = Duration::from_millis(300);
/// Pressed look on the restart button.
pub const PRESS: Duration = Duration::from_millis(200);
/// Per-cell stagger and length of the startup fade-in.
pub const FADE_IN_STAGGER: Duration = Duration::from_millis(50);
/// Per-cell stagger of the restart fade.
pub const FADE_OUT_STAGGER: Duration = Duration::from_millis(30);
/// Length of each cell's restart fade.
pub const FADE_OUT: Duration = Duration::from_millis(150);

/// What an effect looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum EffectKind {
    /// Cell is dimmed until it fades in.
    FadeIn,
    /// Cell is dimmed while the board clears.
    FadeOut,
    /// Newly placed mark.
    Pulse,
    /// Rejected click on an occupied cell.
    Shake,
    /// Draw flash.
    DrawFlash,
    /// Win celebration.
    Celebrate,
    /// Score change.
    ScorePulse,
    /// Button press.
    Press,
}

/// What an effect applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectTarget {
    /// A board cell.
    Cell(Position),
    /// The status line.
    Status,
    /// A player's score.
    Score(Player),
    /// The restart button.
    RestartButton,
}

#[derive(Debug, Clone, Copy)]
struct Effect {
    kind: EffectKind,
    target: EffectTarget,
    start: Instant,
    duration: Duration,
}

impl Effect {
    fn end(&self) -> Instant {
        self.start + self.duration
    }
}

/// Schedule of active effects.
#[derive(Debug, Clone)]
pub struct Effects {
    enabled: bool,
    active: Vec<Effect>,
}

impl Effects {
    /// Creates an empty schedule. A disabled schedule ignores every request.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            active: Vec::new(),
        }
    }

    /// Schedules `kind` on `target` for `[start, start + duration)`.
    ///
    /// Replaces any effect of the same kind already on the target.
    pub fn schedule(
        &mut self,
        kind: EffectKind,
        target: EffectTarget,
        start: Instant,
        duration: Duration,
    ) {
        if !self.enabled {
            return;
        }
        trace!(%kind, ?target, ?duration, "Scheduling effect");
        self.active
            .retain(|e| !(e.kind == kind && e.target == target));
        self.active.push(Effect {
            kind,
            target,
            start,
            duration,
        });
    }

    /// Time elapsed inside the effect's window, if `now` falls inside it.
    pub fn elapsed(&self, kind: EffectKind, target: EffectTarget, now: Instant) -> Option<Duration> {
        self.active
            .iter()
            .find(|e| e.kind == kind && e.target == target && e.start <= now && now < e.end())
            .map(|e| now - e.start)
    }

    /// Returns true if `kind` is showing on `target` at `now`.
    pub fn is_active(&self, kind: EffectKind, target: EffectTarget, now: Instant) -> bool {
        self.elapsed(kind, target, now).is_some()
    }

    /// Drops every effect whose window has closed.
    pub fn prune(&mut self, now: Instant) {
        self.active.retain(|e| now < e.end());
    }

    /// Drops every effect on board cells.
    pub fn clear_cells(&mut self) {
        self.active
            .retain(|e| !matches!(e.target, EffectTarget::Cell(_)));
    }

    /// Number of scheduled effects, including ones not yet started.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Returns true when nothing is scheduled.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
