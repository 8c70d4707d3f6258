//! Colors resolved from [`ThemeConfig`].

use super::app::StatusTone;
use crate::config::{ConfigError, ThemeConfig};
use ratatui::style::Color;
use std::str::FromStr;
use tictactoe_engine::Player;
use tracing::instrument;

/// Resolved colors for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    x: Color,
    o: Color,
    neutral: Color,
}

impl Theme {
    /// Parses every configured color.
    #[instrument(skip(config))]
    pub fn from_config(config: &ThemeConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            x: parse_color("x_color", config.x_color())?,
            o: parse_color("o_color", config.o_color())?,
            neutral: parse_color("neutral_color", config.neutral_color())?,
        })
    }

    /// Color of `player`'s marks and turn.
    pub fn player(&self, player: Player) -> Color {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Color for a status line tone.
    pub fn tone(&self, tone: StatusTone) -> Color {
        match tone {
            StatusTone::Player(player) => self.player(player),
            StatusTone::Neutral => self.neutral,
        }
    }

    /// Faint background for hovering over an empty cell on `player`'s turn.
    pub fn tint(&self, player: Player) -> Color {
        match self.player(player) {
            Color::Rgb(r, g, b) => Color::Rgb(r / 4, g / 4, b / 4),
            _ => Color::DarkGray,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            x: Color::Rgb(0xe8, 0x43, 0x93),
            o: Color::Rgb(0x00, 0xb8, 0x94),
            neutral: Color::Gray,
        }
    }
}

fn parse_color(key: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value)
        .map_err(|_| ConfigError::new(format!("Invalid color for {}: {:?}", key, value)))
}
