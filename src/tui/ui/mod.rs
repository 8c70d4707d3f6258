//! UI rendering using ratatui.
//!
//! Drawing is stateless: everything comes from [`App`] and the current
//! instant. [`layout`] is shared with mouse hit-testing so clicks land on
//! exactly the cells that were drawn.

mod board;

use super::app::App;
use super::effects::{EffectKind, EffectTarget};
use super::theme::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use std::time::Instant;
use tictactoe_engine::{Player, Position};

/// Width of one cell in columns.
pub const CELL_WIDTH: u16 = 13;
/// Height of one cell in rows.
pub const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
const RESTART_WIDTH: u16 = 20;

/// Screen regions that accept clicks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    cells: [Rect; 9],
    restart: Rect,
}

impl ScreenLayout {
    /// Area of the cell at `pos`.
    pub fn cell(&self, pos: Position) -> Rect {
        self.cells[pos.to_index()]
    }

    /// Area of the restart button.
    pub fn restart(&self) -> Rect {
        self.restart
    }

    /// Cell under the terminal coordinate, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|pos| contains(self.cell(*pos), column, row))
    }

    /// Returns true if the coordinate is on the restart button.
    pub fn restart_at(&self, column: u16, row: u16) -> bool {
        contains(self.restart, column, row)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

struct Regions {
    title: Rect,
    scores: Rect,
    board: Rect,
    status: Rect,
    restart: Rect,
    help: Rect,
}

fn regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Length(1),            // Scores
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Status
            Constraint::Length(3),            // Restart button
            Constraint::Length(1),            // Help
        ])
        .split(area);

    Regions {
        title: chunks[0],
        scores: chunks[1],
        board: center_rect(chunks[2], BOARD_WIDTH, BOARD_HEIGHT),
        status: chunks[3],
        restart: center_rect(chunks[4], RESTART_WIDTH, 3),
        help: chunks[5],
    }
}

/// Computes the clickable regions for a terminal of size `area`.
pub fn layout(area: Rect) -> ScreenLayout {
    let regions = regions(area);
    ScreenLayout {
        cells: board::cell_rects(regions.board),
        restart: regions.restart,
    }
}

/// Draws the whole screen and returns the layout that was used.
pub fn draw(frame: &mut Frame, app: &App, theme: &Theme, now: Instant) -> ScreenLayout {
    let area = frame.area();
    let regions = regions(area);
    let screen = layout(area);

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, regions.title);

    draw_scores(frame, regions.scores, app, theme, now);
    board::render_board(frame, regions.board, &screen, app, theme, now);
    draw_status(frame, regions.status, app, theme, now);
    draw_restart(frame, screen.restart(), app, now);

    let help = Paragraph::new(
        "Arrows/mouse: move | Enter/Space/click or 1-9: place | R: restart | Q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, regions.help);

    screen
}

fn draw_scores(frame: &mut Frame, area: Rect, app: &App, theme: &Theme, now: Instant) {
    let score_span = |player: Player| {
        let mut style = Style::default()
            .fg(theme.player(player))
            .add_modifier(Modifier::BOLD);
        if app
            .effects()
            .is_active(EffectKind::ScorePulse, EffectTarget::Score(player), now)
        {
            style = style.add_modifier(Modifier::REVERSED);
        }
        Span::styled(
            format!(" {}: {} ", player, app.engine().scores().get(player)),
            style,
        )
    };

    let line = Line::from(vec![score_span(Player::X), Span::raw("    "), score_span(Player::O)]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App, theme: &Theme, now: Instant) {
    let mut style = Style::default().fg(theme.tone(*app.status().tone()));
    if app
        .effects()
        .is_active(EffectKind::Celebrate, EffectTarget::Status, now)
    {
        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }

    let status = Paragraph::new(app.status().text().as_str())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, area);
}

fn draw_restart(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let mut style = Style::default().fg(Color::White);
    let mut border = BorderType::Plain;
    if app.restart_hovered() {
        style = style.add_modifier(Modifier::BOLD);
        border = BorderType::Thick;
    }
    if app
        .effects()
        .is_active(EffectKind::Press, EffectTarget::RestartButton, now)
    {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let button = Paragraph::new("Restart (R)")
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(border));
    frame.render_widget(button, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
