//! Tic-tac-toe board rendering.

use super::{CELL_HEIGHT, CELL_WIDTH, ScreenLayout};
use crate::tui::app::App;
use crate::tui::effects::{EffectKind, EffectTarget};
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use std::time::Instant;
use tictactoe_engine::{Position, Square};

/// Splits the board area into nine cell rects, row-major.
pub(super) fn cell_rects(area: Rect) -> [Rect; 9] {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    Position::ALL.map(|pos| {
        let (row, col) = (rows[pos.row() * 2], cols[pos.col() * 2]);
        Rect::new(col.x, row.y, col.width, row.height)
    })
}

/// Renders separators and the nine cells.
pub(super) fn render_board(
    frame: &mut Frame,
    area: Rect,
    screen: &ScreenLayout,
    app: &App,
    theme: &Theme,
    now: Instant,
) {
    let separator = Style::default().fg(Color::DarkGray);

    // Horizontal rules sit one row below the first and second cell rows.
    for pos in [Position::MiddleLeft, Position::BottomLeft] {
        let y = screen.cell(pos).y.saturating_sub(1);
        if y > area.y {
            let rule = Rect::new(area.x, y, area.width, 1);
            frame.render_widget(
                Paragraph::new("─".repeat(area.width as usize)).style(separator),
                rule,
            );
        }
    }

    for pos in Position::ALL {
        let cell = screen.cell(pos);
        if pos.col() < 2 {
            let bar = Rect::new(cell.x + cell.width, cell.y, 1, cell.height);
            frame.render_widget(
                Paragraph::new(vec![Line::from("│"); cell.height as usize]).style(separator),
                bar,
            );
        }
        render_cell(frame, cell, pos, app, theme, now);
    }
}

fn render_cell(frame: &mut Frame, area: Rect, pos: Position, app: &App, theme: &Theme, now: Instant) {
    let (symbol, style, alignment) = cell_appearance(pos, app, theme, now);
    let lines = vec![Line::from(""), Line::from(symbol), Line::from("")];
    let paragraph = Paragraph::new(lines).style(style).alignment(alignment);
    frame.render_widget(paragraph, area);
}

/// Text, style, and alignment of a cell at `now`.
///
/// Effects are checked in priority order: shake, fade, winning line,
/// draw flash, pulse, then cursor and hover.
fn cell_appearance(pos: Position, app: &App, theme: &Theme, now: Instant) -> (String, Style, Alignment) {
    let engine = app.engine();
    let effects = app.effects();
    let target = EffectTarget::Cell(pos);

    let (symbol, base) = match engine.board().get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => (
            player.to_string(),
            Style::default()
                .fg(theme.player(player))
                .add_modifier(Modifier::BOLD),
        ),
    };

    if let Some(elapsed) = effects.elapsed(EffectKind::Shake, target, now) {
        let alignment = if (elapsed.as_millis() / 50) % 2 == 0 {
            Alignment::Left
        } else {
            Alignment::Right
        };
        return (symbol, base.bg(Color::Red).fg(Color::White), alignment);
    }

    if effects.is_active(EffectKind::FadeIn, target, now)
        || effects.is_active(EffectKind::FadeOut, target, now)
    {
        return (
            symbol,
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            Alignment::Center,
        );
    }

    let style = if engine
        .winning_line()
        .is_some_and(|line| line.contains(&pos))
    {
        base.add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else if effects.is_active(EffectKind::DrawFlash, target, now) {
        base.bg(Color::Yellow).fg(Color::Black)
    } else if effects.is_active(EffectKind::Pulse, target, now) {
        base.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else if *app.cursor() == pos {
        base.bg(Color::White).fg(Color::Black)
    } else if let Some(player) = app.hover_tint(pos) {
        base.bg(theme.tint(player))
    } else {
        base
    };

    (symbol, style, Alignment::Center)
}
