//! Translation of terminal events into [`Input`].

use super::app::{Direction, Hovered, Input};
use super::ui::ScreenLayout;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tictactoe_engine::Position;

/// Moves the cursor one cell, stopping at the board edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let next = match direction {
        Direction::Up => row.checked_sub(1).map(|r| (r, col)),
        Direction::Down => Some((row + 1, col)),
        Direction::Left => col.checked_sub(1).map(|c| (row, c)),
        Direction::Right => Some((row, col + 1)),
    };
    next.and_then(|(r, c)| Position::from_coords(r, c))
        .unwrap_or(cursor)
}

/// Maps a key press to an input. Releases and unbound keys map to nothing.
pub fn key_to_input(key: KeyEvent) -> Option<Input> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Up => Some(Input::MoveCursor(Direction::Up)),
        KeyCode::Down => Some(Input::MoveCursor(Direction::Down)),
        KeyCode::Left => Some(Input::MoveCursor(Direction::Left)),
        KeyCode::Right => Some(Input::MoveCursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Input::ActivateCursor),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Input::RestartActivated),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Input::Quit),
        KeyCode::Char(c) => c
            .to_digit(10)
            .filter(|d| (1..=9).contains(d))
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Input::CellActivated),
        _ => None,
    }
}

/// Maps a mouse event to an input using the last drawn layout.
pub fn mouse_to_input(mouse: MouseEvent, layout: &ScreenLayout) -> Option<Input> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(pos) = layout.cell_at(mouse.column, mouse.row) {
                Some(Input::CellActivated(pos))
            } else if layout.restart_at(mouse.column, mouse.row) {
                Some(Input::RestartActivated)
            } else {
                None
            }
        }
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            let hovered = if let Some(pos) = layout.cell_at(mouse.column, mouse.row) {
                Some(Hovered::Cell(pos))
            } else if layout.restart_at(mouse.column, mouse.row) {
                Some(Hovered::Restart)
            } else {
                None
            };
            Some(Input::Hover(hovered))
        }
        _ => None,
    }
}
