//! Rendering tests against ratatui's in-memory backend.

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Rect};
use std::time::{Duration, Instant};
use tictactoe::tui::app::Hovered;
use tictactoe::tui::input::mouse_to_input;
use tictactoe::tui::ui::{self, ScreenLayout};
use tictactoe::{App, Input, Theme};
use tictactoe_engine::Position;
use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

const WIDTH: u16 = 80;
const HEIGHT: u16 = 30;

fn render(app: &App, now: Instant) -> (Buffer, ScreenLayout) {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    let mut screen = ScreenLayout::default();
    terminal
        .draw(|f| {
            screen = ui::draw(f, app, &Theme::default(), now);
        })
        .unwrap();
    (terminal.backend().buffer().clone(), screen)
}

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn center_of(rect: Rect) -> (u16, u16) {
    (rect.x + rect.width / 2, rect.y + rect.height / 2)
}

fn mouse(kind: MouseEventKind, (column, row): (u16, u16)) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_initial_screen_shows_title_scores_and_status() {
    let now = Instant::now();
    let app = App::new(false, now);
    let (buffer, _) = render(&app, now);
    let text = buffer_text(&buffer);

    assert!(text.contains("Tic-Tac-Toe"));
    assert!(text.contains("X: 0"));
    assert!(text.contains("O: 0"));
    assert!(text.contains("Player X's turn"));
    assert!(text.contains("Restart (R)"));
}

#[test]
fn test_layout_matches_drawn_layout() {
    let now = Instant::now();
    let app = App::new(false, now);
    let (_, drawn) = render(&app, now);

    assert_eq!(drawn, ui::layout(Rect::new(0, 0, WIDTH, HEIGHT)));
    for pos in Position::ALL {
        let cell = drawn.cell(pos);
        assert_eq!(cell.width, ui::CELL_WIDTH);
        assert_eq!(cell.height, ui::CELL_HEIGHT);
        let (x, y) = center_of(cell);
        assert_eq!(drawn.cell_at(x, y), Some(pos));
    }
}

#[test]
fn test_placed_mark_is_drawn_in_its_cell() {
    let now = Instant::now();
    let mut app = App::new(false, now);
    app.handle(Input::CellActivated(Position::Center), now);
    let (buffer, screen) = render(&app, now);

    let (x, y) = center_of(screen.cell(Position::Center));
    let row: String = (screen.cell(Position::Center).x..screen.cell(Position::Center).right())
        .map(|col| buffer[(col, y)].symbol().to_string())
        .collect();
    assert!(row.contains('X'), "center row was {:?}", row);
    assert!(x >= screen.cell(Position::Center).x);
    assert!(buffer_text(&buffer).contains("Player O's turn"));
}

#[test]
fn test_mouse_click_on_cell_and_restart() {
    let now = Instant::now();
    let app = App::new(false, now);
    let (_, screen) = render(&app, now);

    let click_cell = mouse(
        MouseEventKind::Down(MouseButton::Left),
        center_of(screen.cell(Position::BottomLeft)),
    );
    assert_eq!(
        mouse_to_input(click_cell, &screen),
        Some(Input::CellActivated(Position::BottomLeft))
    );

    let click_restart = mouse(MouseEventKind::Down(MouseButton::Left), center_of(screen.restart()));
    assert_eq!(mouse_to_input(click_restart, &screen), Some(Input::RestartActivated));

    let hover_nothing = mouse(MouseEventKind::Moved, (0, 0));
    assert_eq!(mouse_to_input(hover_nothing, &screen), Some(Input::Hover(None)));
}

#[test]
fn test_restart_button_lifts_under_pointer() {
    let now = Instant::now();
    let mut app = App::new(false, now);
    let (plain, screen) = render(&app, now);
    let corner = (screen.restart().x, screen.restart().y);
    assert_eq!(plain[corner].symbol(), "┌");

    let over_restart = mouse(MouseEventKind::Moved, center_of(screen.restart()));
    let input = mouse_to_input(over_restart, &screen);
    assert_eq!(input, Some(Input::Hover(Some(Hovered::Restart))));
    app.handle(Input::Hover(Some(Hovered::Restart)), now);

    let (lifted, _) = render(&app, now);
    assert_eq!(lifted[corner].symbol(), "┏");
}

#[test]
fn test_winner_and_scores_drawn_after_win() {
    let now = Instant::now();
    let mut app = App::new(true, now);
    for index in [0, 3, 1, 4, 2] {
        let pos = Position::from_index(index).unwrap();
        app.handle(Input::CellActivated(pos), now);
    }
    let later = now + Duration::from_secs(2);
    app.tick(later);
    let (buffer, _) = render(&app, later);
    let text = buffer_text(&buffer);

    assert!(text.contains("Player X wins!"));
    assert!(text.contains("X: 1"));
}
