//! Terminal UI for tic-tac-toe.

pub mod app;
pub mod effects;
pub mod input;
pub mod theme;
pub mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io::{self, Write};
use std::time::Instant;
use tracing::{debug, error, info, instrument};

use crate::config::ShellConfig;
use app::App;
use theme::Theme;
use ui::ScreenLayout;

/// Restores the terminal when dropped, including on early return.
struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    fn enter(out: W) -> Result<Self> {
        Self::enter_with(out, enable_raw_mode)
    }

    /// The guard is live once raw mode is on; a failed screen switch drops it.
    fn enter_with(out: W, enable_raw: impl FnOnce() -> io::Result<()>) -> Result<Self> {
        enable_raw().context("Failed to enable raw mode")?;
        let mut guard = Self { out };
        execute!(guard.out, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        let _ = disable_raw_mode();
        let _ = execute!(
            self.out,
            LeaveAlternateScreen,
            DisableMouseCapture,
            crossterm::cursor::Show
        );
    }
}

/// Runs the interactive game until the user quits.
#[instrument(skip_all)]
pub fn run_tui(config: &ShellConfig, theme: Theme) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    let guard = TerminalGuard::enter(io::stdout())?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(*config.animations(), Instant::now());
    let res = run_loop(&mut terminal, &mut app, &theme, config);

    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(
        score_x = app.engine().scores().get(tictactoe_engine::Player::X),
        score_o = app.engine().scores().get(tictactoe_engine::Player::O),
        "Session ended"
    );
    res
}

/// Draw, wait for at most one tick, dispatch, repeat.
fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    theme: &Theme,
    config: &ShellConfig,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let mut screen = ScreenLayout::default();

    while !*app.should_quit() {
        terminal.draw(|f| {
            screen = ui::draw(f, app, theme, Instant::now());
        })?;

        if event::poll(config.tick_rate())? {
            let input = match event::read()? {
                Event::Key(key) => input::key_to_input(key),
                Event::Mouse(mouse) => input::mouse_to_input(mouse, &screen),
                _ => None,
            };
            if let Some(input) = input {
                app.handle(input, Instant::now());
            }
        }

        app.tick(Instant::now());
    }

    Ok(())
}
