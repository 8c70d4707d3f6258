//! tictactoe - terminal tic-tac-toe for two players.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe::cli::{Cli, Command};
use tictactoe::{ShellConfig, Theme, logging, replay, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config =
        ShellConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            logging::init_file_logging(config.log_file(), config.log_filter())?;
            let theme = Theme::from_config(config.theme()).context("Invalid theme")?;
            tui::run_tui(&config, theme)
        }
        Command::Replay { moves, format } => {
            logging::init_stderr_logging(config.log_filter());
            info!(%moves, ?format, "Running replay");
            let steps = replay::parse_moves(&moves)?;
            let report = replay::run(&steps);
            println!("{}", report.render(format)?);
            Ok(())
        }
    }
}
