//! Two-player terminal tic-tac-toe.
//!
//! Game rules live in [`tictactoe_engine`]; this crate is the shell around
//! it.
//!
//! # Architecture
//!
//! - **tui**: ratatui front end with keyboard and mouse input, status line,
//!   scores, and timed cosmetic effects
//! - **replay**: headless move-list runner with text or JSON reports
//! - **config**: optional TOML settings (tick rate, animations, logging, colors)
//! - **logging**: tracing subscriber setup

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod replay;
pub mod tui;

pub use config::{ConfigError, ShellConfig, ThemeConfig};
pub use replay::{ReplayError, ReplayReport, ReplayStep, ReportFormat};
pub use tui::app::{App, Direction, Hovered, Input, StatusMessage, StatusTone};
pub use tui::theme::Theme;
