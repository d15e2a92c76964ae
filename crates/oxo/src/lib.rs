//! Console front end for the oxo noughts-and-crosses engine.
//!
//! # Architecture
//!
//! - **Cli**: `play` and `simulate` subcommands.
//! - **Config**: optional TOML file with CLI overrides.
//! - **Console**: line-oriented play loop over any reader/writer.
//! - **Render**: plain-text boards, score tables and event messages.
//! - **Simulate**: CPU strategies playing each other.

#![warn(missing_docs)]

mod cli;
mod config;
mod console;
mod render;
mod simulate;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig};
pub use console::{Console, Input};
pub use render::{render_board, render_event, render_scores};
pub use simulate::{Matchup, play_round, simulate};
