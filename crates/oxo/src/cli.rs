//! Command-line interface for oxo.

use clap::{Parser, Subcommand};
use oxo_engine::{Player, Strategy};

/// oxo - noughts and crosses against a CPU opponent
#[derive(Parser, Debug)]
#[command(name = "oxo")]
#[command(about = "Noughts and crosses on 3x3 to 5x5 boards", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the console
    Play {
        /// Board edge length (3 to 5)
        #[arg(short, long)]
        size: Option<usize>,

        /// Identity to play as (cross or nought), skips the prompt
        #[arg(long)]
        symbol: Option<Player>,

        /// CPU strategy (random, minimax or alternating), skips the prompt
        #[arg(long)]
        strategy: Option<Strategy>,

        /// Seed for a reproducible session
        #[arg(long)]
        seed: Option<u64>,

        /// Path to a TOML game config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Play CPU strategies against each other and print the tally
    Simulate {
        /// Number of rounds to play
        #[arg(short, long, default_value = "100")]
        rounds: u32,

        /// Board edge length (3 to 5)
        #[arg(short, long, default_value = "3")]
        size: usize,

        /// Strategy playing crosses
        #[arg(long, default_value = "minimax")]
        cross: Strategy,

        /// Strategy playing noughts
        #[arg(long, default_value = "random")]
        nought: Strategy,

        /// Seed for reproducible results
        #[arg(long)]
        seed: Option<u64>,
    },
}
