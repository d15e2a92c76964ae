//! oxo - noughts and crosses in the console.

use anyhow::Result;
use clap::Parser;
use oxo::{Cli, Command, Console, GameConfig, Matchup, render_scores, simulate};
use oxo_engine::{Board, GameSession, Player, Strategy};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            size,
            symbol,
            strategy,
            seed,
            config,
        } => run_play(size, symbol, strategy, seed, config),
        Command::Simulate {
            rounds,
            size,
            cross,
            nought,
            seed,
        } => run_simulate(rounds, size, Matchup { cross, nought }, seed),
    }
}

/// Logs go to stderr so they never interleave with the board.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn run_play(
    size: Option<usize>,
    symbol: Option<Player>,
    strategy: Option<Strategy>,
    seed: Option<u64>,
    config: Option<PathBuf>,
) -> Result<()> {
    init_tracing("warn");

    let config =
        GameConfig::load(config.as_deref())?.override_with(size, seed, symbol, strategy);
    info!(?config, "Starting interactive session");

    let mut session = match config.seed() {
        Some(seed) => GameSession::seeded(*config.board_size(), *seed),
        None => GameSession::new(*config.board_size()),
    };

    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout());
    console.play(&mut session, *config.symbol(), *config.strategy())?;
    Ok(())
}

/// Run CPU self-play and print the tally
#[instrument]
fn run_simulate(rounds: u32, size: usize, matchup: Matchup, seed: Option<u64>) -> Result<()> {
    init_tracing("info");

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let scores = simulate(rounds, size, matchup, &mut rng)?;

    let size = Board::new(size).size();
    println!(
        "{} rounds on a {}x{} board, cross ({}) against nought ({}):",
        rounds, size, size, matchup.cross, matchup.nought
    );
    println!("{}", render_scores(&scores));
    Ok(())
}
