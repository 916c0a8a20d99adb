//! Snakes and Ladders - terminal binary.
//!
//! Builds a game from a TOML file and/or flags, then plays it in quick or
//! interactive mode. Logs go to stderr (`RUST_LOG` controls the filter);
//! the game itself is printed on stdout.

mod cli;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use snakes_ladders::core::{GameConfig, Player};
use snakes_ladders::engine::TurnEngine;
use snakes_ladders::render::TextRenderer;
use snakes_ladders::session::{ReadyGate, Session, SessionEnd};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

/// Waits for Enter on stdin. `q` or end of input cancels.
struct StdinGate<R> {
    input: R,
}

impl<R: BufRead> ReadyGate for StdinGate<R> {
    fn ready(&mut self, player: &Player) -> bool {
        print!("{}, press Enter to roll the die (q to quit)...", player.name());
        let _ = io::stdout().flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => false,
            Ok(_) => !line.trim().eq_ignore_ascii_case("q"),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    run(&cli)
}

#[instrument(skip_all)]
fn run(cli: &Cli) -> Result<()> {
    let base = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => GameConfig::default(),
    };
    let config = cli.apply(base);

    let setup = config.build().context("invalid game setup")?;
    let seed = setup.die.seed();
    let engine = TurnEngine::from_setup(setup)?;

    info!(seed, players = engine.player_count(), "starting game");
    println!("🎲 Welcome to Snake and Ladders! 🎲");
    println!("Players:");
    for player in engine.players() {
        println!("  {} ({})", player.name(), player.symbol());
    }
    println!(
        "Goal: reach position {} exactly! (seed {})",
        engine.board().winning_position(),
        seed
    );

    let session_config = cli.session_config(&config);
    let gate = StdinGate {
        input: io::stdin().lock(),
    };
    let mut session = Session::new(engine, TextRenderer::stdout(), gate, session_config);

    match session.run() {
        SessionEnd::Finished(_) => println!("\nThank you for playing Snake and Ladders! 🎲"),
        SessionEnd::Cancelled => println!("\nGame abandoned."),
    }
    Ok(())
}
