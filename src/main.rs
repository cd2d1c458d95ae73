//! Strictly Rounds - command line
//!
//! Terminal UI and headless replay over the same game engine.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::{Path, PathBuf};
use strictly_rounds::{Game, GameConfig, Intent, render_text, shared};
use tracing::{error, info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            player1,
            player2,
        } => run_play(config, player1, player2),
        Command::Replay {
            config,
            json,
            moves,
        } => run_replay(config, json, moves),
    }
}

/// Run the terminal UI
fn run_play(
    config: Option<PathBuf>,
    player1: Option<String>,
    player2: Option<String>,
) -> Result<()> {
    // Log to a file so output does not corrupt the screen
    let log_file = std::fs::File::create("strictly_rounds_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,strictly_rounds=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting Strictly Rounds TUI");

    let config = load_config(config.as_deref())?.with_names(player1, player2);
    let game = config.new_game().context("Invalid game configuration")?;
    tui::run(game)
}

/// Apply moves headlessly, printing every state the game reports
#[instrument(skip(moves), fields(moves = moves.len()))]
fn run_replay(config: Option<PathBuf>, json: bool, moves: Vec<String>) -> Result<()> {
    initialize_tracing();

    let intents = moves
        .iter()
        .map(|m| m.parse::<Intent>())
        .collect::<Result<Vec<_>, _>>()?;

    let config = load_config(config.as_deref())?;
    let mut game = config.new_game().context("Invalid game configuration")?;
    print_state(&game, json);

    game.add_observer(shared(move |g: &Game| print_state(g, json)));

    for intent in intents {
        info!(%intent, "Applying intent");
        if !json {
            println!("> {}", intent);
        }
        game = game.apply(intent)?;
    }

    Ok(())
}

fn print_state(game: &Game, json: bool) {
    if json {
        match serde_json::to_string(game) {
            Ok(line) => println!("{}", line),
            Err(e) => error!(error = %e, "Failed to serialize game state"),
        }
    } else {
        println!("{}\n", render_text(game));
    }
}

#[instrument]
fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    match path {
        Some(path) => Ok(GameConfig::from_file(path)?),
        None => {
            info!("No config file given, using defaults");
            Ok(GameConfig::default())
        }
    }
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,strictly_rounds=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
