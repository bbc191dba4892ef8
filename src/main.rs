//! Rewind Games - unified CLI.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use rewind_games::{Cli, Command, ReplayScript, Settings, render_text, run_script, tui};
use rewind_tictactoe::DisplayOrder;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play { descending } => run_play(apply_order(settings, descending)),
        Command::Replay {
            moves,
            jump,
            descending,
            json,
        } => {
            let settings = apply_order(settings, descending);
            run_replay(
                ReplayScript {
                    moves,
                    jump,
                    order: *settings.order(),
                },
                json,
            )
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn apply_order(settings: Settings, descending: bool) -> Settings {
    if descending {
        settings.with_order(DisplayOrder::Descending)
    } else {
        settings
    }
}

/// Run the interactive terminal game
fn run_play(settings: Settings) -> Result<()> {
    // The terminal belongs to the UI, so logs only go to a file.
    if let Some(path) = settings.log_file() {
        let log_file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(Arc::new(log_file))
            .with_ansi(false)
            .init();
    }

    info!(order = %settings.order(), "Starting Rewind Games");
    tui::run(settings)
}

/// Run a scripted game and print the result
fn run_replay(script: ReplayScript, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();

    let view = run_script(&script)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render_text(&view));
    }
    Ok(())
}
