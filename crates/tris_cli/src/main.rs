//! Tris - unified CLI.

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufWriter, Write};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use tris_cli::{Cli, Command, Console, First, Pacing, ShellConfig, Shell, Side};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    match cli.command {
        Command::Play { first, no_pacing } => run_play(&cli.config, first, no_pacing),
        Command::Analyze {
            board,
            to_move,
            json,
        } => run_analyze(&board, to_move, json),
    }
}

/// Logs go to stderr so the board transcript on stdout stays clean.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Run the interactive shell
#[instrument(skip_all, fields(config_path = %config_path.display()))]
fn run_play(config_path: &std::path::Path, first: Option<First>, no_pacing: bool) -> Result<()> {
    let mut config = ShellConfig::load_or_default(config_path)?;
    if no_pacing {
        config = config.without_pacing();
    }

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let console = Console::new(stdin, stdout, Pacing::from(&config));

    let mut shell = Shell::new(console, first.map(Into::into));
    let summary = shell.run()?;
    info!(games = summary.outcomes.len(), "Shell exited");
    Ok(())
}

/// Run a one-shot analysis
#[instrument]
fn run_analyze(board: &str, to_move: Option<Side>, json: bool) -> Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    tris_cli::run_analyze(&mut out, board, to_move.map(Into::into), json)?;
    out.flush()?;
    Ok(())
}
