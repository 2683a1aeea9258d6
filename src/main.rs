//! Console tic-tac-toe binary.

use anyhow::{Context, Result};
use clap::Parser;
use console_tictactoe::{Cli, Console, ConsoleError, GameConfig, Session, TerminalConsole};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Game output owns stdout; logs go to stderr and stay quiet by default.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    run(config)
}

/// Reads the config file, if any, and applies CLI overrides.
#[instrument]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => GameConfig::default(),
    };

    Ok(match cli.locale {
        Some(locale) => config.with_locale(locale),
        None => config,
    })
}

fn run(config: GameConfig) -> Result<()> {
    let mut session = Session::new(TerminalConsole::stdio(), &config)?;
    info!(locale = %session.locale(), "Starting console tic-tac-toe");

    match session.run() {
        Ok(summary) => {
            info!(rounds = summary.rounds(), "Goodbye");
            Ok(())
        }
        Err(ConsoleError::InputClosed) => {
            warn!(summary = ?session.summary(), "Input closed mid-round");
            let farewell = session.locale().farewell();
            let mut console = session.into_console();
            console.say("")?;
            console.say(farewell)?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
