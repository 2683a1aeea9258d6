//! Command-line interface for console_tictactoe.

use crate::locale::Locale;
use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal.
///
/// Every option is optional; without any the game starts in German with
/// "j"/"ja" as the replies that start another round.
#[derive(Parser, Debug)]
#[command(name = "console_tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file with `locale` and `affirmatives`
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Message language (de or en), overrides the config file
    #[arg(short, long)]
    pub locale: Option<Locale>,
}
