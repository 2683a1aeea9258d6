//! Message catalog for the console game.

use serde::{Deserialize, Serialize};
use tictactoe_rules::Player;

/// Language of the console messages.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Locale {
    /// German.
    #[default]
    #[serde(rename = "de")]
    #[strum(serialize = "de")]
    German,
    /// English.
    #[serde(rename = "en")]
    #[strum(serialize = "en")]
    English,
}

impl Locale {
    /// Replies that mean "play again" unless the configuration overrides them.
    pub fn default_affirmatives(self) -> &'static [&'static str] {
        match self {
            Locale::German => &["j", "ja"],
            Locale::English => &["y", "yes"],
        }
    }

    /// Greeting shown once when the session starts.
    pub fn welcome(self) -> &'static str {
        match self {
            Locale::German => "Willkommen zu Tic-Tac-Toe!",
            Locale::English => "Welcome to Tic-Tac-Toe!",
        }
    }

    /// Prompt asking `player` for a cell number.
    pub fn move_prompt(self, player: Player) -> String {
        match self {
            Locale::German => format!("Spieler {player}, wähle ein Feld (1-9): "),
            Locale::English => format!("Player {player}, choose a cell (1-9): "),
        }
    }

    /// Shown when the entered token does not name a free cell.
    pub fn invalid_move(self) -> &'static str {
        match self {
            Locale::German => "Ungültige Eingabe. Bitte wähle eine freie Zahl zwischen 1 und 9.",
            Locale::English => "Invalid input. Please choose a free number between 1 and 9.",
        }
    }

    /// Congratulation for the winner of a round.
    pub fn winner(self, player: Player) -> String {
        match self {
            Locale::German => format!("Glückwunsch! Spieler {player} hat gewonnen!"),
            Locale::English => format!("Congratulations! Player {player} has won!"),
        }
    }

    /// Shown when a round ends in a draw.
    pub fn draw(self) -> &'static str {
        match self {
            Locale::German => "Unentschieden! Keine weiteren Züge möglich.",
            Locale::English => "Draw! No moves left.",
        }
    }

    /// Prompt asking whether to play another round.
    pub fn play_again_prompt(self) -> &'static str {
        match self {
            Locale::German => "Noch einmal spielen? (j/n): ",
            Locale::English => "Play again? (y/n): ",
        }
    }

    /// Shown when the session ends.
    pub fn farewell(self) -> &'static str {
        match self {
            Locale::German => "Danke fürs Spielen!",
            Locale::English => "Thanks for playing!",
        }
    }
}
