//! Interactive session: rounds of tic-tac-toe until the players stop.

use crate::config::{Affirmatives, ConfigError, GameConfig};
use crate::console::{Console, ConsoleError};
use crate::locale::Locale;
use derive_getters::Getters;
use tictactoe_rules::{parse_move, GameFinished, GameInProgress, GameResult, Player};
use tracing::{debug, info, instrument};

/// Tally of a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct SessionSummary {
    /// Rounds played to a result.
    rounds: usize,
    /// Rounds won by X.
    x_wins: usize,
    /// Rounds won by O.
    o_wins: usize,
    /// Rounds drawn.
    draws: usize,
}

impl SessionSummary {
    fn record(&mut self, finished: &GameFinished) {
        self.rounds += 1;
        match finished.winner() {
            Some(Player::X) => self.x_wins += 1,
            Some(Player::O) => self.o_wins += 1,
            None => self.draws += 1,
        }
    }
}

/// Runs rounds on a console until the players decline another one.
///
/// Every round starts from an empty board with X to move; nothing but the
/// summary carries over between rounds.
#[derive(Debug)]
pub struct Session<C> {
    console: C,
    locale: Locale,
    affirmatives: Affirmatives,
    summary: SessionSummary,
}

impl<C: Console> Session<C> {
    /// Creates a session from configuration.
    pub fn new(console: C, config: &GameConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            console,
            locale: *config.locale(),
            affirmatives: config.affirmative_set()?,
            summary: SessionSummary::default(),
        })
    }

    /// Returns the language of the session's messages.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Returns the rounds played so far.
    pub fn summary(&self) -> &SessionSummary {
        &self.summary
    }

    /// Consumes the session, returning its console.
    pub fn into_console(self) -> C {
        self.console
    }

    /// Plays rounds until the answer to "play again" is not affirmative.
    ///
    /// # Errors
    ///
    /// [`ConsoleError::InputClosed`] if input ends during a round, or any
    /// terminal I/O failure.
    #[instrument(skip(self), fields(locale = %self.locale))]
    pub fn run(&mut self) -> Result<SessionSummary, ConsoleError> {
        info!("Session started");
        self.console.say(self.locale.welcome())?;
        self.console.say("")?;

        loop {
            let finished = self.play_round()?;
            self.summary.record(&finished);

            if !self.play_again()? {
                self.console.say(self.locale.farewell())?;
                info!(summary = ?self.summary, "Session finished");
                return Ok(self.summary);
            }
        }
    }

    /// Plays one round from an empty board to a win or a draw.
    #[instrument(skip(self))]
    pub fn play_round(&mut self) -> Result<GameFinished, ConsoleError> {
        let mut game = GameInProgress::new();
        debug!("Round started");

        loop {
            match self.take_turn(game)? {
                GameResult::InProgress(next) => game = next,
                GameResult::Finished(finished) => {
                    self.report(&finished)?;
                    return Ok(finished);
                }
            }
        }
    }

    /// Asks the player to move until a move is accepted.
    ///
    /// Unparsable tokens and moves the board refuses share one path: the
    /// board is left as it was and the same player is asked again.
    fn take_turn(&mut self, mut game: GameInProgress) -> Result<GameResult, ConsoleError> {
        let player = game.to_move();
        loop {
            self.console.say(&game.board().render())?;
            self.console.say("")?;

            let Some(line) = self.console.ask(&self.locale.move_prompt(player))? else {
                return Err(ConsoleError::InputClosed);
            };

            let error = match parse_move(&line, game.board()) {
                Ok(position) => match game.place(position) {
                    Ok(result) => {
                        debug!(%player, %position, "Move played");
                        return Ok(result);
                    }
                    Err(rejected) => {
                        let error = rejected.error().clone();
                        game = rejected.into_game();
                        error
                    }
                },
                Err(error) => error,
            };

            debug!(%player, %error, "Invalid move input");
            self.console.say(self.locale.invalid_move())?;
            self.console.say("")?;
        }
    }

    fn report(&mut self, finished: &GameFinished) -> Result<(), ConsoleError> {
        self.console.say(&finished.board().render())?;
        self.console.say("")?;
        match finished.winner() {
            Some(winner) => {
                info!(%winner, moves = finished.history().len(), "Round won");
                self.console.say(&self.locale.winner(winner))?;
            }
            None => {
                info!("Round drawn");
                self.console.say(self.locale.draw())?;
            }
        }
        self.console.say("")
    }

    /// End of input counts as "no".
    fn play_again(&mut self) -> Result<bool, ConsoleError> {
        let reply = self.console.ask(self.locale.play_again_prompt())?;
        self.console.say("")?;
        let again = reply.is_some_and(|reply| self.affirmatives.matches(&reply));
        debug!(again, "Play again answered");
        Ok(again)
    }
}
