//! Game configuration loaded from TOML.

use crate::locale::Locale;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Console game configuration.
///
/// ```toml
/// locale = "en"
/// affirmatives = ["y", "yes", "sure"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Language of the console messages.
    locale: Locale,

    /// Replies accepted as "play again". Falls back to the locale's set.
    affirmatives: Option<Vec<String>>,
}

impl GameConfig {
    /// Creates a configuration for `locale` with its default replies.
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            affirmatives: None,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(locale = %config.locale, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.affirmative_set()?;
        Ok(config)
    }

    /// Replaces the message language, keeping any explicit replies.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Replaces the accepted "play again" replies.
    pub fn with_affirmatives<I, S>(mut self, replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.affirmatives = Some(replies.into_iter().map(Into::into).collect());
        self
    }

    /// Builds the normalised set of "play again" replies.
    pub fn affirmative_set(&self) -> Result<Affirmatives, ConfigError> {
        match &self.affirmatives {
            Some(replies) => Affirmatives::new(replies),
            None => Affirmatives::new(self.locale.default_affirmatives()),
        }
    }
}

/// Replies that continue the session, stored trimmed and lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affirmatives(BTreeSet<String>);

impl Affirmatives {
    /// Normalises `replies`; blank entries are dropped.
    ///
    /// # Errors
    ///
    /// Fails when no non-blank reply remains, since the session could
    /// then never continue.
    pub fn new<I, S>(replies: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set: BTreeSet<String> = replies
            .into_iter()
            .map(|reply| reply.as_ref().trim().to_lowercase())
            .filter(|reply| !reply.is_empty())
            .collect();

        if set.is_empty() {
            return Err(ConfigError::new(
                "affirmatives must contain at least one non-blank reply".to_string(),
            ));
        }
        Ok(Self(set))
    }

    /// Case-insensitive match of a typed reply.
    pub fn matches(&self, reply: &str) -> bool {
        self.0.contains(&reply.trim().to_lowercase())
    }

    /// Iterates the normalised replies in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
