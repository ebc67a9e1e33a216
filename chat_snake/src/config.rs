// config.rs - Startup configuration from the environment and an optional .env

use std::fmt;

use thiserror::Error;
use tracing::debug;

pub const BOT_TOKEN_KEY: &str = "botToken";
pub const CHANNEL_ID: u64 = 960497802830573618;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read .env file")]
    Dotenv(#[from] dotenvy::Error),
    #[error("`{0}` is not set or is blank")]
    MissingToken(&'static str),
}

pub struct Config {
    pub bot_token: String,
    pub channel_id: u64, // only messages from this channel steer the snake
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bot_token", &"<redacted>")
            .field("channel_id", &self.channel_id)
            .finish()
    }
}

impl Config {
    /// Loads `.env` from the working directory if there is one, then reads
    /// the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "loaded .env"),
            Err(err) if err.not_found() => debug!("no .env file, using process environment"),
            Err(err) => return Err(err.into()),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bot_token = lookup(BOT_TOKEN_KEY)
            .map(|token| token.trim().to_owned())
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::MissingToken(BOT_TOKEN_KEY))?;

        Ok(Self {
            bot_token,
            channel_id: CHANNEL_ID,
        })
    }
}
