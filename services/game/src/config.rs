//! services/game/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The
//! `.env` file is used for local development.

use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing the environment variable {0}")]
    MissingVar(String),
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub log_level: Level,
    pub openai_api_key: Option<String>,
    pub embedding_model: String,
    pub word_model: String,
    pub initial_guess: String,
    pub max_attempts: usize,
    pub user_id: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        // --- Load Store Settings ---
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingVar("DATABASE_URL".to_string()))?;

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        // --- Load Provider Settings (API key as optional) ---
        let openai_api_key = std::env::var("OPENAI_API_KEY").ok();
        let embedding_model = std::env::var("EMBEDDING_MODEL")
            .unwrap_or_else(|_| "text-embedding-3-small".to_string());
        let word_model =
            std::env::var("WORD_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());

        // --- Load Game Rules ---
        let initial_guess =
            std::env::var("GAME_INITIAL_GUESS").unwrap_or_else(|_| "guess".to_string());
        let max_attempts_str =
            std::env::var("GAME_MAX_ATTEMPTS").unwrap_or_else(|_| "20".to_string());
        let max_attempts = max_attempts_str.parse::<usize>().map_err(|_| {
            ConfigError::InvalidValue(
                "GAME_MAX_ATTEMPTS".to_string(),
                format!("'{}' is not a valid attempt count", max_attempts_str),
            )
        })?;

        // --- Load Player Identity (minted per run when absent) ---
        let user_id = std::env::var("GAME_USER").ok();

        Ok(Self {
            database_url,
            log_level,
            openai_api_key,
            embedding_model,
            word_model,
            initial_guess,
            max_attempts,
            user_id,
        })
    }
}
