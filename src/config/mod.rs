//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SOULSYNC` prefix and nested values use double underscores as separators.
//!
//! Every section has defaults, so an empty environment yields a working
//! single-user setup: in-memory storage and fallback chat.
//!
//! # Example
//!
//! ```no_run
//! use soulsync::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod ai;
mod database;
mod error;
mod game;
mod server;

pub use ai::{AiConfig, AiProvider};
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use game::GameConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection, optional)
    #[serde(default)]
    pub database: DatabaseConfig,

    /// AI provider configuration (Gemini/OpenAI, optional)
    #[serde(default)]
    pub ai: AiConfig,

    /// Daily loop settings
    #[serde(default)]
    pub game: GameConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SOULSYNC` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SOULSYNC__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `SOULSYNC__AI__GEMINI_API_KEY=...` -> `ai.gemini_api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SOULSYNC")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.ai.validate()?;
        self.game.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "SOULSYNC__DATABASE__URL",
        "SOULSYNC__AI__GEMINI_API_KEY",
        "SOULSYNC__AI__PROVIDER",
        "SOULSYNC__SERVER__PORT",
        "SOULSYNC__SERVER__ENVIRONMENT",
        "SOULSYNC__GAME__MISSIONS_PER_DAY",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert!(config.database.url().is_none());
        assert!(!config.ai.is_configured());
        assert_eq!(config.game.missions_per_day, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SOULSYNC__DATABASE__URL", "postgresql://test@localhost/test");
        env::set_var("SOULSYNC__AI__GEMINI_API_KEY", "g-key");
        env::set_var("SOULSYNC__GAME__MISSIONS_PER_DAY", "4");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.database.url(), Some("postgresql://test@localhost/test"));
        assert_eq!(config.ai.active_provider(), Some(AiProvider::Gemini));
        assert!(!format!("{:?}", config.ai).contains("g-key"));
        assert_eq!(config.game.missions_per_day, 4);
    }

    #[test]
    fn test_provider_selection_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SOULSYNC__AI__PROVIDER", "openai");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().ai.provider, AiProvider::OpenAI);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SOULSYNC__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().is_production());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SOULSYNC__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().server.port, 3000);
    }
}
