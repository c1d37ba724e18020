use std::env;

use crate::core::{AppError, Result};

pub mod database;
pub mod server;

pub use database::{run_migrations, DatabaseConfig};
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: {}", s)),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_source(&|key: &str| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_source<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            app: AppConfig {
                env: optional(lookup, "APP_ENV", "development"),
                log_level: optional(lookup, "LOG_LEVEL", "info"),
                log_format: optional(lookup, "LOG_FORMAT", "pretty")
                    .parse()
                    .map_err(AppError::Configuration)?,
            },
            database: DatabaseConfig::from_source(lookup)?,
            server: ServerConfig::from_source(lookup)?,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::configuration("Server port must be greater than 0"));
        }

        if self.server.workers == 0 {
            return Err(AppError::configuration(
                "SERVER_WORKERS must be greater than 0",
            ));
        }

        if self.database.max_connections == 0 {
            return Err(AppError::configuration(
                "DB_MAX_CONNECTIONS must be greater than 0",
            ));
        }

        if self.database.min_connections > self.database.max_connections {
            return Err(AppError::configuration(
                "DB_MIN_CONNECTIONS cannot exceed DB_MAX_CONNECTIONS",
            ));
        }

        Ok(())
    }
}

/// Value of a required key; missing and empty are both errors
pub(crate) fn required<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| AppError::configuration(format!("{} not set", key)))
}

pub(crate) fn optional<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
