use std::fmt;
use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};

use crate::config::{optional, required};
use crate::core::{AppError, Result};

/// Connection parameters for the MySQL database.
///
/// `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD` and `DB_NAME` are required.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("name", &self.name)
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .finish()
    }
}

impl DatabaseConfig {
    pub fn from_source<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(DatabaseConfig {
            host: required(lookup, "DB_HOST")?,
            port: required(lookup, "DB_PORT")?
                .parse()
                .map_err(|_| AppError::configuration("Invalid DB_PORT"))?,
            user: required(lookup, "DB_USER")?,
            password: required(lookup, "DB_PASSWORD")?,
            name: required(lookup, "DB_NAME")?,
            max_connections: optional(lookup, "DB_MAX_CONNECTIONS", "20")
                .parse()
                .map_err(|_| AppError::configuration("Invalid DB_MAX_CONNECTIONS"))?,
            min_connections: optional(lookup, "DB_MIN_CONNECTIONS", "1")
                .parse()
                .map_err(|_| AppError::configuration("Invalid DB_MIN_CONNECTIONS"))?,
        })
    }

    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }

    /// Create a MySQL connection pool
    pub async fn create_pool(&self) -> Result<MySqlPool> {
        let pool = MySqlPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600)) // 10 minutes
            .max_lifetime(Duration::from_secs(1800)) // 30 minutes
            .test_before_acquire(true)
            .connect_with(self.connect_options())
            .await?;

        Ok(pool)
    }
}

/// Apply pending schema migrations from `migrations/`
pub async fn run_migrations(pool: &MySqlPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
