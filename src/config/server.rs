use crate::config::optional;
use crate::core::{AppError, Result};

/// Server configuration for HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self {
            host,
            port,
            workers: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        }
    }

    pub fn from_source<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = optional(lookup, "SERVER_PORT", "8080")
            .parse()
            .map_err(|_| AppError::configuration("Invalid SERVER_PORT"))?;

        let mut config = Self::new(optional(lookup, "SERVER_HOST", "127.0.0.1"), port);

        // Defaults to one worker per available core
        if let Some(workers) = lookup("SERVER_WORKERS").filter(|v| !v.trim().is_empty()) {
            config.workers = workers
                .trim()
                .parse()
                .map_err(|_| AppError::configuration("Invalid SERVER_WORKERS"))?;
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
