// src/config.rs

use std::env;
use dotenvy::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection string. `None` selects the in-memory store.
    pub database_url: Option<String>,
    pub rust_log: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    /// Unparseable numbers fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty());

        let rust_log = lookup("RUST_LOG")
            .unwrap_or_else(|| "info".to_string());

        let host = lookup("HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string());

        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        let max_connections = lookup("DB_MAX_CONNECTIONS")
            .and_then(|n| n.parse().ok())
            .unwrap_or(5);

        let log_dir = lookup("LOG_DIR")
            .unwrap_or_else(|| "logs".to_string());

        Self {
            database_url,
            rust_log,
            host,
            port,
            max_connections,
            log_dir,
        }
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
