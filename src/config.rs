//! Application configuration loaded from environment variables.

use anyhow::Context;
use std::env;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_IP_HASH_SALT: &str = "dev-salt";
const DEFAULT_CLICK_QUEUE_CAPACITY: usize = 10_000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_DB_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration.
///
/// # Environment Variables
///
/// | Variable               | Required | Default        |
/// |------------------------|----------|----------------|
/// | `DATABASE_URL`         | yes      | -              |
/// | `LISTEN`               | no       | `0.0.0.0:3000` |
/// | `BASE_URL`             | no       | request origin |
/// | `IP_HASH_SALT`         | no       | `dev-salt`     |
/// | `CLICK_QUEUE_CAPACITY` | no       | `10000`        |
/// | `DB_MAX_CONNECTIONS`   | no       | `10`           |
/// | `DB_CONNECT_TIMEOUT`   | no       | `30` (seconds) |
/// | `RUST_LOG`             | no       | `info`         |
/// | `LOG_FORMAT`           | no       | `text`         |
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub base_url: Option<String>,
    pub ip_hash_salt: String,
    pub click_queue_capacity: usize,
    pub db_max_connections: u32,
    pub db_connect_timeout_secs: u64,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Fails when `DATABASE_URL` is missing or a numeric variable does not
    /// parse.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").context("DATABASE_URL environment variable is required")?;

        let listen_addr =
            env::var("LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());

        let base_url = env::var("BASE_URL")
            .ok()
            .map(|v| v.trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty());

        let ip_hash_salt =
            env::var("IP_HASH_SALT").unwrap_or_else(|_| DEFAULT_IP_HASH_SALT.to_string());

        let click_queue_capacity = parse_env("CLICK_QUEUE_CAPACITY", DEFAULT_CLICK_QUEUE_CAPACITY)?;
        let db_max_connections = parse_env("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?;
        let db_connect_timeout_secs =
            parse_env("DB_CONNECT_TIMEOUT", DEFAULT_DB_CONNECT_TIMEOUT_SECS)?;

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let config = Self {
            database_url,
            listen_addr,
            base_url,
            ip_hash_salt,
            click_queue_capacity,
            db_max_connections,
            db_connect_timeout_secs,
            log_level,
            log_format,
        };
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.click_queue_capacity > 0,
            "CLICK_QUEUE_CAPACITY must be greater than zero"
        );
        anyhow::ensure!(
            self.db_max_connections > 0,
            "DB_MAX_CONNECTIONS must be greater than zero"
        );

        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("{name} must be a valid number, got {raw:?}")),
        Err(_) => Ok(default),
    }
}
