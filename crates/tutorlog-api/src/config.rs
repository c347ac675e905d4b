// Service configuration loaded from environment variables.
//
// Populated once at startup and passed to constructors; nothing reads the
// environment after this. Pool bounds, the limit clamp and the listen
// address are implementation-fixed constants, not configuration.

use std::env;

use anyhow::{Context, Result};
use sqlx::postgres::PgConnectOptions;

const DEFAULT_DB_PORT: u16 = 5432;

/// Complete service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL host
    pub db_host: String,
    /// PostgreSQL port
    pub db_port: u16,
    /// Database name
    pub db_name: String,
    /// Database role
    pub db_user: String,
    /// Database password; doubles as the dashboard shared secret
    pub db_password: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `DB_HOST`: PostgreSQL host (required)
    /// - `DB_PORT`: PostgreSQL port (default: 5432)
    /// - `DB_NAME`: database name (required)
    /// - `DB_USER`: database role (required)
    /// - `DB_PASSWORD`: database password, also the dashboard secret (required)
    pub fn from_env() -> Result<Self> {
        let db_port = match env::var("DB_PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("DB_PORT must be a port number, got {:?}", raw))?,
            Err(_) => DEFAULT_DB_PORT,
        };

        Ok(Self {
            db_host: env::var("DB_HOST").context("DB_HOST environment variable required")?,
            db_port,
            db_name: env::var("DB_NAME").context("DB_NAME environment variable required")?,
            db_user: env::var("DB_USER").context("DB_USER environment variable required")?,
            db_password: env::var("DB_PASSWORD")
                .context("DB_PASSWORD environment variable required")?,
        })
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .database(&self.db_name)
            .username(&self.db_user)
            .password(&self.db_password)
    }

    /// The dashboard's shared secret. There is no user-account system; the
    /// operator's database password gates the dashboard.
    pub fn dashboard_secret(&self) -> &str {
        &self.db_password
    }
}
