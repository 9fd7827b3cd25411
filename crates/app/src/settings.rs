//! Application settings.
//!
//! Read from an optional `settings.toml` (or the file named by
//! `CLUBZEN_SETTINGS`), then overridden by `CLUBZEN__*` environment
//! variables, e.g. `CLUBZEN__SERVER__PORT=8080`.
//!
//! See `settings.example.toml` for every key.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const SETTINGS_PATH_VAR: &str = "CLUBZEN_SETTINGS";

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

/// Where the data lives.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    /// Throwaway in-memory SQLite, lost on exit.
    Memory,
    /// SQLite file at the given path, created if missing.
    Sqlite(String),
    /// Full connection URL. May embed credentials.
    Url(String),
}

impl Database {
    pub fn url(&self) -> String {
        match self {
            Database::Memory => String::from("sqlite::memory:"),
            Database::Sqlite(path) => format!("sqlite:{path}?mode=rwc"),
            Database::Url(url) => url.clone(),
        }
    }
}

fn default_database() -> Database {
    Database::Sqlite("clubzen.db".to_string())
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: String,
    pub port: u16,
    #[serde(default = "default_database")]
    pub database: Database,
}

impl Server {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Server,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let path = std::env::var(SETTINGS_PATH_VAR).unwrap_or_else(|_| "settings".to_string());

        let settings = Config::builder()
            .set_default("app.level", "info")?
            .set_default("server.bind", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .add_source(File::with_name(&path).required(false))
            .add_source(Environment::with_prefix("CLUBZEN").separator("__"))
            .build()?;

        settings.try_deserialize()
    }
}
