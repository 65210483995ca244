use sea_orm::ConnectOptions;
use std::env;
use std::time::Duration;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://blog.db?mode=rwc";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub connect_timeout: Duration,
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            connect_timeout: Duration::from_secs(5),
            sqlx_logging: false,
        }
    }
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn from_env() -> Self {
        let defaults = Self::default();

        let url = env::var("DATABASE_URL").unwrap_or(defaults.url);

        let connect_timeout = env::var("DB_CONNECT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.connect_timeout);

        let sqlx_logging = env::var("DB_SQLX_LOGGING")
            .ok()
            .and_then(|value| parse_bool(&value))
            .unwrap_or(defaults.sqlx_logging);

        Self {
            url,
            connect_timeout,
            sqlx_logging,
        }
    }

    /// Options for a single-operation handle: one connection, nothing kept idle.
    pub fn connect_options(&self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.url.clone());
        opt.max_connections(1)
            .min_connections(0)
            .connect_timeout(self.connect_timeout)
            .sqlx_logging(self.sqlx_logging);
        opt
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}
