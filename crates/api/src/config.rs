use std::str::FromStr;

use axum::http::HeaderValue;

/// Error raised when an environment variable holds an unusable value.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be set")]
    Missing { name: &'static str },

    #[error("{name} has invalid value '{value}': {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Log output format for the `fmt` subscriber layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long to wait for in-flight requests on shutdown (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Upper bound on pooled connections (default: `10`).
    pub database_max_connections: u32,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                                       |
    /// |----------------------------|-----------------------------------------------|
    /// | `DATABASE_URL`             | required                                      |
    /// | `DATABASE_MAX_CONNECTIONS` | `10`                                          |
    /// | `HOST`                     | `0.0.0.0`                                     |
    /// | `PORT`                     | `5000`                                        |
    /// | `CORS_ORIGINS`             | `http://localhost:3000,http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                                          |
    /// | `SHUTDOWN_TIMEOUT_SECS`    | `30`                                          |
    /// | `LOG_FORMAT`               | `text` (`json` for structured output)         |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");
        let port = parse_var("PORT", var("PORT", "5000"))?;

        let cors_origins: Vec<String> = var(
            "CORS_ORIGINS",
            "http://localhost:3000,http://localhost:5173",
        )
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
        for origin in &cors_origins {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::Invalid {
                name: "CORS_ORIGINS",
                value: origin.clone(),
                reason: e.to_string(),
            })?;
        }

        let request_timeout_secs =
            parse_var("REQUEST_TIMEOUT_SECS", var("REQUEST_TIMEOUT_SECS", "30"))?;
        let shutdown_timeout_secs =
            parse_var("SHUTDOWN_TIMEOUT_SECS", var("SHUTDOWN_TIMEOUT_SECS", "30"))?;

        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing {
            name: "DATABASE_URL",
        })?;
        let database_max_connections =
            parse_var("DATABASE_MAX_CONNECTIONS", var("DATABASE_MAX_CONNECTIONS", "10"))?;

        let log_format = match var("LOG_FORMAT", "text").to_ascii_lowercase().as_str() {
            "text" => LogFormat::Text,
            "json" => LogFormat::Json,
            other => {
                return Err(ConfigError::Invalid {
                    name: "LOG_FORMAT",
                    value: other.to_string(),
                    reason: "expected 'text' or 'json'".to_string(),
                })
            }
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            database_url,
            database_max_connections,
            log_format,
        })
    }
}

fn parse_var<T>(name: &'static str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        name,
        reason: e.to_string(),
        value,
    })
}
