//! Environment-driven server configuration.

use crate::server::error::config::ConfigError;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_PG_PORT: u16 = 5432;

/// Runtime settings read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Postgres connection URL
    pub database_url: String,
    /// TCP port the HTTP server listens on
    pub port: u16,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// `DATABASE_URL` takes precedence; otherwise the URL is assembled from
    /// `PGHOST`, `PGPORT`, `PGUSER`, `PGPASSWORD` and `PGDATABASE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which returns `None` for unset variables.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_port(&lookup, "PORT", DEFAULT_PORT)?;

        let database_url = match lookup("DATABASE_URL").filter(|url| !url.is_empty()) {
            Some(url) => url,
            None => {
                let required = |key: &str| {
                    lookup(key)
                        .filter(|value| !value.is_empty())
                        .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
                };

                let host = required("PGHOST")?;
                let user = required("PGUSER")?;
                let database = required("PGDATABASE")?;
                let password = lookup("PGPASSWORD").unwrap_or_default();
                let pg_port = parse_port(&lookup, "PGPORT", DEFAULT_PG_PORT)?;

                if password.is_empty() {
                    format!("postgres://{}@{}:{}/{}", user, host, pg_port, database)
                } else {
                    format!(
                        "postgres://{}:{}@{}:{}/{}",
                        user, password, host, pg_port, database
                    )
                }
            }
        };

        Ok(Self { database_url, port })
    }
}

fn parse_port<F>(lookup: &F, key: &str, default: u16) -> Result<u16, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).filter(|value| !value.is_empty()) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|e| ConfigError::InvalidEnvValue {
            var: key.to_string(),
            reason: format!("{}", e),
        }),
    }
}
