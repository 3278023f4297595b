//! Environment-driven runtime configuration for the API binary.

use std::env;
use std::net::SocketAddr;
use thiserror::Error;

/// Environment variable naming the `PostgreSQL` connection URL.
pub const DATABASE_URL_VAR: &str = "POSTBOX_DATABASE_URL";

/// Environment variable naming the socket address to serve on.
pub const BIND_ADDR_VAR: &str = "POSTBOX_BIND_ADDR";

/// Environment variable naming the connection pool size.
pub const POOL_SIZE_VAR: &str = "POSTBOX_POOL_SIZE";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_POOL_SIZE: u32 = 5;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The database URL variable is unset.
    #[error("{DATABASE_URL_VAR} must be set")]
    MissingDatabaseUrl,

    /// The bind address could not be parsed.
    #[error("invalid bind address '{value}': {source}")]
    InvalidBindAddr {
        /// The offending value.
        value: String,
        /// The underlying parse failure.
        #[source]
        source: std::net::AddrParseError,
    },

    /// The pool size could not be parsed.
    #[error("invalid pool size '{value}': {source}")]
    InvalidPoolSize {
        /// The offending value.
        value: String,
        /// The underlying parse failure.
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Runtime configuration for the contact API binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// `PostgreSQL` connection URL.
    pub database_url: String,
    /// Socket address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Maximum r2d2 connection pool size.
    pub pool_size: u32,
}

impl ApiConfig {
    /// Reads configuration from process environment variables.
    ///
    /// `POSTBOX_DATABASE_URL` is required; `POSTBOX_BIND_ADDR` defaults to
    /// `127.0.0.1:8080` and `POSTBOX_POOL_SIZE` to `5`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the database URL is unset or a value
    /// fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var(DATABASE_URL_VAR).map_err(|_| ConfigError::MissingDatabaseUrl)?;

        let bind_value =
            env::var(BIND_ADDR_VAR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = bind_value
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind_value.clone(),
                source,
            })?;

        let pool_size = env::var(POOL_SIZE_VAR)
            .ok()
            .map_or(Ok(DEFAULT_POOL_SIZE), |value| {
                value.parse().map_err(|source| ConfigError::InvalidPoolSize {
                    value: value.clone(),
                    source,
                })
            })?;

        Ok(Self {
            database_url,
            bind_addr,
            pool_size,
        })
    }
}
