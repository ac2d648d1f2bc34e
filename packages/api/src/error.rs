//! Errors raised by the users API and its configuration.

use std::fmt;

use thiserror::Error;

/// One of the four remote calls against the users collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Operation::List => "GET /users",
            Operation::Create => "POST /users",
            Operation::Update => "PUT /users/{id}",
            Operation::Delete => "DELETE /users/{id}",
        };
        f.write_str(label)
    }
}

/// Failure of a remote call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, non-2xx status or body decoding failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("user {0} not found")]
    NotFound(i64),
    /// Failure injected into [`crate::MemoryUsersApi`].
    #[error("{0} unavailable")]
    Unavailable(Operation),
}

/// Failure loading an [`crate::ApiConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
