//! Unified error types for company-manager.
//!
//! Selecting a section is infallible once a [`Section`](crate::model::Section)
//! value exists; errors only arise where strings, files or the network enter
//! the program.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for company-manager operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A section name from the CLI or a config file is not one of the fixed set
    #[error("Unknown section '{0}' (expected one of: roles, teams, people)")]
    UnknownSection(String),

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The configured GraphQL endpoint cannot be used
    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// Errors raised by the HTTP transport
    #[error("GraphQL client error: {context}")]
    Client {
        context: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a GraphQL `errors` array
    #[error("GraphQL request failed: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    /// IO errors with context
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    /// JSON (de)serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenient Result type for company-manager operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a client error with context
    pub fn client(context: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Client {
            context: context.into(),
            source,
        }
    }

    /// Create an endpoint validation error
    pub fn invalid_endpoint(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEndpoint {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }

    /// Create an IO error tied to a path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: Some(path.into()),
            source,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Io { path: None, source }
    }
}
