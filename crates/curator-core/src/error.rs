//! Error taxonomy for the curator.
//!
//! Every failure the controller can hit maps onto one `CuratorError` variant.
//! The controller catches all of them at its boundary and turns them into a
//! single user-visible message plus an `error` state transition.

use std::io;
use thiserror::Error;

/// Generic fallback message when an error carries no detail of its own.
pub const GENERIC_ERROR_MESSAGE: &str = "Unexpected error while calling the API.";

/// Input rejected before any network call is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please provide an API endpoint URL.")]
    MissingEndpoint,
    #[error("Prompt cannot be empty.")]
    EmptyPrompt,
}

#[derive(Debug, Error)]
pub enum CuratorError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Non-success HTTP status. `body` is the response text, or the status
    /// reason phrase when the body was empty.
    #[error("API error ({status}): {body}")]
    Http { status: u16, body: String },

    #[error("{0}")]
    Network(String),

    #[error("{0}")]
    Parse(String),

    /// The host bridge lacks the capability an action needs.
    #[error("{0}")]
    BridgeUnavailable(&'static str),

    /// An action was requested with nothing to deliver.
    #[error("{0}")]
    NoContent(&'static str),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CuratorError {
    /// Stable coarse-grained code for programmatic consumers.
    pub fn code(&self) -> &'static str {
        match self {
            CuratorError::Validation(_) => "validation",
            CuratorError::Http { .. } => "http",
            CuratorError::Network(_) => "network",
            CuratorError::Parse(_) => "parse",
            CuratorError::BridgeUnavailable(_) => "bridge_unavailable",
            CuratorError::NoContent(_) => "no_content",
            CuratorError::Config(_) => "config",
            CuratorError::Io(_) => "io",
        }
    }

    /// The message shown to the user; never empty.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

impl From<CuratorError> for io::Error {
    fn from(e: CuratorError) -> Self {
        match e {
            CuratorError::Io(inner) => inner,
            CuratorError::Validation(_) | CuratorError::Config(_) => {
                io::Error::new(io::ErrorKind::InvalidInput, e.user_message())
            }
            CuratorError::Parse(_) => io::Error::new(io::ErrorKind::InvalidData, e.user_message()),
            CuratorError::NoContent(_) => io::Error::new(io::ErrorKind::NotFound, e.user_message()),
            CuratorError::BridgeUnavailable(_) => {
                io::Error::new(io::ErrorKind::Unsupported, e.user_message())
            }
            CuratorError::Http { .. } | CuratorError::Network(_) => {
                io::Error::other(e.user_message())
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CuratorError>;
