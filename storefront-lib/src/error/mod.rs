//! Error types

mod api;
mod auth;
mod validation;

pub use api::*;
pub use auth::*;
pub use validation::*;

/// Top-level error for every client operation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request failed at the HTTP level.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The server answered with `success: false`.
    #[error("{message}")]
    Rejected {
        /// Server message, or the resource's fallback message.
        message: String,
    },

    /// Form input failed validation before any request was made.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// The token provider could not supply a token.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A request body could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Returns the HTTP status code if this is an HTTP error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(api) => api.status_code(),
            _ => None,
        }
    }

    /// Returns `true` if the server refused our credentials.
    pub fn is_unauthorized(&self) -> bool {
        self.status_code() == Some(401)
    }
}
