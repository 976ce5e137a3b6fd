//! Transport-level failures: the request never produced a usable envelope.

use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx answer. `message` is the envelope's message when the body had
    /// one, the raw body otherwise.
    #[error("server answered {status}: {message}")]
    Http { status: u16, message: String },

    #[error("could not reach the storefront API: {0}")]
    Network(#[from] reqwest::Error),

    #[error("no answer within {0:?}")]
    Timeout(Duration),

    #[error("bad API url {0}")]
    InvalidUrl(String),

    /// The body was not the expected envelope. `body` keeps the raw text for
    /// the log when it was read.
    #[error("unexpected response: {message}")]
    Parse {
        message: String,
        body: Option<String>,
    },
}

impl ApiError {
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    pub fn invalid_url(raw: &str, reason: impl std::fmt::Display) -> Self {
        Self::InvalidUrl(format!("'{}' ({})", raw, reason))
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            body: None,
        }
    }

    pub fn parse_with_body(message: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            body: Some(body.into()),
        }
    }

    /// reqwest reports its own timeout as an ordinary error; pull it out so
    /// callers can tell a slow server from an unreachable one.
    pub fn from_transport(error: reqwest::Error, timeout: Duration) -> Self {
        if error.is_timeout() {
            return Self::Timeout(timeout);
        }
        Self::Network(error)
    }

    pub fn status_code(&self) -> Option<u16> {
        if let Self::Http { status, .. } = self {
            Some(*status)
        } else {
            None
        }
    }

    /// Gateway hiccups, rate limiting and lost connections are worth another
    /// try; anything the server rejected on its merits is not.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http { status, .. } => matches!(status, 429 | 500 | 502 | 503 | 504),
            Self::Network(_) | Self::Timeout(_) => true,
            Self::InvalidUrl(_) | Self::Parse { .. } => false,
        }
    }
}
