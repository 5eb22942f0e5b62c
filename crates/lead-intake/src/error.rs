//! Error types for lead submission.

/// Errors returned by a submission service.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The intake service already holds a lead with this email or mobile.
    #[error("Duplicate lead: {0}")]
    Duplicate(String),

    /// The intake service answered with a non-success status.
    #[error("Intake service rejected the lead with status {status}: {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Message from the response body, or the bare status.
        message: String,
    },

    /// The request never produced a response (connect, timeout, TLS).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success status whose body could not be read as JSON.
    #[error("Invalid response body: {0}")]
    InvalidResponse(String),
}

impl SubmitError {
    /// Returns whether this is a duplicate-lead conflict.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate(_))
    }

    /// Returns the HTTP status, if the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            Self::Duplicate(_) | Self::InvalidResponse(_) => None,
        }
    }
}

/// Errors in intake configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required setting is absent.
    #[error("Missing configuration value: {0}")]
    Missing(&'static str),

    /// The endpoint is not an absolute http(s) URL.
    #[error("Invalid intake URL '{value}': {reason}")]
    InvalidUrl {
        /// The rejected value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The timeout is not a positive whole number of seconds.
    #[error("Invalid timeout '{0}': expected a positive number of seconds")]
    InvalidTimeout(String),
}

/// Result type alias for submission operations.
pub type Result<T> = std::result::Result<T, SubmitError>;
