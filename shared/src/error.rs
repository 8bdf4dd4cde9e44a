use thiserror::Error;

/// Failure talking to the remote book service.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, CORS, connection reset...)
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-success status
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The body could not be read as the expected representation
    #[error("Failed to parse response (status {status}): {message}")]
    Decode { status: u16, message: String },

    /// The request body could not be serialised
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } | FetchError::Decode { status, .. } => Some(*status),
            FetchError::Network(_) | FetchError::Encode(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Field-scoped schema violation produced by the form engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,

    #[error("Enter a valid date (YYYY-MM-DD)")]
    InvalidDate,

    #[error("Enter a whole number")]
    NotANumber,

    #[error("Must be 0 or greater")]
    Negative,
}

/// Startup configuration problems. These are fatal for the application.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("API base URL is not configured")]
    MissingBaseUrl,

    #[error("API base URL must start with http:// or https://, got {0:?}")]
    InvalidBaseUrl(String),
}

/// Rejected list request parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListQueryError {
    #[error("page must be at least 1")]
    InvalidPage,

    #[error("page size must be at least 1")]
    InvalidPageSize,
}
