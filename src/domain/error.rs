use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// The upstream could not be reached, answered with a non-success
    /// status, or reported an error in its body
    #[error("Fetch error: {message}")]
    Fetch {
        status: Option<u16>,
        message: String,
    },

    /// The upstream answered, but the body is not a valid page
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Cache error: {message}")]
    Cache { message: String },
}

impl DomainError {
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch {
            status: None,
            message: message.into(),
        }
    }

    pub fn fetch_status(status: u16, message: impl Into<String>) -> Self {
        Self::Fetch {
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn cache(message: impl Into<String>) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }

    /// Returns true for errors raised while talking to the upstream
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch { .. })
    }

    /// HTTP status reported by the upstream, when the request got that far
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Fetch { status, .. } => *status,
            _ => None,
        }
    }
}
