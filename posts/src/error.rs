//! Error types for the posts slice

use thiserror::Error;

/// Status reported in state when a fetch failed without an HTTP response.
///
/// Browsers report the same value for network-level failures.
pub const NO_RESPONSE_STATUS: u16 = 0;

/// Errors that can occur while fetching the posts list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The endpoint answered with a non-success status
    #[error("posts endpoint returned status {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// The request failed before any response arrived
    #[error("request failed before a response arrived: {0}")]
    Transport(String),

    /// The response body was not a JSON array
    #[error("response body is not a JSON array of posts: {0}")]
    Decode(String),
}

impl FetchError {
    /// HTTP status of the failed response, if there was one
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    /// Status code to record in state
    ///
    /// Failures without an error status report [`NO_RESPONSE_STATUS`].
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self.status() {
            Some(status) => status,
            None => NO_RESPONSE_STATUS,
        }
    }
}

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `POSTS_API_URL` could not be parsed
    #[error("invalid posts endpoint {url:?}: {reason}")]
    InvalidUrl {
        /// The rejected value
        url: String,
        /// Parser message
        reason: String,
    },

    /// The endpoint is not http or https
    #[error("unsupported scheme {0:?}; expected http or https")]
    UnsupportedScheme(String),

    /// The HTTP client could not be built
    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_extraction() {
        assert_eq!(FetchError::Status { status: 404 }.status_code(), 404);
        assert_eq!(FetchError::Status { status: 500 }.status(), Some(500));
    }

    #[test]
    fn test_missing_response_uses_sentinel() {
        let err = FetchError::Transport("connection refused".to_string());
        assert_eq!(err.status(), None);
        assert_eq!(err.status_code(), NO_RESPONSE_STATUS);

        let err = FetchError::Decode("expected a sequence".to_string());
        assert_eq!(err.status_code(), NO_RESPONSE_STATUS);
    }
}
