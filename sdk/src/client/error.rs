//! Client error types.
//!
//! Provides error types for HTTP client operations.

use crate::error::SdkError;

/// Client errors.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// The request URL could not be built.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to deserialize response.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// API returned a non-success status.
    #[error("API error [{status}]: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the body, or the raw body.
        message: String,
    },

    /// Resource not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Unauthorized (401).
    #[error("unauthorized")]
    Unauthorized,

    /// Rate limited (429). Never retried by the client.
    #[error("rate limited{}", .retry_after.map(|secs| format!(", retry after {} seconds", secs)).unwrap_or_default())]
    RateLimited {
        /// Retry after seconds.
        retry_after: Option<u64>,
    },

    /// Request parameters or response records failed validation.
    #[error(transparent)]
    Sdk(#[from] SdkError),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Request(err)
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Deserialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_display() {
        let err = ClientError::Api {
            status: 400,
            message: "invalid ids".to_string(),
        };
        assert_eq!(err.to_string(), "API error [400]: invalid ids");
    }

    #[test]
    fn test_client_error_rate_limited() {
        let err = ClientError::RateLimited {
            retry_after: Some(60),
        };
        assert_eq!(err.to_string(), "rate limited, retry after 60 seconds");

        let err = ClientError::RateLimited { retry_after: None };
        assert_eq!(err.to_string(), "rate limited");
    }

    #[test]
    fn test_client_error_not_found() {
        let err = ClientError::NotFound("/api/user/nobody".to_string());
        assert_eq!(err.to_string(), "not found: /api/user/nobody");
    }

    #[test]
    fn test_client_error_from_sdk() {
        let err = ClientError::from(SdkError::MissingParameter("team id"));
        assert!(matches!(err, ClientError::Sdk(SdkError::MissingParameter(_))));
        assert_eq!(err.to_string(), "missing parameter: team id cannot be empty");
    }

    #[test]
    fn test_client_error_from_json() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = ClientError::from(json_err);
        assert!(matches!(err, ClientError::Deserialization(_)));
    }
}
