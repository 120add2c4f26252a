//! Client configuration.
//!
//! Provides configuration options for the HTTP client.

use std::fmt;
use std::time::Duration;

use reqwest::Url;

use super::error::ClientError;

/// Default base URL for the API.
pub const DEFAULT_BASE_URL: &str = "https://lichess.org";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Email placeholder used when the address cannot be fetched.
pub const EMAIL_SENTINEL: &str = "N/A";

/// What [`get_account`](super::LichessClient::get_account) does when the
/// email lookup fails or returns an empty address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailFallback {
    /// Store the given placeholder in the account and continue.
    Sentinel(String),
    /// Return the error of the email lookup.
    Propagate,
}

impl Default for EmailFallback {
    fn default() -> Self {
        Self::Sentinel(EMAIL_SENTINEL.to_string())
    }
}

/// Client configuration.
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL for the API.
    pub base_url: String,

    /// Personal API access token, sent as a bearer token.
    pub token: Option<String>,

    /// Request timeout.
    pub timeout: Duration,

    /// User agent string.
    pub user_agent: String,

    /// Handling of a failed account email lookup.
    pub email_fallback: EmailFallback,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("email_fallback", &self.email_fallback)
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("lichess-sdk/{}", env!("CARGO_PKG_VERSION")),
            email_fallback: EmailFallback::default(),
        }
    }
}

impl ClientConfig {
    /// Creates a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Sets the API token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the email fallback policy.
    #[must_use]
    pub fn with_email_fallback(mut self, fallback: EmailFallback) -> Self {
        self.email_fallback = fallback;
        self
    }

    /// Parses the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not a valid absolute URL.
    pub fn parsed_base_url(&self) -> Result<Url, ClientError> {
        Url::parse(&self.base_url).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", self.base_url, e)))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.base_url.is_empty() {
            return Err(ClientError::InvalidConfig(
                "base_url cannot be empty".to_string(),
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ClientError::InvalidConfig(
                "base_url must start with http:// or https://".to_string(),
            ));
        }

        if self.base_url.contains('?') || self.base_url.contains('#') {
            return Err(ClientError::InvalidConfig(
                "base_url cannot carry a query or fragment".to_string(),
            ));
        }

        if matches!(self.token, Some(ref token) if token.trim().is_empty()) {
            return Err(ClientError::InvalidConfig(
                "token cannot be blank".to_string(),
            ));
        }

        if matches!(self.email_fallback, EmailFallback::Sentinel(ref s) if s.is_empty()) {
            return Err(ClientError::InvalidConfig(
                "email sentinel cannot be empty".to_string(),
            ));
        }

        self.parsed_base_url().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(config.token.is_none());
        assert_eq!(
            config.email_fallback,
            EmailFallback::Sentinel("N/A".to_string())
        );
        assert!(config.user_agent.starts_with("lichess-sdk/"));
    }

    #[test]
    fn test_config_new() {
        let config = ClientConfig::new("https://lichess.dev");
        assert_eq!(config.base_url, "https://lichess.dev");
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new("https://lichess.dev")
            .with_token("lip_abc")
            .with_timeout(Duration::from_secs(3))
            .with_user_agent("my-app/1.0")
            .with_email_fallback(EmailFallback::Propagate);

        assert_eq!(config.token, Some("lip_abc".to_string()));
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.user_agent, "my-app/1.0");
        assert_eq!(config.email_fallback, EmailFallback::Propagate);
    }

    #[test]
    fn test_config_debug_hides_token() {
        let config = ClientConfig::default().with_token("lip_secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("lip_secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_config_validate_valid() {
        let config = ClientConfig::new("https://lichess.org").with_token("lip_abc");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_empty_url() {
        let config = ClientConfig::new("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_invalid_scheme() {
        let config = ClientConfig::new("ftp://lichess.org");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_query_in_base_url() {
        let config = ClientConfig::new("https://lichess.org/?a=b");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_blank_token() {
        let config = ClientConfig::default().with_token("  ");
        assert!(matches!(config.validate(), Err(ClientError::InvalidConfig(_))));
    }

    #[test]
    fn test_config_validate_empty_sentinel() {
        let config =
            ClientConfig::default().with_email_fallback(EmailFallback::Sentinel(String::new()));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_malformed_host() {
        let config = ClientConfig::new("https://exa mple.com");
        assert!(matches!(config.validate(), Err(ClientError::InvalidUrl(_))));
    }
}
