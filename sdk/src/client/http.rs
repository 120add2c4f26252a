//! HTTP client implementation.
//!
//! Provides the main HTTP client for interacting with the Lichess API.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::config::{ClientConfig, EmailFallback};
use super::decode::{ensure_success, read_json, read_ndjson};
use super::endpoint::{Endpoint, Shape};
use super::error::ClientError;
use super::request::ApiRequest;
use crate::types::public::{RawLeaderboard, RawTopTen};
use crate::types::{
    Account, Crosstable, Email, Game, GameExportParams, Leaderboard, LiveStreamer, RatingHistory,
    TopTen, UserStatus, Variant,
};

/// HTTP client for the Lichess API.
///
/// Cloning is cheap: clones share the connection pool.
#[derive(Debug, Clone)]
pub struct LichessClient {
    config: ClientConfig,
    base_url: Url,
    http: reqwest::Client,
}

impl LichessClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(ClientError::Request)?;

        Self::with_http_client(config, http)
    }

    /// Creates a new client that sends requests through `http`.
    ///
    /// Timeouts and other transport settings are taken from `http`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_http_client(config: ClientConfig, http: reqwest::Client) -> Result<Self, ClientError> {
        config.validate()?;
        let base_url = config.parsed_base_url()?;
        Ok(Self {
            config,
            base_url,
            http,
        })
    }

    /// Creates a new client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, ClientError> {
        Self::new(ClientConfig::default())
    }

    /// Creates a new client for lichess.org with the given token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is blank.
    pub fn with_token(token: impl Into<String>) -> Result<Self, ClientError> {
        Self::new(ClientConfig::default().with_token(token))
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends a request and returns the raw response, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be built or the request fails.
    pub async fn send(&self, request: &ApiRequest) -> Result<Response, ClientError> {
        let url = request.url(&self.base_url)?;

        debug!(
            method = %request.method(),
            path = %request.path(),
            accept = request.accept().as_str(),
            "sending request"
        );

        let mut builder = self
            .http
            .request(request.method().clone(), url)
            .header(ACCEPT, request.accept().as_str());

        if request.is_authorized() {
            if let Some(ref token) = self.config.token {
                builder = builder.bearer_auth(token);
            }
        }

        if let Some((body, content_type)) = request.body() {
            builder = builder
                .header(CONTENT_TYPE, content_type)
                .body(body.to_string());
        }

        Ok(builder.send().await?)
    }

    /// Sends the request of `endpoint` and checks the status.
    async fn call(&self, endpoint: &Endpoint<'_>) -> Result<Response, ClientError> {
        let request = endpoint.request()?;
        let response = self.send(&request).await?;
        ensure_success(response, &request.path()).await
    }

    /// Fetches an endpoint whose body is one JSON object or array.
    async fn fetch<T: DeserializeOwned>(&self, endpoint: &Endpoint<'_>) -> Result<T, ClientError> {
        debug_assert_ne!(endpoint.shape(), Shape::Ndjson, "{:?} is a stream", endpoint);
        let response = self.call(endpoint).await?;
        read_json(response).await
    }

    /// Fetches an endpoint whose body is a newline-delimited stream.
    async fn fetch_stream<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint<'_>,
    ) -> Result<Vec<T>, ClientError> {
        debug_assert_eq!(endpoint.shape(), Shape::Ndjson, "{:?} is not a stream", endpoint);
        let response = self.call(endpoint).await?;
        read_ndjson(response).await
    }

    /// Gets the email address of the authenticated account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, for example when the token
    /// lacks the `email:read` scope.
    pub async fn get_email(&self) -> Result<String, ClientError> {
        let email: Email = self.fetch(&Endpoint::AccountEmail).await?;
        Ok(email.email)
    }

    /// Gets the authenticated account, including its email address.
    ///
    /// When the email cannot be fetched or is empty, the configured
    /// [`EmailFallback`] applies.
    ///
    /// # Errors
    ///
    /// Returns an error if the account request fails, or if the email lookup
    /// fails under [`EmailFallback::Propagate`].
    pub async fn get_account(&self) -> Result<Account, ClientError> {
        let mut account: Account = self.fetch(&Endpoint::Account).await?;

        let lookup = match self.get_email().await {
            Ok(email) if email.trim().is_empty() => Err(ClientError::Deserialization(
                "empty email address".to_string(),
            )),
            other => other,
        };

        let email = match (lookup, &self.config.email_fallback) {
            (Ok(email), _) => email,
            (Err(err), EmailFallback::Sentinel(sentinel)) => {
                warn!(error = %err, "email lookup failed, using placeholder");
                sentinel.clone()
            }
            (Err(err), EmailFallback::Propagate) => return Err(err),
        };

        account.email = Some(email);
        Ok(account)
    }

    /// Gets a user by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty or the request fails.
    pub async fn get_user(&self, id: &str) -> Result<Account, ClientError> {
        self.fetch(&Endpoint::User(id)).await
    }

    /// Gets several users at once. The order of the result may differ from
    /// the order of `ids`, and unknown ids are left out.
    ///
    /// # Errors
    ///
    /// Returns an error if `ids` is empty or too long, or the request fails.
    pub async fn get_users<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<Account>, ClientError> {
        let ids = owned_ids(ids);
        self.fetch(&Endpoint::Users(&ids)).await
    }

    /// Gets the online status of several users.
    ///
    /// # Errors
    ///
    /// Returns an error if `ids` is empty or too long, or the request fails.
    pub async fn get_user_status<S: AsRef<str>>(
        &self,
        ids: &[S],
    ) -> Result<Vec<UserStatus>, ClientError> {
        let ids = owned_ids(ids);
        self.fetch(&Endpoint::UserStatus(&ids)).await
    }

    /// Gets all members of a team.
    ///
    /// # Errors
    ///
    /// Returns an error if the team id is empty or the request fails.
    pub async fn get_team_members(&self, team_id: &str) -> Result<Vec<Account>, ClientError> {
        self.fetch_stream(&Endpoint::TeamMembers(team_id)).await
    }

    /// Gets the top ten players of every variant.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_top_ten(&self) -> Result<TopTen, ClientError> {
        let raw: RawTopTen = self.fetch(&Endpoint::TopTen).await?;
        Ok(raw.into_top_ten()?)
    }

    /// Gets the `count` best players of a variant.
    ///
    /// Tag strings convert with [`str::parse`]:
    /// `client.get_leaderboard(10, "horde".parse()?)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the variant has no leaderboard, `count` is not in
    /// `1..=200`, or the request fails.
    pub async fn get_leaderboard(
        &self,
        count: u32,
        variant: Variant,
    ) -> Result<Leaderboard, ClientError> {
        let raw: RawLeaderboard = self
            .fetch(&Endpoint::Leaderboard { count, variant })
            .await?;
        Ok(raw.into_leaderboard(variant)?)
    }

    /// Gets the rating history of a user, one entry per variant.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty or the request fails.
    pub async fn get_rating_history(&self, id: &str) -> Result<Vec<RatingHistory>, ClientError> {
        self.fetch(&Endpoint::RatingHistory(id)).await
    }

    /// Gets the streamers currently live.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_live_streamers(&self) -> Result<Vec<LiveStreamer>, ClientError> {
        self.fetch(&Endpoint::LiveStreamers).await
    }

    /// Gets the head-to-head results of two users.
    ///
    /// # Errors
    ///
    /// Returns an error if a user name is empty or the request fails.
    pub async fn get_crosstable(&self, user1: &str, user2: &str) -> Result<Crosstable, ClientError> {
        self.fetch(&Endpoint::Crosstable(user1, user2)).await
    }

    /// Gets the accounts followed by a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty or the request fails.
    pub async fn get_following(&self, id: &str) -> Result<Vec<Account>, ClientError> {
        self.fetch_stream(&Endpoint::Following(id)).await
    }

    /// Gets the followers of a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty or the request fails.
    pub async fn get_followers(&self, id: &str) -> Result<Vec<Account>, ClientError> {
        self.fetch_stream(&Endpoint::Followers(id)).await
    }

    /// Exports one game.
    ///
    /// # Errors
    ///
    /// Returns an error if the game id is empty or the request fails.
    pub async fn get_game(&self, id: &str, params: &GameExportParams) -> Result<Game, ClientError> {
        self.fetch(&Endpoint::GameExport(id, params)).await
    }
}

fn owned_ids<S: AsRef<str>>(ids: &[S]) -> Vec<String> {
    ids.iter().map(|id| id.as_ref().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_new() {
        let config = ClientConfig::new("https://lichess.dev");
        let client = LichessClient::new(config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_with_defaults() {
        let client = LichessClient::with_defaults();
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_with_token() {
        let client = LichessClient::with_token("lip_abc").expect("client creation");
        assert_eq!(client.config().token, Some("lip_abc".to_string()));
    }

    #[test]
    fn test_client_invalid_config() {
        let config = ClientConfig::new("");
        let client = LichessClient::new(config);
        assert!(client.is_err());
    }

    #[test]
    fn test_client_with_http_client() {
        let http = reqwest::Client::new();
        let config = ClientConfig::new("https://lichess.dev").with_token("lip_abc");
        let client = LichessClient::with_http_client(config, http).expect("client creation");
        assert_eq!(client.config().base_url, "https://lichess.dev");
    }

    #[tokio::test]
    async fn test_validation_precedes_network() {
        // Port 9 is discard; validation must fail before a connection is tried.
        let client = LichessClient::new(ClientConfig::new("http://127.0.0.1:9"))
            .expect("client creation");
        let empty: [&str; 0] = [];

        let err = client.get_team_members("").await.unwrap_err();
        assert!(matches!(err, ClientError::Sdk(_)));
        let err = client.get_user_status(&empty).await.unwrap_err();
        assert!(matches!(err, ClientError::Sdk(_)));
        let err = client.get_crosstable("neio", "").await.unwrap_err();
        assert!(matches!(err, ClientError::Sdk(_)));
        let err = client.get_leaderboard(10, Variant::Correspondence).await.unwrap_err();
        assert!(matches!(err, ClientError::Sdk(_)));
    }

    #[test]
    fn test_owned_ids() {
        assert_eq!(owned_ids(&["a", "b"]), vec!["a".to_string(), "b".to_string()]);
    }
}
