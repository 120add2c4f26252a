//! Outgoing request description.
//!
//! An [`ApiRequest`] holds everything needed to send one call: method, path
//! segments, query values, optional raw body, accept type and whether the
//! bearer token is attached. It is built from an endpoint and not changed
//! once sent.

use reqwest::{Method, Url};

use super::error::ClientError;

/// Response content type requested with the `Accept` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AcceptType {
    /// `application/json`.
    Json,
    /// `application/x-ndjson`, for streamed listings.
    Ndjson,
    /// `application/vnd.lichess.v3+json`, for leaderboards.
    LichessV3,
}

impl AcceptType {
    /// Returns the header value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Ndjson => "application/x-ndjson",
            Self::LichessV3 => "application/vnd.lichess.v3+json",
        }
    }
}

/// A fully described outgoing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    method: Method,
    segments: Vec<String>,
    query: Vec<(String, String)>,
    body: Option<(String, &'static str)>,
    accept: AcceptType,
    authorized: bool,
}

impl ApiRequest {
    /// Creates an authorized request expecting JSON.
    #[must_use]
    pub fn new<I, S>(method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
            body: None,
            accept: AcceptType::Json,
            authorized: true,
        }
    }

    /// Creates an authorized GET request expecting JSON.
    #[must_use]
    pub fn get<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::GET, segments)
    }

    /// Sets the accept type.
    #[must_use]
    pub fn with_accept(mut self, accept: AcceptType) -> Self {
        self.accept = accept;
        self
    }

    /// Adds a query value.
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Adds several query values.
    #[must_use]
    pub fn with_query_pairs(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Sets a raw body with its content type. A body replaces the query values.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>, content_type: &'static str) -> Self {
        self.body = Some((body.into(), content_type));
        self
    }

    /// Stops the bearer token from being sent.
    #[must_use]
    pub fn without_auth(mut self) -> Self {
        self.authorized = false;
        self
    }

    /// Returns the HTTP method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the accept type.
    #[must_use]
    pub fn accept(&self) -> AcceptType {
        self.accept
    }

    /// Returns the raw body and its content type.
    #[must_use]
    pub fn body(&self) -> Option<(&str, &'static str)> {
        self.body.as_ref().map(|(body, ct)| (body.as_str(), *ct))
    }

    /// Returns the query values.
    #[must_use]
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Returns true if the bearer token should be attached.
    #[must_use]
    pub fn is_authorized(&self) -> bool {
        self.authorized
    }

    /// Returns the unencoded path, for logs and error messages.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    /// Builds the full URL against `base`.
    ///
    /// Path segments are percent-encoded. Query values are only encoded when
    /// no body is set.
    ///
    /// # Errors
    ///
    /// Returns an error if `base` cannot carry a path.
    pub fn url(&self, base: &Url) -> Result<Url, ClientError> {
        let mut url = base.clone();

        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(format!("{} cannot be a base URL", base)))?
            .pop_if_empty()
            .extend(&self.segments);

        if self.body.is_none() && !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }

        Ok(url)
    }
}
