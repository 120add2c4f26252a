//! Endpoint table.
//!
//! Every API call the client makes is one [`Endpoint`]. The endpoint knows
//! its method, path, accept type, whether it needs the token, and the shape of
//! its response. It also validates its own parameters, so an invalid call
//! fails before any network traffic.

use reqwest::Method;

use super::request::{AcceptType, ApiRequest};
use crate::error::SdkError;
use crate::types::{GameExportParams, Variant};

/// Maximum number of ids accepted by the multi-user lookup.
pub const MAX_USERS_PER_REQUEST: usize = 300;

/// Maximum number of ids accepted by the status lookup.
pub const MAX_STATUS_IDS: usize = 100;

/// Maximum leaderboard size.
pub const MAX_LEADERBOARD_SIZE: u32 = 200;

/// Body shape of a response.
///
/// [`Shape::Ndjson`] endpoints are read as a stream, every other shape as one
/// JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// One JSON object.
    Object,
    /// One JSON array.
    Array,
    /// Newline-delimited JSON objects.
    Ndjson,
}

/// A Lichess API endpoint with its parameters.
#[derive(Debug, Clone, Copy)]
pub enum Endpoint<'a> {
    /// `GET /api/account`.
    Account,
    /// `GET /api/account/email`.
    AccountEmail,
    /// `GET /api/user/{id}`.
    User(&'a str),
    /// `POST /api/users` with the ids as body.
    Users(&'a [String]),
    /// `GET /api/users/status?ids=...`.
    UserStatus(&'a [String]),
    /// `GET /api/team/{id}/users`.
    TeamMembers(&'a str),
    /// `GET /player`.
    TopTen,
    /// `GET /player/top/{count}/{variant}`.
    Leaderboard {
        /// Number of players.
        count: u32,
        /// Leaderboard variant.
        variant: Variant,
    },
    /// `GET /api/user/{id}/rating-history`.
    RatingHistory(&'a str),
    /// `GET /streamer/live`.
    LiveStreamers,
    /// `GET /api/crosstable/{user1}/{user2}`.
    Crosstable(&'a str, &'a str),
    /// `GET /api/user/{id}/following`.
    Following(&'a str),
    /// `GET /api/user/{id}/followers`.
    Followers(&'a str),
    /// `GET /game/export/{id}`.
    GameExport(&'a str, &'a GameExportParams),
}

fn require(value: &str, name: &'static str) -> Result<(), SdkError> {
    if value.trim().is_empty() {
        return Err(SdkError::MissingParameter(name));
    }
    Ok(())
}

fn require_ids(ids: &[String], max: usize) -> Result<(), SdkError> {
    if ids.is_empty() {
        return Err(SdkError::MissingParameter("user ids"));
    }
    if ids.len() > max {
        return Err(SdkError::TooManyIds {
            given: ids.len(),
            max,
        });
    }
    ids.iter().try_for_each(|id| require(id, "user id"))
}

impl Endpoint<'_> {
    /// Returns the HTTP method.
    #[must_use]
    pub fn method(&self) -> Method {
        match self {
            Self::Users(_) => Method::POST,
            _ => Method::GET,
        }
    }

    /// Returns the response shape.
    #[must_use]
    pub fn shape(&self) -> Shape {
        match self {
            Self::Users(_)
            | Self::UserStatus(_)
            | Self::RatingHistory(_)
            | Self::LiveStreamers => Shape::Array,
            Self::TeamMembers(_) | Self::Following(_) | Self::Followers(_) => Shape::Ndjson,
            _ => Shape::Object,
        }
    }

    /// Returns the accept type.
    #[must_use]
    pub fn accept(&self) -> AcceptType {
        match self {
            Self::TopTen | Self::Leaderboard { .. } => AcceptType::LichessV3,
            _ if self.shape() == Shape::Ndjson => AcceptType::Ndjson,
            _ => AcceptType::Json,
        }
    }

    /// Returns true if the bearer token is attached.
    #[must_use]
    pub fn is_authorized(&self) -> bool {
        !matches!(self, Self::TeamMembers(_))
    }

    /// Returns the path segments.
    #[must_use]
    pub fn segments(&self) -> Vec<String> {
        let segments: Vec<&str> = match *self {
            Self::Account => vec!["api", "account"],
            Self::AccountEmail => vec!["api", "account", "email"],
            Self::User(id) => vec!["api", "user", id],
            Self::Users(_) => vec!["api", "users"],
            Self::UserStatus(_) => vec!["api", "users", "status"],
            Self::TeamMembers(team) => vec!["api", "team", team, "users"],
            Self::TopTen => vec!["player"],
            Self::Leaderboard { count, variant } => {
                return vec![
                    "player".to_string(),
                    "top".to_string(),
                    count.to_string(),
                    variant.perf_key().to_string(),
                ];
            }
            Self::RatingHistory(id) => vec!["api", "user", id, "rating-history"],
            Self::LiveStreamers => vec!["streamer", "live"],
            Self::Crosstable(user1, user2) => vec!["api", "crosstable", user1, user2],
            Self::Following(id) => vec!["api", "user", id, "following"],
            Self::Followers(id) => vec!["api", "user", id, "followers"],
            Self::GameExport(id, _) => vec!["game", "export", id],
        };
        segments.into_iter().map(String::from).collect()
    }

    /// Checks the parameters of the endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if a required parameter is empty or out of range.
    pub fn validate(&self) -> Result<(), SdkError> {
        match *self {
            Self::User(id) | Self::RatingHistory(id) => require(id, "user id"),
            Self::Following(id) | Self::Followers(id) => require(id, "follow target"),
            Self::TeamMembers(team) => require(team, "team id"),
            Self::Crosstable(user1, user2) => {
                require(user1, "first user name")?;
                require(user2, "second user name")
            }
            Self::GameExport(id, _) => require(id, "game id"),
            Self::Users(ids) => require_ids(ids, MAX_USERS_PER_REQUEST),
            Self::UserStatus(ids) => require_ids(ids, MAX_STATUS_IDS),
            Self::Leaderboard { count, variant } => {
                if !variant.has_leaderboard() {
                    return Err(SdkError::UnsupportedVariant(variant.to_string()));
                }
                if count == 0 || count > MAX_LEADERBOARD_SIZE {
                    return Err(SdkError::InvalidCount(count));
                }
                Ok(())
            }
            Self::Account | Self::AccountEmail | Self::TopTen | Self::LiveStreamers => Ok(()),
        }
    }

    /// Validates the endpoint and builds its request.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn request(&self) -> Result<ApiRequest, SdkError> {
        self.validate()?;

        let mut request = ApiRequest::new(self.method(), self.segments()).with_accept(self.accept());
        if !self.is_authorized() {
            request = request.without_auth();
        }

        request = match *self {
            Self::Users(ids) => request.with_body(ids.join(","), "text/plain"),
            Self::UserStatus(ids) => request.with_query("ids", ids.join(",")),
            Self::Crosstable(..) => request.with_query("matchup", "true"),
            Self::GameExport(_, params) => request.with_query_pairs(params.to_query()),
            _ => request,
        };

        Ok(request)
    }
}
