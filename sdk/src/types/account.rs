//! Account types for the Lichess SDK.
//!
//! Provides the full account record returned by the account and user
//! endpoints, together with its nested profile, counters and ratings.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use super::variant::Variant;

/// Converts a millisecond epoch timestamp to a UTC datetime.
pub(crate) fn millis_to_utc(millis: i64) -> Option<DateTime<Utc>> {
    if millis <= 0 {
        return None;
    }
    DateTime::from_timestamp_millis(millis)
}

/// A full Lichess account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Account {
    /// Lowercase user id, stable across all endpoints.
    pub id: String,

    /// Display name.
    pub username: String,

    /// Whether the user is currently online.
    pub online: bool,

    /// Ratings by variant.
    pub perfs: Performance,

    /// Account creation time in milliseconds since epoch.
    pub created_at: i64,

    /// Whether the account is closed.
    pub disabled: bool,

    /// Whether the account was flagged for a terms of service violation.
    pub tos_violation: bool,

    /// Public profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,

    /// Last seen time in milliseconds since epoch.
    pub seen_at: i64,

    /// Whether the user supports Lichess.
    pub patron: bool,

    /// Total play and TV time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub play_time: Option<PlayTime>,

    /// Interface language (e.g. `en-US`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Title (GM, IM, BOT, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Profile URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// URL of the game currently being played, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playing: Option<String>,

    /// Number of accounts followed.
    pub nb_following: u32,

    /// Number of followers.
    pub nb_followers: u32,

    /// Percentage of games completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_rate: Option<u32>,

    /// Game counters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<GameCount>,

    /// Whether the user is streaming.
    pub streaming: bool,

    /// Whether the user can be followed.
    pub followable: bool,

    /// Whether the authenticated user follows this account.
    pub following: bool,

    /// Whether the authenticated user blocks this account.
    pub blocking: bool,

    /// Whether this account follows the authenticated user.
    pub follows_you: bool,

    /// Email address; filled in only for the authenticated account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Account {
    /// Returns the account creation time.
    #[must_use]
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        millis_to_utc(self.created_at)
    }

    /// Returns the last seen time.
    #[must_use]
    pub fn seen_at_utc(&self) -> Option<DateTime<Utc>> {
        millis_to_utc(self.seen_at)
    }

    /// Returns the rating for a variant, if the user has played it.
    #[must_use]
    pub fn rating(&self, variant: Variant) -> Option<i32> {
        self.perfs.get(variant).map(|stats| stats.rating)
    }
}

/// Email response body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    /// Email address.
    #[serde(default)]
    pub email: String,
}

/// Glicko-2 statistics for one variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerfStats {
    /// Number of rated games.
    pub games: u32,
    /// Current rating.
    pub rating: i32,
    /// Rating deviation.
    pub rd: i32,
    /// Recent rating progression.
    pub prog: i32,
    /// Whether the rating is provisional.
    pub prov: bool,
}

/// Result of a puzzle run mode (storm, racer, streak).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleRun {
    /// Number of runs.
    pub runs: u32,
    /// Best score.
    pub score: u32,
}

/// Ratings by variant, decoded from the `perfs` object.
///
/// Keys that name a [`Variant`] are stored as [`PerfStats`]; the puzzle run
/// modes are stored by their key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Performance {
    ratings: BTreeMap<Variant, PerfStats>,
    runs: BTreeMap<String, PuzzleRun>,
}

impl Performance {
    /// Returns the statistics for a variant.
    #[must_use]
    pub fn get(&self, variant: Variant) -> Option<&PerfStats> {
        self.ratings.get(&variant)
    }

    /// Returns the result of a puzzle run mode (`"storm"`, `"racer"`, `"streak"`).
    #[must_use]
    pub fn run(&self, mode: &str) -> Option<&PuzzleRun> {
        self.runs.get(mode)
    }

    /// Iterates over all rated variants in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Variant, &PerfStats)> {
        self.ratings.iter().map(|(v, s)| (*v, s))
    }

    /// Returns the variant with the most rated games.
    #[must_use]
    pub fn most_played(&self) -> Option<Variant> {
        self.ratings
            .iter()
            .max_by_key(|(_, stats)| stats.games)
            .map(|(v, _)| *v)
    }

    /// Returns true if no ratings are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty() && self.runs.is_empty()
    }
}

impl<'de> Deserialize<'de> for Performance {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
        let mut perfs = Self::default();

        for (key, value) in raw {
            if let Some(variant) = Variant::from_perf_key(&key) {
                let stats = serde_json::from_value(value).map_err(de::Error::custom)?;
                perfs.ratings.insert(variant, stats);
            } else if let Ok(run) = serde_json::from_value::<PuzzleRun>(value) {
                perfs.runs.insert(key, run);
            }
        }

        Ok(perfs)
    }
}

impl Serialize for Performance {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.ratings.len() + self.runs.len()))?;
        for (variant, stats) in &self.ratings {
            map.serialize_entry(variant.perf_key(), stats)?;
        }
        for (mode, run) in &self.runs {
            map.serialize_entry(mode, run)?;
        }
        map.end()
    }
}

/// Public profile fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    /// Country or flag code.
    #[serde(alias = "flag", skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Free-form location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Biography.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// First name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// FIDE rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fide_rating: Option<u32>,
    /// USCF rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uscf_rating: Option<u32>,
    /// ECF rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecf_rating: Option<u32>,
    /// Newline-separated links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<String>,
}

/// Total play time, in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayTime {
    /// Total time spent playing.
    pub total: u64,
    /// Time spent on Lichess TV.
    pub tv: u64,
}

/// Game counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameCount {
    /// All games.
    pub all: u32,
    /// Rated games.
    pub rated: u32,
    /// Games against the computer.
    pub ai: u32,
    /// Draws.
    pub draw: u32,
    /// Draws against humans.
    pub draw_h: u32,
    /// Losses.
    pub loss: u32,
    /// Losses against humans.
    pub loss_h: u32,
    /// Wins.
    pub win: u32,
    /// Wins against humans.
    pub win_h: u32,
    /// Bookmarked games.
    pub bookmark: u32,
    /// Games in progress.
    pub playing: u32,
    /// Imported games.
    pub import: u32,
    /// Games against the authenticated user.
    pub me: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCOUNT_JSON: &str = r#"{
        "id": "georges",
        "username": "Georges",
        "online": true,
        "perfs": {
            "chess960": {"games": 2945, "rating": 1609, "rd": 60, "prog": -22, "prov": true},
            "blitz": {"games": 2945, "rating": 1752, "rd": 45, "prog": 12},
            "ultraBullet": {"games": 12, "rating": 1410, "rd": 110, "prog": 0, "prov": true},
            "storm": {"runs": 44, "score": 61}
        },
        "createdAt": 1290415680000,
        "disabled": false,
        "tosViolation": false,
        "profile": {
            "flag": "EC",
            "location": "Lima",
            "bio": "Free bugs!",
            "firstName": "Thibault",
            "lastName": "Duplessis",
            "fideRating": 1500,
            "links": "github.com/ornicar"
        },
        "seenAt": 1522636452014,
        "patron": true,
        "playTime": {"total": 3296897, "tv": 12134},
        "language": "en-GB",
        "title": "NM",
        "url": "https://lichess.org/@/georges",
        "nbFollowing": 299,
        "nbFollowers": 2735,
        "completionRate": 97,
        "count": {
            "all": 9265, "rated": 7157, "ai": 531, "draw": 340, "drawH": 331,
            "loss": 4480, "lossH": 4207, "win": 4440, "winH": 4378,
            "bookmark": 71, "playing": 6, "import": 66, "me": 0
        },
        "streaming": false,
        "followable": true,
        "following": false,
        "blocking": false,
        "followsYou": false
    }"#;

    #[test]
    fn test_account_deserialize() {
        let account: Account = serde_json::from_str(ACCOUNT_JSON).expect("deserialize");
        assert_eq!(account.id, "georges");
        assert_eq!(account.username, "Georges");
        assert!(account.online);
        assert!(account.patron);
        assert_eq!(account.language.as_deref(), Some("en-GB"));
        assert_eq!(account.nb_followers, 2735);
        assert_eq!(account.completion_rate, Some(97));
        assert!(account.email.is_none());

        let count = account.count.expect("count");
        assert_eq!(count.all, 9265);
        assert_eq!(count.draw_h, 331);

        let profile = account.profile.expect("profile");
        assert_eq!(profile.country.as_deref(), Some("EC"));
        assert_eq!(profile.fide_rating, Some(1500));
        assert!(profile.uscf_rating.is_none());
    }

    #[test]
    fn test_account_perfs() {
        let account: Account = serde_json::from_str(ACCOUNT_JSON).expect("deserialize");
        assert_eq!(account.rating(Variant::Blitz), Some(1752));
        assert_eq!(account.rating(Variant::UltraBullet), Some(1410));
        assert_eq!(account.rating(Variant::Horde), None);

        let chess960 = account.perfs.get(Variant::Chess960).expect("chess960");
        assert!(chess960.prov);
        assert_eq!(chess960.prog, -22);
        assert!(!account.perfs.get(Variant::Blitz).expect("blitz").prov);

        let storm = account.perfs.run("storm").expect("storm");
        assert_eq!(storm.runs, 44);
        assert_eq!(storm.score, 61);
    }

    #[test]
    fn test_account_timestamps() {
        let account: Account = serde_json::from_str(ACCOUNT_JSON).expect("deserialize");
        let created = account.created_at_utc().expect("created_at");
        assert_eq!(created.timestamp_millis(), 1_290_415_680_000);
        assert!(account.seen_at_utc().is_some());
        assert!(Account::default().created_at_utc().is_none());
    }

    #[test]
    fn test_account_minimal() {
        let account: Account =
            serde_json::from_str(r#"{"id": "bob", "username": "Bob"}"#).expect("deserialize");
        assert_eq!(account.id, "bob");
        assert!(account.perfs.is_empty());
        assert!(account.profile.is_none());
    }

    #[test]
    fn test_performance_serialize_wire_keys() {
        let account: Account = serde_json::from_str(ACCOUNT_JSON).expect("deserialize");
        let json = serde_json::to_value(&account.perfs).expect("serialize");
        assert_eq!(json["ultraBullet"]["rating"], 1410);
        assert_eq!(json["storm"]["score"], 61);
    }

    #[test]
    fn test_performance_most_played() {
        let account: Account = serde_json::from_str(ACCOUNT_JSON).expect("deserialize");
        let most = account.perfs.most_played().expect("most played");
        assert!(matches!(most, Variant::Blitz | Variant::Chess960));
    }

    #[test]
    fn test_email_deserialize() {
        let email: Email =
            serde_json::from_str(r#"{"email": "abc@example.com"}"#).expect("deserialize");
        assert_eq!(email.email, "abc@example.com");

        let empty: Email = serde_json::from_str("{}").expect("deserialize");
        assert!(empty.email.is_empty());
    }
}
