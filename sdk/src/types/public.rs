//! Thin account records.
//!
//! Leaderboards, top ten lists and streamer listings only carry the identity
//! of each player, plus at most one variant rating. A single ranked record
//! covers every variant: the rating sub-object is looked up by the variant's
//! perfs key instead of being declared once per variant.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::variant::Variant;
use crate::error::SdkError;

/// Identity of a player as listed publicly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicAccount {
    /// Lowercase user id.
    pub id: String,

    /// Display name. Streamer listings send it as `name`.
    #[serde(alias = "name")]
    pub username: String,

    /// Title (GM, IM, BOT, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Whether the user supports Lichess.
    #[serde(default)]
    pub patron: bool,

    /// Whether the user is currently online.
    #[serde(default)]
    pub online: bool,
}

/// Rating and recent progress in one variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingProgress {
    /// Current rating.
    pub rating: i32,
    /// Rating change over the last games.
    #[serde(default)]
    pub progress: i32,
}

/// A player together with their rating in one variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedAccount {
    /// Player identity.
    pub account: PublicAccount,
    /// Variant the rating belongs to.
    pub variant: Variant,
    /// Rating in that variant.
    pub rating: RatingProgress,
}

/// Ranked account as it appears on the wire, before the variant is known.
#[derive(Debug, Deserialize)]
pub(crate) struct RawRankedAccount {
    id: String,
    username: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    patron: bool,
    #[serde(default)]
    online: bool,
    #[serde(default)]
    perfs: BTreeMap<String, RatingProgress>,
}

impl RawRankedAccount {
    /// Picks the rating of `variant` out of the `perfs` object.
    pub(crate) fn into_ranked(self, variant: Variant) -> Result<RankedAccount, SdkError> {
        let key = variant.perf_key();
        let rating = self
            .perfs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, rating)| *rating)
            .ok_or(SdkError::MissingPerf(variant))?;

        Ok(RankedAccount {
            account: PublicAccount {
                id: self.id,
                username: self.username,
                title: self.title,
                patron: self.patron,
                online: self.online,
            },
            variant,
            rating,
        })
    }
}

/// Leaderboard of one variant, best player first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leaderboard {
    /// Variant of the leaderboard.
    pub variant: Variant,
    /// Ranked players.
    pub users: Vec<RankedAccount>,
}

impl Leaderboard {
    /// Returns the number of ranked players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns true if no player is ranked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Returns the top-ranked player.
    #[must_use]
    pub fn leader(&self) -> Option<&RankedAccount> {
        self.users.first()
    }
}

/// Leaderboard response body.
#[derive(Debug, Deserialize)]
pub(crate) struct RawLeaderboard {
    users: Vec<RawRankedAccount>,
}

impl RawLeaderboard {
    pub(crate) fn into_leaderboard(self, variant: Variant) -> Result<Leaderboard, SdkError> {
        let users = self
            .users
            .into_iter()
            .map(|raw| raw.into_ranked(variant))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Leaderboard { variant, users })
    }
}

/// Top ten players of every variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TopTen {
    boards: BTreeMap<Variant, Vec<RankedAccount>>,
}

impl TopTen {
    /// Returns the top players of a variant.
    #[must_use]
    pub fn get(&self, variant: Variant) -> &[RankedAccount] {
        self.boards.get(&variant).map_or(&[], Vec::as_slice)
    }

    /// Iterates over every variant and its top players.
    pub fn iter(&self) -> impl Iterator<Item = (Variant, &[RankedAccount])> {
        self.boards.iter().map(|(v, users)| (*v, users.as_slice()))
    }
}

/// Top ten response body, keyed by perfs key.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub(crate) struct RawTopTen(BTreeMap<String, Vec<RawRankedAccount>>);

impl RawTopTen {
    /// Converts every recognized board; unknown keys are skipped.
    pub(crate) fn into_top_ten(self) -> Result<TopTen, SdkError> {
        let mut boards = BTreeMap::new();
        for (key, users) in self.0 {
            let Some(variant) = Variant::from_perf_key(&key) else {
                continue;
            };
            let users = users
                .into_iter()
                .map(|raw| raw.into_ranked(variant))
                .collect::<Result<Vec<_>, _>>()?;
            boards.insert(variant, users);
        }
        Ok(TopTen { boards })
    }
}

/// A streamer currently live on Lichess.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveStreamer {
    /// Lowercase user id.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Title (GM, IM, BOT, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Whether the user supports Lichess.
    #[serde(default)]
    pub patron: bool,

    /// Current stream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<StreamInfo>,

    /// Streamer profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streamer: Option<StreamerProfile>,
}

impl LiveStreamer {
    /// Returns the thin account of the streamer. Streamers are online.
    #[must_use]
    pub fn account(&self) -> PublicAccount {
        PublicAccount {
            id: self.id.clone(),
            username: self.name.clone(),
            title: self.title.clone(),
            patron: self.patron,
            online: true,
        }
    }
}

/// Details of a live stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamInfo {
    /// Streaming service (`twitch`, `youTube`).
    pub service: String,
    /// Stream title.
    pub status: String,
    /// Stream language.
    pub lang: String,
}

/// Streamer profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamerProfile {
    /// Streamer name.
    pub name: String,
    /// Short headline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const HORDE_JSON: &str = r#"{
        "users": [
            {"id": "sissou", "username": "Sissou", "online": true,
             "perfs": {"horde": {"rating": 2394, "progress": 23}}},
            {"id": "nunogalvao", "username": "NunoGalvao", "title": "FM", "patron": true,
             "perfs": {"horde": {"rating": 2290, "progress": -4}}}
        ]
    }"#;

    #[test]
    fn test_leaderboard_decode() {
        let raw: RawLeaderboard = serde_json::from_str(HORDE_JSON).expect("deserialize");
        let board = raw.into_leaderboard(Variant::Horde).expect("convert");
        assert_eq!(board.variant, Variant::Horde);
        assert_eq!(board.len(), 2);

        let leader = board.leader().expect("leader");
        assert_eq!(leader.account.id, "sissou");
        assert_eq!(leader.rating.rating, 2394);
        assert!(leader.account.online);

        let second = &board.users[1];
        assert_eq!(second.account.title.as_deref(), Some("FM"));
        assert!(second.account.patron);
        assert_eq!(second.rating.progress, -4);
    }

    #[test]
    fn test_leaderboard_wrong_variant() {
        let raw: RawLeaderboard = serde_json::from_str(HORDE_JSON).expect("deserialize");
        let err = raw.into_leaderboard(Variant::Atomic).unwrap_err();
        assert_eq!(err, SdkError::MissingPerf(Variant::Atomic));
    }

    #[test]
    fn test_ranked_key_case_insensitive() {
        let raw: RawRankedAccount = serde_json::from_str(
            r#"{"id": "a", "username": "A", "perfs": {"ultrabullet": {"rating": 2100, "progress": 0}}}"#,
        )
        .expect("deserialize");
        let ranked = raw.into_ranked(Variant::UltraBullet).expect("convert");
        assert_eq!(ranked.rating.rating, 2100);
    }

    #[test]
    fn test_top_ten_decode() {
        let raw: RawTopTen = serde_json::from_str(
            r#"{
                "bullet": [{"id": "a", "username": "A", "perfs": {"bullet": {"rating": 3100, "progress": 5}}}],
                "kingOfTheHill": [{"id": "b", "username": "B", "perfs": {"kingOfTheHill": {"rating": 2400, "progress": 0}}}],
                "someFutureVariant": []
            }"#,
        )
        .expect("deserialize");
        let top = raw.into_top_ten().expect("convert");

        assert_eq!(top.get(Variant::Bullet)[0].rating.rating, 3100);
        assert_eq!(top.get(Variant::KingOfTheHill)[0].account.id, "b");
        assert!(top.get(Variant::Horde).is_empty());
        assert_eq!(top.iter().count(), 2);
    }

    #[test]
    fn test_live_streamer_decode() {
        let streamers: Vec<LiveStreamer> = serde_json::from_str(
            r#"[{
                "id": "chess-network", "name": "Chess-Network", "title": "NM", "patron": true,
                "stream": {"service": "twitch", "status": "Blitz!", "lang": "en"},
                "streamer": {"name": "Jerry", "headline": "Chess every day"}
            }, {"id": "other", "name": "Other"}]"#,
        )
        .expect("deserialize");

        assert_eq!(streamers.len(), 2);
        assert_eq!(streamers[0].name, "Chess-Network");
        let account = streamers[0].account();
        assert_eq!(account.id, "chess-network");
        assert!(account.online);
        assert_eq!(streamers[0].stream.as_ref().map(|s| s.service.as_str()), Some("twitch"));
        assert_eq!(
            streamers[0].streamer.as_ref().and_then(|s| s.headline.as_deref()),
            Some("Chess every day")
        );
        assert!(streamers[1].stream.is_none());
    }
}
