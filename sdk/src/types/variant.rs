//! Game variant tags.
//!
//! Every rating pool on Lichess is identified by a variant tag. The tag picks
//! the JSON key of the rating sub-object inside `perfs`, the path segment of
//! the leaderboard endpoint and the label used by rating history entries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SdkError;

/// A rating pool: a time control or a rules variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Variant {
    /// Bullet time control.
    Bullet,
    /// Blitz time control.
    Blitz,
    /// Rapid time control.
    Rapid,
    /// Classical time control.
    Classical,
    /// UltraBullet time control.
    UltraBullet,
    /// Fischer random chess.
    Chess960,
    /// Crazyhouse.
    Crazyhouse,
    /// Antichess.
    Antichess,
    /// Atomic chess.
    Atomic,
    /// Horde.
    Horde,
    /// King of the Hill.
    KingOfTheHill,
    /// Racing Kings.
    RacingKings,
    /// Three-check.
    ThreeCheck,
    /// Correspondence games.
    Correspondence,
    /// Puzzle rating.
    Puzzle,
}

/// Per-variant lookup table: `(variant, perfs key, rating history label)`.
const VARIANT_TABLE: [(Variant, &str, &str); 15] = [
    (Variant::Bullet, "bullet", "Bullet"),
    (Variant::Blitz, "blitz", "Blitz"),
    (Variant::Rapid, "rapid", "Rapid"),
    (Variant::Classical, "classical", "Classical"),
    (Variant::UltraBullet, "ultraBullet", "UltraBullet"),
    (Variant::Chess960, "chess960", "Chess960"),
    (Variant::Crazyhouse, "crazyhouse", "Crazyhouse"),
    (Variant::Antichess, "antichess", "Antichess"),
    (Variant::Atomic, "atomic", "Atomic"),
    (Variant::Horde, "horde", "Horde"),
    (Variant::KingOfTheHill, "kingOfTheHill", "King of the Hill"),
    (Variant::RacingKings, "racingKings", "Racing Kings"),
    (Variant::ThreeCheck, "threeCheck", "Three-check"),
    (Variant::Correspondence, "correspondence", "Correspondence"),
    (Variant::Puzzle, "puzzle", "Puzzles"),
];

impl Variant {
    /// All variants, in table order.
    pub const ALL: [Variant; 15] = [
        Self::Bullet,
        Self::Blitz,
        Self::Rapid,
        Self::Classical,
        Self::UltraBullet,
        Self::Chess960,
        Self::Crazyhouse,
        Self::Antichess,
        Self::Atomic,
        Self::Horde,
        Self::KingOfTheHill,
        Self::RacingKings,
        Self::ThreeCheck,
        Self::Correspondence,
        Self::Puzzle,
    ];

    /// Returns the JSON key used for this variant (e.g. `"ultraBullet"`).
    #[must_use]
    pub fn perf_key(&self) -> &'static str {
        VARIANT_TABLE
            .iter()
            .find(|(v, _, _)| v == self)
            .map_or("", |(_, key, _)| key)
    }

    /// Returns the human-readable label used in rating history.
    #[must_use]
    pub fn label(&self) -> &'static str {
        VARIANT_TABLE
            .iter()
            .find(|(v, _, _)| v == self)
            .map_or("", |(_, _, label)| label)
    }

    /// Returns true if Lichess publishes a leaderboard for this variant.
    #[must_use]
    pub const fn has_leaderboard(&self) -> bool {
        !matches!(self, Self::Correspondence | Self::Puzzle)
    }

    /// Looks up a variant by its perfs key, ignoring ASCII case.
    #[must_use]
    pub fn from_perf_key(key: &str) -> Option<Self> {
        VARIANT_TABLE
            .iter()
            .find(|(_, k, _)| k.eq_ignore_ascii_case(key))
            .map(|(v, _, _)| *v)
    }

    /// Looks up a variant by its rating history label, ignoring ASCII case.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        VARIANT_TABLE
            .iter()
            .find(|(_, _, l)| l.eq_ignore_ascii_case(label))
            .map(|(v, _, _)| *v)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.perf_key())
    }
}

impl FromStr for Variant {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_perf_key(s.trim()).ok_or_else(|| SdkError::UnsupportedVariant(s.to_string()))
    }
}
