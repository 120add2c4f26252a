//! Game types for the Lichess SDK.
//!
//! Provides the exported game record and the export options.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::account::millis_to_utc;

/// An exported game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Game {
    /// Game id.
    pub id: String,

    /// Whether the game was rated.
    pub rated: bool,

    /// Rules variant (`standard`, `chess960`, `fromPosition`, ...).
    pub variant: String,

    /// Speed class (`bullet`, `blitz`, `rapid`, ...).
    pub speed: String,

    /// Rating pool the game counted towards.
    pub perf: String,

    /// Creation time in milliseconds since epoch.
    pub created_at: i64,

    /// Time of the last move in milliseconds since epoch.
    pub last_move_at: i64,

    /// Game status (`mate`, `resign`, `outoftime`, `draw`, ...).
    pub status: String,

    /// Both players.
    pub players: GamePlayers,

    /// Winning color, absent for draws and unfinished games.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Color>,

    /// Opening, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening: Option<Opening>,

    /// Moves in SAN, separated by spaces.
    pub moves: String,

    /// Clock settings, absent for correspondence games.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock: Option<Clock>,
}

impl Game {
    /// Returns the creation time.
    #[must_use]
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        millis_to_utc(self.created_at)
    }

    /// Returns the time of the last move.
    #[must_use]
    pub fn last_move_at_utc(&self) -> Option<DateTime<Utc>> {
        millis_to_utc(self.last_move_at)
    }

    /// Returns the number of half-moves played.
    #[must_use]
    pub fn ply_count(&self) -> usize {
        self.moves.split_whitespace().count()
    }

    /// Returns the player of the given color.
    #[must_use]
    pub fn player(&self, color: Color) -> &GamePlayer {
        match color {
            Color::White => &self.players.white,
            Color::Black => &self.players.black,
        }
    }

    /// Returns the result as `1-0`, `0-1` or `1/2-1/2`, or `*` while ongoing.
    #[must_use]
    pub fn result(&self) -> &'static str {
        match (self.winner, self.status.as_str()) {
            (Some(Color::White), _) => "1-0",
            (Some(Color::Black), _) => "0-1",
            (None, "draw" | "stalemate") => "1/2-1/2",
            _ => "*",
        }
    }
}

/// Side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// White pieces.
    White,
    /// Black pieces.
    Black,
}

/// Both players of a game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GamePlayers {
    /// Player with the white pieces.
    pub white: GamePlayer,
    /// Player with the black pieces.
    pub black: GamePlayer,
}

/// One side of a game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GamePlayer {
    /// The user, absent for anonymous players and the computer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<LightUser>,

    /// Rating before the game.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,

    /// Rating change caused by the game.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_diff: Option<i32>,

    /// Stockfish level, when playing the computer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_level: Option<u8>,
}

impl GamePlayer {
    /// Returns the display name of the player.
    #[must_use]
    pub fn name(&self) -> String {
        match (&self.user, self.ai_level) {
            (Some(user), _) => user.name.clone(),
            (None, Some(level)) => format!("Stockfish level {}", level),
            (None, None) => "Anonymous".to_string(),
        }
    }
}

/// Minimal user reference embedded in games.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightUser {
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
}

/// Opening classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opening {
    /// ECO code.
    pub eco: String,
    /// Opening name.
    pub name: String,
    /// Number of half-moves in the opening.
    #[serde(default)]
    pub ply: u32,
}

/// Clock settings, in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clock {
    /// Initial time.
    pub initial: u32,
    /// Increment per move.
    pub increment: u32,
    /// Estimated total duration.
    #[serde(default)]
    pub total_time: u32,
}

/// Options for the game export endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameExportParams {
    /// Include the moves.
    pub moves: bool,
    /// Include the full PGN in the JSON response.
    pub pgn_in_json: bool,
    /// Include the PGN tags.
    pub tags: bool,
    /// Include clock comments.
    pub clocks: bool,
    /// Include analysis evaluations.
    pub evals: bool,
    /// Include the opening name.
    pub opening: bool,
    /// Insert textual annotations.
    pub literate: bool,
    /// URL of a text file with real player names.
    pub players: Option<String>,
}

impl Default for GameExportParams {
    fn default() -> Self {
        Self {
            moves: true,
            pgn_in_json: false,
            tags: true,
            clocks: true,
            evals: true,
            opening: true,
            literate: false,
            players: None,
        }
    }
}

impl GameExportParams {
    /// Creates the default export options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether moves are included.
    #[must_use]
    pub fn with_moves(mut self, moves: bool) -> Self {
        self.moves = moves;
        self
    }

    /// Sets whether the full PGN is included.
    #[must_use]
    pub fn with_pgn_in_json(mut self, pgn_in_json: bool) -> Self {
        self.pgn_in_json = pgn_in_json;
        self
    }

    /// Sets whether clock comments are included.
    #[must_use]
    pub fn with_clocks(mut self, clocks: bool) -> Self {
        self.clocks = clocks;
        self
    }

    /// Sets whether evaluations are included.
    #[must_use]
    pub fn with_evals(mut self, evals: bool) -> Self {
        self.evals = evals;
        self
    }

    /// Sets whether the opening is included.
    #[must_use]
    pub fn with_opening(mut self, opening: bool) -> Self {
        self.opening = opening;
        self
    }

    /// Sets the player names file URL.
    #[must_use]
    pub fn with_players(mut self, url: impl Into<String>) -> Self {
        self.players = Some(url.into());
        self
    }

    /// Returns the options as query values.
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        let flags = [
            ("moves", self.moves),
            ("pgnInJson", self.pgn_in_json),
            ("tags", self.tags),
            ("clocks", self.clocks),
            ("evals", self.evals),
            ("opening", self.opening),
            ("literate", self.literate),
        ];

        let mut query: Vec<(String, String)> = flags
            .iter()
            .map(|(key, value)| ((*key).to_string(), value.to_string()))
            .collect();

        if let Some(ref players) = self.players {
            query.push(("players".to_string(), players.clone()));
        }

        query
    }
}
