//! Core types for the Lichess SDK.
//!
//! This module provides the records decoded from Lichess API responses.

pub mod account;
pub mod crosstable;
pub mod game;
pub mod history;
pub mod public;
pub mod status;
pub mod variant;

pub use account::{Account, Email, GameCount, PerfStats, Performance, PlayTime, Profile, PuzzleRun};
pub use crosstable::{Crosstable, Matchup};
pub use game::{Clock, Color, Game, GameExportParams, GamePlayer, GamePlayers, LightUser, Opening};
pub use history::{RatingHistory, RatingPoint};
pub use public::{
    Leaderboard, LiveStreamer, PublicAccount, RankedAccount, RatingProgress, StreamInfo,
    StreamerProfile, TopTen,
};
pub use status::UserStatus;
pub use variant::Variant;
