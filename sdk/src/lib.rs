//! Lichess SDK - Rust client library for the Lichess web API.
//!
//! This crate provides typed records for Lichess API responses and an async
//! HTTP client that builds requests and decodes JSON, JSON array and
//! newline-delimited JSON bodies.
//!
//! # Records
//!
//! - [`Account`] - Full account with ratings, profile and counters
//! - [`PublicAccount`], [`RankedAccount`] - Thin account records
//! - [`Leaderboard`], [`TopTen`] - Ranked players by [`Variant`]
//! - [`RatingHistory`] - Dated rating samples per variant
//! - [`UserStatus`] - Online, playing and streaming flags
//! - [`Crosstable`] - Head-to-head results
//! - [`Game`] - Exported game
//!
//! # Example
//!
//! ```rust
//! use lichess_sdk::{ClientConfig, LichessClient, Variant};
//!
//! let variant: Variant = "kingOfTheHill".parse().unwrap();
//! assert_eq!(variant.label(), "King of the Hill");
//!
//! let client = LichessClient::new(ClientConfig::default().with_token("lip_token")).unwrap();
//! assert_eq!(client.config().base_url, "https://lichess.org");
//! ```

pub mod client;
pub mod error;
pub mod types;

pub use client::{ClientConfig, ClientError, EmailFallback, LichessClient};
pub use error::SdkError;
pub use types::{
    Account, Crosstable, Game, GameExportParams, Leaderboard, LiveStreamer, PublicAccount,
    RankedAccount, RatingHistory, RatingPoint, RatingProgress, TopTen, UserStatus, Variant,
};
