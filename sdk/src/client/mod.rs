//! HTTP client for the Lichess API.
//!
//! This module provides a type-safe HTTP client for the Lichess API. Each
//! public operation validates its parameters, sends one request (two for
//! [`LichessClient::get_account`]) and decodes the response into typed
//! records.
//!
//! # Example
//!
//! ```rust,ignore
//! use lichess_sdk::client::{ClientConfig, LichessClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = LichessClient::new(ClientConfig::default().with_token("lip_..."))?;
//!
//!     let board = client.get_leaderboard(10, "horde".parse()?).await?;
//!     for entry in &board.users {
//!         println!("{} {}", entry.account.username, entry.rating.rating);
//!     }
//!
//!     let crosstable = client.get_crosstable("neio", "thibault").await?;
//!     println!("{:?}", crosstable.users);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod decode;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod request;

pub use config::{ClientConfig, EmailFallback};
pub use decode::NdjsonDecoder;
pub use endpoint::{Endpoint, Shape};
pub use error::ClientError;
pub use http::LichessClient;
pub use request::{AcceptType, ApiRequest};
