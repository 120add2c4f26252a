//! SDK error types.
//!
//! Provides error types for request validation and record decoding.

use crate::types::Variant;

/// SDK errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SdkError {
    /// A required parameter was empty.
    #[error("missing parameter: {0} cannot be empty")]
    MissingParameter(&'static str),

    /// More ids were supplied than the endpoint accepts.
    #[error("too many ids: {given} given, at most {max} allowed")]
    TooManyIds {
        /// Number of ids supplied.
        given: usize,
        /// Maximum accepted by the endpoint.
        max: usize,
    },

    /// Leaderboard size out of range.
    #[error("invalid leaderboard size: {0} (must be between 1 and 200)")]
    InvalidCount(u32),

    /// Unknown variant tag, or a variant without a leaderboard.
    #[error("unsupported game variant: {0}")]
    UnsupportedVariant(String),

    /// A ranked record did not carry the rating of its variant.
    #[error("missing {0} rating in ranked record")]
    MissingPerf(Variant),
}
