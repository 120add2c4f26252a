//! Crosstable types.
//!
//! A crosstable aggregates the results of all games between two players.
//! Scores count a win as 1 and a draw as 0.5.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Head-to-head results between two players.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crosstable {
    /// Score of each player, keyed by lowercase user id.
    pub users: BTreeMap<String, f64>,

    /// Number of games played against each other.
    pub nb_games: u32,

    /// Results of the current match only, when one is in progress.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matchup: Option<Matchup>,
}

/// Results of the current match between two players.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Matchup {
    /// Score of each player, keyed by lowercase user id.
    pub users: BTreeMap<String, f64>,

    /// Number of games in the current match.
    pub nb_games: u32,
}

impl Crosstable {
    /// Returns the score of a user, looked up by id or username.
    #[must_use]
    pub fn score(&self, user: &str) -> Option<f64> {
        self.users.get(&user.to_lowercase()).copied()
    }

    /// Returns true if the crosstable contains `user`.
    #[must_use]
    pub fn contains(&self, user: &str) -> bool {
        self.users.contains_key(&user.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crosstable_deserialize() {
        let ct: Crosstable = serde_json::from_str(
            r#"{"users": {"neio": 201.5, "thibault": 144.5}, "nbGames": 346}"#,
        )
        .expect("deserialize");

        assert_eq!(ct.nb_games, 346);
        assert!(ct.contains("neio"));
        assert!(ct.contains("Thibault"));
        assert_eq!(ct.score("neio"), Some(201.5));
        assert!(ct.matchup.is_none());
    }

    #[test]
    fn test_crosstable_with_matchup() {
        let ct: Crosstable = serde_json::from_str(
            r#"{
                "users": {"neio": 10, "thibault": 6},
                "nbGames": 16,
                "matchup": {"users": {"neio": 2.5, "thibault": 0.5}, "nbGames": 3}
            }"#,
        )
        .expect("deserialize");

        let matchup = ct.matchup.expect("matchup");
        assert_eq!(matchup.nb_games, 3);
        assert_eq!(matchup.users.get("neio"), Some(&2.5));
    }
}
