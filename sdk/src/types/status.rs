//! User status types.

use serde::{Deserialize, Serialize};

/// Online status of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStatus {
    /// Lowercase user id.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Title (GM, IM, BOT, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Whether the user is online.
    #[serde(default)]
    pub online: bool,

    /// Whether the user is playing a game.
    #[serde(default)]
    pub playing: bool,

    /// Whether the user is streaming.
    #[serde(default)]
    pub streaming: bool,

    /// Whether the user supports Lichess.
    #[serde(default)]
    pub patron: bool,
}

impl UserStatus {
    /// Returns true if the user is online and not in a game.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.online && !self.playing
    }

    /// Returns true if this status belongs to one of `ids` (case-insensitive).
    #[must_use]
    pub fn matches_any<S: AsRef<str>>(&self, ids: &[S]) -> bool {
        ids.iter().any(|id| id.as_ref().eq_ignore_ascii_case(&self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_deserialize() {
        let statuses: Vec<UserStatus> = serde_json::from_str(
            r#"[
                {"id": "chess-network", "name": "Chess-Network", "title": "NM", "online": true, "playing": true, "patron": true},
                {"id": "stl_nakamura", "name": "STL_Nakamura"}
            ]"#,
        )
        .expect("deserialize");

        assert_eq!(statuses.len(), 2);
        assert_eq!(statuses[0].title.as_deref(), Some("NM"));
        assert!(statuses[0].online);
        assert!(!statuses[0].is_available());
        assert!(!statuses[1].online);
        assert!(!statuses[1].streaming);
    }

    #[test]
    fn test_status_matches_requested_ids() {
        let status = UserStatus {
            id: "stl_nakamura".to_string(),
            name: "STL_Nakamura".to_string(),
            ..Default::default()
        };
        assert!(status.matches_any(&["chess-network", "STL_Nakamura"]));
        assert!(!status.matches_any(&["chess-network"]));
    }
}
