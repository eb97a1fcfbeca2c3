use serde::{Deserialize, Serialize};

/// Placeholder shown (and sometimes stored) for an absent value.
pub const DASH: &str = "—";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Player {
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default, rename = "steamID")]
    pub steam_id: Option<String>,
    #[serde(default)]
    pub hacks: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "country residence")]
    pub country: Option<String>,
    #[serde(default)]
    pub proofs: Option<String>,
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

fn is_blank_or_dash(value: &str) -> bool {
    value.trim().is_empty() || value == DASH
}

impl Player {
    pub fn nickname(&self) -> &str {
        field(&self.nickname)
    }

    pub fn steam_id(&self) -> &str {
        field(&self.steam_id)
    }

    pub fn hacks(&self) -> &str {
        field(&self.hacks)
    }

    pub fn description(&self) -> &str {
        field(&self.description)
    }

    pub fn country(&self) -> &str {
        field(&self.country)
    }

    pub fn proofs(&self) -> &str {
        field(&self.proofs)
    }

    /// No flagged behavior: the field is absent, blank, or the placeholder dash.
    pub fn is_clean(&self) -> bool {
        is_blank_or_dash(self.hacks())
    }

    pub fn has_description(&self) -> bool {
        !is_blank_or_dash(self.description())
    }

    pub fn has_proofs(&self) -> bool {
        !self.proofs().trim().is_empty()
    }

    pub fn nickname_is_empty(&self) -> bool {
        self.nickname().trim().is_empty()
    }

    /// Trimmed, non-empty comma-separated behavior tags.
    pub fn behavior_tags(&self) -> impl Iterator<Item = &str> {
        let hacks = if self.is_clean() { "" } else { self.hacks() };
        hacks
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty() && *tag != DASH)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("player database is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top-level shape of the player data asset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerDatabase {
    pub players: Vec<Player>,
}

impl PlayerDatabase {
    pub fn from_json(raw: &str) -> Result<Self, DatabaseError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_slice(raw: &[u8]) -> Result<Self, DatabaseError> {
        Ok(serde_json::from_slice(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::{DASH, Player, PlayerDatabase};

    fn with_hacks(hacks: Option<&str>) -> Player {
        Player {
            hacks: hacks.map(str::to_string),
            ..Player::default()
        }
    }

    #[test]
    fn deserializes_data_asset_keys() {
        let raw = r#"{
            "players": [
                {
                    "nickname": "Ghost",
                    "steamID": "STEAM_0:1:0",
                    "hacks": "AIM, WH",
                    "description": "spin bot",
                    "country residence": "🇩🇪",
                    "proofs": "https://example.com/demo"
                },
                { "nickname": "" }
            ]
        }"#;
        let db = PlayerDatabase::from_json(raw).expect("valid database");
        assert_eq!(db.players.len(), 2);
        let ghost = &db.players[0];
        assert_eq!(ghost.steam_id(), "STEAM_0:1:0");
        assert_eq!(ghost.country(), "🇩🇪");
        assert!(ghost.has_proofs());
        assert!(db.players[1].nickname_is_empty());
        assert_eq!(db.players[1].steam_id, None);
    }

    #[test]
    fn rejects_malformed_asset() {
        assert!(PlayerDatabase::from_json("{\"players\": 3}").is_err());
        assert!(PlayerDatabase::from_slice(b"not json").is_err());
    }

    #[test]
    fn clean_means_absent_blank_or_dash() {
        assert!(with_hacks(None).is_clean());
        assert!(with_hacks(Some("")).is_clean());
        assert!(with_hacks(Some("   ")).is_clean());
        assert!(with_hacks(Some(DASH)).is_clean());
        assert!(!with_hacks(Some("AIM")).is_clean());
    }

    #[test]
    fn description_presence_ignores_placeholder() {
        let mut player = Player::default();
        assert!(!player.has_description());
        player.description = Some(DASH.to_string());
        assert!(!player.has_description());
        player.description = Some(" toxic ".to_string());
        assert!(player.has_description());
    }

    #[test]
    fn behavior_tags_split_and_trim() {
        let player = with_hacks(Some("AIM,  WH ,, BHOP"));
        let tags: Vec<&str> = player.behavior_tags().collect();
        assert_eq!(tags, vec!["AIM", "WH", "BHOP"]);
        assert_eq!(with_hacks(Some(DASH)).behavior_tags().count(), 0);
    }
}
