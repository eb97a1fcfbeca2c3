use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use watchlist_shared::PlayerDatabase;

/// Player database validated at startup and served byte-for-byte as read from disk.
#[derive(Debug, Clone)]
pub struct LoadedDatabase {
    pub json: Bytes,
    pub etag: String,
    pub player_count: usize,
    pub loaded_at: DateTime<Utc>,
}

pub fn database_etag(raw: &[u8]) -> String {
    format!("\"players-{:08x}\"", crc32fast::hash(raw))
}

impl LoadedDatabase {
    pub fn from_bytes(raw: Bytes) -> Result<Self, String> {
        let database = PlayerDatabase::from_slice(&raw).map_err(|e| e.to_string())?;
        Ok(Self {
            etag: database_etag(&raw),
            player_count: database.players.len(),
            json: raw,
            loaded_at: Utc::now(),
        })
    }

    pub async fn read(path: &Path) -> Result<Self, String> {
        let raw = tokio::fs::read(path)
            .await
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        Self::from_bytes(Bytes::from(raw)).map_err(|e| format!("{}: {e}", path.display()))
    }
}

#[derive(Clone)]
pub struct AppState {
    pub database: Arc<LoadedDatabase>,
}

impl AppState {
    pub fn new(database: LoadedDatabase) -> Self {
        Self {
            database: Arc::new(database),
        }
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::{LoadedDatabase, database_etag};

    #[test]
    fn counts_players_and_keeps_raw_bytes() {
        let raw = Bytes::from_static(br#"{"players":[{"nickname":"a"},{"nickname":""}]}"#);
        let loaded = LoadedDatabase::from_bytes(raw.clone()).expect("valid database");
        assert_eq!(loaded.player_count, 2);
        assert_eq!(loaded.json, raw);
        assert_eq!(loaded.etag, database_etag(&raw));
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(LoadedDatabase::from_bytes(Bytes::from_static(b"{\"players\":")).is_err());
    }

    #[test]
    fn etag_changes_with_content() {
        assert_ne!(database_etag(b"{\"players\":[]}"), database_etag(b"{\"players\":[{}]}"));
        assert!(database_etag(b"x").starts_with("\"players-"));
    }

    #[test]
    fn bundled_sample_marks_clean_players_as_clean() {
        let raw = include_bytes!("../../data/database.json");
        let loaded = LoadedDatabase::from_bytes(Bytes::from_static(raw)).expect("sample parses");
        assert_eq!(loaded.player_count, 4);

        let database = watchlist_shared::PlayerDatabase::from_slice(raw).expect("sample parses");
        let alpha = database
            .players
            .iter()
            .find(|player| player.nickname() == "alpha")
            .expect("alpha present");
        assert!(alpha.is_clean());

        let stats = watchlist_shared::PlayerStats::compute(&database.players);
        assert_eq!(stats.clean, 1);
        assert!(stats.behavior_tags().all(|tag| tag != "NONE"));
    }

    #[tokio::test]
    async fn missing_file_reports_path() {
        let err = LoadedDatabase::read(std::path::Path::new("does/not/exist.json"))
            .await
            .expect_err("missing file");
        assert!(err.contains("does/not/exist.json"));
    }
}
