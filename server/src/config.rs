use std::path::PathBuf;

pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_DATA_PATH: &str = "data/database.json";
pub const DEFAULT_STATIC_DIR: &str = "client/dist";

/// `Cache-Control` for the player database; clients revalidate via ETag on every load.
pub const DATABASE_CACHE_CONTROL: &str = "no-cache";

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub fn server_port() -> u16 {
    non_empty_env("WATCHLIST_PORT")
        .and_then(|value| value.parse::<u16>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_SERVER_PORT)
}

pub fn data_path() -> PathBuf {
    non_empty_env("WATCHLIST_DATA_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH))
}

pub fn static_dir() -> PathBuf {
    non_empty_env("WATCHLIST_STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{DEFAULT_SERVER_PORT, data_path, server_port, static_dir};

    #[test]
    fn port_falls_back_on_missing_or_invalid_values() {
        temp_env::with_var_unset("WATCHLIST_PORT", || {
            assert_eq!(server_port(), DEFAULT_SERVER_PORT);
        });
        for bad in ["", "0", "http", "70000"] {
            temp_env::with_var("WATCHLIST_PORT", Some(bad), || {
                assert_eq!(server_port(), DEFAULT_SERVER_PORT, "value {bad:?}");
            });
        }
        temp_env::with_var("WATCHLIST_PORT", Some(" 8080 "), || {
            assert_eq!(server_port(), 8080);
        });
    }

    #[test]
    fn paths_come_from_env_when_set() {
        temp_env::with_vars(
            [
                ("WATCHLIST_DATA_PATH", Some("/srv/players.json")),
                ("WATCHLIST_STATIC_DIR", Some("   ")),
            ],
            || {
                assert_eq!(data_path(), PathBuf::from("/srv/players.json"));
                assert_eq!(static_dir(), PathBuf::from("client/dist"));
            },
        );
    }
}
