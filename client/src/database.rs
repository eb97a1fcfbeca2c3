use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use watchlist_shared::{Player, PlayerDatabase, RetryExhausted, RetryPolicy};

const DATABASE_URL: &str = "/database.json";

pub const LOAD_ERROR_TEXT: &str = "Ошибка загрузки database.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(String),
}

/// Fetch and parse the player database once.
pub async fn fetch_database() -> Result<PlayerDatabase, String> {
    let resp = gloo_net::http::Request::get(DATABASE_URL)
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let body = resp
        .text()
        .await
        .map_err(|e| format!("read error: {e}"))?;
    PlayerDatabase::from_json(&body).map_err(|e| e.to_string())
}

/// Poll for the player database with a fixed delay until it loads or the budget runs out.
///
/// A failure after the last retry is final; nothing retries afterwards.
pub fn load_players(players: RwSignal<Vec<Player>>, status: RwSignal<LoadStatus>) {
    let policy = RetryPolicy::DATABASE;
    status.set(LoadStatus::Loading);

    spawn_local(async move {
        match policy.run(fetch_database, TimeoutFuture::new).await {
            Ok((database, failed)) => {
                web_sys::console::info_1(
                    &format!(
                        "Loaded {} players after {failed} failed attempt(s)",
                        database.players.len()
                    )
                    .into(),
                );
                players.set(database.players);
                status.set(LoadStatus::Ready);
            }
            Err(RetryExhausted {
                attempts,
                last_error,
            }) => {
                web_sys::console::warn_1(
                    &format!(
                        "Player database unavailable after {attempts}/{} attempts over {} ms: {last_error}",
                        policy.max_attempts(),
                        policy.total_delay_ms()
                    )
                    .into(),
                );
                status.set(LoadStatus::Failed(last_error));
            }
        }
    });
}
