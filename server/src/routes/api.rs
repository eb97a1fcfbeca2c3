use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::config::DATABASE_CACHE_CONTROL;
use crate::state::AppState;

pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "players": state.database.player_count,
        "loaded_at": state.database.loaded_at.to_rfc3339(),
    }))
}

/// Serve the player database exactly as loaded, honouring `If-None-Match`.
pub async fn get_database(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let database = &state.database;

    let mut response = if is_not_modified(&headers, &database.etag) {
        StatusCode::NOT_MODIFIED.into_response()
    } else {
        (
            [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
            database.json.clone(),
        )
            .into_response()
    };

    let out = response.headers_mut();
    out.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(DATABASE_CACHE_CONTROL),
    );
    if let Ok(etag) = HeaderValue::from_str(&database.etag) {
        out.insert(header::ETAG, etag);
    }
    response
}

fn is_not_modified(headers: &HeaderMap, etag: &str) -> bool {
    headers
        .get(header::IF_NONE_MATCH)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| etag_listed(value, etag))
}

/// Weak comparison: a `W/` prefix on either side is ignored.
fn etag_listed(if_none_match: &str, etag: &str) -> bool {
    let current = etag.trim().trim_start_matches("W/");
    if_none_match
        .split(',')
        .map(str::trim)
        .any(|tag| tag == "*" || tag.trim_start_matches("W/") == current)
}
