use std::path::PathBuf;

use axum::{
    Router,
    extract::Request,
    http::{HeaderValue, StatusCode, header},
    middleware::{self, Next},
    response::Response,
};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;

use crate::routes;
use crate::state::AppState;

pub(crate) fn build_app(state: AppState, static_dir: PathBuf) -> Router {
    let static_assets = Router::new()
        .fallback_service(
            ServeDir::new(static_dir)
                .precompressed_br()
                .precompressed_gzip(),
        )
        .layer(middleware::from_fn(cache_hashed_assets));

    let app = Router::new()
        .route(
            "/database.json",
            axum::routing::get(routes::api::get_database),
        )
        .route("/api/health", axum::routing::get(routes::api::health));

    app.layer(CompressionLayer::new())
        .fallback_service(static_assets)
        .with_state(state)
}

/// Trunk content hashes are 16 hex digits.
const CONTENT_HASH_LEN: usize = 16;
const IMMUTABLE_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

async fn cache_hashed_assets(request: Request, next: Next) -> Response {
    let immutable = is_hashed_bundle_asset(request.uri().path());
    let mut response = next.run(request).await;

    if immutable && response.status() == StatusCode::OK {
        response.headers_mut().insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static(IMMUTABLE_CACHE_CONTROL),
        );
    }
    response
}

/// `watchlist-client-71578f6b278221f3_bg.wasm`, `style-a93762ff3bf6d63a.css` and the like.
fn is_hashed_bundle_asset(path: &str) -> bool {
    let file = path.rsplit('/').next().unwrap_or(path);
    let Some((stem, ext)) = file.rsplit_once('.') else {
        return false;
    };
    matches!(ext, "wasm" | "js" | "css") && stem.split(['-', '_']).any(is_content_hash)
}

fn is_content_hash(segment: &str) -> bool {
    segment.len() == CONTENT_HASH_LEN && segment.bytes().all(|b| b.is_ascii_hexdigit())
}
