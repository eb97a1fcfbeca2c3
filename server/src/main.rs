mod app;
mod config;
mod routes;
mod state;

use tokio::signal;
use tracing_subscriber::EnvFilter;

use crate::state::{AppState, LoadedDatabase};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let data_path = config::data_path();
    let database = match LoadedDatabase::read(&data_path).await {
        Ok(database) => database,
        Err(e) => {
            tracing::error!(error = %e, "failed to load player database");
            return;
        }
    };
    tracing::info!(
        players = database.player_count,
        etag = %database.etag,
        path = %data_path.display(),
        "Player database loaded"
    );

    let static_dir = config::static_dir();
    if !static_dir.is_dir() {
        tracing::warn!(path = %static_dir.display(), "static directory not found; only the API will be served");
    }

    let app = app::build_app(AppState::new(database), static_dir);

    let addr = format!("0.0.0.0:{}", config::server_port());
    tracing::info!("Watchlist server listening on {addr}");

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %addr, "failed to bind TCP listener");
            return;
        }
    };
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "server failed");
    }

    tracing::info!("Server shut down gracefully");
}

async fn ctrl_c() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}

#[cfg(unix)]
async fn terminate() {
    use tokio::signal::unix::{SignalKind, signal};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to listen for SIGTERM");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await;
}

/// Resolves on the first of Ctrl+C or SIGTERM. A handler that cannot be installed never fires.
async fn shutdown_signal() {
    let source = tokio::select! {
        () = ctrl_c() => "Ctrl+C",
        () = terminate() => "SIGTERM",
    };
    tracing::info!(source, "Shutdown signal received");
}
