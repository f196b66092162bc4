//! pointless-status server.
//!
//! - `GET /`        : HTML status page (client, UTC time, CPU, memory)
//! - `GET /healthz` : liveness
//!
//! Config is read from `$POINTLESS_CONFIG` (default `pointless.yaml`); a
//! missing file means defaults.

use std::net::SocketAddr;

use tracing_subscriber::{fmt, EnvFilter};

use pointless_core::error::{PointlessError, Result};
use pointless_server::{app_state, config, router};

const CONFIG_ENV: &str = "POINTLESS_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "pointless.yaml";

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    let cfg = config::load_or_default(&path)?;
    let listen = cfg.server.listen_addr()?;

    let state = app_state::AppState::new(cfg)?;
    let app = router::build_router(state);

    tracing::info!(%listen, "pointless-server starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| PointlessError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| PointlessError::Internal(format!("server failed: {e}")))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}
