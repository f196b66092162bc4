//! Status page handler.
//!
//! Request -> Sampler snapshot -> rendered HTML. No error on this path
//! reaches the client: degraded readings still produce a `200` page, and a
//! render failure falls back to a minimal static page.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, State},
    response::Html,
};

use pointless_core::render::FALLBACK_PAGE;

use crate::app_state::AppState;

pub async fn status_page(
    State(app): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
) -> Html<String> {
    let snapshot = app.sampler().capture(&peer.to_string());
    match app.renderer().render(&snapshot) {
        Ok(page) => {
            tracing::debug!(
                host = %snapshot.host(),
                cpu = snapshot.cpu_usage(),
                memory = snapshot.memory_usage(),
                "status page rendered"
            );
            Html(page)
        }
        Err(e) => {
            tracing::warn!(code = e.code().as_str(), error = %e, "status page render failed");
            Html(FALLBACK_PAGE.to_string())
        }
    }
}
