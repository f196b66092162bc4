//! Axum router wiring.
//!
//! Exposes the status page and a plain liveness route, both at configured paths.

use axum::{routing::get, Router};

use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    let server = &state.cfg().server;
    Router::new()
        .route(&server.status_path, get(transport::http::status_page))
        .route(&server.health_path, get(ops::healthz))
        .with_state(state.clone())
}
