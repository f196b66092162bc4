//! Shared application state for the status server.
//!
//! Holds the validated config, the sampler and the compiled page template.
//! There is no per-request mutable state; the sampler's metrics source
//! guards its own handle.

use std::sync::Arc;

use pointless_core::error::Result;
use pointless_core::render::Renderer;

use crate::config::ServerConfig;
use crate::sampler::{HostMetrics, Sampler, SysinfoMetrics};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    sampler: Sampler,
    renderer: Renderer,
}

impl AppState {
    /// Build state backed by the host's real metrics.
    pub fn new(cfg: ServerConfig) -> Result<Self> {
        Self::with_metrics(cfg, Arc::new(SysinfoMetrics::new()))
    }

    /// Build state with an explicit metrics source.
    pub fn with_metrics(cfg: ServerConfig, metrics: Arc<dyn HostMetrics>) -> Result<Self> {
        cfg.validate()?;
        let renderer = Renderer::new()?;
        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                sampler: Sampler::new(metrics),
                renderer,
            }),
        })
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn sampler(&self) -> &Sampler {
        &self.inner.sampler
    }

    pub fn renderer(&self) -> &Renderer {
        &self.inner.renderer
    }
}
