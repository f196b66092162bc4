use std::net::SocketAddr;

use serde::Deserialize;
use pointless_core::error::{PointlessError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(PointlessError::UnsupportedVersion);
        }
        self.server.validate()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_status_path")]
    pub status_path: String,

    #[serde(default = "default_health_path")]
    pub health_path: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            status_path: default_status_path(),
            health_path: default_health_path(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        for (key, path) in [
            ("server.status_path", &self.status_path),
            ("server.health_path", &self.health_path),
        ] {
            if !path.starts_with('/') {
                return Err(PointlessError::BadRequest(format!(
                    "{key} must start with '/'"
                )));
            }
            // Literal routes only: the router treats these as captures.
            if path.contains(['*', ':']) {
                return Err(PointlessError::BadRequest(format!(
                    "{key} must not contain '*' or ':'"
                )));
            }
        }
        if self.status_path == self.health_path {
            return Err(PointlessError::BadRequest(
                "server.status_path and server.health_path must differ".into(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            PointlessError::BadRequest(format!("server.listen must be a valid SocketAddr: {e}"))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_status_path() -> String {
    "/".into()
}
fn default_health_path() -> String {
    "/healthz".into()
}
