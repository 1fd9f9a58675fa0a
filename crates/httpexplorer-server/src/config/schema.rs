use std::net::SocketAddr;

use serde::Deserialize;
use httpexplorer_core::error::{ExplorerError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub fixtures: FixturesSection,

    #[serde(default)]
    pub cors: CorsSection,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            fixtures: FixturesSection::default(),
            cors: CorsSection::default(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ExplorerError::Config(format!(
                "unsupported config version {}",
                self.version
            )));
        }

        self.server.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Value of the `X-Served-By` header.
    #[serde(default = "default_server_name")]
    pub server_name: String,

    /// Fallback tracing filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            server_name: default_server_name(),
            log_filter: default_log_filter(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if self.server_name.trim().is_empty() {
            return Err(ExplorerError::Config("server.server_name must not be empty".into()));
        }
        if !self.server_name.is_ascii() {
            return Err(ExplorerError::Config(
                "server.server_name must be ASCII (it is sent as a header)".into(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            ExplorerError::Config(format!("server.listen must be a valid SocketAddr: {e}"))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8000".into()
}
fn default_server_name() -> String {
    "HTTP-Explorer-Server".into()
}
fn default_log_filter() -> String {
    "info".into()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixturesSection {
    /// Seed products, users and readings at startup.
    #[serde(default = "default_true")]
    pub seed: bool,
}

impl Default for FixturesSection {
    fn default() -> Self {
        Self { seed: true }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsSection {
    /// Allow any origin, method and header.
    #[serde(default = "default_true")]
    pub permissive: bool,
}

impl Default for CorsSection {
    fn default() -> Self {
        Self { permissive: true }
    }
}

fn default_true() -> bool {
    true
}
