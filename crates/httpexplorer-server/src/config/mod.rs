//! Server config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use httpexplorer_core::error::{ExplorerError, Result};

pub use schema::{CorsSection, FixturesSection, ServerConfig, ServerSection};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "HTTPEXPLORER_CONFIG";
/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "httpexplorer.yaml";

pub fn load_from_file(path: &str) -> Result<ServerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| ExplorerError::Config(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| ExplorerError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load from `$HTTPEXPLORER_CONFIG` or `httpexplorer.yaml`.
///
/// An explicitly configured path must exist; the default path may be absent,
/// in which case built-in defaults apply.
pub fn load() -> Result<ServerConfig> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return load_from_file(&path);
    }
    if Path::new(DEFAULT_CONFIG_PATH).exists() {
        return load_from_file(DEFAULT_CONFIG_PATH);
    }
    let cfg = ServerConfig::default();
    cfg.validate()?;
    Ok(cfg)
}
