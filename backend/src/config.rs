use sketch_core::{ConfigError, SketchConfig};
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";
pub const ADDR_VAR: &str = "SKETCH_ADDR";
pub const CONFIG_VAR: &str = "SKETCH_CONFIG";

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Failed to read config file {path:?}: {source}")]
    ConfigRead { path: PathBuf, source: std::io::Error },

    #[error("Failed to parse config file {path:?}: {source}")]
    ConfigParse { path: PathBuf, source: serde_json::Error },

    #[error("Invalid sketch config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Invalid bind address {addr:?}: {source}")]
    InvalidAddr { addr: String, source: AddrParseError },

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub addr: SocketAddr,
    pub sketch: SketchConfig,
}

impl BackendConfig {
    /// Read `SKETCH_ADDR` and `SKETCH_CONFIG` from the environment.
    pub fn from_env() -> Result<Self, BackendError> {
        Self::from_sources(
            std::env::var(ADDR_VAR).ok(),
            std::env::var(CONFIG_VAR).ok().map(PathBuf::from),
        )
    }

    pub fn from_sources(
        addr: Option<String>,
        config_path: Option<PathBuf>,
    ) -> Result<Self, BackendError> {
        let addr = addr.unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr
            .parse::<SocketAddr>()
            .map_err(|source| BackendError::InvalidAddr { addr: addr.clone(), source })?;

        let sketch: SketchConfig = match config_path {
            Some(path) => {
                let text = std::fs::read_to_string(&path)
                    .map_err(|source| BackendError::ConfigRead { path: path.clone(), source })?;
                serde_json::from_str(&text)
                    .map_err(|source| BackendError::ConfigParse { path, source })?
            }
            None => SketchConfig::default(),
        };
        sketch.validate()?;

        Ok(Self { addr, sketch })
    }
}
