//! Service configuration
//!
//! Two knobs: the listening port (`PORT`, default 3000) and the storage
//! mode (`STORE_PATH` set -> durable JSON document at that path, unset ->
//! volatile in-memory collections).

use std::path::PathBuf;

/// Storage mode for both collections
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StorageConfig {
    /// In-memory only, lost on restart
    #[default]
    Volatile,
    /// Flat JSON document at the given path, surviving restarts
    Durable(PathBuf),
}

/// Process-level configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub storage: StorageConfig,
}

impl ServerConfig {
    pub const DEFAULT_PORT: u16 = 3000;

    /// Read configuration from the environment
    ///
    /// An unset or unparsable `PORT` falls back to the default.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(Self::DEFAULT_PORT);
        let storage = match std::env::var("STORE_PATH") {
            Ok(path) if !path.is_empty() => StorageConfig::Durable(PathBuf::from(path)),
            _ => StorageConfig::Volatile,
        };

        Self { port, storage }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: Self::DEFAULT_PORT,
            storage: StorageConfig::default(),
        }
    }
}
