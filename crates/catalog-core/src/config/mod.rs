pub mod query_config;
pub mod server_config;
pub mod storage_config;

use serde::{Deserialize, Serialize};

pub use query_config::QueryConfig;
pub use server_config::ServerConfig;
pub use storage_config::StorageConfig;

use crate::errors::{CatalogError, CatalogResult};

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CatalogConfig {
    pub storage: StorageConfig,
    pub query: QueryConfig,
    pub server: ServerConfig,
}

impl CatalogConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load and validate config from a TOML file.
    pub fn load(path: &std::path::Path) -> CatalogResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Config(format!("read {}: {e}", path.display())))?;
        let config = Self::from_toml(&raw)
            .map_err(|e| CatalogError::Config(format!("parse {}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CatalogResult<()> {
        self.query.validate()
    }
}
