//! Storage gateway configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Database file. `None` opens an in-memory database.
    pub db_path: Option<String>,
    /// Reader connections next to the single writer.
    pub read_pool_size: usize,
    pub busy_timeout_ms: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            read_pool_size: 4,
            busy_timeout_ms: 5000,
        }
    }
}
