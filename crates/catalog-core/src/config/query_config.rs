//! Listing defaults and bounds.

use serde::{Deserialize, Serialize};

use crate::errors::{CatalogError, CatalogResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Page size used when the caller does not supply one.
    pub default_limit: i64,
    /// Largest page size a caller may request.
    pub max_limit: i64,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_limit: 20,
            max_limit: 100,
        }
    }
}

impl QueryConfig {
    pub fn validate(&self) -> CatalogResult<()> {
        if self.default_limit <= 0 || self.max_limit <= 0 {
            return Err(CatalogError::Config(
                "query limits must be positive".to_string(),
            ));
        }
        if self.default_limit > self.max_limit {
            return Err(CatalogError::Config(format!(
                "default_limit {} exceeds max_limit {}",
                self.default_limit, self.max_limit
            )));
        }
        Ok(())
    }
}
