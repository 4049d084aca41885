use super::StorageError;

/// Top-level error type for catalog operations.
///
/// The dispatcher maps these onto transport outcomes; the core never
/// retries or swallows them.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid reference: {field} = {id} does not exist")]
    InvalidReference { field: &'static str, id: i64 },

    #[error("already exists: {entity} named '{name}'")]
    AlreadyExists { entity: &'static str, name: String },

    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] StorageError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

impl CatalogError {
    /// Whether a caller may retry the operation with backoff.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::StorageUnavailable(e) => e.is_transient(),
            _ => false,
        }
    }

    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}

/// Convenience type alias.
pub type CatalogResult<T> = Result<T, CatalogError>;
