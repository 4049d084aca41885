/// Storage gateway failures. Surfaced as `CatalogError::StorageUnavailable`.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("sqlite error: {message}")]
    SqliteError { message: String },

    #[error("database busy: {message}")]
    Busy { message: String },

    #[error("migration v{version:03} failed: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("connection failed: {message}")]
    ConnectionFailed { message: String },
}

impl StorageError {
    /// Busy/locked databases are transient; everything else is not.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Busy { .. })
    }
}
