//! # catalog-storage
//!
//! SQLite persistence layer for the product catalog.
//! Single write connection + read pool (WAL mode), versioned schema,
//! filter-driven listing with matching counts, row aggregation into
//! nested products, transactional product writes.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod pragmas;
pub mod queries;
pub mod transaction;

pub use engine::CatalogEngine;
pub use pool::ConnectionPool;

use catalog_core::errors::StorageError;
use catalog_core::CatalogError;
use rusqlite::ErrorCode;

/// Convert a rusqlite failure into a `StorageUnavailable` error.
///
/// Constraint violations that carry domain meaning are classified by the
/// caller before falling back to this.
pub fn to_storage_err(e: rusqlite::Error) -> CatalogError {
    match &e {
        rusqlite::Error::SqliteFailure(failure, _)
            if matches!(
                failure.code,
                ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked
            ) =>
        {
            StorageError::Busy {
                message: e.to_string(),
            }
            .into()
        }
        _ => StorageError::SqliteError {
            message: e.to_string(),
        }
        .into(),
    }
}

/// Constraint classes the catalog maps onto its own error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Constraint {
    Unique,
    ForeignKey,
}

pub(crate) fn constraint_violation(e: &rusqlite::Error) -> Option<Constraint> {
    match e {
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == ErrorCode::ConstraintViolation =>
        {
            match failure.extended_code {
                rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                | rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY => Some(Constraint::Unique),
                rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY => Some(Constraint::ForeignKey),
                _ => None,
            }
        }
        _ => None,
    }
}
