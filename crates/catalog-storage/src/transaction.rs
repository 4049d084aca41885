//! Scoped transactions.
//!
//! The transaction handle never escapes the closure. It commits only when
//! the closure returns `Ok`; any other exit (error, early return, panic)
//! drops the handle, and rusqlite rolls it back on drop.

use rusqlite::{Connection, Transaction, TransactionBehavior};
use tracing::debug;

use catalog_core::errors::CatalogResult;

use crate::to_storage_err;

/// Run `f` inside an IMMEDIATE write transaction.
pub fn in_transaction<T, F>(conn: &mut Connection, f: F) -> CatalogResult<T>
where
    F: FnOnce(&Transaction<'_>) -> CatalogResult<T>,
{
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(to_storage_err)?;

    match f(&tx) {
        Ok(value) => {
            tx.commit().map_err(to_storage_err)?;
            Ok(value)
        }
        Err(e) => {
            debug!(error = %e, "rolling back transaction");
            Err(e)
        }
    }
}

/// Run `f` inside a deferred read transaction so every statement in it sees
/// the same snapshot.
pub fn in_read_snapshot<T, F>(conn: &Connection, f: F) -> CatalogResult<T>
where
    F: FnOnce(&Connection) -> CatalogResult<T>,
{
    let tx = conn.unchecked_transaction().map_err(to_storage_err)?;
    let value = f(&tx)?;
    tx.commit().map_err(to_storage_err)?;
    Ok(value)
}
