//! SQLite PRAGMA configuration for catalog connections.
//! Must be called on every connection immediately after opening.

use std::time::Duration;

use rusqlite::functions::FunctionFlags;
use rusqlite::Connection;

use catalog_core::errors::CatalogResult;

use crate::to_storage_err;

/// Unicode-aware lowercase. SQLite's own `lower()` and `LIKE` fold ASCII only.
pub const LOWER_FN: &str = "catalog_lower";

/// Configure a read-write connection.
///
/// - WAL for concurrent readers during writes
/// - foreign_keys so model/brand/space references are enforced
/// - busy_timeout for lock contention
/// - `catalog_lower` for case-insensitive name matching
pub fn configure_connection(conn: &Connection, busy_timeout_ms: u32) -> CatalogResult<()> {
    conn.busy_timeout(Duration::from_millis(u64::from(busy_timeout_ms)))
        .map_err(to_storage_err)?;
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA foreign_keys = ON;
        PRAGMA cache_size = -8000;
        PRAGMA temp_store = MEMORY;
        ",
    )
    .map_err(to_storage_err)?;
    register_functions(conn)
}

fn register_functions(conn: &Connection) -> CatalogResult<()> {
    conn.create_scalar_function(
        LOWER_FN,
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| Ok(ctx.get::<String>(0)?.to_lowercase()),
    )
    .map_err(to_storage_err)
}

/// Same as `configure_connection` plus `query_only = ON`.
pub fn configure_readonly_connection(conn: &Connection, busy_timeout_ms: u32) -> CatalogResult<()> {
    configure_connection(conn, busy_timeout_ms)?;
    conn.execute_batch("PRAGMA query_only = ON;")
        .map_err(to_storage_err)?;
    Ok(())
}
