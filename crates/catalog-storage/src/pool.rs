//! ConnectionPool: writer + read pool with round-robin selection.
//!
//! The only place in the catalog that holds a `Connection` behind a lock.
//! Everything else reaches storage through `with_writer` / `with_reader`.
//!
//! Acquiring a connection is the async suspension point. The closure then
//! runs to completion without yielding, so a cancelled request either never
//! touches the database or has already committed or rolled back.
//!
//! SQLite calls block, for up to `busy_timeout_ms` under write contention.
//! On a multi-thread tokio runtime the closure runs under `block_in_place`
//! so other tasks move off the worker. On a current-thread runtime (actix
//! workers, plain `#[tokio::test]`) it runs inline and stalls that thread;
//! keep `busy_timeout_ms` short there.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rusqlite::{Connection, OpenFlags};
use tokio::runtime::{Handle, RuntimeFlavor};
use tokio::sync::Mutex;

use catalog_core::config::StorageConfig;
use catalog_core::errors::{CatalogResult, StorageError};

use crate::pragmas;

/// Default number of reader connections.
const DEFAULT_READ_POOL_SIZE: usize = 2;

/// Connection pool for the catalog database: 1 writer + N readers.
pub struct ConnectionPool {
    writer: Mutex<Connection>,
    readers: Vec<Mutex<Connection>>,
    read_index: AtomicUsize,
    path: Option<PathBuf>,
}

impl ConnectionPool {
    /// Open a file-backed pool with `config.read_pool_size` readers.
    pub fn open(path: &Path, config: &StorageConfig) -> CatalogResult<Self> {
        let pool_size = if config.read_pool_size == 0 {
            DEFAULT_READ_POOL_SIZE
        } else {
            config.read_pool_size
        };

        let writer = Connection::open(path).map_err(|e| StorageError::ConnectionFailed {
            message: format!("open writer {}: {e}", path.display()),
        })?;
        pragmas::configure_connection(&writer, config.busy_timeout_ms)?;

        let mut readers = Vec::with_capacity(pool_size);
        for i in 0..pool_size {
            let reader = Connection::open_with_flags(
                path,
                OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
            )
            .map_err(|e| StorageError::ConnectionFailed {
                message: format!("open reader {i} {}: {e}", path.display()),
            })?;
            pragmas::configure_readonly_connection(&reader, config.busy_timeout_ms)?;
            readers.push(Mutex::new(reader));
        }

        Ok(Self {
            writer: Mutex::new(writer),
            readers,
            read_index: AtomicUsize::new(0),
            path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory pool.
    ///
    /// Separate in-memory connections do not share data, so there are no
    /// readers; `with_reader` falls back to the writer.
    pub fn open_in_memory(config: &StorageConfig) -> CatalogResult<Self> {
        let writer = Connection::open_in_memory().map_err(|e| StorageError::ConnectionFailed {
            message: format!("open in-memory writer: {e}"),
        })?;
        pragmas::configure_connection(&writer, config.busy_timeout_ms)?;

        Ok(Self {
            writer: Mutex::new(writer),
            readers: Vec::new(),
            read_index: AtomicUsize::new(0),
            path: None,
        })
    }

    /// Database file path (None for in-memory).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn reader_count(&self) -> usize {
        self.readers.len()
    }

    /// Exclusive writer access while the pool is not yet shared.
    pub(crate) fn writer_mut(&mut self) -> &mut Connection {
        self.writer.get_mut()
    }

    /// Execute a closure with the writer connection.
    pub async fn with_writer<F, T>(&self, f: F) -> CatalogResult<T>
    where
        F: FnOnce(&mut Connection) -> CatalogResult<T>,
    {
        let mut conn = self.writer.lock().await;
        run_blocking(|| f(&mut conn))
    }

    /// Execute a closure with a reader connection (round-robin).
    ///
    /// Falls back to the writer if no readers are available (in-memory mode).
    pub async fn with_reader<F, T>(&self, f: F) -> CatalogResult<T>
    where
        F: FnOnce(&Connection) -> CatalogResult<T>,
    {
        if self.readers.is_empty() {
            let conn = self.writer.lock().await;
            return run_blocking(|| f(&conn));
        }

        let index = self.read_index.fetch_add(1, Ordering::Relaxed) % self.readers.len();
        let conn = self.readers[index].lock().await;
        run_blocking(|| f(&conn))
    }

    /// Check WAL mode on the writer connection.
    pub async fn is_wal_mode(&self) -> bool {
        self.with_writer(|conn| {
            let mode: String = conn
                .query_row("PRAGMA journal_mode", [], |row| row.get(0))
                .unwrap_or_default();
            Ok(mode.eq_ignore_ascii_case("wal"))
        })
        .await
        .unwrap_or(false)
    }
}

/// Run blocking SQLite work, yielding the worker when the runtime allows it.
fn run_blocking<T>(f: impl FnOnce() -> T) -> T {
    match Handle::try_current().map(|h| h.runtime_flavor()) {
        Ok(RuntimeFlavor::MultiThread) => tokio::task::block_in_place(f),
        _ => f(),
    }
}
