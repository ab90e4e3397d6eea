use rusqlite::Connection;
use std::cell::RefCell;
use std::path::PathBuf;
use tracing::info;

use crate::errors::StorageError;

const SCHEMA: &str = include_str!("../../sql/schema.sql");

// Thread-local connection slot, tagged with the file it was opened on.
thread_local! {
    static DB_CONN: RefCell<Option<(PathBuf, Connection)>> = const { RefCell::new(None) };
}

#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open or fetch the per-thread SQLite connection and run `f(conn)`.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&mut Connection) -> Result<T, StorageError>,
    {
        DB_CONN
            .try_with(|cell| {
                let mut slot = cell.borrow_mut();

                // Reopen when this thread last talked to a different file.
                let stale = slot.as_ref().map_or(true, |(path, _)| *path != self.path);
                if stale {
                    let conn = Connection::open(&self.path)
                        .map_err(|e| StorageError::Read(format!("Open DB failed: {e}")))?;
                    *slot = Some((self.path.clone(), conn));
                }

                match slot.as_mut() {
                    Some((_, conn)) => f(conn),
                    None => Err(StorageError::Read("connection slot empty".into())),
                }
            })
            .unwrap_or_else(|_| Err(StorageError::Read("thread-local connection unavailable".into())))
    }
}

/// Apply the bundled schema (idempotent).
pub fn init_db(db: &Database) -> Result<(), StorageError> {
    db.with_conn(|conn| {
        conn.execute_batch(SCHEMA)
            .map_err(|e| StorageError::Write(format!("Failed to apply schema: {e}")))
    })?;

    info!(path = %db.path.display(), "database initialized");
    Ok(())
}
