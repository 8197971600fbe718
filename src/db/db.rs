use super::migrations::init_with_migrations;
use anyhow::Result;
use rusqlite::{Connection, Transaction};
use std::path::Path;
use std::time::Duration;

pub const DB_FILE_NAME: &str = "recall_flow.db";

/// How long a statement waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle to the item store.
///
/// Opened once at startup and passed by reference to whatever needs storage.
/// Dropping it closes the connection.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens (or creates) the database file and applies pending migrations.
    pub fn open(path: &Path) -> Result<Db> {
        let conn = Connection::open(path)?;
        Self::init(conn)
    }

    /// Private in-memory database, used by tests and dry runs.
    pub fn open_in_memory() -> Result<Db> {
        Self::init(Connection::open_in_memory()?)
    }

    /// Opens the file without touching the schema.
    pub fn open_without_migrations(path: &Path) -> Result<Connection> {
        Ok(Connection::open(path)?)
    }

    fn init(mut conn: Connection) -> Result<Db> {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        init_with_migrations(&mut conn)?;
        Ok(Db { conn })
    }

    /// Runs `f` inside one transaction.
    ///
    /// Commits when `f` returns `Ok`. On `Err` the transaction is dropped
    /// uncommitted, which rolls every write in it back.
    pub fn with_transaction<T, E, F>(&self, f: F) -> std::result::Result<T, E>
    where
        F: FnOnce(&Transaction<'_>) -> std::result::Result<T, E>,
        E: From<rusqlite::Error>,
    {
        let tx = self.conn.unchecked_transaction()?;
        let value = f(&tx)?;
        tx.commit()?;
        Ok(value)
    }
}
