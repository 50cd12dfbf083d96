use crate::error::{OptionsError, Result};
use crate::models::CompileOption;
use rusqlite::{Connection, OpenFlags, Row};
use std::path::Path;
use tracing::{debug, warn};

const COMPILE_OPTIONS_PRAGMA: &str = "PRAGMA compile_options";

/// Database handle
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open a fresh, private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(OptionsError::Connection)?;
        debug!(sqlite_version = rusqlite::version(), "opened in-memory database");
        Ok(Database { conn })
    }

    /// Open database connection
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path).map_err(OptionsError::Connection)?;
        Ok(Database { conn })
    }

    pub fn open_with_flags<P: AsRef<Path>>(path: P, flags: OpenFlags) -> Result<Self> {
        let conn = Connection::open_with_flags(path, flags).map_err(OptionsError::Connection)?;
        Ok(Database { conn })
    }

    /// Compile-time options of the linked engine, in the order SQLite reports them
    pub fn compile_options(&self) -> Result<Vec<CompileOption>> {
        let options = self.options_from(COMPILE_OPTIONS_PRAGMA)?;
        debug!(count = options.len(), "read compile options");
        Ok(options)
    }

    fn options_from(&self, sql: &str) -> Result<Vec<CompileOption>> {
        let mut stmt = self.conn.prepare(sql).map_err(OptionsError::Query)?;

        let options = stmt
            .query_map([], option_from_row)
            .map_err(OptionsError::Query)?;
        options
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(OptionsError::Query)
    }

    /// Close the connection. Consumes the handle so it can only happen once.
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| OptionsError::Connection(e))?;
        debug!("closed database");
        Ok(())
    }
}

/// Open a database, run `f` against it and close it again on every path.
///
/// An error from `f` wins over an error from closing; the latter is only logged then.
pub fn with_database<T, O, F>(open: O, f: F) -> Result<T>
where
    O: FnOnce() -> Result<Database>,
    F: FnOnce(&Database) -> Result<T>,
{
    let db = open()?;
    let result = f(&db);

    match (result, db.close()) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(close_err)) => Err(close_err),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(close_err)) => {
            warn!(error = %close_err, "failed to close database after error");
            Err(e)
        }
    }
}

// ==================== Row Parsers ====================

fn option_from_row(row: &Row) -> std::result::Result<CompileOption, rusqlite::Error> {
    Ok(CompileOption { name: row.get(0)? })
}
