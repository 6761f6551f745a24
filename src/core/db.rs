use crate::core::error::SyncConfError;
use rusqlite::{Connection, OpenFlags};
use std::time::Duration;

/// Open the installation database read-write.
///
/// Deliberately opened without `SQLITE_OPEN_CREATE`: the store belongs to the
/// Sigur installer, and silently creating an empty database here would turn
/// every update into a no-op. A missing or unreadable database surfaces as a
/// connectivity error instead.
pub fn db_connect(db_path: &str) -> Result<Connection, SyncConfError> {
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_URI
        | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let conn = Connection::open_with_flags(db_path, flags)?;
    conn.busy_timeout(Duration::from_secs(5))?;
    conn.query_row("PRAGMA journal_mode=WAL;", [], |_| Ok(()))?;
    conn.execute("PRAGMA foreign_keys=ON;", [])?;
    Ok(conn)
}
