//! Schema definitions for the Sigur parameter tables.
//!
//! The live tables are provisioned by the vendor installer, never by this
//! tool. These consts exist so fixture stores in tests and local experiments
//! match the layout the real server uses.

use crate::core::error::SyncConfError;
use rusqlite::Connection;

pub const PARAMB_TABLE_SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS PARAMB (
        NAME TEXT PRIMARY KEY,
        PARAMVALUE TEXT NOT NULL
    )
";

pub const PARAMI_TABLE_SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS PARAMI (
        NAME TEXT PRIMARY KEY,
        PARAMVALUE INTEGER NOT NULL
    )
";

/// Create both parameter tables on a connection. Fixture use only; the
/// applicator itself assumes the tables already exist.
pub fn create_param_tables(conn: &Connection) -> Result<(), SyncConfError> {
    conn.execute(PARAMB_TABLE_SCHEMA, [])?;
    conn.execute(PARAMI_TABLE_SCHEMA, [])?;
    Ok(())
}
