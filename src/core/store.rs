//! Parameter-store data model and write/read access.
//!
//! A parameter is a named setting in the installation database, addressed by
//! its `NAME` column. String parameters live in `PARAMB`, integer parameters
//! in `PARAMI`; the two tables are surfaced here as one logical entity with a
//! kind discriminator.

use crate::core::error::SyncConfError;
use rusqlite::{Connection, OptionalExtension, Transaction, params};
use serde::Serialize;
use std::fmt;

/// Which of the two vendor tables a parameter lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    String,
    Integer,
}

impl ParamKind {
    pub fn table(&self) -> &'static str {
        match self {
            ParamKind::String => "PARAMB",
            ParamKind::Integer => "PARAMI",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Text(String),
    Int(i64),
}

impl ParamValue {
    pub fn kind(&self) -> ParamKind {
        match self {
            ParamValue::Text(_) => ParamKind::String,
            ParamValue::Int(_) => ParamKind::Integer,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(v) => write!(f, "'{}'", v),
            ParamValue::Int(v) => write!(f, "{}", v),
        }
    }
}

/// A single key/value write. The kind is implied by the value and selects
/// the target table.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub key: String,
    pub value: ParamValue,
}

impl Assignment {
    pub fn text(key: &str, value: impl Into<String>) -> Self {
        Self {
            key: key.to_string(),
            value: ParamValue::Text(value.into()),
        }
    }

    pub fn int(key: &str, value: i64) -> Self {
        Self {
            key: key.to_string(),
            value: ParamValue::Int(value),
        }
    }
}

/// Write access to a parameter store.
///
/// `set_param` returns the number of rows the assignment matched. Zero means
/// the key is not provisioned in the store; callers treat that as a warning,
/// never as a failure. Implementations must not create rows.
pub trait ParamStore {
    fn set_param(&mut self, assignment: &Assignment) -> Result<usize, SyncConfError>;
}

/// `ParamStore` over an open rusqlite transaction.
///
/// The transaction is owned by the caller so that commit/rollback stays at
/// the batch boundary, not per assignment.
pub struct SqliteParamStore<'tx> {
    tx: &'tx Transaction<'tx>,
}

impl<'tx> SqliteParamStore<'tx> {
    pub fn new(tx: &'tx Transaction<'tx>) -> Self {
        Self { tx }
    }
}

impl ParamStore for SqliteParamStore<'_> {
    fn set_param(&mut self, assignment: &Assignment) -> Result<usize, SyncConfError> {
        let rows = match &assignment.value {
            ParamValue::Text(v) => self.tx.execute(
                "UPDATE PARAMB SET PARAMVALUE = ?1 WHERE NAME = ?2",
                params![v, assignment.key],
            )?,
            ParamValue::Int(v) => self.tx.execute(
                "UPDATE PARAMI SET PARAMVALUE = ?1 WHERE NAME = ?2",
                params![v, assignment.key],
            )?,
        };
        Ok(rows)
    }
}

/// Current value of one known parameter, as read back from the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamReading {
    pub key: String,
    pub kind: ParamKind,
    pub value: Option<ParamValue>,
}

/// Read a single parameter. `None` means the key is not provisioned.
pub fn read_param(
    conn: &Connection,
    key: &str,
    kind: ParamKind,
) -> Result<Option<ParamValue>, SyncConfError> {
    let value = match kind {
        ParamKind::String => conn
            .query_row(
                "SELECT PARAMVALUE FROM PARAMB WHERE NAME = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?
            .map(ParamValue::Text),
        ParamKind::Integer => conn
            .query_row(
                "SELECT PARAMVALUE FROM PARAMI WHERE NAME = ?1",
                params![key],
                |row| row.get::<_, i64>(0),
            )
            .optional()?
            .map(ParamValue::Int),
    };
    Ok(value)
}
