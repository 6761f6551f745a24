//! sigur-syncconf: server-sync settings applicator for Sigur installations.
//!
//! Sigur keeps its server-sync configuration in two key-value tables inside
//! the installation database: `PARAMB` for string-valued parameters and
//! `PARAMI` for integer-valued ones. Rows are provisioned once by the vendor
//! installer; this tool only overwrites the `PARAMVALUE` of keys that already
//! exist. It never creates or deletes parameter rows.
//!
//! # Invariants
//!
//! - A whole settings batch is applied inside a single transaction: either
//!   every matching key is updated, or the store is left untouched.
//! - A key that matches zero rows is a warning, not an error. The batch
//!   continues; the key is reported as missing so a stale name can be spotted.
//! - Reapplying the same settings file is idempotent, and the assignments
//!   target disjoint keys, so application order never matters.
//!
//! # Example
//!
//! ```bash
//! # Print a starter settings file
//! sigur-syncconf template > sync.toml
//!
//! # Apply it to an installation database
//! sigur-syncconf apply --db /opt/sigur/sigur.db --config sync.toml
//!
//! # Inspect what the store currently holds
//! sigur-syncconf show --db /opt/sigur/sigur.db
//! ```

pub mod cli;
pub mod core;

pub use crate::core::apply::{ApplyReport, apply_assignments, apply_settings, set_enabled};
pub use crate::core::error::SyncConfError;
pub use crate::core::settings::ServerSyncSettings;
pub use crate::core::store::{Assignment, ParamKind, ParamReading, ParamStore, ParamValue};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
