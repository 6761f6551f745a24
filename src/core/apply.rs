//! Batch application of server-sync assignments to the parameter store.
//!
//! The batch is single-pass and stateless: each assignment targets a distinct
//! key, so there is no ordering dependency between them. Atomicity comes from
//! the surrounding transaction, not from the loop.

use crate::core::error::SyncConfError;
use crate::core::settings::{self, ServerSyncSettings};
use crate::core::store::{Assignment, ParamReading, ParamStore, SqliteParamStore, read_param};
use rusqlite::Connection;
use serde::Serialize;

/// Outcome of one batch apply.
///
/// `missing` carries keys that matched zero rows. That usually means a stale
/// key name or a database from a different server version; it is reported,
/// never fatal.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ApplyReport {
    pub updated: Vec<String>,
    pub missing: Vec<String>,
}

impl ApplyReport {
    pub fn has_warnings(&self) -> bool {
        !self.missing.is_empty()
    }
}

/// Apply a batch of assignments against any parameter store.
///
/// Stops at the first store error; partial-application concerns are handled
/// by the caller's transaction scope, not here.
pub fn apply_assignments(
    store: &mut dyn ParamStore,
    assignments: &[Assignment],
) -> Result<ApplyReport, SyncConfError> {
    let mut report = ApplyReport::default();
    for assignment in assignments {
        let rows = store.set_param(assignment)?;
        if rows == 0 {
            report.missing.push(assignment.key.clone());
        } else {
            report.updated.push(assignment.key.clone());
        }
    }
    Ok(report)
}

/// Apply a full settings batch inside a single transaction.
///
/// Commit only after every assignment has been issued; any store error rolls
/// the whole batch back so a multi-key change is never half-applied.
pub fn apply_settings(
    conn: &mut Connection,
    settings: &ServerSyncSettings,
) -> Result<ApplyReport, SyncConfError> {
    let assignments = settings.assignments();
    let tx = conn.transaction()?;
    let report = {
        let mut store = SqliteParamStore::new(&tx);
        apply_assignments(&mut store, &assignments)?
    };
    tx.commit()?;
    Ok(report)
}

/// Kill switch: flip `SS_ENABLED` without touching anything else.
pub fn set_enabled(conn: &mut Connection, enabled: bool) -> Result<ApplyReport, SyncConfError> {
    let assignment = Assignment::int(settings::SS_ENABLED, i64::from(enabled));
    let tx = conn.transaction()?;
    let report = {
        let mut store = SqliteParamStore::new(&tx);
        apply_assignments(&mut store, std::slice::from_ref(&assignment))?
    };
    tx.commit()?;
    Ok(report)
}

/// Read back the current value of every known server-sync parameter.
pub fn snapshot(conn: &Connection) -> Result<Vec<ParamReading>, SyncConfError> {
    let mut readings = Vec::with_capacity(settings::KNOWN_PARAMETERS.len());
    for (key, kind) in settings::KNOWN_PARAMETERS {
        readings.push(ParamReading {
            key: (*key).to_string(),
            kind: *kind,
            value: read_param(conn, key, *kind)?,
        });
    }
    Ok(readings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::ParamValue;

    /// Records every write; reports `absent_keys` as zero-row matches and
    /// fails outright on `poison_key`.
    #[derive(Default)]
    struct FakeStore {
        writes: Vec<Assignment>,
        absent_keys: Vec<String>,
        poison_key: Option<String>,
    }

    impl ParamStore for FakeStore {
        fn set_param(&mut self, assignment: &Assignment) -> Result<usize, SyncConfError> {
            if self.poison_key.as_deref() == Some(assignment.key.as_str()) {
                return Err(SyncConfError::Validation("store blew up".to_string()));
            }
            self.writes.push(assignment.clone());
            if self.absent_keys.iter().any(|k| k == &assignment.key) {
                Ok(0)
            } else {
                Ok(1)
            }
        }
    }

    #[test]
    fn missing_keys_are_collected_not_fatal() {
        let mut store = FakeStore {
            absent_keys: vec!["SS_FRAME_URL".to_string()],
            ..FakeStore::default()
        };
        let batch = vec![
            Assignment::text("SS_LOG_URL", "https://x.example/log"),
            Assignment::text("SS_FRAME_URL", ""),
            Assignment::int("SS_ENABLED", 1),
        ];

        let report = apply_assignments(&mut store, &batch).expect("batch should succeed");
        assert_eq!(report.updated, vec!["SS_LOG_URL", "SS_ENABLED"]);
        assert_eq!(report.missing, vec!["SS_FRAME_URL"]);
        assert!(report.has_warnings());
        assert_eq!(store.writes.len(), 3);
    }

    #[test]
    fn store_error_aborts_the_batch() {
        let mut store = FakeStore {
            poison_key: Some("SS_ENABLED".to_string()),
            ..FakeStore::default()
        };
        let batch = vec![
            Assignment::text("SS_LOG_URL", "https://x.example/log"),
            Assignment::int("SS_ENABLED", 1),
            Assignment::int("SS_EMP_PERIOD", 60),
        ];

        let err = apply_assignments(&mut store, &batch);
        assert!(err.is_err());
        // Nothing after the failing assignment was attempted.
        assert_eq!(store.writes.len(), 1);
    }

    #[test]
    fn settings_lower_to_one_assignment_per_known_key() {
        let batch = ServerSyncSettings::default().assignments();
        assert_eq!(batch.len(), settings::KNOWN_PARAMETERS.len());
        for (assignment, (key, kind)) in batch.iter().zip(settings::KNOWN_PARAMETERS) {
            assert_eq!(assignment.key, *key);
            assert_eq!(assignment.value.kind(), *kind);
        }
    }

    #[test]
    fn default_settings_keep_the_feature_off() {
        let batch = ServerSyncSettings::default().assignments();
        let enabled = batch
            .iter()
            .find(|a| a.key == settings::SS_ENABLED)
            .expect("SS_ENABLED in batch");
        assert_eq!(enabled.value, ParamValue::Int(0));
    }
}
