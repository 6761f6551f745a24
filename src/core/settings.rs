//! Typed model of the server-sync configuration set.
//!
//! The thirteen `SS_*` keys below are the full contract the Sigur server
//! consumes for its external-sync feature. An empty string in a URL-valued
//! key means "feature disabled" on the server side, so empty values are
//! legal and meaningful, not an input error.

use crate::core::error::SyncConfError;
use crate::core::store::{Assignment, ParamKind};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const SS_LOG_URL: &str = "SS_LOG_URL";
pub const SS_EMP_URL: &str = "SS_EMP_URL";
pub const SS_PHOTO_URL: &str = "SS_PHOTO_URL";
pub const SS_PAYMENU_URL: &str = "SS_PAYMENU_URL";
pub const SS_PAYLOG_URL: &str = "SS_PAYLOG_URL";
pub const SS_FRAME_URL: &str = "SS_FRAME_URL";
pub const SS_EMP_DEFSMSTEXT: &str = "SS_EMP_DEFSMSTEXT";
pub const SS_LOGIN: &str = "SS_LOGIN";
pub const SS_ENABLED: &str = "SS_ENABLED";
pub const SS_EMP_PERIOD: &str = "SS_EMP_PERIOD";
pub const SS_LOG_USE_PASS: &str = "SS_LOG_USE_PASS";
pub const SS_LOG_USE_DENY: &str = "SS_LOG_USE_DENY";
pub const SS_LOG_USE_NOID: &str = "SS_LOG_USE_NOID";

/// Every key the server-sync feature consumes, with its store kind.
/// `show` walks this list; `assignments()` must stay in lockstep with it.
pub const KNOWN_PARAMETERS: &[(&str, ParamKind)] = &[
    (SS_LOG_URL, ParamKind::String),
    (SS_EMP_URL, ParamKind::String),
    (SS_PHOTO_URL, ParamKind::String),
    (SS_PAYMENU_URL, ParamKind::String),
    (SS_PAYLOG_URL, ParamKind::String),
    (SS_FRAME_URL, ParamKind::String),
    (SS_EMP_DEFSMSTEXT, ParamKind::String),
    (SS_LOGIN, ParamKind::String),
    (SS_ENABLED, ParamKind::Integer),
    (SS_EMP_PERIOD, ParamKind::Integer),
    (SS_LOG_USE_PASS, ParamKind::Integer),
    (SS_LOG_USE_DENY, ParamKind::Integer),
    (SS_LOG_USE_NOID, ParamKind::Integer),
];

fn default_emp_period() -> i64 {
    60
}

fn default_toggle_on() -> i64 {
    1
}

/// Server-sync settings as written by operators in a TOML file.
///
/// Field names mirror the `SS_*` keys without the prefix. Unknown fields are
/// rejected so a typoed key fails loudly instead of silently not applying.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ServerSyncSettings {
    /// Endpoint for access-event delivery. Empty disables forwarding.
    #[serde(default)]
    pub log_url: String,
    /// Endpoint for employee sync.
    #[serde(default)]
    pub emp_url: String,
    /// Endpoint for photo sync.
    #[serde(default)]
    pub photo_url: String,
    /// Endpoint for payment-menu sync.
    #[serde(default)]
    pub paymenu_url: String,
    /// Endpoint for payment-balance events.
    #[serde(default)]
    pub paylog_url: String,
    /// Endpoint for camera frame delivery.
    #[serde(default)]
    pub frame_url: String,
    /// Default SMS notification text.
    #[serde(default)]
    pub emp_default_sms_text: String,
    /// Auth token presented to the endpoints above.
    #[serde(default)]
    pub login: String,
    /// Master feature toggle (0/1).
    #[serde(default)]
    pub enabled: i64,
    /// Employee sync interval, seconds.
    #[serde(default = "default_emp_period")]
    pub emp_period: i64,
    /// Forward granted-access events (0/1).
    #[serde(default = "default_toggle_on")]
    pub log_use_pass: i64,
    /// Forward denied-access events (0/1).
    #[serde(default = "default_toggle_on")]
    pub log_use_deny: i64,
    /// Forward unmatched-identity events (0/1).
    #[serde(default)]
    pub log_use_noid: i64,
}

impl Default for ServerSyncSettings {
    fn default() -> Self {
        Self {
            log_url: String::new(),
            emp_url: String::new(),
            photo_url: String::new(),
            paymenu_url: String::new(),
            paylog_url: String::new(),
            frame_url: String::new(),
            emp_default_sms_text: String::new(),
            login: String::new(),
            enabled: 0,
            emp_period: default_emp_period(),
            log_use_pass: default_toggle_on(),
            log_use_deny: default_toggle_on(),
            log_use_noid: 0,
        }
    }
}

impl ServerSyncSettings {
    /// Load and validate a settings file.
    pub fn load(path: &Path) -> Result<Self, SyncConfError> {
        let raw = fs::read_to_string(path)?;
        let settings: Self = toml::from_str(&raw)
            .map_err(|e| SyncConfError::Config(format!("{}: {}", path.display(), e)))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SyncConfError> {
        for (name, value) in [
            (SS_ENABLED, self.enabled),
            (SS_LOG_USE_PASS, self.log_use_pass),
            (SS_LOG_USE_DENY, self.log_use_deny),
            (SS_LOG_USE_NOID, self.log_use_noid),
        ] {
            if value != 0 && value != 1 {
                return Err(SyncConfError::Validation(format!(
                    "{} must be 0 or 1, got {}",
                    name, value
                )));
            }
        }
        if self.emp_period <= 0 {
            return Err(SyncConfError::Validation(format!(
                "{} must be a positive number of seconds, got {}",
                SS_EMP_PERIOD, self.emp_period
            )));
        }
        Ok(())
    }

    /// Lower the settings to the ordered assignment batch the applicator
    /// writes. One entry per key in `KNOWN_PARAMETERS`, same order.
    pub fn assignments(&self) -> Vec<Assignment> {
        vec![
            Assignment::text(SS_LOG_URL, self.log_url.clone()),
            Assignment::text(SS_EMP_URL, self.emp_url.clone()),
            Assignment::text(SS_PHOTO_URL, self.photo_url.clone()),
            Assignment::text(SS_PAYMENU_URL, self.paymenu_url.clone()),
            Assignment::text(SS_PAYLOG_URL, self.paylog_url.clone()),
            Assignment::text(SS_FRAME_URL, self.frame_url.clone()),
            Assignment::text(SS_EMP_DEFSMSTEXT, self.emp_default_sms_text.clone()),
            Assignment::text(SS_LOGIN, self.login.clone()),
            Assignment::int(SS_ENABLED, self.enabled),
            Assignment::int(SS_EMP_PERIOD, self.emp_period),
            Assignment::int(SS_LOG_USE_PASS, self.log_use_pass),
            Assignment::int(SS_LOG_USE_DENY, self.log_use_deny),
            Assignment::int(SS_LOG_USE_NOID, self.log_use_noid),
        ]
    }
}

/// Starter settings file printed by `sigur-syncconf template`.
pub const SETTINGS_TEMPLATE: &str = r#"# sigur-syncconf settings file.
#
# Every value maps to one SS_* parameter in the installation database.
# Leaving a URL empty disables that feature on the server side.

# Endpoint for access-event delivery.
log_url = ""
# Endpoint for employee sync.
emp_url = ""
# Endpoint for photo sync.
photo_url = ""
# Endpoint for payment-menu sync.
paymenu_url = ""
# Endpoint for payment-balance events.
paylog_url = ""
# Endpoint for camera frame delivery.
frame_url = ""

# Default SMS notification text.
emp_default_sms_text = ""
# Auth token presented to the endpoints.
login = ""

# Master toggle for the whole server-sync feature (0/1).
enabled = 0
# Employee sync interval, seconds.
emp_period = 60
# Which access events to forward (0/1 each).
log_use_pass = 1
log_use_deny = 1
log_use_noid = 0
"#;
