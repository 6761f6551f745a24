//! CLI contract checks: argument validation and the dry-run path.

use clap::Parser;
use rusqlite::{Connection, params};
use sigur_syncconf::ParamValue;
use sigur_syncconf::cli::Cli;
use sigur_syncconf::core::{db, schemas, settings};
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn provision_fixture(dir: &std::path::Path) -> PathBuf {
    let db_path = dir.join("sigur.db");
    let conn = Connection::open(&db_path).expect("create fixture db");
    schemas::create_param_tables(&conn).expect("create tables");
    for (key, kind) in settings::KNOWN_PARAMETERS {
        match kind {
            sigur_syncconf::ParamKind::String => conn
                .execute(
                    "INSERT INTO PARAMB (NAME, PARAMVALUE) VALUES (?1, '')",
                    params![key],
                )
                .expect("seed string param"),
            sigur_syncconf::ParamKind::Integer => conn
                .execute(
                    "INSERT INTO PARAMI (NAME, PARAMVALUE) VALUES (?1, 0)",
                    params![key],
                )
                .expect("seed integer param"),
        };
    }
    db_path
}

#[test]
fn unknown_format_is_rejected_at_parse_time() {
    // A bad --format has to fail before any store work can happen; a batch
    // that commits and then exits 1 over a formatting flag reads as a failed
    // apply to automation.
    let err = Cli::try_parse_from([
        "sigur-syncconf",
        "apply",
        "--db",
        "sigur.db",
        "--config",
        "sync.toml",
        "--format",
        "bogus",
    ]);
    assert!(err.is_err());

    let err = Cli::try_parse_from([
        "sigur-syncconf",
        "show",
        "--db",
        "sigur.db",
        "--format",
        "yaml",
    ]);
    assert!(err.is_err());
}

#[test]
fn text_and_json_formats_parse() {
    for format in ["text", "json"] {
        let cli = Cli::try_parse_from([
            "sigur-syncconf",
            "show",
            "--db",
            "sigur.db",
            "--format",
            format,
        ]);
        assert!(cli.is_ok(), "format '{}' should be accepted", format);
    }
}

#[test]
fn dry_run_performs_no_writes() {
    let tmp = tempdir().expect("tempdir");
    let db_path = provision_fixture(tmp.path());
    let config_path = tmp.path().join("sync.toml");
    fs::write(
        &config_path,
        "log_url = \"https://canteen.example/api/log\"\nenabled = 1\n",
    )
    .expect("write config");

    let db_arg = db_path.to_string_lossy().into_owned();
    let config_arg = config_path.to_string_lossy().into_owned();
    let output = Command::new(env!("CARGO_BIN_EXE_sigur-syncconf"))
        .args([
            "apply",
            "--dry-run",
            "--db",
            db_arg.as_str(),
            "--config",
            config_arg.as_str(),
        ])
        .output()
        .expect("run binary");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("no writes performed"));

    // The store still carries the seeded values.
    let conn = db::db_connect(&db_arg).expect("connect");
    let log_url = sigur_syncconf::core::store::read_param(
        &conn,
        settings::SS_LOG_URL,
        sigur_syncconf::ParamKind::String,
    )
    .expect("read");
    assert_eq!(log_url, Some(ParamValue::Text(String::new())));

    let enabled = sigur_syncconf::core::store::read_param(
        &conn,
        settings::SS_ENABLED,
        sigur_syncconf::ParamKind::Integer,
    )
    .expect("read");
    assert_eq!(enabled, Some(ParamValue::Int(0)));
}
